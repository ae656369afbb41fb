use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{CircularSinglyLinkedList, Link, ListContents, ListState, NodePtr};

use ListState::*;

// Borrowed iterators stop once the walk comes back around to the head node. Comparing the nodes
// rather than the values means that duplicate values can't end the walk early.

impl<T> ListState<T> {
    const fn ends(&self) -> (Link<T>, Link<T>) {
        match self {
            Empty => (None, None),
            Full(ListContents { head, .. }) => (Some(*head), Some(*head)),
        }
    }
}

/// Steps `curr` forward, ending the walk once it would reach `head` again.
fn advance<T>(curr: &mut Link<T>, head: Link<T>) -> Option<NodePtr<T>> {
    let ptr = (*curr)?;
    // SAFETY: curr is only ever set to nodes of a list that outlives the iterator.
    let next = unsafe { ptr.next() };
    *curr = if Some(next) == head { None } else { Some(next) };
    Some(ptr)
}

impl<T> IntoIterator for CircularSinglyLinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

/// An owning iterator over a [`CircularSinglyLinkedList`]. Values that aren't yielded are dropped
/// along with the iterator.
pub struct IntoIter<T> {
    pub(crate) list: CircularSinglyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.take_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a mut CircularSinglyLinkedList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        let (curr, head) = self.state.ends();
        IterMut {
            curr,
            head,
            len: self.len(),
            _phantom: PhantomData,
        }
    }
}

pub struct IterMut<'a, T> {
    pub(crate) curr: Link<T>,
    pub(crate) head: Link<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let ptr = advance(&mut self.curr, self.head)?;
        self.len -= 1;
        // SAFETY: Each node is yielded at most once, so the mutable references never alias.
        Some(unsafe { ptr.value_mut() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<'a, T> IntoIterator for &'a CircularSinglyLinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        let (curr, head) = self.state.ends();
        Iter {
            curr,
            head,
            len: self.len(),
            _phantom: PhantomData,
        }
    }
}

pub struct Iter<'a, T> {
    pub(crate) curr: Link<T>,
    pub(crate) head: Link<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let ptr = advance(&mut self.curr, self.head)?;
        self.len -= 1;
        // SAFETY: The list is borrowed immutably for 'a.
        Some(unsafe { ptr.value() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            curr: self.curr,
            head: self.head,
            len: self.len,
            _phantom: PhantomData,
        }
    }
}
