use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::mem;

use super::{Iter, IterMut, Length, NodePtr, ONE};
use crate::util::result::ResultExtension;
#[doc(inline)]
pub use crate::util::error::CapacityOverflow;

/// A singly linked list where the last node links back to the first, forming a ring.
///
/// Insertion is supported at the front, the back, or any position given by an `isize` index.
/// Negative indices count from the back and out of range indices are clamped rather than rejected,
/// so [`insert`](CircularSinglyLinkedList::insert) never fails because of its index.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the CircularSinglyLinkedList.
/// - `i`: The normalized index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `back` | `O(1)` |
/// | `append` | `O(1)` |
/// | `prepend` | `O(1)` |
/// | `insert` | `O(i)` |
/// | `to_list` | `O(n)` |
/// | `clear` | `O(n)` |
///
/// Holding both a head and a tail pointer means that both ends can be grown in constant time, even
/// though each node only knows about its successor.
///
/// # Example
/// ```
/// use circular_list::collections::circ::CircularSinglyLinkedList;
///
/// let mut list = CircularSinglyLinkedList::new();
/// list.append(1);
/// list.append(3);
/// list.insert(-1, 2);
///
/// assert_eq!(list.to_list(), [1, 2, 3]);
/// assert_eq!(list.to_string(), "CircularSinglyLinkedList: [1 -> 2 -> 3 -> Done]");
/// ```
pub struct CircularSinglyLinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(Default)]
pub(crate) enum ListState<T> {
    #[default]
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodePtr<T>,
    pub tail: NodePtr<T>,
}

impl<T> CircularSinglyLinkedList<T> {
    pub const fn new() -> CircularSinglyLinkedList<T> {
        CircularSinglyLinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    pub const fn len(&self) -> usize {
        match self.state {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }

    pub const fn is_empty(&self) -> bool {
        matches!(self.state, Empty)
    }

    pub fn front(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            // SAFETY: The head belongs to this list and the returned reference borrows the list.
            Full(ListContents { head, .. }) => Some(unsafe { head.value() }),
        }
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        match self.state {
            Empty => None,
            // SAFETY: The head belongs to this list and the list is mutably borrowed for as long as
            // the reference lives.
            Full(ListContents { head, .. }) => Some(unsafe { head.value_mut() }),
        }
    }

    pub fn back(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            // SAFETY: The tail belongs to this list and the returned reference borrows the list.
            Full(ListContents { tail, .. }) => Some(unsafe { tail.value() }),
        }
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        match self.state {
            Empty => None,
            // SAFETY: The tail belongs to this list and the list is mutably borrowed for as long as
            // the reference lives.
            Full(ListContents { tail, .. }) => Some(unsafe { tail.value_mut() }),
        }
    }

    /// Adds `value` to the back of the list, making it the new tail.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow a `usize`.
    #[track_caller]
    pub fn append(&mut self, value: T) {
        self.try_append(value).throw()
    }

    /// Adds `value` to the back of the list, making it the new tail. Returns an error rather than
    /// panicking if the length would overflow, in which case the list is left untouched.
    pub fn try_append(&mut self, value: T) -> Result<(), CapacityOverflow> {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_back(NodePtr::new(value))?,
        }
        Ok(())
    }

    /// Adds `value` to the front of the list, making it the new head.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow a `usize`.
    #[track_caller]
    pub fn prepend(&mut self, value: T) {
        self.try_prepend(value).throw()
    }

    /// Adds `value` to the front of the list, making it the new head. Returns an error rather than
    /// panicking if the length would overflow, in which case the list is left untouched.
    pub fn try_prepend(&mut self, value: T) -> Result<(), CapacityOverflow> {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_front(NodePtr::new(value))?,
        }
        Ok(())
    }

    /// Inserts `value` so that it ends up at `index` once normalized. A negative `index` counts
    /// back from the length of the list, saturating at the front, and an `index` beyond the length
    /// is clamped to the back.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow a `usize`.
    #[track_caller]
    pub fn insert(&mut self, index: isize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Fallible version of [`insert`](CircularSinglyLinkedList::insert), leaving the list untouched
    /// on error.
    pub fn try_insert(&mut self, index: isize, value: T) -> Result<(), CapacityOverflow> {
        let index = self.normalize_index(index);
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => match index {
                0 => contents.push_front(NodePtr::new(value))?,
                val if val == contents.len.get() => contents.push_back(NodePtr::new(value))?,
                val => contents.splice_after(val - 1, NodePtr::new(value))?,
            },
        }
        Ok(())
    }

    /// Collects a copy of every value, from head to tail.
    pub fn to_list(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Drops every value in the list, leaving it empty.
    pub fn clear(&mut self) {
        if let Full(contents) = mem::take(&mut self.state) {
            contents.free_all();
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T> CircularSinglyLinkedList<T> {
    /// Maps a signed index onto `0..=len`, the same way slice-style negative indexing does, except
    /// that out of range values are clamped instead of rejected.
    pub(crate) const fn normalize_index(&self, index: isize) -> usize {
        let len = self.len();
        if index < 0 {
            len.saturating_sub(index.unsigned_abs())
        } else if index as usize > len {
            len
        } else {
            index as usize
        }
    }

    /// Detaches the head and returns its value, for consuming iteration only.
    pub(crate) fn take_front(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, head, tail }) => {
                // SAFETY: The head is owned by this list and is unlinked below, before anything
                // else can reach it.
                let node = unsafe { head.take_node() };

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // Previous length is greater than 1, so the tail isn't the old head.
                        *head = node.next;
                        // SAFETY: The tail is still allocated and owned by this list.
                        unsafe { tail.set_next(*head) };
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(node.value)
            },
        }
    }

    /// Walks the ring once, asserting that the tail links back to the head after exactly `len`
    /// steps.
    #[cfg(test)]
    pub(crate) fn verify_ring(&self) {
        match self.state {
            Empty => {},
            Full(ListContents { len, head, tail }) => {
                let mut curr = head;
                for _ in 1..len.get() {
                    // SAFETY: Every node reached from head belongs to this list.
                    curr = unsafe { curr.next() };
                    assert!(curr != head, "ring closed before reaching len nodes");
                }
                assert!(curr == tail, "the node at len - 1 should be the tail");
                // SAFETY: The tail belongs to this list.
                assert!(unsafe { tail.next() } == head, "the tail should link back to the head");
            },
        }
    }
}

impl<T> ListContents<T> {
    pub(crate) fn seek(&self, index: usize) -> NodePtr<T> {
        let mut curr = self.head;
        for _ in 0..index {
            // SAFETY: Every node reached from head belongs to this list.
            curr = unsafe { curr.next() };
        }
        curr
    }

    pub(crate) fn push_front(&mut self, node: NodePtr<T>) -> Result<(), CapacityOverflow> {
        self.len = self.len.try_increment().inspect_err(|_| Self::discard(node))?;

        // SAFETY: Both the new node and the tail are allocated and owned by this list.
        unsafe {
            node.set_next(self.head);
            self.tail.set_next(node);
        }
        self.head = node;
        Ok(())
    }

    pub(crate) fn push_back(&mut self, node: NodePtr<T>) -> Result<(), CapacityOverflow> {
        self.len = self.len.try_increment().inspect_err(|_| Self::discard(node))?;

        // SAFETY: Both the new node and the tail are allocated and owned by this list.
        unsafe {
            node.set_next(self.head);
            self.tail.set_next(node);
        }
        self.tail = node;
        Ok(())
    }

    /// Links `node` directly after the node at `index`, which must not be the tail.
    pub(crate) fn splice_after(
        &mut self,
        index: usize,
        node: NodePtr<T>,
    ) -> Result<(), CapacityOverflow> {
        self.len = self.len.try_increment().inspect_err(|_| Self::discard(node))?;

        let prev = self.seek(index);
        // SAFETY: prev is a node of this list that isn't the tail, so its successor is also in the
        // list and the ring stays closed through the new node.
        unsafe {
            node.set_next(prev.next());
            prev.set_next(node);
        }
        Ok(())
    }

    /// Frees a node that was allocated but never linked in.
    fn discard(node: NodePtr<T>) {
        // SAFETY: The node was never reachable from the list.
        drop(unsafe { node.take_node() });
    }

    /// Frees every node in the ring, consuming the contents.
    pub(crate) fn free_all(self) {
        let mut curr = self.head;
        for _ in 0..self.len.get() {
            // SAFETY: Each of the len nodes is visited once and read before it is freed.
            let node = unsafe { curr.take_node() };
            curr = node.next;
        }
    }

    pub(crate) fn wrap_one(value: T) -> ListContents<T> {
        let node = NodePtr::new(value);

        ListContents {
            len: ONE,
            head: node,
            tail: node,
        }
    }
}

impl<T> ListState<T> {
    pub(crate) fn single(value: T) -> ListState<T> {
        Full(ListContents::wrap_one(value))
    }
}

impl<T> FromIterator<T> for CircularSinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = CircularSinglyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for CircularSinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.append(item);
        }
    }
}

impl<T> Default for CircularSinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for CircularSinglyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for CircularSinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for CircularSinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for CircularSinglyLinkedList<T> {}

struct Contents<'a, T>(&'a CircularSinglyLinkedList<T>);

impl<T: Debug> Debug for Contents<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<T: Debug> Debug for CircularSinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularSinglyLinkedList")
            .field("contents", &Contents(self))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Display> Display for CircularSinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "CircularSinglyLinkedList: [")?;
        for value in self.iter() {
            write!(f, "{value} -> ")?;
        }
        write!(f, "Done]")
    }
}
