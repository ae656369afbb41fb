use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

// NOTE: Every link in the ring is a plain NonNull, including the one from tail back to head. The
// list owns all of the allocations and frees them by walking `len` nodes, so no link needs to own
// its target.

#[derive(Debug)]
pub(crate) struct NodePtr<T>(NonNull<Node<T>>);

impl<T> NodePtr<T> {
    /// Allocates a new node that links to itself, forming a ring of one.
    pub(crate) fn new(value: T) -> NodePtr<T> {
        let node = NodePtr(NonNull::from(Box::leak(Box::new(Node {
            value,
            next: NodePtr(NonNull::dangling()),
        }))));
        // SAFETY: The node was allocated above and nothing else refers to it yet.
        unsafe { node.set_next(node) };
        node
    }

    /// # Safety
    /// The node must still be allocated and no mutable reference to its value may be live for
    /// `'a`.
    pub(crate) const unsafe fn value<'a>(self) -> &'a T {
        unsafe { &(*self.0.as_ptr()).value }
    }

    /// # Safety
    /// The node must still be allocated and no other reference to its value may be live for `'a`.
    pub(crate) const unsafe fn value_mut<'a>(self) -> &'a mut T {
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    /// # Safety
    /// The node must still be allocated.
    pub(crate) const unsafe fn next(self) -> NodePtr<T> {
        unsafe { (*self.0.as_ptr()).next }
    }

    /// # Safety
    /// The node must still be allocated and `next` must belong to the same ring (or be `self`).
    pub(crate) unsafe fn set_next(self, next: NodePtr<T>) {
        unsafe { (*self.0.as_ptr()).next = next };
    }

    /// Reclaims the allocation, moving the node back onto the stack.
    ///
    /// # Safety
    /// The node must still be allocated and must not be accessed through any other pointer after
    /// this call.
    pub(crate) unsafe fn take_node(self) -> Node<T> {
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for NodePtr<T> {}

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: NodePtr<T>,
}
