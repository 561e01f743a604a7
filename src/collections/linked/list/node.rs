use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodeRef<T>>;

// NOTE: Nodes are allocated through Box<T> rather than a RawAlloc, because dereferencing a Box
// allows the node to be moved off of the heap in one step.

/// A shared handle to a heap-allocated [`Node`]. The list that allocated the node is its sole
/// owner; NodeRefs are plain copies of the pointer.
#[derive(Debug)]
pub(crate) struct NodeRef<T>(pub NonNull<Node<T>>);

impl<T> NodeRef<T> {
    /// Moves `node` onto the heap.
    pub fn from_node(node: Node<T>) -> NodeRef<T> {
        NodeRef(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Moves the node off of the heap, freeing its allocation.
    ///
    /// # Safety
    /// The node must still be allocated and no other NodeRef to it may be used afterwards.
    pub unsafe fn take_node(self) -> Node<T> {
        // SAFETY: The pointer came from Box::leak in from_node and the caller guarantees that it
        // hasn't been freed yet.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    /// # Safety
    /// The node must still be allocated and must outlive `'a` without being mutated.
    pub unsafe fn value<'a>(self) -> &'a T {
        // SAFETY: Upheld by the caller.
        unsafe { &(*self.0.as_ptr()).value }
    }

    /// # Safety
    /// The node must still be allocated and no other reference to its value may exist for `'a`.
    pub unsafe fn value_mut<'a>(self) -> &'a mut T {
        // SAFETY: Upheld by the caller.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub fn prev(self) -> Link<T> {
        // SAFETY: Every NodeRef reachable from a list refers to a live node.
        unsafe { (*self.0.as_ptr()).prev }
    }

    pub fn next(self) -> Link<T> {
        // SAFETY: Every NodeRef reachable from a list refers to a live node.
        unsafe { (*self.0.as_ptr()).next }
    }

    pub fn set_prev(self, link: Link<T>) {
        // SAFETY: Every NodeRef reachable from a list refers to a live node, and links are never
        // borrowed across calls.
        unsafe { (*self.0.as_ptr()).prev = link; }
    }

    pub fn set_next(self, link: Link<T>) {
        // SAFETY: Every NodeRef reachable from a list refers to a live node, and links are never
        // borrowed across calls.
        unsafe { (*self.0.as_ptr()).next = link; }
    }
}

impl<T> Clone for NodeRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<T> {}

impl<T> PartialEq for NodeRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link<T>,
    pub next: Link<T>,
}
