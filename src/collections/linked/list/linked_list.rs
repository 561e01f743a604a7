use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Index, IndexMut};

use super::{Iter, IterMut, Link, Node, NodeRef};
use crate::collections::contiguous::Vector;
use crate::util::error::{EmptyCollection, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// A list with links in both directions, used as the default backing sequence for
/// [`Queue`](crate::collections::adaptor::Queue).
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front/back` | `O(1)` |
/// | `get` | `O(min(i, n-i))` |
/// | `insert` | `O(min(i, n-i))` |
/// | `remove` | `O(min(i, n-i))` |
/// | `replace` | `O(min(i, n-i))` |
/// | `append` | `O(1)` |
/// | `contains` | `O(n)` |
/// | `clear` | `O(n)` |
///
/// As a general note, modern computer architecture isn't kind to linked lists, because all `O(i)`
/// or `O(n)` operations will consist primarily of cache misses. For this reason, [`Vector`] should
/// be preferred unless the `O(1)` operations at the front of the list are needed.
pub struct LinkedList<T> {
    pub(crate) head: Link<T>,
    pub(crate) tail: Link<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub const fn new() -> LinkedList<T> {
        LinkedList {
            head: None,
            tail: None,
            len: 0,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element in the list.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the list is empty.
    pub fn front(&self) -> Result<&T, EmptyCollection> {
        // SAFETY: The head node is owned by self, which is borrowed for the lifetime of the result.
        self.head.map(|node| unsafe { node.value() }).ok_or(EmptyCollection)
    }

    /// Returns a mutable reference to the first element in the list.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the list is empty.
    pub fn front_mut(&mut self) -> Result<&mut T, EmptyCollection> {
        // SAFETY: The head node is owned by self, which is mutably borrowed for the lifetime of the
        // result.
        self.head.map(|node| unsafe { node.value_mut() }).ok_or(EmptyCollection)
    }

    /// Returns a reference to the last element in the list.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the list is empty.
    pub fn back(&self) -> Result<&T, EmptyCollection> {
        // SAFETY: The tail node is owned by self, which is borrowed for the lifetime of the result.
        self.tail.map(|node| unsafe { node.value() }).ok_or(EmptyCollection)
    }

    /// Returns a mutable reference to the last element in the list.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the list is empty.
    pub fn back_mut(&mut self) -> Result<&mut T, EmptyCollection> {
        // SAFETY: The tail node is owned by self, which is mutably borrowed for the lifetime of the
        // result.
        self.tail.map(|node| unsafe { node.value_mut() }).ok_or(EmptyCollection)
    }

    /// Add the provided element to the front of the LinkedList.
    pub fn push_front(&mut self, value: T) {
        self.link_before(self.head, value);
    }

    /// Add the provided element to the back of the LinkedList.
    pub fn push_back(&mut self, value: T) {
        self.link_before(None, value);
    }

    /// Removes the first element from the list and returns it.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the list is empty.
    pub fn pop_front(&mut self) -> Result<T, EmptyCollection> {
        let head = self.head.ok_or(EmptyCollection)?;
        // SAFETY: The head node belongs to this list.
        Ok(unsafe { self.unlink(head) })
    }

    /// Removes the last element from the list and returns it.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the list is empty.
    pub fn pop_back(&mut self) -> Result<T, EmptyCollection> {
        let tail = self.tail.ok_or(EmptyCollection)?;
        // SAFETY: The tail node belongs to this list.
        Ok(unsafe { self.unlink(tail) })
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        let node = self.checked_seek(index)?;
        // SAFETY: The node is owned by self, which is borrowed for the lifetime of the result.
        Ok(unsafe { node.value() })
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`] on
    /// a failure rather than panicking.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let node = self.checked_seek(index)?;
        // SAFETY: The node is owned by self, which is mutably borrowed for the lifetime of the
        // result.
        Ok(unsafe { node.value_mut() })
    }

    /// Inserts `value` so that it ends up at `index`, shifting later elements back by one.
    ///
    /// # Panics
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts `value` so that it ends up at `index`. An `index` equal to the length appends the
    /// value.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index > len`.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        if index == self.len {
            self.link_before(None, value);
        } else {
            let next = self.checked_seek(index)?;
            self.link_before(Some(next), value);
        }
        Ok(())
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let node = self.checked_seek(index)?;
        // SAFETY: The node was found by walking this list.
        Ok(unsafe { self.unlink(node) })
    }

    /// Replaces the element at `index`, returning the old value.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        self.try_replace(index, new_value).throw()
    }

    /// Replaces the element at `index`, returning the old value.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn try_replace(&mut self, index: usize, new_value: T) -> Result<T, IndexOutOfBounds> {
        Ok(mem::replace(self.try_get_mut(index)?, new_value))
    }

    /// Moves every element of `other` onto the back of this list, without reallocating nodes.
    pub fn append(&mut self, mut other: LinkedList<T>) {
        match (self.tail, other.head) {
            (_, None) => {},
            (None, Some(_)) => mem::swap(self, &mut other),
            (Some(tail), Some(head)) => {
                tail.set_next(Some(head));
                head.set_prev(Some(tail));
                self.tail = other.tail;
                self.len += other.len;

                // The nodes now belong to self.
                other.head = None;
                other.tail = None;
                other.len = 0;
            },
        }
    }

    /// Drops every element, leaving the list empty.
    pub fn clear(&mut self) {
        while self.pop_front().is_ok() {}
    }

    /// Returns a borrowed iterator over the elements, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns a mutable iterator over the elements, front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns the index of the first element equal to `item`.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    /// Returns true if any element is equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }
}

impl<T> LinkedList<T> {
    /// Finds the node at `index`, starting from whichever end is closer.
    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodeRef<T>, IndexOutOfBounds> {
        let out_of_bounds = IndexOutOfBounds { index, len: self.len };
        if index >= self.len {
            return Err(out_of_bounds);
        }

        let node = if index < self.len / 2 {
            (0..index).try_fold(self.head, |node, _| node.map(NodeRef::next))
        } else {
            (index..self.len - 1).try_fold(self.tail, |node, _| node.map(NodeRef::prev))
        };

        node.flatten().ok_or(out_of_bounds)
    }

    /// Allocates a node for `value` and links it in before `next`, or at the back if `next` is
    /// [`None`].
    pub(crate) fn link_before(&mut self, next: Link<T>, value: T) {
        let prev = match next {
            Some(next) => next.prev(),
            None => self.tail,
        };

        let node = NodeRef::from_node(Node { value, prev, next });

        match prev {
            Some(prev) => prev.set_next(Some(node)),
            None => self.head = Some(node),
        }
        match next {
            Some(next) => next.set_prev(Some(node)),
            None => self.tail = Some(node),
        }
        self.len += 1;
    }

    /// Unlinks `node` from its neighbours and moves its value off of the heap.
    ///
    /// # Safety
    /// `node` must belong to this list.
    pub(crate) unsafe fn unlink(&mut self, node: NodeRef<T>) -> T {
        // SAFETY: The node belongs to this list and is removed from it here, so no other reference
        // to it remains.
        let Node { value, prev, next } = unsafe { node.take_node() };

        match prev {
            Some(prev) => prev.set_next(next),
            None => self.head = next,
        }
        match next {
            Some(next) => next.set_prev(prev),
            None => self.tail = prev,
        }
        self.len -= 1;

        value
    }

    #[cfg(test)]
    pub(crate) fn verify_double_links(&self) {
        let mut count = 0;
        let mut prev = None;
        let mut curr = self.head;
        while let Some(node) = curr {
            assert!(node.prev() == prev, "Each node should link back to its predecessor.");
            prev = curr;
            curr = node.next();
            count += 1;
        }
        assert!(self.tail == prev, "The tail should be the last node reached.");
        assert_eq!(count, self.len);
    }
}

impl<T> Index<usize> for LinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for LinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for item in self {
            item.hash(state);
        }
    }
}

// SAFETY: LinkedList owns all of its nodes, so it can be sent when its values can.
unsafe impl<T: Send> Send for LinkedList<T> {}
// SAFETY: All mutation of nodes requires &mut LinkedList.
unsafe impl<T: Sync> Sync for LinkedList<T> {}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("contents", &self.iter())
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})",
            self.iter()
                .map(|i| format!("{i:?}"))
                .collect::<Vector<String>>()
                .join(") -> (")
        )
    }
}
