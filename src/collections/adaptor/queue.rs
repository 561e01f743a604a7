use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem;

use crate::collections::linked::LinkedList;
use crate::collections::traits::{BackInsert, FrontRemove};
use crate::util::error::EmptyCollection;

/// A first-in, first-out adaptor over a sequence that grows at the back and shrinks at the front,
/// which is a [`LinkedList`] by default.
///
/// # Examples
/// ```
/// # use standard_containers::collections::adaptor::Queue;
/// let mut queue: Queue<_> = (1..=3).collect();
/// assert_eq!(queue.front(), Ok(&1));
/// assert_eq!(queue.back(), Ok(&3));
/// assert_eq!(queue.pop(), Ok(1));
/// assert_eq!(queue.len(), 2);
/// ```
pub struct Queue<T, S: BackInsert<T> + FrontRemove<T> = LinkedList<T>> {
    pub(crate) container: S,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Queue<T> {
    /// Creates a new, empty Queue backed by a [`LinkedList`].
    pub const fn new() -> Queue<T> {
        Queue::from_container(LinkedList::new())
    }
}

impl<T, S: BackInsert<T> + FrontRemove<T>> Queue<T, S> {
    /// Creates a Queue whose front is the first element of `container`.
    pub const fn from_container(container: S) -> Queue<T, S> {
        Queue {
            container,
            _phantom: PhantomData,
        }
    }

    /// Returns a reference to the oldest element, which is the next to be popped.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the Queue is empty.
    pub fn front(&self) -> Result<&T, EmptyCollection> {
        self.container.front()
    }

    /// Returns a mutable reference to the oldest element.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the Queue is empty.
    pub fn front_mut(&mut self) -> Result<&mut T, EmptyCollection> {
        self.container.front_mut()
    }

    /// Returns a reference to the most recently pushed element.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the Queue is empty.
    pub fn back(&self) -> Result<&T, EmptyCollection> {
        self.container.back()
    }

    /// Returns a mutable reference to the most recently pushed element.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the Queue is empty.
    pub fn back_mut(&mut self) -> Result<&mut T, EmptyCollection> {
        self.container.back_mut()
    }

    /// Adds `value` to the back of the Queue.
    pub fn push(&mut self, value: T) {
        self.container.push_back(value);
    }

    /// Adds the result of `make` to the back of the Queue.
    pub fn emplace<F: FnOnce() -> T>(&mut self, make: F) {
        self.push(make());
    }

    /// Removes the front element and returns it.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the Queue is empty.
    pub fn pop(&mut self) -> Result<T, EmptyCollection> {
        self.container.pop_front()
    }

    /// Returns the number of elements in the Queue.
    pub fn len(&self) -> usize {
        self.container.len()
    }

    /// Returns true if the Queue contains no elements.
    pub fn is_empty(&self) -> bool {
        self.container.is_empty()
    }

    /// Exchanges the contents of two Queues.
    pub fn swap(&mut self, other: &mut Queue<T, S>) {
        mem::swap(&mut self.container, &mut other.container);
    }

    /// Returns the underlying container.
    pub fn into_inner(self) -> S {
        self.container
    }
}

impl<T, S: BackInsert<T> + FrontRemove<T> + Default> Default for Queue<T, S> {
    fn default() -> Self {
        Queue::from_container(S::default())
    }
}

impl<T, S: BackInsert<T> + FrontRemove<T> + Clone> Clone for Queue<T, S> {
    fn clone(&self) -> Self {
        Queue::from_container(self.container.clone())
    }
}

impl<T, S: BackInsert<T> + FrontRemove<T> + FromIterator<T>> FromIterator<T> for Queue<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue::from_container(iter.into_iter().collect())
    }
}

impl<T, S: BackInsert<T> + FrontRemove<T>> Extend<T> for Queue<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T, S: BackInsert<T> + FrontRemove<T> + Debug> Debug for Queue<T, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("container", &self.container)
            .finish()
    }
}
