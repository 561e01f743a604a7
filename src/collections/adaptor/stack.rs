use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem;

use crate::collections::contiguous::Vector;
use crate::collections::traits::BackInsert;
use crate::util::error::EmptyCollection;

/// A last-in, first-out adaptor over any [`BackInsert`] sequence, which is a [`Vector`] by default.
///
/// Every operation is forwarded to the back of the container, so a Stack has exactly the
/// complexity of the container's `push_back`, `pop_back` and `back`.
///
/// # Examples
/// ```
/// # use standard_containers::collections::adaptor::Stack;
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(stack.top(), Ok(&2));
/// assert_eq!(stack.pop(), Ok(2));
/// assert_eq!(stack.pop(), Ok(1));
/// assert!(stack.pop().is_err());
/// ```
pub struct Stack<T, S: BackInsert<T> = Vector<T>> {
    pub(crate) container: S,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Stack<T> {
    /// Creates a new, empty Stack backed by a [`Vector`].
    pub fn new() -> Stack<T> {
        Stack::from_container(Vector::new())
    }
}

impl<T, S: BackInsert<T>> Stack<T, S> {
    /// Creates a Stack whose top is the last element of `container`.
    pub const fn from_container(container: S) -> Stack<T, S> {
        Stack {
            container,
            _phantom: PhantomData,
        }
    }

    /// Returns a reference to the most recently pushed element.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the Stack is empty.
    pub fn top(&self) -> Result<&T, EmptyCollection> {
        self.container.back()
    }

    /// Returns a mutable reference to the most recently pushed element.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the Stack is empty.
    pub fn top_mut(&mut self) -> Result<&mut T, EmptyCollection> {
        self.container.back_mut()
    }

    /// Pushes `value` onto the top of the Stack.
    pub fn push(&mut self, value: T) {
        self.container.push_back(value);
    }

    /// Pushes the result of `make` onto the top of the Stack.
    pub fn emplace<F: FnOnce() -> T>(&mut self, make: F) {
        self.push(make());
    }

    /// Removes the top element and returns it.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the Stack is empty.
    pub fn pop(&mut self) -> Result<T, EmptyCollection> {
        self.container.pop_back()
    }

    /// Returns the number of elements in the Stack.
    pub fn len(&self) -> usize {
        self.container.len()
    }

    /// Returns true if the Stack contains no elements.
    pub fn is_empty(&self) -> bool {
        self.container.is_empty()
    }

    /// Exchanges the contents of two Stacks.
    pub fn swap(&mut self, other: &mut Stack<T, S>) {
        mem::swap(&mut self.container, &mut other.container);
    }

    /// Returns the underlying container.
    pub fn into_inner(self) -> S {
        self.container
    }
}

impl<T, S: BackInsert<T> + Default> Default for Stack<T, S> {
    fn default() -> Self {
        Stack::from_container(S::default())
    }
}

impl<T, S: BackInsert<T> + Clone> Clone for Stack<T, S> {
    fn clone(&self) -> Self {
        Stack::from_container(self.container.clone())
    }
}

impl<T, S: BackInsert<T> + FromIterator<T>> FromIterator<T> for Stack<T, S> {
    /// Pushes every item in order, so the last item ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack::from_container(iter.into_iter().collect())
    }
}

impl<T, S: BackInsert<T>> Extend<T> for Stack<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T, S: BackInsert<T> + Debug> Debug for Stack<T, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("container", &self.container)
            .finish()
    }
}
