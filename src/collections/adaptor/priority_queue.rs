use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem;

use crate::algorithm::compare::{Compare, Less};
use crate::algorithm::heap::{make_heap_with, pop_heap_with, push_heap_with, sort_heap_with};
use crate::collections::contiguous::Vector;
use crate::collections::traits::BackInsert;
use crate::util::error::EmptyCollection;

/// A binary heap kept inside a random-access container, which is a [`Vector`] by default.
///
/// The element that no other element is [less than](Compare::is_less) is always available through
/// [`top`](PriorityQueue::top). With the default [`Less`] ordering this is the greatest element,
/// while [`Greater`](crate::algorithm::compare::Greater) turns the queue into a min-heap.
///
/// Pushing and popping are both `O(log n)`, building from an existing container is `O(n)`.
///
/// # Examples
/// ```
/// # use standard_containers::algorithm::compare::Greater;
/// # use standard_containers::collections::adaptor::PriorityQueue;
/// let mut max: PriorityQueue<i32> = [3, 1, 4, 1, 5].into_iter().collect();
/// assert_eq!(max.top(), Ok(&5));
///
/// let mut min = PriorityQueue::with_compare(Greater);
/// min.push(3);
/// min.push(1);
/// min.push(4);
/// assert_eq!(min.pop(), Ok(1));
/// assert_eq!(min.pop(), Ok(3));
/// ```
pub struct PriorityQueue<T, C: Compare<T> = Less, S: BackInsert<T> + AsMut<[T]> = Vector<T>> {
    pub(crate) container: S,
    pub(crate) comp: C,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T: PartialOrd> PriorityQueue<T> {
    /// Creates a new, empty max-heap PriorityQueue.
    pub fn new() -> PriorityQueue<T> {
        PriorityQueue::with_compare(Less)
    }
}

impl<T, C: Compare<T>> PriorityQueue<T, C> {
    /// Creates a new, empty PriorityQueue ordered by `comp`.
    pub fn with_compare(comp: C) -> PriorityQueue<T, C> {
        PriorityQueue {
            container: Vector::new(),
            comp,
            _phantom: PhantomData,
        }
    }
}

impl<T, C: Compare<T>, S: BackInsert<T> + AsMut<[T]>> PriorityQueue<T, C, S> {
    /// Creates a PriorityQueue ordered by `comp` from the existing elements of `container`, which
    /// are rearranged into a heap in linear time.
    pub fn from_container(mut comp: C, mut container: S) -> PriorityQueue<T, C, S> {
        make_heap_with(container.as_mut(), &mut comp);

        PriorityQueue {
            container,
            comp,
            _phantom: PhantomData,
        }
    }

    /// Returns a reference to the highest priority element.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the PriorityQueue is empty.
    pub fn top(&self) -> Result<&T, EmptyCollection> {
        self.container.front()
    }

    /// Adds `value` to the PriorityQueue.
    pub fn push(&mut self, value: T) {
        self.container.push_back(value);
        push_heap_with(self.container.as_mut(), &mut self.comp);
    }

    /// Adds the result of `make` to the PriorityQueue.
    pub fn emplace<F: FnOnce() -> T>(&mut self, make: F) {
        self.push(make());
    }

    /// Removes the highest priority element and returns it.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the PriorityQueue is empty.
    pub fn pop(&mut self) -> Result<T, EmptyCollection> {
        if self.container.is_empty() {
            return Err(EmptyCollection);
        }

        pop_heap_with(self.container.as_mut(), &mut self.comp);
        self.container.pop_back()
    }

    /// Returns the number of elements in the PriorityQueue.
    pub fn len(&self) -> usize {
        self.container.len()
    }

    /// Returns true if the PriorityQueue contains no elements.
    pub fn is_empty(&self) -> bool {
        self.container.is_empty()
    }

    /// Exchanges the contents and orderings of two PriorityQueues.
    pub fn swap(&mut self, other: &mut PriorityQueue<T, C, S>) {
        mem::swap(&mut self.container, &mut other.container);
        mem::swap(&mut self.comp, &mut other.comp);
    }

    /// Consumes the PriorityQueue, returning its container sorted in ascending order, with the
    /// highest priority element last.
    pub fn into_sorted(mut self) -> S {
        sort_heap_with(self.container.as_mut(), &mut self.comp);
        self.container
    }

    /// Returns the underlying container, which is arranged as a heap.
    pub fn into_inner(self) -> S {
        self.container
    }
}

impl<T, C, S> Default for PriorityQueue<T, C, S>
where
    C: Compare<T> + Default,
    S: BackInsert<T> + AsMut<[T]> + Default,
{
    fn default() -> Self {
        PriorityQueue {
            container: S::default(),
            comp: C::default(),
            _phantom: PhantomData,
        }
    }
}

impl<T, C, S> Clone for PriorityQueue<T, C, S>
where
    C: Compare<T> + Clone,
    S: BackInsert<T> + AsMut<[T]> + Clone,
{
    fn clone(&self) -> Self {
        PriorityQueue {
            container: self.container.clone(),
            comp: self.comp.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T, C, S> FromIterator<T> for PriorityQueue<T, C, S>
where
    C: Compare<T> + Default,
    S: BackInsert<T> + AsMut<[T]> + FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        PriorityQueue::from_container(C::default(), iter.into_iter().collect())
    }
}

impl<T, C: Compare<T>, S: BackInsert<T> + AsMut<[T]>> Extend<T> for PriorityQueue<T, C, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T, C, S> Debug for PriorityQueue<T, C, S>
where
    C: Compare<T>,
    S: BackInsert<T> + AsMut<[T]> + Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("container", &self.container)
            .finish_non_exhaustive()
    }
}
