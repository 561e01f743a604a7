use crate::collections::contiguous::Vector;
use crate::collections::contiguous::storage::RawAlloc;
use crate::collections::linked::LinkedList;
use crate::util::error::EmptyCollection;

/// A collection with a first and last element, which can be inspected without removal.
pub trait Sequence<T> {
    /// Returns the number of elements in the collection.
    fn len(&self) -> usize;

    /// Returns true if the collection contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the first element.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the collection is empty.
    fn front(&self) -> Result<&T, EmptyCollection>;

    /// Returns a mutable reference to the first element.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the collection is empty.
    fn front_mut(&mut self) -> Result<&mut T, EmptyCollection>;

    /// Returns a reference to the last element.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the collection is empty.
    fn back(&self) -> Result<&T, EmptyCollection>;

    /// Returns a mutable reference to the last element.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the collection is empty.
    fn back_mut(&mut self) -> Result<&mut T, EmptyCollection>;
}

/// A [`Sequence`] that can grow and shrink at the back, as required by
/// [`Stack`](crate::collections::adaptor::Stack) and
/// [`PriorityQueue`](crate::collections::adaptor::PriorityQueue).
pub trait BackInsert<T>: Sequence<T> {
    /// Adds `value` after the last element.
    fn push_back(&mut self, value: T);

    /// Removes the last element and returns it.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the collection is empty.
    fn pop_back(&mut self) -> Result<T, EmptyCollection>;
}

/// A [`Sequence`] that can shrink at the front, as required by
/// [`Queue`](crate::collections::adaptor::Queue).
pub trait FrontRemove<T>: Sequence<T> {
    /// Removes the first element and returns it.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the collection is empty.
    fn pop_front(&mut self) -> Result<T, EmptyCollection>;
}

impl<T, A: RawAlloc> Sequence<T> for Vector<T, A> {
    fn len(&self) -> usize {
        Vector::len(self)
    }

    fn front(&self) -> Result<&T, EmptyCollection> {
        Vector::front(self)
    }

    fn front_mut(&mut self) -> Result<&mut T, EmptyCollection> {
        Vector::front_mut(self)
    }

    fn back(&self) -> Result<&T, EmptyCollection> {
        Vector::back(self)
    }

    fn back_mut(&mut self) -> Result<&mut T, EmptyCollection> {
        Vector::back_mut(self)
    }
}

impl<T, A: RawAlloc> BackInsert<T> for Vector<T, A> {
    fn push_back(&mut self, value: T) {
        Vector::push_back(self, value);
    }

    fn pop_back(&mut self) -> Result<T, EmptyCollection> {
        Vector::pop_back(self)
    }
}

impl<T> Sequence<T> for LinkedList<T> {
    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn front(&self) -> Result<&T, EmptyCollection> {
        LinkedList::front(self)
    }

    fn front_mut(&mut self) -> Result<&mut T, EmptyCollection> {
        LinkedList::front_mut(self)
    }

    fn back(&self) -> Result<&T, EmptyCollection> {
        LinkedList::back(self)
    }

    fn back_mut(&mut self) -> Result<&mut T, EmptyCollection> {
        LinkedList::back_mut(self)
    }
}

impl<T> BackInsert<T> for LinkedList<T> {
    fn push_back(&mut self, value: T) {
        LinkedList::push_back(self, value);
    }

    fn pop_back(&mut self) -> Result<T, EmptyCollection> {
        LinkedList::pop_back(self)
    }
}

impl<T> FrontRemove<T> for LinkedList<T> {
    fn pop_front(&mut self) -> Result<T, EmptyCollection> {
        LinkedList::pop_front(self)
    }
}
