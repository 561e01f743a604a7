use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Deref, DerefMut};
use std::slice;

use super::Position;
use crate::collections::contiguous::storage::{Global, RawAlloc, Storage};
use crate::util::error::{CapacityOverflow, EmptyCollection, IndexOutOfBounds, ReserveError};
use crate::util::result::ReserveResultExtension;

pub(crate) const DEFAULT_CAP: usize = 10;
const MIN_CAP: usize = 1;
const MAX_SIZE: usize = isize::MAX as usize;

const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous collection, built on top of a [`Storage`] block.
///
/// The first `len` slots of the block hold live values and the remaining `cap - len` slots are
/// allocated but uninitialized. When a value is added to a full Vector, the capacity is multiplied
/// by a growth factor of 2 (growing from 0 to 1), so appending is amortized `O(1)`. The capacity is
/// never reduced unless [`shrink_to_fit`](Vector::shrink_to_fit) is called.
///
/// Elements are accessed as a slice through [`Deref<Target = [T]>`](Deref), which provides
/// indexing (panicking out of bounds), iteration and
/// [`get_unchecked`](slice::get_unchecked) for unchecked access. [`at`](Vector::at),
/// [`front`](Vector::front) and [`back`](Vector::back) are the checked counterparts that return
/// errors instead.
///
/// [`Position`]s act as random-access cursors and are used to address insertions, erasures and
/// ranges. A Vector isn't internally synchronized; sharing one across threads follows the usual
/// borrowing rules and nothing more.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
/// - `m`: The number of items added or removed.
///
/// | Method | Complexity |
/// |-|-|
/// | `at` / `front` / `back` | `O(1)` |
/// | `len` / `cap` | `O(1)` |
/// | `push_back` | `O(1)`*, `O(n)` |
/// | `pop_back` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `erase` | `O(n-i)` |
/// | `erase_range` | `O(n-i)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `shrink_to_fit` | `O(n)` |
/// | `resize` | `O(m)`, `O(n+m)` |
/// | `clear` | `O(n)` |
/// | `swap` | `O(1)` |
///
/// \* If the Vector doesn't have enough capacity for the new element, `push_back` will take `O(n)`.
///
/// \** If the Vector has enough capacity for the additional items already, `reserve` is `O(1)`.
pub struct Vector<T, A: RawAlloc = Global> {
    pub(crate) buf: Storage<T, A>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length 0 and the default capacity of 10.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 10);
    /// ```
    pub fn new() -> Vector<T> {
        Vector::new_in(Global)
    }

    /// Creates a new Vector with length and capacity 0. Nothing is allocated until the capacity
    /// changes.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::empty();
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub const fn empty() -> Vector<T> {
        Vector::empty_in(Global)
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, allowing values to
    /// be added without reallocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// vec.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector::with_cap_in(cap, Global)
    }
}

impl<T: Clone> Vector<T> {
    /// Creates a Vector holding `count` clones of `value`, with capacity exactly `count`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let vec = Vector::from_elem("a", 3);
    /// assert_eq!(&*vec, &["a", "a", "a"]);
    /// assert_eq!(vec.cap(), 3);
    /// ```
    pub fn from_elem(value: T, count: usize) -> Vector<T> {
        let mut vec = Vector::with_cap(count);
        vec.resize(count, value);
        vec
    }

    /// Creates a Vector holding clones of every element in `range`, with capacity exactly equal to
    /// its length.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let source = Vector::from([1, 2, 3, 4, 5]);
    /// let copied = Vector::from_range(&source[1..4]);
    /// assert_eq!(&*copied, &[2, 3, 4]);
    /// ```
    pub fn from_range(range: &[T]) -> Vector<T> {
        let mut vec = Vector::with_cap(range.len());
        for value in range {
            // SAFETY: vec has been created with the right capacity.
            unsafe { vec.push_unchecked(value.clone()); }
        }
        vec
    }
}

impl<T, A: RawAlloc> Vector<T, A> {
    /// Creates a new Vector with the default capacity of 10, allocating through `alloc`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn new_in(alloc: A) -> Vector<T, A> {
        Vector::with_cap_in(DEFAULT_CAP, alloc)
    }

    /// Creates a new Vector with length and capacity 0 that will allocate through `alloc`.
    pub const fn empty_in(alloc: A) -> Vector<T, A> {
        Vector {
            buf: Storage::new_in(alloc),
            len: 0,
        }
    }

    /// Creates a new Vector with capacity exactly `cap`, allocating through `alloc`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap_in(cap: usize, alloc: A) -> Vector<T, A> {
        Vector::try_with_cap_in(cap, alloc).or_handle()
    }

    /// Creates a new Vector with capacity exactly `cap`, allocating through `alloc` and returning
    /// an error rather than diverging.
    ///
    /// # Errors
    /// Returns a [`ReserveError`] if the layout is too large or the allocation fails.
    pub fn try_with_cap_in(cap: usize, alloc: A) -> Result<Vector<T, A>, ReserveError> {
        Ok(Vector {
            buf: Storage::try_allocate_in(cap, alloc)?,
            len: 0,
        })
    }

    /// Returns the length of the Vector.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let vec = Vector::from([1_u8, 2, 3]);
    /// assert_eq!(vec.len(), 3);
    /// ```
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector contains no elements.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::new();
    /// assert!(vec.is_empty());
    /// vec.push_back(1);
    /// assert!(!vec.is_empty())
    /// ```
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the Vector. Unlike [`Vec`], the capacity is guaranteed to be
    /// exactly the value provided to any of the various capacity manipulation functions.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub const fn cap(&self) -> usize {
        self.buf.cap()
    }

    /// Returns a raw pointer to the start of the Vector's storage. The pointer is invalidated by
    /// any reallocation.
    pub const fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Returns a raw mutable pointer to the start of the Vector's storage. The pointer is
    /// invalidated by any reallocation.
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }

    /// Returns a reference to the allocation strategy.
    pub const fn allocator(&self) -> &A {
        self.buf.allocator()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let vec = Vector::from([10, 20, 30]);
    /// assert_eq!(vec.at(1), Ok(&20));
    /// assert!(vec.at(3).is_err());
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index < len and all values < len are initialized.
        Ok(unsafe { self.get_unchecked(index) })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index < len and all values < len are initialized.
        Ok(unsafe { self.get_unchecked_mut(index) })
    }

    /// Returns a reference to the first element.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the Vector is empty.
    pub fn front(&self) -> Result<&T, EmptyCollection> {
        self.first().ok_or(EmptyCollection)
    }

    /// Returns a mutable reference to the first element.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the Vector is empty.
    pub fn front_mut(&mut self) -> Result<&mut T, EmptyCollection> {
        self.first_mut().ok_or(EmptyCollection)
    }

    /// Returns a reference to the last element.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the Vector is empty.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// # use standard_containers::collections::EmptyCollection;
    /// let mut vec = Vector::new();
    /// assert_eq!(vec.back(), Err(EmptyCollection));
    /// vec.push_back('a');
    /// vec.push_back('b');
    /// assert_eq!(vec.back(), Ok(&'b'));
    /// ```
    pub fn back(&self) -> Result<&T, EmptyCollection> {
        self.last().ok_or(EmptyCollection)
    }

    /// Returns a mutable reference to the last element.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the Vector is empty.
    pub fn back_mut(&mut self) -> Result<&mut T, EmptyCollection> {
        self.last_mut().ok_or(EmptyCollection)
    }

    /// Returns a [`Position`] referring to the first element.
    pub const fn begin(&self) -> Position {
        Position(0)
    }

    /// Returns a [`Position`] referring to one past the last element.
    pub const fn end(&self) -> Position {
        Position(self.len)
    }

    /// Returns a reference to the element at `pos`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `pos` doesn't refer to a live element.
    pub fn get_at(&self, pos: Position) -> Result<&T, IndexOutOfBounds> {
        self.at(pos.index())
    }

    /// Returns a mutable reference to the element at `pos`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `pos` doesn't refer to a live element.
    pub fn get_at_mut(&mut self, pos: Position) -> Result<&mut T, IndexOutOfBounds> {
        self.at_mut(pos.index())
    }

    /// Returns the half-open range `[first, last)` as a slice.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] unless `first <= last <= end()`.
    pub fn range(&self, first: Position, last: Position) -> Result<&[T], IndexOutOfBounds> {
        self.check_range(first, last)?;
        Ok(&self[first.index()..last.index()])
    }

    /// Returns the half-open range `[first, last)` as a mutable slice, which is the form the
    /// [heap algorithms](crate::algorithm::heap) operate on.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] unless `first <= last <= end()`.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::algorithm::heap;
    /// # use standard_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::from([3, 1, 4, 1, 5, 9]);
    /// let first = vec.begin() + 1;
    /// let last = vec.end() - 1;
    /// heap::make_heap(vec.range_mut(first, last).unwrap());
    /// assert_eq!(vec[1], 5);
    /// ```
    pub fn range_mut(
        &mut self,
        first: Position,
        last: Position,
    ) -> Result<&mut [T], IndexOutOfBounds> {
        self.check_range(first, last)?;
        Ok(&mut self[first.index()..last.index()])
    }

    /// Appends the provided value to the end of the Vector, increasing the capacity if required.
    /// Returns a reference to the newly added element.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// for i in 0..=5 {
    ///     vec.push_back(i);
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn push_back(&mut self, value: T) -> &mut T {
        if self.len == self.cap() {
            self.grow();
        }
        // SAFETY: The capacity has just been adjusted to support the addition of the new item.
        unsafe { self.push_unchecked(value) }
    }

    /// Constructs a new element at the end of the Vector using `make`, increasing the capacity if
    /// required. `make` is only invoked once there is room for its result.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::new();
    /// let pair = vec.emplace_back(|| (1, 2));
    /// pair.1 = 3;
    /// assert_eq!(vec[0], (1, 3));
    /// ```
    pub fn emplace_back<F: FnOnce() -> T>(&mut self, make: F) -> &mut T {
        if self.len == self.cap() {
            self.grow();
        }
        let value = make();
        // SAFETY: The capacity has just been adjusted to support the addition of the new item.
        unsafe { self.push_unchecked(value) }
    }

    /// Appends the provided value to the end of the Vector, assuming that there is enough capacity
    /// to do so.
    ///
    /// # Safety
    /// It is up to the caller to ensure that the Vector has enough capacity to add the provided
    /// value, using methods like [`reserve`](Vector::reserve) or [`with_cap`](Vector::with_cap) to
    /// do so. Using this method on a Vector without enough capacity is undefined behavior.
    pub unsafe fn push_unchecked(&mut self, value: T) -> &mut T {
        let index = self.len;
        self.len += 1;
        // SAFETY: It is up to the caller to ensure that index < cap. The slot at len is never
        // initialized.
        unsafe { self.buf.construct_at(index, value) }
    }

    /// Removes the last element from the Vector and returns it.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if there is no element to remove. Popping from an empty Vector
    /// is reported rather than ignored.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// # use standard_containers::collections::EmptyCollection;
    /// let mut vec = Vector::from([0, 1, 2]);
    /// for i in (0..vec.len()).rev() {
    ///     assert_eq!(vec.pop_back(), Ok(i));
    /// }
    /// assert_eq!(vec.pop_back(), Err(EmptyCollection));
    /// ```
    pub fn pop_back(&mut self) -> Result<T, EmptyCollection> {
        if self.len == 0 {
            return Err(EmptyCollection);
        }

        // Decrement len before reading.
        self.len -= 1;
        // SAFETY: len has just been decremented, so it refers to the last live value, which is
        // moved out and no longer considered part of the Vector.
        Ok(unsafe { self.buf.read_at(self.len) })
    }

    /// Inserts `value` before `pos`, growing and moving items as necessary. `pos` may be
    /// [`end`](Vector::end), in which case the value is appended.
    ///
    /// Returns a [`Position`] referring to the inserted element. Any other Position at or after
    /// `pos` now refers to the element before the one it used to.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `pos` is past the end. The Vector is left unchanged.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2, 4, 5]);
    /// let pos = vec.insert(vec.begin() + 2, 3).unwrap();
    /// assert_eq!(&*vec, &[1, 2, 3, 4, 5]);
    /// assert_eq!(vec.get_at(pos), Ok(&3));
    /// ```
    pub fn insert(&mut self, pos: Position, value: T) -> Result<Position, IndexOutOfBounds> {
        self.emplace(pos, || value)
    }

    /// Constructs a new element with `make` and inserts it before `pos`. `make` runs after any
    /// growth and before any element is moved.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `pos` is past the end, in which case `make` isn't called.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub fn emplace<F: FnOnce() -> T>(
        &mut self,
        pos: Position,
        make: F,
    ) -> Result<Position, IndexOutOfBounds> {
        // The index is resolved before growing, which would move every element.
        let index = pos.index();
        self.check_insert_index(index)?;

        if self.len == self.cap() {
            self.grow();
        }

        let value = make();

        // SAFETY: index <= len < cap, so both the shifted range index..len -> index+1..len+1 and
        // the vacated slot at index are in bounds. The values in index..len are live.
        unsafe {
            self.buf.shift(index, index + 1, self.len - index);
            self.buf.construct_at(index, value);
        }
        self.len += 1;

        Ok(pos)
    }

    /// Removes the element at `pos` and returns it, moving all following values to fill in the
    /// gap.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `pos` doesn't refer to a live element.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = "Hello world!".chars().collect();
    /// assert_eq!(vec.erase(vec.begin() + 1), Ok('e'));
    /// assert_eq!(vec.erase(vec.begin() + 4), Ok(' '));
    /// assert_eq!(vec, "Hlloworld!".chars().collect::<Vector<_>>());
    /// ```
    pub fn erase(&mut self, pos: Position) -> Result<T, IndexOutOfBounds> {
        let index = pos.index();
        self.check_index(index)?;

        // SAFETY: index < len, so the value at index is live and moved out here. The values in
        // index+1..len are live and are shifted down over it.
        let value = unsafe {
            let value = self.buf.read_at(index);
            self.buf.shift(index + 1, index, self.len - index - 1);
            value
        };
        self.len -= 1;

        Ok(value)
    }

    /// Removes the elements in `[first, last)`, moving all following values to fill in the gap.
    ///
    /// Returns `first`, which now refers to the element that followed the removed range.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] unless `first <= last <= end()`.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::from([0, 1, 2, 3, 4, 5]);
    /// let next = vec.erase_range(vec.begin() + 1, vec.begin() + 4).unwrap();
    /// assert_eq!(&*vec, &[0, 4, 5]);
    /// assert_eq!(vec.get_at(next), Ok(&4));
    /// ```
    pub fn erase_range(
        &mut self,
        first: Position,
        last: Position,
    ) -> Result<Position, IndexOutOfBounds> {
        self.check_range(first, last)?;
        let (start, end) = (first.index(), last.index());
        let old_len = self.len;

        // Only the prefix counts as live while values are dropped, so a panicking drop leaks the
        // tail rather than exposing dropped values.
        self.len = start;

        // SAFETY: start <= end <= old_len, all values < old_len are live. The dropped slots are
        // overwritten by the shifted tail.
        unsafe {
            self.buf.destroy_range(start, end);
            self.buf.shift(end, start, old_len - end);
        }
        self.len = old_len - (end - start);

        Ok(first)
    }

    /// Ensures that the Vector has capacity for at least `cap` elements. Does nothing if the
    /// capacity is already large enough. The length is never changed.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::new();
    /// vec.reserve(50);
    /// assert_eq!(vec.cap(), 50);
    /// vec.reserve(20);
    /// assert_eq!(vec.cap(), 50);
    /// ```
    pub fn reserve(&mut self, cap: usize) {
        self.try_reserve(cap).or_handle()
    }

    /// Ensures that the Vector has capacity for at least `cap` elements, returning an error rather
    /// than diverging.
    ///
    /// # Errors
    /// Returns a [`ReserveError`] if the layout is too large or the allocation fails. The Vector is
    /// left unchanged.
    pub fn try_reserve(&mut self, cap: usize) -> Result<(), ReserveError> {
        if cap <= self.cap() { return Ok(()); }

        self.try_realloc_with_cap(cap)
    }

    /// Shrinks the Vector so that its capacity is equal to its length.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub fn shrink_to_fit(&mut self) {
        self.try_shrink_to_fit().or_handle()
    }

    /// Shrinks the Vector so that its capacity is equal to its length, returning an error rather
    /// than diverging.
    ///
    /// # Errors
    /// Returns a [`ReserveError`] if the smaller block can't be allocated. The Vector is left
    /// unchanged.
    pub fn try_shrink_to_fit(&mut self) -> Result<(), ReserveError> {
        if self.cap() <= self.len { return Ok(()); }

        self.try_realloc_with_cap(self.len)
    }

    /// Resizes the Vector to exactly `new_len` elements, dropping values from the end or appending
    /// values produced by `make`.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub fn resize_with<F: FnMut() -> T>(&mut self, new_len: usize, mut make: F) {
        if new_len <= self.len {
            self.truncate(new_len);
            return;
        }

        self.reserve(new_len);
        while self.len < new_len {
            // SAFETY: The capacity has been reserved for new_len elements.
            unsafe { self.push_unchecked(make()); }
        }
    }

    /// Shortens the Vector to `new_len` elements, dropping the rest. Does nothing if the Vector is
    /// already short enough. The capacity is unaffected.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len { return; }

        let old_len = self.len;
        self.len = new_len;
        // SAFETY: new_len < old_len and all values < old_len were live. They are no longer
        // considered part of the Vector.
        unsafe { self.buf.destroy_range(new_len, old_len); }
    }

    /// Drops all elements, keeping the capacity.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2, 3]);
    /// vec.clear();
    /// assert!(vec.is_empty());
    /// assert_eq!(vec.cap(), 10);
    /// ```
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Exchanges the contents of two Vectors without touching any elements.
    pub fn swap(&mut self, other: &mut Vector<T, A>) {
        mem::swap(self, other);
    }

    /// Appends all elements from `other` to self.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub fn append<B: RawAlloc>(&mut self, other: Vector<T, B>) {
        self.reserve(self.len.saturating_add(other.len));
        for value in other {
            // SAFETY: The capacity was reserved for every element of other.
            unsafe { self.push_unchecked(value); }
        }
    }

    /// Reallocates the internal Storage with the provided capacity, dropping values that don't fit.
    pub(crate) fn try_realloc_with_cap(&mut self, new_cap: usize) -> Result<(), ReserveError> {
        // SAFETY: All values < len are live, and len is kept up to date by the Storage.
        unsafe { self.buf.try_reallocate(new_cap, &mut self.len) }
    }

    /// Grows the internal Storage to allow for the insertion of additional elements. After calling
    /// this, the Vector can take at least one more element.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub(crate) fn grow(&mut self) {
        self.try_grow().or_handle()
    }

    pub(crate) fn try_grow(&mut self) -> Result<(), ReserveError> {
        let new_cap = self.grown_cap()?;
        self.try_realloc_with_cap(new_cap)
    }

    /// Determines the next capacity. If a full growth step would exceed the maximum capacity,
    /// the maximum is used instead as long as it still represents growth.
    pub(crate) fn grown_cap(&self) -> Result<usize, CapacityOverflow> {
        let max_cap = MAX_SIZE / cmp::max(size_of::<T>(), 1);
        let max_cap = if size_of::<T>() == 0 { usize::MAX } else { max_cap };

        let new_cap = cmp::max(self.cap().saturating_mul(GROWTH_FACTOR), MIN_CAP);

        match new_cap {
            cap if cap <= max_cap => Ok(cap),
            _ if self.cap() < max_cap => Ok(max_cap),
            _ => Err(CapacityOverflow),
        }
    }

    /// Checks that the provided index refers to a live element.
    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index >= self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        } else {
            Ok(())
        }
    }

    /// Checks that the provided index is a valid insertion point, including one past the end.
    pub(crate) const fn check_insert_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index > self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        } else {
            Ok(())
        }
    }

    /// Checks that `first <= last <= len`.
    pub(crate) const fn check_range(
        &self,
        first: Position,
        last: Position,
    ) -> Result<(), IndexOutOfBounds> {
        if last.0 > self.len {
            Err(IndexOutOfBounds {
                index: last.0,
                len: self.len,
            })
        } else if first.0 > last.0 {
            Err(IndexOutOfBounds {
                index: first.0,
                len: self.len,
            })
        } else {
            Ok(())
        }
    }
}

impl<T, A: RawAlloc + Clone> Vector<T, A> {
    /// Moves the contents out into a new Vector, leaving `self` with length 0, capacity 0 and no
    /// allocation.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let mut a = Vector::from([1, 2, 3]);
    /// let b = a.take();
    /// assert_eq!((a.len(), a.cap()), (0, 0));
    /// assert_eq!(&*b, &[1, 2, 3]);
    /// assert_eq!(b.cap(), 10);
    /// ```
    pub fn take(&mut self) -> Vector<T, A> {
        let empty = Vector::empty_in(self.allocator().clone());
        mem::replace(self, empty)
    }
}

impl<T: Clone, A: RawAlloc> Vector<T, A> {
    /// Resizes the Vector to exactly `new_len` elements, dropping values from the end or appending
    /// clones of `value`.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2, 3]);
    /// vec.resize(5, 0);
    /// assert_eq!(&*vec, &[1, 2, 3, 0, 0]);
    /// vec.resize(2, 0);
    /// assert_eq!(&*vec, &[1, 2]);
    /// ```
    pub fn resize(&mut self, new_len: usize, value: T) {
        self.resize_with(new_len, || value.clone());
    }
}

impl<T, A: RawAlloc> Extend<T> for Vector<T, A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(self.len.saturating_add(iter.size_hint().0));

        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T: Copy + 'a, A: RawAlloc> Extend<&'a T> for Vector<T, A> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut vec = Vector::with_cap(iter.size_hint().0);

        for item in iter {
            vec.push_back(item);
        }

        vec
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    /// Creates a Vector from a literal list of values, with the default capacity or exactly `N`,
    /// whichever is larger.
    fn from(value: [T; N]) -> Self {
        let mut vec = Vector::with_cap(cmp::max(DEFAULT_CAP, N));

        for item in value {
            // SAFETY: vec has been created with enough capacity for all N items.
            unsafe { vec.push_unchecked(item); }
        }

        vec
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    fn from(value: &[T]) -> Self {
        Vector::from_range(value)
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, A: RawAlloc> Drop for Vector<T, A> {
    fn drop(&mut self) {
        // SAFETY: All values less than len are initialized and safe to drop.
        unsafe { self.buf.destroy_range(0, self.len); }

        // Implicitly drop self.buf, which deallocates the owned memory.
    }
}

impl<T, A: RawAlloc> Deref for Vector<T, A> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: Vector is valid as a slice for len values, which are all initialized. The pointer
        // is nonnull, properly aligned and the range entirely contained within this Vector.
        // The borrow checker enforces that self isn't mutated due to this function taking a &self.
        // The total size is < isize::MAX as the result of being a valid Vector.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }
}

impl<T, A: RawAlloc> DerefMut for Vector<T, A> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: Vector is valid as a slice for len values, which are all initialized. The pointer
        // is nonnull, properly aligned and the range entirely contained within this Vector.
        // The borrow checker enforces that self isn't accessed due to this function taking a
        // &mut self. The total size is < isize::MAX as the result of being a valid Vector.
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr(), self.len) }
    }
}

impl<T, A: RawAlloc> AsRef<[T]> for Vector<T, A> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T, A: RawAlloc> AsMut<[T]> for Vector<T, A> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T, A: RawAlloc> Borrow<[T]> for Vector<T, A> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T, A: RawAlloc> BorrowMut<[T]> for Vector<T, A> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

impl<T: Clone, A: RawAlloc + Clone> Clone for Vector<T, A> {
    /// Copies every element into an independent block with the same capacity.
    fn clone(&self) -> Self {
        let mut vec = Vector::with_cap_in(self.cap(), self.allocator().clone());

        for value in self.iter() {
            // SAFETY: vec has the same capacity as self, which holds at least len values.
            unsafe { vec.push_unchecked(value.clone()); }
        }

        vec
    }
}

impl<T: PartialEq, A: RawAlloc, B: RawAlloc> PartialEq<Vector<T, B>> for Vector<T, A> {
    fn eq(&self, other: &Vector<T, B>) -> bool {
        **self == **other
    }
}

impl<T: Eq, A: RawAlloc> Eq for Vector<T, A> {}

impl<T: Hash, A: RawAlloc> Hash for Vector<T, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug, A: RawAlloc> Debug for Vector<T, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug, A: RawAlloc> Display for Vector<T, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
