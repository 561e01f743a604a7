use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A lightweight cursor into a [`Vector`](super::Vector), identifying an element (or the insertion
/// point one past the end) by its offset from the start.
///
/// A Position doesn't borrow or own anything, so it can be held across mutations of the Vector it
/// came from. Doing so is where invalidation comes in:
/// - Inserting or erasing at or before a Position shifts the elements it would have referred to, so
///   afterwards it refers to a different element (or is out of bounds).
/// - Reallocation doesn't affect a Position at all, but any raw pointer obtained through
///   [`Vector::as_ptr`](super::Vector::as_ptr) is invalidated by it.
///
/// Every method that accepts a Position checks it against the current length, so a stale Position
/// is reported as [`IndexOutOfBounds`](crate::collections::IndexOutOfBounds) rather than reading
/// invalid memory.
///
/// Positions support random-access arithmetic: offsetting by a `usize`, measuring the signed
/// distance between two positions and total ordering.
///
/// # Examples
/// ```
/// # use standard_containers::collections::contiguous::Vector;
/// let vec = Vector::from([1, 2, 3, 4]);
/// let first = vec.begin();
/// let last = vec.end();
/// assert_eq!(last - first, 4);
/// assert_eq!(vec.get_at(first + 2), Ok(&3));
/// assert!(first < last);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(pub(crate) usize);

impl Position {
    /// Creates a Position referring to `index`.
    pub const fn new(index: usize) -> Position {
        Position(index)
    }

    /// Returns the index that this Position refers to.
    pub const fn index(self) -> usize {
        self.0
    }

    /// Returns the signed number of steps from `self` to `other`.
    pub const fn distance_to(self, other: Position) -> isize {
        other.0 as isize - self.0 as isize
    }

    /// Offsets this Position by `count` steps towards the end, returning [`None`] on overflow.
    pub const fn checked_add(self, count: usize) -> Option<Position> {
        match self.0.checked_add(count) {
            Some(index) => Some(Position(index)),
            None => None,
        }
    }

    /// Offsets this Position by `count` steps towards the start, returning [`None`] if that would
    /// move before the first element.
    pub const fn checked_sub(self, count: usize) -> Option<Position> {
        match self.0.checked_sub(count) {
            Some(index) => Some(Position(index)),
            None => None,
        }
    }
}

impl Add<usize> for Position {
    type Output = Position;

    fn add(self, rhs: usize) -> Self::Output {
        Position(self.0 + rhs)
    }
}

impl AddAssign<usize> for Position {
    fn add_assign(&mut self, rhs: usize) {
        self.0 += rhs;
    }
}

impl Sub<usize> for Position {
    type Output = Position;

    fn sub(self, rhs: usize) -> Self::Output {
        Position(self.0 - rhs)
    }
}

impl SubAssign<usize> for Position {
    fn sub_assign(&mut self, rhs: usize) {
        self.0 -= rhs;
    }
}

impl Sub for Position {
    type Output = isize;

    /// The signed distance from `rhs` to `self`.
    fn sub(self, rhs: Position) -> Self::Output {
        rhs.distance_to(self)
    }
}

impl From<usize> for Position {
    fn from(value: usize) -> Self {
        Position(value)
    }
}

impl From<Position> for usize {
    fn from(value: Position) -> Self {
        value.0
    }
}
