//! Ordering predicates for the [heap algorithms](super::heap) and
//! [`PriorityQueue`](crate::collections::adaptor::PriorityQueue).

/// A strict weak ordering over `T`, expressed as a "less than" predicate.
///
/// `is_less(a, b)` returning true means that `a` has lower priority than `b`. The heap algorithms
/// place the element that nothing is "less than" at the root, so [`Less`] produces a max-heap and
/// [`Greater`] produces a min-heap.
///
/// Any `FnMut(&T, &T) -> bool` closure is a Compare, so a stateful comparator can be reused across
/// calls by passing it as `&mut closure`.
///
/// # Examples
/// ```
/// # use standard_containers::algorithm::compare::{Compare, Greater, Less};
/// assert!(Less.is_less(&1, &2));
/// assert!(Greater.is_less(&2, &1));
///
/// let mut by_len = |a: &&str, b: &&str| a.len() < b.len();
/// assert!(by_len.is_less(&"ab", &"abc"));
/// ```
pub trait Compare<T: ?Sized> {
    /// Returns true if `a` should be ordered before (has lower priority than) `b`.
    fn is_less(&mut self, a: &T, b: &T) -> bool;
}

/// The default ordering, using [`PartialOrd::lt`]. Produces max-heaps.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Less;

impl<T: ?Sized + PartialOrd> Compare<T> for Less {
    fn is_less(&mut self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// The reverse ordering, using [`PartialOrd::gt`]. Produces min-heaps.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Greater;

impl<T: ?Sized + PartialOrd> Compare<T> for Greater {
    fn is_less(&mut self, a: &T, b: &T) -> bool {
        a > b
    }
}

impl<T: ?Sized, F: FnMut(&T, &T) -> bool> Compare<T> for F {
    fn is_less(&mut self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}
