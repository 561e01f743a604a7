use super::pop_heap::pop_heap_with;
use crate::algorithm::compare::{Compare, Less};

/// Sorts the max-heap `range` into ascending order.
///
/// # Examples
/// ```
/// # use standard_containers::algorithm::heap;
/// let mut values = [3, 1, 4, 1, 5, 9, 2, 6];
/// heap::make_heap(&mut values);
/// heap::sort_heap(&mut values);
/// assert_eq!(values, [1, 1, 2, 3, 4, 5, 6, 9]);
/// ```
pub fn sort_heap<T: Ord>(range: &mut [T]) {
    sort_heap_by(range, Less)
}

/// Sorts the heap `range` so that it is ordered by `comp`, by repeatedly popping the root into the
/// shrinking tail.
///
/// `range` must be a heap under `comp`. This isn't checked. The result is generally no longer a
/// heap. Ranges of length 0 or 1 are left untouched.
///
/// # Time Complexity
/// `O(n log n)`.
pub fn sort_heap_by<T, C: Compare<T>>(range: &mut [T], mut comp: C) {
    sort_heap_with(range, &mut comp);
}

pub(crate) fn sort_heap_with<T, C: Compare<T>>(range: &mut [T], comp: &mut C) {
    for end in (2..=range.len()).rev() {
        pop_heap_with(&mut range[..end], comp);
    }
}
