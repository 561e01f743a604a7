use super::sift::sift_down;
use crate::algorithm::compare::{Compare, Less};

/// Moves the largest element of the max-heap `range` to the end, and restores the heap property
/// over the rest.
///
/// # Examples
/// ```
/// # use standard_containers::algorithm::heap;
/// # use standard_containers::collections::contiguous::Vector;
/// let mut heap_vec = Vector::from([9, 5, 4, 1]);
/// heap::pop_heap(&mut heap_vec);
/// assert_eq!(heap_vec.pop_back(), Ok(9));
/// assert_eq!(heap_vec.front(), Ok(&5));
/// ```
pub fn pop_heap<T: Ord>(range: &mut [T]) {
    pop_heap_by(range, Less)
}

/// Swaps the root of `range` with its last element, then sifts the new root down so that
/// `range[..len - 1]` is a heap under `comp` again. The caller is then free to shrink the range.
///
/// `range` must be a heap under `comp`. This isn't checked, and if it doesn't hold the resulting
/// order is unspecified. Ranges of length 0 or 1 are left untouched.
///
/// # Time Complexity
/// `O(log n)`.
pub fn pop_heap_by<T, C: Compare<T>>(range: &mut [T], mut comp: C) {
    pop_heap_with(range, &mut comp);
}

pub(crate) fn pop_heap_with<T, C: Compare<T>>(range: &mut [T], comp: &mut C) {
    if range.len() <= 1 { return; }

    let last = range.len() - 1;
    range.swap(0, last);
    sift_down(range, comp, last, 0);
}
