use super::sift::sift_up;
use crate::algorithm::compare::{Compare, Less};

/// Moves the last element of `range` into place, given that every element before it already forms
/// a max-heap.
///
/// # Examples
/// ```
/// # use standard_containers::algorithm::heap;
/// # use standard_containers::collections::contiguous::Vector;
/// let mut heap_vec = Vector::from([5, 3, 4]);
/// heap_vec.push_back(9);
/// heap::push_heap(&mut heap_vec);
/// assert_eq!(heap_vec.front(), Ok(&9));
/// assert!(heap::is_heap(&heap_vec));
/// ```
pub fn push_heap<T: Ord>(range: &mut [T]) {
    push_heap_by(range, Less)
}

/// Moves the last element of `range` towards the root while it outranks its parent under `comp`.
///
/// The prefix `range[..len - 1]` must already be a heap under `comp`. This isn't checked, and if it
/// doesn't hold the resulting order is unspecified. Ranges of length 0 or 1 are left untouched.
///
/// # Time Complexity
/// `O(log n)`.
pub fn push_heap_by<T, C: Compare<T>>(range: &mut [T], mut comp: C) {
    push_heap_with(range, &mut comp);
}

pub(crate) fn push_heap_with<T, C: Compare<T>>(range: &mut [T], comp: &mut C) {
    if range.len() <= 1 { return; }

    let last = range.len() - 1;
    sift_up(range, comp, last);
}
