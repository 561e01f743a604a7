use super::sift::sift_down;
use crate::algorithm::compare::{Compare, Less};

/// Rearranges `range` into a max-heap, so that the largest element is at index 0.
///
/// # Examples
/// ```
/// # use standard_containers::algorithm::heap;
/// let mut values = [74, -42, 48, -44, 14];
/// heap::make_heap(&mut values);
/// assert_eq!(values, [74, 14, 48, -44, -42]);
/// assert!(heap::is_heap(&values));
/// ```
pub fn make_heap<T: Ord>(range: &mut [T]) {
    make_heap_by(range, Less)
}

/// Rearranges `range` into a heap under `comp`, sifting down every parent from the last one back
/// to the root. Ranges of length 0 or 1 are left untouched.
///
/// # Time Complexity
/// `O(n)`, with at most `2n` comparisons.
pub fn make_heap_by<T, C: Compare<T>>(range: &mut [T], mut comp: C) {
    make_heap_with(range, &mut comp);
}

pub(crate) fn make_heap_with<T, C: Compare<T>>(range: &mut [T], comp: &mut C) {
    let len = range.len();
    for node in (0..len / 2).rev() {
        sift_down(range, comp, len, node);
    }
}
