use super::sift::parent;
use crate::algorithm::compare::{Compare, Less};

/// Returns true if `range` is a max-heap.
///
/// # Examples
/// ```
/// # use standard_containers::algorithm::heap;
/// assert!(heap::is_heap(&[9, 5, 4, 1, 1, 3]));
/// assert!(!heap::is_heap(&[1, 5, 4]));
/// assert!(heap::is_heap::<u8>(&[]));
/// ```
pub fn is_heap<T: Ord>(range: &[T]) -> bool {
    is_heap_by(range, Less)
}

/// Returns true if `range` is a heap under `comp`, meaning that no element is "less" than one of
/// its children. Ranges of length 0 or 1 are always heaps. The range is never modified.
///
/// # Time Complexity
/// `O(n)`, stopping at the first violation.
pub fn is_heap_by<T, C: Compare<T>>(range: &[T], comp: C) -> bool {
    is_heap_until_by(range, comp) == range.len()
}

/// Returns the length of the longest prefix of `range` that is a max-heap.
///
/// # Examples
/// ```
/// # use standard_containers::algorithm::heap;
/// assert_eq!(heap::is_heap_until(&[9, 5, 4, 1, 6, 3]), 4);
/// assert_eq!(heap::is_heap_until(&[9, 5, 4]), 3);
/// ```
pub fn is_heap_until<T: Ord>(range: &[T]) -> usize {
    is_heap_until_by(range, Less)
}

/// Returns the length of the longest prefix of `range` that is a heap under `comp`, which is the
/// index of the first element that outranks its parent.
pub fn is_heap_until_by<T, C: Compare<T>>(range: &[T], mut comp: C) -> usize {
    (1..range.len())
        .find(|&child| comp.is_less(&range[parent(child)], &range[child]))
        .unwrap_or(range.len())
}
