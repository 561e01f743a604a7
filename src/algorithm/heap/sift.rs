use crate::algorithm::compare::Compare;

pub(crate) const fn parent(child: usize) -> usize {
    child.saturating_sub(1) / 2
}

pub(crate) const fn left(parent: usize) -> usize {
    parent.saturating_mul(2).saturating_add(1)
}

pub(crate) const fn right(parent: usize) -> usize {
    parent.saturating_mul(2).saturating_add(2)
}

/// Restores the heap property below `node`, assuming both of its subtrees are already heaps.
///
/// Only the prefix `range[..len]` is considered part of the heap. The largest of the node and its
/// children is found by checking the left child first and then the right child, each only replacing
/// the current largest if it is strictly greater. Ties therefore keep the parent, and otherwise
/// prefer the left child.
pub(crate) fn sift_down<T, C: Compare<T>>(
    range: &mut [T],
    comp: &mut C,
    len: usize,
    mut node: usize,
) {
    loop {
        let (l, r) = (left(node), right(node));
        let mut largest = node;

        if l < len && comp.is_less(&range[largest], &range[l]) {
            largest = l;
        }
        if r < len && comp.is_less(&range[largest], &range[r]) {
            largest = r;
        }

        if largest == node {
            break;
        }

        range.swap(node, largest);
        node = largest;
    }
}

/// Moves the element at `node` towards the root for as long as it outranks its parent.
pub(crate) fn sift_up<T, C: Compare<T>>(range: &mut [T], comp: &mut C, mut node: usize) {
    while node > 0 {
        let p = parent(node);

        if !comp.is_less(&range[p], &range[node]) {
            break;
        }

        range.swap(p, node);
        node = p;
    }
}
