//! Binary heap algorithms over slices.
//!
//! A heap isn't a type here, but a property of a range: for every index `i` in `1..len`, the
//! element at `(i - 1) / 2` isn't "less" than the element at `i`, according to some
//! [`Compare`](super::compare::Compare). The algorithms either establish that property
//! ([`make_heap`]), assume and preserve it ([`push_heap`], [`pop_heap`]), consume it
//! ([`sort_heap`]) or test for it ([`is_heap`]).
//!
//! Every algorithm comes in two forms. The plain form orders by [`Ord`] and produces max-heaps,
//! and the `_by` form accepts any comparator, such as [`Greater`](super::compare::Greater) for
//! min-heaps or a closure. The plain form is exactly the `_by` form called with
//! [`Less`](super::compare::Less).
//!
//! Any contiguous collection can be passed through [`Deref<Target = [T]>`](std::ops::Deref), and
//! a sub-range of a [`Vector`](crate::collections::contiguous::Vector) can be selected with
//! [`Vector::range_mut`](crate::collections::contiguous::Vector::range_mut).
//!
//! Preconditions (such as `pop_heap` requiring a heap) aren't checked. Violating them never causes
//! undefined behavior, but the resulting order is unspecified.
#![warn(missing_docs)]

mod is_heap;
mod make_heap;
mod pop_heap;
mod push_heap;
mod sift;
mod sort_heap;
mod tests;

pub use is_heap::*;
pub use make_heap::*;
pub use pop_heap::*;
pub use push_heap::*;
pub use sort_heap::*;
