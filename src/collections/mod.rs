//! Various general-purpose collection types.
//!
//! # Purpose
//! The [`Vector`](contiguous::Vector) manages its own storage through a raw allocation strategy,
//! constructing and destroying each element explicitly, rather than building on [`Vec`]. The
//! [adaptors](adaptor) then layer stack, queue and heap disciplines over it (or a
//! [`LinkedList`](linked::LinkedList)).
//!
//! # Method
//! Contiguous types here implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! saves me from writing some of the more repetitive functionality, and lets the
//! [heap algorithms](crate::algorithm::heap) operate on them directly.

#[cfg(feature = "adaptor")]
pub mod adaptor;
#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "traits")]
pub mod traits;

#[doc(inline)]
pub use crate::util::error::{
    AllocFailure, CapacityOverflow, ContainerError, EmptyCollection, IndexOutOfBounds, ReserveError,
};
