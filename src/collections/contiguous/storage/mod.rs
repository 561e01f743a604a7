//! A module containing [`Storage`], the raw memory manager underneath
//! [`Vector`](super::Vector), and the [`RawAlloc`] strategy it allocates through.
//!
//! Storage only deals in slots. It knows how many slots are allocated but never how many of them
//! hold live values, which is left entirely to the owner. This keeps memory management and object
//! lifetime as two separate concerns.

mod allocator;
mod storage;

pub use allocator::*;
pub use storage::*;
