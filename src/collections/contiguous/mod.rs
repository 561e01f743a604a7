//! Contiguous collection types. Namely [`Vector`], a growable array, and [`Storage`], the raw block
//! of slots that it manages.
#![warn(missing_docs)]

pub mod storage;
pub mod vector;

#[doc(inline)]
pub use storage::Storage;
#[doc(inline)]
pub use vector::{Position, Vector};
