#![warn(missing_docs)]

#[cfg(all(test, feature = "contiguous"))]
pub mod alloc;
pub mod error;
pub mod panic;
pub mod result;
