//! Traits describing the capabilities that the [adaptors](crate::collections::adaptor) require of
//! their backing sequences.
#![warn(missing_docs)]

mod sequence;

pub use sequence::*;
