//! Container adaptors, which restrict an underlying sequence to a single access discipline.
//!
//! Each adaptor owns its container and is generic over it, through the traits in
//! [`traits`](crate::collections::traits). The defaults match the usual choices: a
//! [`Stack`] and a [`PriorityQueue`] sit on a [`Vector`](crate::collections::contiguous::Vector),
//! while a [`Queue`] sits on a [`LinkedList`](crate::collections::linked::LinkedList).
#![warn(missing_docs)]

mod priority_queue;
mod queue;
mod stack;
mod tests;

pub use priority_queue::*;
pub use queue::*;
pub use stack::*;
