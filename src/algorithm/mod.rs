//! Algorithms that operate on ranges rather than owning collections. Namely the binary
//! [`heap`] algorithms and the [`compare`] predicates that order them.

pub mod compare;
pub mod heap;
