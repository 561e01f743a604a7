//! A module containing [`Vector`] and associated types.
//!
//! [`Position`] is the random-access cursor used to address elements for insertion, erasure and
//! ranges, and [`IntoIter`] provides owned iteration. [`IterMut`](std::slice::IterMut) and
//! [`Iter`](std::slice::Iter) from [`std::slice`] are used for borrowed iteration.
//!
//! [`Vector`] and [`Position`] are also re-exported under the parent module.

mod iter;
mod macros;
mod position;
mod tests;
mod vector;

pub use iter::*;
pub use position::*;
pub use vector::*;
