//! This crate is my attempt at writing the container half of a standard library: a growable array
//! that manages its own memory, a linked list, the three classic adaptors on top of them and the
//! heap algorithms that a priority queue is made of.
//!
//! # Purpose
//! Like most of what I write, this is a learning project first. The goal is to understand where
//! the boundaries between allocation, construction and ownership actually sit, by drawing them
//! myself instead of leaning on [`Vec`].
//!
//! # Method
//! [`Vector`](collections::contiguous::Vector) is layered on a
//! [`Storage`](collections::contiguous::Storage) block, which hands out raw slots and nothing else.
//! The Vector decides which slots are live, constructs values into them and destroys them again.
//! Every allocation goes through a [`RawAlloc`](collections::contiguous::storage::RawAlloc)
//! strategy, which is also how the tests check what happens when memory runs out.
//!
//! The [heap algorithms](algorithm::heap) work on any `&mut [T]`, so they can be pointed at a whole
//! Vector, a sub-range of one (see [`Vector::range_mut`](collections::contiguous::Vector::range_mut))
//! or a plain array. The ordering is a [`Compare`](algorithm::compare::Compare), which closures
//! implement too.
//!
//! # Error Handling
//! Anything that can be misused by the caller returns a [`Result`] with a small, strongly typed
//! error: [`IndexOutOfBounds`](collections::IndexOutOfBounds) for bad indices and positions and
//! [`EmptyCollection`](collections::EmptyCollection) for reading or popping nothing. These can all
//! be `?`-ed into a [`ContainerError`](collections::ContainerError).
//!
//! Running out of capacity is treated differently. Having to handle an error on every single
//! `push_back` would be miserable, so capacity overflow panics and allocation failure aborts
//! through [`handle_alloc_error`](std::alloc::handle_alloc_error), the same way [`Vec`] behaves.
//! Where that matters, `try_` variants return a [`ReserveError`](collections::ReserveError)
//! instead and leave the collection exactly as it was.
//!
//! # Features
//! Each collection family sits behind a Cargo feature (`contiguous`, `linked`, `traits` and
//! `adaptor`), all of which are enabled through the default `collections-all`. The
//! [`algorithm`] module only needs slices and is always available.
//!
//! # Dependencies
//! Apart from `std` itself, this crate only depends on derive macros for the error enums. This
//! library doesn't use [`Vec`] at all.
//!
//! # Potential Future Additions
//! - Data structures:
//!   - Double-ended Queue
//!   - Binary Tree Map/Set

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod algorithm;
#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
