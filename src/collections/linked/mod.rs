//! Linked collection types. Currently just [`LinkedList`], which backs
//! [`Queue`](crate::collections::adaptor::Queue) by default.

pub mod list;

#[doc(inline)]
pub use list::LinkedList;
