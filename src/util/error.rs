use std::alloc::{self, Layout};
use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index or position didn't refer to a valid element (or insertion point) of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The offending index.
    pub index: usize,
    /// The number of elements in the collection at the time of the access.
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// An element was requested from (or removed from) a collection with no elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyCollection;

impl Display for EmptyCollection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Collection is empty!")
    }
}

impl Error for EmptyCollection {}

/// The memory layout required for a capacity would exceed [`isize::MAX`] bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// The allocation strategy was unable to provide memory for the contained layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocFailure {
    /// The layout of the request that couldn't be satisfied.
    pub layout: Layout,
}

impl Display for AllocFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Failed to allocate {} bytes with alignment {}!",
            self.layout.size(),
            self.layout.align()
        )
    }
}

impl Error for AllocFailure {}

/// Any of the ways that changing the capacity of a collection can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
#[allow(missing_docs)]
pub enum ReserveError {
    CapacityOverflow(CapacityOverflow),
    AllocFailure(AllocFailure),
}

impl ReserveError {
    /// Diverges in the way the standard library does for infallible capacity changes: an overflow
    /// panics and an allocation failure is passed to [`alloc::handle_alloc_error`].
    ///
    /// # Panics
    /// Panics on [`CapacityOverflow`].
    pub(crate) fn handle(self) -> ! {
        match self {
            ReserveError::CapacityOverflow(error) => panic!("{}", error),
            ReserveError::AllocFailure(AllocFailure { layout }) => {
                alloc::handle_alloc_error(layout)
            },
        }
    }
}

/// Every error that the collections in this crate can produce, for use with `?` in code that
/// doesn't care about the specific category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
#[allow(missing_docs)]
pub enum ContainerError {
    IndexOutOfBounds(IndexOutOfBounds),
    EmptyCollection(EmptyCollection),
    CapacityOverflow(CapacityOverflow),
    AllocFailure(AllocFailure),
}

impl From<ReserveError> for ContainerError {
    fn from(value: ReserveError) -> Self {
        match value {
            ReserveError::CapacityOverflow(error) => ContainerError::CapacityOverflow(error),
            ReserveError::AllocFailure(error) => ContainerError::AllocFailure(error),
        }
    }
}
