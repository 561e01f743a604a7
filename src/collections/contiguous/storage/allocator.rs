use std::alloc::{self, Layout};
use std::ptr::NonNull;

use crate::util::error::AllocFailure;

/// A strategy for obtaining and releasing raw blocks of memory.
///
/// This is the only point of customization for allocation in this crate. Implementors only need to
/// hand out blocks that fit the requested [`Layout`]; construction and destruction of values inside
/// those blocks is handled by [`Storage`](super::Storage).
pub trait RawAlloc {
    /// Requests a block of memory that fits `layout`.
    ///
    /// # Errors
    /// Returns [`AllocFailure`] if the request can't be satisfied. No retry is attempted.
    ///
    /// # Safety
    /// `layout` must have a non-zero size.
    unsafe fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocFailure>;

    /// Releases a block previously returned by [`allocate`](RawAlloc::allocate).
    ///
    /// # Safety
    /// `ptr` must have been returned by this strategy's `allocate` with the same `layout`, and must
    /// not have been deallocated already.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);
}

/// The default allocation strategy, using the global allocator via [`std::alloc`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Global;

impl RawAlloc for Global {
    unsafe fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocFailure> {
        // SAFETY: It is up to the caller to ensure that layout has a non-zero size.
        let raw_ptr = unsafe { alloc::alloc(layout) };
        NonNull::new(raw_ptr).ok_or(AllocFailure { layout })
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: ptr was allocated by the global allocator with the same layout.
        unsafe { alloc::dealloc(ptr.as_ptr(), layout) }
    }
}
