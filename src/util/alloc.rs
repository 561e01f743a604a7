use std::alloc::Layout;
use std::cell::RefCell;
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;
use std::rc::Rc;

use crate::collections::contiguous::storage::{Global, RawAlloc};
use crate::util::error::AllocFailure;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ZeroSizedType;

#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<RefCell<usize>>);

impl CountedDrop {
    pub fn new(value: usize) -> CountedDrop {
        CountedDrop(Rc::new(RefCell::new(value)))
    }
}

impl Deref for CountedDrop {
    type Target = Rc<RefCell<usize>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for CountedDrop {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.replace_with(|v| *v + 1);
    }
}

/// An allocation strategy that refuses any request larger than `limit` bytes and otherwise defers
/// to [`Global`].
#[derive(Debug, Clone, Copy)]
pub struct FailingAlloc {
    pub limit: usize,
}

impl RawAlloc for FailingAlloc {
    unsafe fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocFailure> {
        if layout.size() > self.limit {
            Err(AllocFailure { layout })
        } else {
            // SAFETY: The caller guarantees a non-zero layout size.
            unsafe { Global.allocate(layout) }
        }
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: Every pointer handed out by this strategy came from Global with the same layout.
        unsafe { Global.deallocate(ptr, layout) }
    }
}
