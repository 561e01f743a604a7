use std::alloc::Layout;
use std::cmp;
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::{self, NonNull};

use super::{Global, RawAlloc};
use crate::util::error::{CapacityOverflow, ReserveError};
use crate::util::result::ReserveResultExtension;

/// An owned, contiguous block of `cap` slots for values of type `T`, with allocation kept separate
/// from construction.
///
/// Storage never reads, drops or otherwise inspects its slots on its own. Every slot-level method
/// is `unsafe` and trusts the caller's bookkeeping about which slots are live. Dropping a Storage
/// releases the block without dropping any values; an owner holding live values must destroy them
/// first (see [`Storage::release`]).
///
/// Zero-sized requests (a capacity of 0 or a zero-sized `T`) never reach the allocator and are
/// represented by a dangling pointer.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `allocate` | `O(1)` |
/// | `construct_at` / `destroy_at` / `read_at` | `O(1)` |
/// | `shift` | `O(count)` |
/// | `reallocate` | `O(live)` |
/// | `release` | `O(live)` |
pub struct Storage<T, A: RawAlloc = Global> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) cap: usize,
    pub(crate) alloc: A,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Storage<T> {
    /// Creates a new Storage with capacity 0, using the [`Global`] strategy. Nothing is allocated.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::storage::Storage;
    /// let storage: Storage<u8> = Storage::new();
    /// assert_eq!(storage.cap(), 0);
    /// ```
    pub const fn new() -> Storage<T> {
        Storage::new_in(Global)
    }

    /// Allocates raw space for `cap` slots using the [`Global`] strategy. No values are
    /// constructed.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::storage::Storage;
    /// let storage: Storage<String> = Storage::allocate(8);
    /// assert_eq!(storage.cap(), 8);
    /// ```
    pub fn allocate(cap: usize) -> Storage<T> {
        Storage::allocate_in(cap, Global)
    }
}

impl<T, A: RawAlloc> Storage<T, A> {
    /// Creates a new Storage with capacity 0 that will allocate through `alloc`.
    pub const fn new_in(alloc: A) -> Storage<T, A> {
        Storage {
            ptr: NonNull::dangling(),
            cap: 0,
            alloc,
            _phantom: PhantomData,
        }
    }

    /// Allocates raw space for `cap` slots through `alloc`.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`].
    pub fn allocate_in(cap: usize, alloc: A) -> Storage<T, A> {
        Storage::try_allocate_in(cap, alloc).or_handle()
    }

    /// Allocates raw space for `cap` slots through `alloc`, returning an error instead of
    /// diverging.
    ///
    /// # Errors
    /// Returns [`ReserveError::CapacityOverflow`] if the layout would exceed [`isize::MAX`] bytes and
    /// [`ReserveError::AllocFailure`] if the strategy can't provide the memory.
    pub fn try_allocate_in(cap: usize, alloc: A) -> Result<Storage<T, A>, ReserveError> {
        let ptr = Storage::<T, A>::make_ptr(&alloc, cap)?;

        Ok(Storage {
            ptr,
            cap,
            alloc,
            _phantom: PhantomData,
        })
    }

    /// Returns the number of allocated slots.
    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Returns a raw pointer to the first slot. The pointer is dangling if nothing is allocated.
    pub const fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr().cast_const()
    }

    /// Returns a raw mutable pointer to the first slot.
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Returns a reference to the allocation strategy.
    pub const fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Moves `value` into the slot at `index`, returning a reference to it.
    ///
    /// # Safety
    /// `index` must be less than [`cap`](Storage::cap) and the slot must not hold a live value,
    /// otherwise that value is leaked.
    pub unsafe fn construct_at(&mut self, index: usize, value: T) -> &mut T {
        // SAFETY: The caller guarantees index < cap, so the offset stays inside the allocation.
        let slot = unsafe { self.ptr.add(index) };
        // SAFETY: The slot is valid for writes and properly aligned. Writing doesn't drop the
        // uninitialized contents.
        unsafe {
            slot.write(value);
            &mut *slot.as_ptr()
        }
    }

    /// Drops the value in the slot at `index` in place. The slot is uninitialized afterwards.
    ///
    /// # Safety
    /// `index` must be less than [`cap`](Storage::cap) and the slot must hold a live value.
    pub unsafe fn destroy_at(&mut self, index: usize) {
        // SAFETY: The caller guarantees that the slot is in bounds and initialized.
        unsafe { ptr::drop_in_place(self.ptr.add(index).as_ptr()) }
    }

    /// Moves the value out of the slot at `index`. The slot is logically uninitialized afterwards.
    ///
    /// # Safety
    /// `index` must be less than [`cap`](Storage::cap) and the slot must hold a live value, which
    /// must not be read or dropped again.
    pub unsafe fn read_at(&self, index: usize) -> T {
        // SAFETY: The caller guarantees that the slot is in bounds and initialized.
        unsafe { self.ptr.add(index).read() }
    }

    /// Drops the values in the slots `start..end` in place.
    ///
    /// # Safety
    /// `start <= end <= cap` must hold and every slot in the range must hold a live value.
    pub unsafe fn destroy_range(&mut self, start: usize, end: usize) {
        // SAFETY: The caller guarantees that the range is in bounds and initialized. Slices are
        // dropped element by element, continuing past a panicking element.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.ptr.add(start).as_ptr(),
                end - start,
            ));
        }
    }

    /// Relocates `count` values from the slots starting at `src` to the slots starting at `dst`.
    /// The two ranges may overlap. Source slots that aren't overwritten are logically
    /// uninitialized afterwards.
    ///
    /// # Safety
    /// Both `src + count` and `dst + count` must be at most [`cap`](Storage::cap) and every source
    /// slot must hold a live value. Live values in destination slots outside of the source range
    /// are overwritten without being dropped.
    pub unsafe fn shift(&mut self, src: usize, dst: usize, count: usize) {
        // SAFETY: The caller guarantees that both ranges are in bounds. ptr::copy handles overlap.
        unsafe {
            ptr::copy(
                self.ptr.add(src).as_ptr().cast_const(),
                self.ptr.add(dst).as_ptr(),
                count,
            );
        }
    }

    /// Moves the live values into a new block of `new_cap` slots, then releases the old block.
    ///
    /// If `new_cap` is smaller than `*live`, the values that don't fit are dropped and `*live` is
    /// clamped to `new_cap`. `*live` is updated before any of those values are dropped, so it is
    /// accurate even if a drop panics.
    ///
    /// # Errors
    /// The new block is allocated before anything else happens, so on error the Storage, its
    /// values and `*live` are all left untouched.
    ///
    /// # Safety
    /// `*live` must be at most [`cap`](Storage::cap) and the slots `0..*live` must hold live values.
    pub unsafe fn try_reallocate(
        &mut self,
        new_cap: usize,
        live: &mut usize,
    ) -> Result<(), ReserveError> {
        if new_cap == self.cap { return Ok(()); }

        let new_ptr = Storage::<T, A>::make_ptr(&self.alloc, new_cap)?;
        let old_live = *live;
        let kept = cmp::min(old_live, new_cap);

        // SAFETY: The new block has room for kept values and the old block holds at least kept
        // live values. The blocks are distinct allocations (or dangling for zero-sized layouts,
        // where the copy is a no-op).
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr().cast_const(), new_ptr.as_ptr(), kept);
        }

        let old = OldBlock {
            ptr: self.ptr,
            cap: self.cap,
            alloc: &self.alloc,
        };

        self.ptr = new_ptr;
        self.cap = new_cap;
        *live = kept;

        // SAFETY: The values in kept..old_live haven't been moved and are still live in the old
        // block. The old block is released when `old` goes out of scope, even on unwind.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                old.ptr.add(kept).as_ptr(),
                old_live - kept,
            ));
        }
        drop(old);

        Ok(())
    }

    /// Like [`try_reallocate`](Storage::try_reallocate), but diverges on failure.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`].
    ///
    /// # Safety
    /// See [`try_reallocate`](Storage::try_reallocate).
    pub unsafe fn reallocate(&mut self, new_cap: usize, live: &mut usize) {
        // SAFETY: The safety requirements are passed on to the caller.
        unsafe { self.try_reallocate(new_cap, live) }.or_handle()
    }

    /// Drops the first `live` values, releases the block and resets the capacity to 0.
    ///
    /// # Safety
    /// `live` must be at most [`cap`](Storage::cap) and the slots `0..live` must hold live values.
    pub unsafe fn release(&mut self, live: usize) {
        // Detach the block first so that a panicking drop can't lead to a double free.
        let old = OldBlock {
            ptr: self.ptr,
            cap: self.cap,
            alloc: &self.alloc,
        };

        self.ptr = NonNull::dangling();
        self.cap = 0;

        // SAFETY: The caller guarantees that 0..live are initialized. The block is released when
        // `old` goes out of scope, even on unwind.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(old.ptr.as_ptr(), live));
        }
        drop(old);
    }
}

impl<T, A: RawAlloc> Storage<T, A> {
    /// A helper function to create a [`Layout`] for `cap` slots of `T`.
    pub(crate) fn make_layout(cap: usize) -> Result<Layout, CapacityOverflow> {
        Layout::array::<T>(cap).map_err(|_| CapacityOverflow)
    }

    /// A helper function to allocate a block for `cap` slots. Returns a dangling pointer for a
    /// zero-sized layout.
    pub(crate) fn make_ptr(alloc: &A, cap: usize) -> Result<NonNull<T>, ReserveError> {
        let layout = Storage::<T, A>::make_layout(cap)?;

        if layout.size() == 0 {
            Ok(NonNull::dangling())
        } else {
            // SAFETY: Zero-sized layouts have been guarded against.
            Ok(unsafe { alloc.allocate(layout) }?.cast())
        }
    }
}

/// A detached block that is released through its strategy when dropped.
struct OldBlock<'a, T, A: RawAlloc> {
    ptr: NonNull<T>,
    cap: usize,
    alloc: &'a A,
}

impl<T, A: RawAlloc> Drop for OldBlock<'_, T, A> {
    fn drop(&mut self) {
        if let Ok(layout) = Storage::<T, A>::make_layout(self.cap) {
            if layout.size() != 0 {
                // SAFETY: ptr was allocated by alloc with this same layout, which was valid when
                // it was allocated. Zero-sized layouts were never allocated.
                unsafe { self.alloc.deallocate(self.ptr.cast(), layout) }
            }
        }
    }
}

impl<T> Default for Storage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, A: RawAlloc> Drop for Storage<T, A> {
    fn drop(&mut self) {
        // Only the block is released. Values are the owner's responsibility.
        drop(OldBlock {
            ptr: self.ptr,
            cap: self.cap,
            alloc: &self.alloc,
        });
    }
}

// SAFETY: Storage uniquely owns its block, so it can be sent when its values and strategy can.
unsafe impl<T: Send, A: RawAlloc + Send> Send for Storage<T, A> {}
// SAFETY: Storage's API requires &mut self for all mutation, so no interior mutability occurs.
unsafe impl<T: Sync, A: RawAlloc + Sync> Sync for Storage<T, A> {}

impl<T, A: RawAlloc + Debug> Debug for Storage<T, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Storage")
            .field("ptr", &self.ptr)
            .field("cap", &self.cap)
            .field("alloc", &self.alloc)
            .finish()
    }
}
