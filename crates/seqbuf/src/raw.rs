//! Raw element storage and in-place lifecycle primitives.
//!
//! [`RawBuffer`] owns an uninitialised block sized for `capacity` elements
//! and knows nothing about which slots are live. Callers track that
//! themselves and uphold the contracts on each `unsafe fn`.
//!
//! Relocation always constructs at the destination before the source slot
//! is treated as dead. Element types without drop glue take a block-copy
//! path; everything else is moved one slot at a time in the order each
//! operation documents. The choice is made per `T` at compile time.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem;
use std::ptr::{self, NonNull};
use std::slice;

use crate::error::SequenceError;

/// An exclusively owned, uninitialised block of `capacity` slots of `T`.
///
/// Dropping the buffer frees the block but never drops elements in it.
pub(crate) struct RawBuffer<T> {
    ptr: NonNull<T>,
    capacity: usize,
    _owns: PhantomData<T>,
}

// SAFETY: the buffer owns its block exclusively, exactly like `Box<[T]>`.
unsafe impl<T: Send> Send for RawBuffer<T> {}
// SAFETY: shared access only hands out `&T`.
unsafe impl<T: Sync> Sync for RawBuffer<T> {}

impl<T> RawBuffer<T> {
    /// A buffer that owns no block. Used for the moved-from state.
    pub(crate) const fn empty() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            _owns: PhantomData,
        }
    }

    /// Allocate an uninitialised block for `capacity` elements.
    ///
    /// Zero-sized layouts (zero-sized `T`) get a dangling pointer and are
    /// never passed to the allocator.
    pub(crate) fn allocate(capacity: usize) -> Result<Self, SequenceError> {
        let layout = Layout::array::<T>(capacity).map_err(|_| out_of_memory::<T>(capacity))?;

        #[cfg(test)]
        if failpoint::should_fail() {
            return Err(out_of_memory::<T>(capacity));
        }

        if layout.size() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                capacity,
                _owns: PhantomData,
            });
        }

        // SAFETY: `layout` has a non-zero size.
        let raw = unsafe { alloc::alloc(layout) }.cast::<T>();
        let ptr = NonNull::new(raw).ok_or_else(|| {
            log::debug!(
                "allocation of {} bytes for {capacity} slots failed",
                layout.size()
            );
            out_of_memory::<T>(capacity)
        })?;

        Ok(Self {
            ptr,
            capacity,
            _owns: PhantomData,
        })
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    fn slot(&self, index: usize) -> *mut T {
        debug_assert!(index <= self.capacity);
        // SAFETY: `index <= capacity`, so the offset stays within (or one
        // past) the allocated block.
        unsafe { self.ptr.as_ptr().add(index) }
    }

    /// Construct `value` in place at `index`.
    ///
    /// # Safety
    ///
    /// `index < capacity` and the slot must not hold a live element
    /// (a live element there would be leaked).
    pub(crate) unsafe fn write(&mut self, index: usize, value: T) {
        debug_assert!(index < self.capacity);
        // SAFETY: caller guarantees the slot is in bounds and vacant.
        unsafe { self.slot(index).write(value) }
    }

    /// Move the element out of `index`, leaving the slot vacant.
    ///
    /// # Safety
    ///
    /// The slot at `index` must hold a live element. The caller must treat
    /// it as vacant afterwards.
    pub(crate) unsafe fn read(&mut self, index: usize) -> T {
        debug_assert!(index < self.capacity);
        // SAFETY: caller guarantees the slot is live.
        unsafe { self.slot(index).read() }
    }

    /// Drop the live elements in `[start, end)` in place.
    ///
    /// # Safety
    ///
    /// Every slot in the range must be live; all become vacant.
    pub(crate) unsafe fn destruct_range(&mut self, start: usize, end: usize) {
        debug_assert!(start <= end && end <= self.capacity);
        let live = ptr::slice_from_raw_parts_mut(self.slot(start), end - start);
        // SAFETY: caller guarantees every slot in the range is live.
        unsafe { ptr::drop_in_place(live) }
    }

    /// View the first `len` slots as a slice.
    ///
    /// # Safety
    ///
    /// Slots `[0, len)` must all be live.
    pub(crate) unsafe fn as_slice(&self, len: usize) -> &[T] {
        debug_assert!(len <= self.capacity);
        // SAFETY: the pointer is non-null and aligned, and the caller
        // guarantees `len` initialised elements.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), len) }
    }

    /// Mutable view of the first `len` slots.
    ///
    /// # Safety
    ///
    /// Slots `[0, len)` must all be live.
    pub(crate) unsafe fn as_mut_slice(&mut self, len: usize) -> &mut [T] {
        debug_assert!(len <= self.capacity);
        // SAFETY: as for `as_slice`, plus `&mut self` gives exclusivity.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), len) }
    }

    /// Shift the live elements `[index, len)` one slot to the right.
    ///
    /// Processes from `len - 1` down to `index`, so each destination is
    /// either the vacant slot at `len` or a slot whose element has
    /// already moved. Slot `index` is vacant afterwards.
    ///
    /// # Safety
    ///
    /// `index <= len < capacity`, slots `[index, len)` live and slot `len`
    /// vacant.
    pub(crate) unsafe fn shift_right(&mut self, index: usize, len: usize) {
        debug_assert!(index <= len && len < self.capacity);
        if !mem::needs_drop::<T>() {
            // SAFETY: both ranges lie within the block; `ptr::copy`
            // handles the overlap.
            unsafe { ptr::copy(self.slot(index), self.slot(index + 1), len - index) };
            return;
        }
        for i in (index..len).rev() {
            // SAFETY: slot `i` is live and slot `i + 1` was vacated by the
            // previous iteration (or is the vacant slot at `len`).
            unsafe { relocate(self.slot(i), self.slot(i + 1)) };
        }
    }

    /// Shift the live elements `(index, len)` one slot to the left.
    ///
    /// Processes from `index + 1` upward; each destination was vacated
    /// immediately before. Slot `len - 1` is vacant afterwards.
    ///
    /// # Safety
    ///
    /// `index < len <= capacity`, slot `index` vacant and slots
    /// `(index, len)` live.
    pub(crate) unsafe fn shift_left(&mut self, index: usize, len: usize) {
        debug_assert!(index < len && len <= self.capacity);
        if !mem::needs_drop::<T>() {
            // SAFETY: both ranges lie within the block; `ptr::copy`
            // handles the overlap.
            unsafe { ptr::copy(self.slot(index + 1), self.slot(index), len - index - 1) };
            return;
        }
        for i in index + 1..len {
            // SAFETY: slot `i` is live and slot `i - 1` is vacant.
            unsafe { relocate(self.slot(i), self.slot(i - 1)) };
        }
    }

    /// Relocate the first `len` live elements into `dst`, ascending.
    ///
    /// All of `self`'s slots are vacant afterwards.
    ///
    /// # Safety
    ///
    /// Slots `[0, len)` of `self` live, `len <= dst.capacity`, and slots
    /// `[0, len)` of `dst` vacant.
    pub(crate) unsafe fn relocate_into(&mut self, dst: &mut RawBuffer<T>, len: usize) {
        debug_assert!(len <= self.capacity && len <= dst.capacity);
        if !mem::needs_drop::<T>() {
            // SAFETY: distinct allocations never overlap.
            unsafe { ptr::copy_nonoverlapping(self.slot(0), dst.slot(0), len) };
            return;
        }
        for i in 0..len {
            // SAFETY: source slot live, destination slot vacant.
            unsafe { relocate(self.slot(i), dst.slot(i)) };
        }
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        if self.capacity == 0 {
            return;
        }
        let Ok(layout) = Layout::array::<T>(self.capacity) else {
            return;
        };
        if layout.size() == 0 {
            return;
        }
        // SAFETY: the block was allocated by `allocate` with this exact
        // layout and is freed only here.
        unsafe { alloc::dealloc(self.ptr.as_ptr().cast::<u8>(), layout) }
    }
}

/// Construct at `dst` from `src`; `src` is dead afterwards.
///
/// # Safety
///
/// `src` live, `dst` vacant, both valid and distinct.
unsafe fn relocate<T>(src: *mut T, dst: *mut T) {
    // SAFETY: forwarded from the caller.
    unsafe { dst.write(src.read()) }
}

pub(crate) fn out_of_memory<T>(capacity: usize) -> SequenceError {
    SequenceError::OutOfMemory {
        requested_capacity: capacity,
        element_size: mem::size_of::<T>(),
    }
}

/// Report an allocation failure the way standard collections do.
pub(crate) fn handle_alloc_failure<T>(capacity: usize) -> ! {
    match Layout::array::<T>(capacity) {
        Ok(layout) if layout.size() > 0 => alloc::handle_alloc_error(layout),
        _ => panic!("capacity overflow: {capacity} slots"),
    }
}

/// Test-only allocation failure injection.
#[cfg(test)]
pub(crate) mod failpoint {
    use std::cell::Cell;

    thread_local! {
        static FAIL_NEXT: Cell<bool> = const { Cell::new(false) };
    }

    /// Make the next `RawBuffer::allocate` on this thread fail.
    pub(crate) fn fail_next_allocation() {
        FAIL_NEXT.with(|f| f.set(true));
    }

    pub(super) fn should_fail() -> bool {
        FAIL_NEXT.with(|f| f.replace(false))
    }
}
