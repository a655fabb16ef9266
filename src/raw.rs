// This file is part of heap-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Raw, uninitialized storage for `T`.
//!
//! [`RawBuffer`] owns an allocation sized for `capacity` slots and nothing
//! more: it never constructs, reads or drops a `T`. Whatever lives in the
//! slots is the owner's business, and the owner must drop live values before
//! the buffer goes away (forgetting to do so leaks them, it does not corrupt
//! memory).

// Crate imports
use crate::error::Error;

// Alloc imports
use alloc::alloc::{alloc, dealloc, handle_alloc_error, Layout};

// Core imports
use core::{fmt, marker::PhantomData, mem, ptr::NonNull};

/// An owned, uninitialized heap allocation with room for `capacity` values of `T`.
///
/// - Capacity `0` never allocates, and neither does any capacity for a
///   zero-sized `T` (the requested capacity is still recorded).
/// - Ownership moves with the value; [`take`](RawBuffer::take) and
///   [`swap`](RawBuffer::swap) transfer it explicitly without touching the
///   slots.
/// - Dropping a `RawBuffer` releases the allocation only. No destructor of
///   `T` runs.
///
/// # Examples
///
/// ```rust
/// use heap_vec::RawBuffer;
///
/// let mut buf: RawBuffer<u32> = RawBuffer::with_capacity(4);
/// assert_eq!(buf.capacity(), 4);
///
/// unsafe {
///     buf.slot(0).write(7);
///     assert_eq!(buf.slot(0).read(), 7);
/// }
/// ```
pub struct RawBuffer<T> {
    ptr: NonNull<T>,
    capacity: usize,
    _marker: PhantomData<T>,
}

// Why an allocation attempt failed, before it is reported or escalated.
enum AllocFailure {
    Overflow,
    Exhausted(Layout),
}

impl From<AllocFailure> for Error {
    fn from(failure: AllocFailure) -> Self {
        match failure {
            AllocFailure::Overflow => Error::CapacityOverflow,
            AllocFailure::Exhausted(layout) => Error::AllocFailed {
                size: layout.size(),
                align: layout.align(),
            },
        }
    }
}

#[cold]
#[track_caller]
pub(crate) fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}

impl<T> RawBuffer<T> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    /// Creates an empty buffer. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            _marker: PhantomData,
        }
    }

    /// Allocates room for exactly `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics with `"capacity overflow"` if the byte size exceeds
    /// `isize::MAX`. Allocation failure aborts through
    /// [`handle_alloc_error`].
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::allocate(capacity) {
            Ok(buf) => buf,
            Err(AllocFailure::Overflow) => capacity_overflow(),
            Err(AllocFailure::Exhausted(layout)) => handle_alloc_error(layout),
        }
    }

    /// Fallible variant of [`with_capacity`](RawBuffer::with_capacity).
    ///
    /// Returns [`Error::CapacityOverflow`] or [`Error::AllocFailed`] instead
    /// of panicking or aborting.
    #[inline]
    pub fn try_with_capacity(capacity: usize) -> Result<Self, Error> {
        Self::allocate(capacity).map_err(Error::from)
    }

    fn allocate(capacity: usize) -> Result<Self, AllocFailure> {
        let layout = Layout::array::<T>(capacity).map_err(|_| AllocFailure::Overflow)?;
        if layout.size() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                capacity,
                _marker: PhantomData,
            });
        }

        // SAFETY: `layout` has a non-zero size.
        let raw = unsafe { alloc(layout) }.cast::<T>();
        let ptr = NonNull::new(raw).ok_or(AllocFailure::Exhausted(layout))?;
        Ok(Self {
            ptr,
            capacity,
            _marker: PhantomData,
        })
    }

    /// Number of slots this buffer can hold.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Pointer to slot `0`. Dangling (but aligned) when nothing is allocated.
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Mutable pointer to slot `0`. Dangling (but aligned) when nothing is allocated.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Returns the address of slot `index`.
    ///
    /// The slot may or may not hold a live value; this buffer does not know.
    ///
    /// # Safety
    ///
    /// `index` must be `<= capacity`. The one-past-the-end address may be
    /// computed but not read or written.
    #[inline]
    pub unsafe fn slot(&self, index: usize) -> *mut T {
        debug_assert!(
            index <= self.capacity,
            "slot {index} out of range for capacity {}",
            self.capacity
        );
        // SAFETY: the caller guarantees `index <= capacity`, so the offset stays
        // within (or one past) the allocation.
        unsafe { self.ptr.as_ptr().add(index) }
    }

    /// Moves the allocation out, leaving `self` empty (no allocation, capacity `0`).
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::new())
    }

    /// Exchanges allocations and capacities with `other`. Never allocates.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.ptr, &mut other.ptr);
        mem::swap(&mut self.capacity, &mut other.capacity);
    }
}

impl<T> Default for RawBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        if self.capacity == 0 || Self::IS_ZST {
            return;
        }
        // SAFETY: a non-empty buffer of a sized `T` was produced by `allocate`
        // with `Layout::array::<T>(capacity)`, which this layout reproduces
        // (that call succeeded, so the size cannot overflow).
        unsafe {
            let layout = Layout::from_size_align_unchecked(
                mem::size_of::<T>() * self.capacity,
                mem::align_of::<T>(),
            );
            dealloc(self.ptr.as_ptr().cast::<u8>(), layout);
        }
    }
}

impl<T> fmt::Debug for RawBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawBuffer")
            .field("ptr", &self.ptr)
            .field("capacity", &self.capacity)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::RawBuffer;
    use crate::Error;
    use alloc::string::String;
    use core::ptr::NonNull;

    #[test]
    fn test_new_and_zero_capacity_do_not_allocate() {
        let a: RawBuffer<u64> = RawBuffer::new();
        let b: RawBuffer<u64> = RawBuffer::with_capacity(0);
        assert_eq!(a.capacity(), 0);
        assert_eq!(b.capacity(), 0);
        assert_eq!(a.as_ptr(), NonNull::<u64>::dangling().as_ptr() as *const u64);
        assert_eq!(b.as_ptr(), a.as_ptr());
    }

    #[test]
    fn test_slots_are_addressable_and_distinct() {
        let buf: RawBuffer<u32> = RawBuffer::with_capacity(3);
        assert_eq!(buf.capacity(), 3);
        unsafe {
            for i in 0..3 {
                buf.slot(i).write(i as u32 * 10);
            }
            assert_eq!(buf.slot(1).offset_from(buf.slot(0)), 1);
            assert_eq!(buf.slot(2).read(), 20);
            // one-past-the-end address is allowed
            let _end = buf.slot(3);
        }
    }

    #[test]
    fn test_owner_drops_live_values_before_release() {
        let buf: RawBuffer<String> = RawBuffer::with_capacity(2);
        unsafe {
            buf.slot(0).write(String::from("left"));
            buf.slot(1).write(String::from("right"));
            assert_eq!(buf.slot(0).read(), "left");
            core::ptr::drop_in_place(buf.slot(1));
        }
        drop(buf);
    }

    #[test]
    fn test_take_leaves_source_empty() {
        let mut a: RawBuffer<u8> = RawBuffer::with_capacity(16);
        let ptr = a.as_ptr();
        let b = a.take();
        assert_eq!(a.capacity(), 0);
        assert_eq!(b.capacity(), 16);
        assert_eq!(b.as_ptr(), ptr);
    }

    #[test]
    fn test_swap_exchanges_storage() {
        let mut a: RawBuffer<u16> = RawBuffer::with_capacity(2);
        let mut b: RawBuffer<u16> = RawBuffer::with_capacity(5);
        let (pa, pb) = (a.as_ptr(), b.as_ptr());
        a.swap(&mut b);
        assert_eq!((a.capacity(), b.capacity()), (5, 2));
        assert_eq!((a.as_ptr(), b.as_ptr()), (pb, pa));
    }

    #[test]
    fn test_try_with_capacity_reports_overflow() {
        let err = RawBuffer::<u64>::try_with_capacity(usize::MAX).unwrap_err();
        assert_eq!(err, Error::CapacityOverflow);
        let ok = RawBuffer::<u64>::try_with_capacity(8).unwrap();
        assert_eq!(ok.capacity(), 8);
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn test_with_capacity_overflow_panics() {
        let _ = RawBuffer::<u32>::with_capacity(usize::MAX);
    }

    #[test]
    fn test_zero_sized_type_records_capacity() {
        let buf: RawBuffer<()> = RawBuffer::with_capacity(usize::MAX);
        assert_eq!(buf.capacity(), usize::MAX);
    }

    #[test]
    fn test_debug_shows_capacity() {
        use alloc::format;
        let buf: RawBuffer<u8> = RawBuffer::with_capacity(3);
        let dbg = format!("{buf:?}");
        assert!(dbg.contains("RawBuffer"));
        assert!(dbg.contains("capacity: 3"));
    }
}
