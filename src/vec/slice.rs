// This file is part of heap-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::HeapVec;

impl<T> HeapVec<T> {
    /// Views the live elements `[0..len)` as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: By invariant, `buf[..len]` is initialized and `len <= capacity`.
        // The pointer is non-null and aligned even when nothing is allocated.
        unsafe { core::slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    /// Views the live elements `[0..len)` as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`; `&mut self` gives exclusive access.
        unsafe { core::slice::from_raw_parts_mut(self.buf.as_mut_ptr(), self.len) }
    }

    /// Returns a raw pointer to slot `0` of the buffer.
    ///
    /// Only the first `len` slots hold live values. The pointer is
    /// invalidated by any operation that reallocates.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Returns a mutable raw pointer to slot `0` of the buffer.
    ///
    /// Only the first `len` slots hold live values. Writing beyond `len` does
    /// not change `len`.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }

    /// Returns a reference to element `i` without bounds checking.
    ///
    /// # Safety
    ///
    /// `i` must be `< len`.
    #[inline]
    pub unsafe fn get_unchecked(&self, i: usize) -> &T {
        debug_assert!(i < self.len);
        // SAFETY: the caller guarantees `i < len`, so the slot is live.
        unsafe { &*self.buf.slot(i) }
    }

    /// Returns a mutable reference to element `i` without bounds checking.
    ///
    /// # Safety
    ///
    /// `i` must be `< len`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, i: usize) -> &mut T {
        debug_assert!(i < self.len);
        // SAFETY: the caller guarantees `i < len`; `&mut self` is exclusive.
        unsafe { &mut *self.buf.slot(i) }
    }
}
