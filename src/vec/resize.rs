// This file is part of heap-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::HeapVec;

// Core imports
use core::{mem, ptr};

/// Drops the first `built` slots starting at `start` unless forgotten.
struct PartialTail<T> {
    start: *mut T,
    built: usize,
}

impl<T> Drop for PartialTail<T> {
    fn drop(&mut self) {
        // SAFETY: exactly `built` slots from `start` were written and are not
        // yet covered by `len`.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.start, self.built)) }
    }
}

impl<T> HeapVec<T> {
    /// Constructs a vector of `len` default values with capacity exactly `len`.
    ///
    /// If `T::default()` panics part-way, the values built so far are dropped
    /// and the buffer is released before the panic propagates.
    #[inline]
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        Self::with_len_with(len, T::default)
    }

    /// Constructs a vector of `len` values produced by `f`, with capacity
    /// exactly `len`.
    ///
    /// Same rollback on panic as [`with_len`](HeapVec::with_len).
    pub fn with_len_with<F: FnMut() -> T>(len: usize, f: F) -> Self {
        let mut v = Self::with_capacity(len);
        v.resize_with(len, f);
        v
    }

    /// Resizes to `new_len`, filling new slots with `T::default()`.
    ///
    /// See [`resize_with`](HeapVec::resize_with).
    #[inline]
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default)
    }

    /// Resizes to `new_len`.
    ///
    /// - Shrinking drops the elements in `[new_len..len)`; capacity is kept.
    /// - Growing first reserves exactly `new_len` if the capacity is short,
    ///   then fills `[len..new_len)` with values from `f`.
    ///
    /// `len` is set only once every new value exists. If `f` panics, the
    /// values built by this call are dropped and the length is unchanged (the
    /// capacity reserved up front is kept).
    pub fn resize_with<F: FnMut() -> T>(&mut self, new_len: usize, mut f: F) {
        if new_len <= self.len {
            self.truncate(new_len);
            return;
        }
        self.reserve(new_len);
        // SAFETY: `len < new_len <= capacity` after the reserve above.
        unsafe { self.construct_tail(new_len, |_| f()) }
    }

    /// Writes `f(0), f(1), ..` into `[len..new_len)`, then sets `len = new_len`.
    ///
    /// A panic in `f` drops the values this call wrote and leaves `len` as it
    /// was.
    ///
    /// # Safety
    ///
    /// `len <= new_len <= capacity`.
    pub(super) unsafe fn construct_tail<F: FnMut(usize) -> T>(&mut self, new_len: usize, mut f: F) {
        debug_assert!(self.len <= new_len && new_len <= self.capacity());
        let count = new_len - self.len;
        // SAFETY: `len <= capacity`.
        let start = unsafe { self.buf.slot(self.len) };
        let mut guard = PartialTail { start, built: 0 };
        while guard.built < count {
            let value = f(guard.built);
            // SAFETY: `len + built < new_len <= capacity` and the slot is
            // uninitialized.
            unsafe { start.add(guard.built).write(value) };
            guard.built += 1;
        }
        mem::forget(guard);
        self.len = new_len;
    }

    /// Drops the elements in `[new_len..len)`. No-op if `new_len >= len`.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        // SAFETY: `new_len < len <= capacity`.
        let start = unsafe { self.buf.slot(new_len) };
        let tail = ptr::slice_from_raw_parts_mut(start, self.len - new_len);
        // Shorten first: a panicking destructor must not leave dropped
        // values inside `[0..len)`.
        self.len = new_len;
        // SAFETY: `tail` covers exactly the previously live `[new_len..old_len)`.
        unsafe { ptr::drop_in_place(tail) }
    }

    /// Drops every element. The capacity is kept.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }
}
