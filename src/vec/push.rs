// This file is part of heap-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    raw::{capacity_overflow, RawBuffer},
    vec::HeapVec,
};

impl<T> HeapVec<T> {
    /// Appends `value` and returns a reference to it in its final slot.
    ///
    /// A full vector first grows to `max(1, 2 * capacity)`; `value` is written
    /// straight into the new buffer and the existing elements are moved
    /// around it.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows.
    pub fn push(&mut self, value: T) -> &mut T {
        if self.len < self.capacity() {
            // SAFETY: `len < capacity`.
            return unsafe { self.push_unchecked(value) };
        }
        let capacity = self
            .grown_capacity()
            .unwrap_or_else(|_| capacity_overflow());
        let index = self.len;
        self.relocate_around(RawBuffer::with_capacity(capacity), index, value);
        // SAFETY: `relocate_around` wrote slot `index` and bumped `len` past it.
        unsafe { self.get_unchecked_mut(index) }
    }

    /// Constructs a new element with `f` and appends it.
    ///
    /// `f` runs before anything is allocated or moved, so if it panics the
    /// vector is untouched.
    #[inline]
    pub fn emplace_back_with<F: FnOnce() -> T>(&mut self, f: F) -> &mut T {
        let value = f();
        self.push(value)
    }

    /// Fallible variant of [`push`](HeapVec::push).
    ///
    /// If growing fails, `value` is dropped, the error is returned and the
    /// vector is unchanged.
    pub fn try_push(&mut self, value: T) -> Result<&mut T, Error> {
        if self.len < self.capacity() {
            // SAFETY: `len < capacity`.
            return Ok(unsafe { self.push_unchecked(value) });
        }
        let new_buf = RawBuffer::try_with_capacity(self.grown_capacity()?)?;
        let index = self.len;
        self.relocate_around(new_buf, index, value);
        // SAFETY: `relocate_around` wrote slot `index` and bumped `len` past it.
        Ok(unsafe { self.get_unchecked_mut(index) })
    }

    /// Writes `value` into slot `len` and bumps the length.
    ///
    /// # Safety
    ///
    /// `len < capacity` must hold.
    #[inline]
    pub(crate) unsafe fn push_unchecked(&mut self, value: T) -> &mut T {
        debug_assert!(self.len < self.capacity());
        // SAFETY: the caller guarantees slot `len` exists and it is not live.
        unsafe {
            let slot = self.buf.slot(self.len);
            slot.write(value);
            self.len += 1;
            &mut *slot
        }
    }
}
