// This file is part of heap-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    raw::{capacity_overflow, RawBuffer},
    vec::HeapVec,
};

// Core imports
use core::ptr;

impl<T> HeapVec<T> {
    /// Inserts `value` at `index`, shifting `[index..len)` one slot right.
    /// Returns `index`, the position of the new element.
    ///
    /// `index == len` appends.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`, or if growing overflows the capacity.
    #[inline]
    pub fn insert(&mut self, index: usize, value: T) -> usize {
        self.emplace_with(index, || value)
    }

    /// Constructs a new element with `f` and inserts it at `index`.
    /// Returns `index`, the position of the new element.
    ///
    /// `f` runs before any element moves or any allocation happens, so a
    /// panic in `f` leaves the vector untouched.
    ///
    /// - With spare capacity, `[index..len)` shifts one slot right in place
    ///   and the new value fills the vacated slot.
    /// - A full vector grows to `max(1, 2 * capacity)`: the new value is
    ///   written into its final slot of the new buffer, then the elements
    ///   before and after it are moved across.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`, or if growing overflows the capacity.
    pub fn emplace_with<F: FnOnce() -> T>(&mut self, index: usize, f: F) -> usize {
        let len = self.len;
        if index > len {
            panic!("insertion index (is {index}) should be <= len (is {len})");
        }
        if index == len {
            self.emplace_back_with(f);
            return index;
        }

        let value = f();
        if len == self.capacity() {
            let capacity = self
                .grown_capacity()
                .unwrap_or_else(|_| capacity_overflow());
            self.relocate_around(RawBuffer::with_capacity(capacity), index, value);
            return index;
        }

        // SAFETY: `index < len < capacity`, so `[index..len)` is live and the
        // shifted range `[index + 1..len + 1)` is in bounds. After the shift
        // slot `index` holds a bitwise duplicate that is overwritten without
        // being dropped. Nothing in between can panic.
        unsafe {
            let at = self.buf.slot(index);
            ptr::copy(at, at.add(1), len - index);
            at.write(value);
        }
        self.len = len + 1;
        index
    }
}
