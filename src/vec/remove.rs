// This file is part of heap-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::HeapVec;

// Core imports
use core::ptr;

impl<T> HeapVec<T> {
    /// Drops the element at `index`, shifting `[index + 1..len)` one slot left.
    ///
    /// Returns `index`, which now names the element that followed the removed
    /// one (or `len` if it was the last).
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[inline]
    pub fn erase(&mut self, index: usize) -> usize {
        drop(self.remove(index));
        index
    }

    /// Removes and returns the element at `index`, shifting `[index + 1..len)`
    /// one slot left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> T {
        let len = self.len;
        if index >= len {
            panic!("removal index (is {index}) should be < len (is {len})");
        }
        // SAFETY: `index < len`, so slot `index` is live. After reading it out
        // the tail moves down over it (overlapping, hence `copy`), and the
        // length shrinks so the stale last slot is no longer live.
        unsafe {
            let at = self.buf.slot(index);
            let out = at.read();
            ptr::copy(at.add(1), at, len - index - 1);
            self.len = len - 1;
            out
        }
    }

    /// Removes and returns the element at `index`, moving the last element
    /// into its place. `O(1)`, does not preserve order.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn swap_remove(&mut self, index: usize) -> T {
        let len = self.len;
        if index >= len {
            panic!("swap_remove index (is {index}) should be < len (is {len})");
        }
        self.as_mut_slice().swap(index, len - 1);
        self.len = len - 1;
        // SAFETY: slot `len - 1` was live and now lies outside `[0..len)`.
        unsafe { self.buf.slot(len - 1).read() }
    }
}
