// This file is part of heap-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::HeapVec;

// Core imports
use core::ptr;

impl<T> Drop for HeapVec<T> {
    fn drop(&mut self) {
        // SAFETY: `[0..len)` holds live values by invariant. Dropping them as
        // one slice keeps going past a panicking destructor; the buffer field
        // is released afterwards either way.
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
    }
}
