// This file is part of heap-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{raw::RawBuffer, vec::HeapVec};

// Core imports
use core::mem;

impl<T> HeapVec<T> {
    /// Constructs an empty vector. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: RawBuffer::new(),
            len: 0,
        }
    }

    /// Constructs an empty vector with room for exactly `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if the byte size of `capacity` elements exceeds `isize::MAX`.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: RawBuffer::with_capacity(capacity),
            len: 0,
        }
    }

    /// Moves the contents out in `O(1)`, leaving `self` empty with no allocation.
    ///
    /// Equivalent to `core::mem::take(self)`.
    #[inline]
    pub fn take(&mut self) -> Self {
        Self {
            buf: self.buf.take(),
            len: mem::replace(&mut self.len, 0),
        }
    }

    /// Exchanges buffers and lengths with `other`. Never allocates.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        self.buf.swap(&mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
    }
}

impl<T> Default for HeapVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::vec::HeapVec;

    #[test]
    fn test_with_capacity_is_exact_and_empty() {
        let v: HeapVec<u64> = HeapVec::with_capacity(5);
        assert_eq!(v.capacity(), 5);
        assert!(v.is_empty());
    }

    #[test]
    fn test_take_moves_storage_and_empties_source() {
        let mut a: HeapVec<i32> = HeapVec::from([1, 2, 3]);
        let ptr = a.as_ptr();
        let b = a.take();
        assert_eq!(b.as_slice(), &[1, 2, 3]);
        assert_eq!(b.as_ptr(), ptr);
        assert_eq!((a.len(), a.capacity()), (0, 0));

        let c = core::mem::take(&mut HeapVec::from([9]));
        assert_eq!(c.as_slice(), &[9]);
    }

    #[test]
    fn test_swap_exchanges_contents() {
        let mut a: HeapVec<i32> = HeapVec::from([1, 2]);
        let mut b: HeapVec<i32> = HeapVec::with_capacity(7);
        b.push(3);
        a.swap(&mut b);
        assert_eq!((a.as_slice(), a.capacity()), (&[3][..], 7));
        assert_eq!((b.as_slice(), b.capacity()), (&[1, 2][..], 2));
    }
}
