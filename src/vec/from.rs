// This file is part of heap-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate import
use crate::vec::HeapVec;

impl<T, const M: usize> From<[T; M]> for HeapVec<T> {
    fn from(src: [T; M]) -> Self {
        let mut v = Self::with_capacity(M);
        for item in src {
            // SAFETY: capacity is exactly `M`.
            unsafe {
                v.push_unchecked(item);
            }
        }
        v
    }
}

impl<T: Clone> From<&[T]> for HeapVec<T> {
    fn from(src: &[T]) -> Self {
        let mut v = Self::with_capacity(src.len());
        v.extend_from_slice(src);
        v
    }
}

impl<T: Clone, const M: usize> From<&[T; M]> for HeapVec<T> {
    fn from(src: &[T; M]) -> Self {
        Self::from(&src[..])
    }
}
