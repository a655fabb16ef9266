// This file is part of heap-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::HeapVec;

impl<T: Clone> Clone for HeapVec<T> {
    /// Clones into a new vector whose capacity equals `self.len()`.
    ///
    /// If an element's `clone` panics, the clones made so far are dropped and
    /// the new buffer is released.
    fn clone(&self) -> Self {
        let mut out = Self::with_capacity(self.len);
        for item in self.iter() {
            // SAFETY: `out` has exactly `self.len` slots.
            unsafe {
                out.push_unchecked(item.clone());
            }
        }
        out
    }

    /// Makes `self` a copy of `source`.
    ///
    /// - If `source.len() > self.capacity()`, a complete clone of `source` is
    ///   built first and swapped in; a panicking clone leaves `self` exactly
    ///   as it was, values and capacity alike.
    /// - Otherwise the overlapping prefix is assigned with
    ///   [`Clone::clone_from`], then either the surplus tail is dropped or the
    ///   remaining elements of `source` are cloned into the spare slots. The
    ///   capacity is kept. The length moves to `source.len()` only after every
    ///   tail clone succeeds; a panic there drops the tail clones made so far.
    fn clone_from(&mut self, source: &Self) {
        if source.len > self.capacity() {
            let mut fresh = source.clone();
            self.swap(&mut fresh);
            return;
        }

        let common = self.len.min(source.len);
        for (dst, src) in self.as_mut_slice()[..common]
            .iter_mut()
            .zip(&source.as_slice()[..common])
        {
            dst.clone_from(src);
        }

        if source.len < self.len {
            self.truncate(source.len);
        } else {
            let tail = &source.as_slice()[common..];
            // SAFETY: `len == common <= source.len <= capacity`.
            unsafe { self.construct_tail(source.len, |k| tail[k].clone()) }
        }
    }
}
