// This file is part of heap-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`HeapVec`](crate::HeapVec).
//!
//! `Index` and `IndexMut` forward to the live prefix `[0..len)` as a slice,
//! so every index and range form that works on `[T]` works here, and panics
//! the same way on out-of-bounds access.

// Crate imports
use crate::vec::HeapVec;

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T, I: SliceIndex<[T]>> Index<I> for HeapVec<T> {
    type Output = I::Output;
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for HeapVec<T> {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}
