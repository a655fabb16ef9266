// This file is part of heap-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`HeapVec`](crate::HeapVec).
//!
//! - `IntoIter<T>` takes over the vector's buffer and yields by value. It
//!   supports `DoubleEndedIterator`, `ExactSizeIterator` and `FusedIterator`,
//!   and drops whatever was not yielded.
//! - `&HeapVec` and `&mut HeapVec` iterate as slices.

// Crate imports
use crate::{raw::RawBuffer, vec::HeapVec};

// Core imports
use core::{fmt, iter::FusedIterator, mem, ptr};

/// Owned iterator returned by `HeapVec::into_iter()`.
///
/// Yields elements by value from front to back (or back to front). The slots
/// in `[front..back)` are the ones still live.
pub struct IntoIter<T> {
    buf: RawBuffer<T>,
    front: usize,
    back: usize, // exclusive
}

impl<T> IntoIter<T> {
    /// The elements not yet yielded, as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[front..back)` is live and within the buffer.
        unsafe { core::slice::from_raw_parts(self.buf.slot(self.front), self.back - self.front) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: slot `i` was live and is now outside `[front..back)`.
            Some(unsafe { self.buf.slot(i).read() })
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
    fn nth(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        let skip = n.min(rem);
        // SAFETY: `front <= back <= capacity`.
        let start = unsafe { self.buf.slot(self.front) };
        let skipped = ptr::slice_from_raw_parts_mut(start, skip);
        self.front += skip;
        // SAFETY: the skipped slots were live and are no longer in `[front..back)`.
        unsafe { ptr::drop_in_place(skipped) };
        self.next()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: slot `back` was live and is now outside `[front..back)`.
            Some(unsafe { self.buf.slot(self.back).read() })
        } else {
            None
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // SAFETY: `front <= back <= capacity`.
        let start = unsafe { self.buf.slot(self.front) };
        let rest = ptr::slice_from_raw_parts_mut(start, self.back - self.front);
        self.front = self.back;
        // SAFETY: `rest` is exactly the live range; `buf` is released after.
        unsafe { ptr::drop_in_place(rest) }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<'a, T> IntoIterator for &'a HeapVec<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T> IntoIterator for &'a mut HeapVec<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T> IntoIterator for HeapVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(mut self) -> Self::IntoIter {
        // The emptied vector is dropped on return and owns nothing.
        let back = mem::replace(&mut self.len, 0);
        IntoIter {
            buf: self.buf.take(),
            front: 0,
            back,
        }
    }
}
