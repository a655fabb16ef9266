// This file is part of heap-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::HeapVec;

impl<T> Extend<T> for HeapVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve_for_append(lower);
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for HeapVec<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for HeapVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}

impl<T: Clone> HeapVec<T> {
    /// Appends clones of every element of `src`, in order.
    ///
    /// Reserves once up front. If a clone panics, the clones appended so far
    /// stay in the vector.
    pub fn extend_from_slice(&mut self, src: &[T]) {
        self.reserve_for_append(src.len());
        for item in src {
            // SAFETY: the reserve above made room for all of `src`.
            unsafe {
                self.push_unchecked(item.clone());
            }
        }
    }
}
