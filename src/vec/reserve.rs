// This file is part of heap-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    raw::{capacity_overflow, RawBuffer},
    vec::HeapVec,
};

impl<T> HeapVec<T> {
    /// Ensures `capacity() >= capacity`, growing to exactly `capacity` if needed.
    ///
    /// Unlike `Vec::reserve`, the argument is the total capacity, not an
    /// additional amount. The length and the values are unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the byte size of `capacity` elements exceeds `isize::MAX`.
    pub fn reserve(&mut self, capacity: usize) {
        if capacity <= self.capacity() {
            return;
        }
        self.relocate_into(RawBuffer::with_capacity(capacity));
    }

    /// Fallible variant of [`reserve`](HeapVec::reserve).
    ///
    /// On error the vector is unchanged.
    pub fn try_reserve(&mut self, capacity: usize) -> Result<(), Error> {
        if capacity <= self.capacity() {
            return Ok(());
        }
        self.relocate_into(RawBuffer::try_with_capacity(capacity)?);
        Ok(())
    }

    /// Like [`reserve`](HeapVec::reserve), but rebuilds the buffer by cloning
    /// instead of moving.
    ///
    /// The clones are built into a fresh buffer first. If a clone panics, the
    /// clones made so far are dropped and `self` is left exactly as it was.
    /// Only after every clone succeeded are the originals dropped.
    pub fn reserve_by_clone(&mut self, capacity: usize)
    where
        T: Clone,
    {
        if capacity <= self.capacity() {
            return;
        }
        let mut fresh = Self::with_capacity(capacity);
        for item in self.iter() {
            // SAFETY: `fresh` has `capacity > self.len` slots.
            unsafe {
                fresh.push_unchecked(item.clone());
            }
        }
        self.swap(&mut fresh);
    }

    /// Makes room for `additional` more elements, growing by at least the
    /// doubling policy so repeated bulk appends stay amortized `O(1)`.
    pub(super) fn reserve_for_append(&mut self, additional: usize) {
        let needed = self
            .len
            .checked_add(additional)
            .unwrap_or_else(|| capacity_overflow());
        if needed <= self.capacity() {
            return;
        }
        let grown = self.grown_capacity().unwrap_or(needed);
        self.reserve(needed.max(grown));
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::testing::{expect_panic, values, Tracker};
    use crate::vec::HeapVec;
    use crate::Error;

    #[test]
    fn test_reserve_is_exact_and_keeps_values() {
        let mut v: HeapVec<i32> = HeapVec::from([1, 2, 3]);
        v.reserve(10);
        assert_eq!(v.capacity(), 10);
        assert_eq!(v.as_slice(), &[1, 2, 3]);
        v.reserve(4); // smaller: no-op
        assert_eq!(v.capacity(), 10);
    }

    #[test]
    fn test_reserve_then_push_does_not_reallocate() {
        let mut v: HeapVec<u64> = HeapVec::new();
        v.reserve(16);
        let ptr = v.as_ptr();
        for i in 0..16 {
            v.push(i);
        }
        assert_eq!(v.as_ptr(), ptr);
        assert_eq!(v.capacity(), 16);
    }

    #[test]
    fn test_try_reserve_overflow_leaves_vec_unchanged() {
        let mut v: HeapVec<u32> = HeapVec::from([5, 6]);
        assert_eq!(v.try_reserve(usize::MAX), Err(Error::CapacityOverflow));
        assert_eq!(v.as_slice(), &[5, 6]);
        assert_eq!(v.capacity(), 2);
        assert_eq!(v.try_reserve(8), Ok(()));
        assert_eq!(v.capacity(), 8);
    }

    #[test]
    fn test_reserve_by_clone_success_drops_originals() {
        let tracker = Tracker::new();
        let mut v = HeapVec::new();
        for i in 0..3 {
            v.push(tracker.make(i));
        }
        v.reserve_by_clone(8);
        assert_eq!(v.capacity(), 8);
        assert_eq!(values(&v), [0, 1, 2]);
        assert_eq!(tracker.dropped(), 3);
        assert_eq!(tracker.live(), 3);
    }

    #[test]
    fn test_reserve_by_clone_panic_keeps_original() {
        let tracker = Tracker::new();
        let mut v = HeapVec::new();
        for i in 0..4 {
            v.push(tracker.make(i));
        }
        let ptr = v.as_ptr();
        tracker.fail_clone_after(2);
        expect_panic(|| v.reserve_by_clone(16));

        assert_eq!(v.as_ptr(), ptr);
        assert_eq!(v.capacity(), 4);
        assert_eq!(values(&v), [0, 1, 2, 3]);
        // the two clones that did succeed were dropped again
        assert_eq!(tracker.live(), 4);
    }

    #[test]
    fn test_reserve_for_append_uses_doubling_floor() {
        let mut v: HeapVec<u8> = HeapVec::from([1, 2, 3, 4]);
        v.reserve_for_append(1);
        assert_eq!(v.capacity(), 8);
        v.reserve_for_append(20);
        assert_eq!(v.capacity(), 24);
    }
}
