// This file is part of heap-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate import
use crate::vec::HeapVec;

// Core imports
use core::ptr;

/// Closes the hole left by rejected elements when dropped, including on unwind.
struct Hole<'a, T> {
    vec: &'a mut HeapVec<T>,
    processed: usize,
    deleted: usize,
    original_len: usize,
}

impl<T> Drop for Hole<'_, T> {
    fn drop(&mut self) {
        if self.deleted > 0 && self.processed < self.original_len {
            // SAFETY: `[processed..original_len)` is live and untouched; the
            // destination starts inside the hole and stays within capacity.
            unsafe {
                ptr::copy(
                    self.vec.buf.slot(self.processed),
                    self.vec.buf.slot(self.processed - self.deleted),
                    self.original_len - self.processed,
                );
            }
        }
        self.vec.len = self.original_len - self.deleted;
    }
}

impl<T> HeapVec<T> {
    /// Retains only the elements for which `f` returns `true`, preserving order.
    ///
    /// The predicate is applied to each element in order. If `f` panics, the
    /// element being tested and everything after it are kept, still in order.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        let original_len = self.len;
        // Hidden while the hole moves through them.
        self.len = 0;
        let mut hole = Hole {
            vec: self,
            processed: 0,
            deleted: 0,
            original_len,
        };
        while hole.processed < original_len {
            // SAFETY: `processed < original_len <= capacity`.
            let cur = unsafe { hole.vec.buf.slot(hole.processed) };
            // SAFETY: slot `processed` is live.
            if f(unsafe { &*cur }) {
                if hole.deleted > 0 {
                    // SAFETY: the destination slot was vacated and lies before `cur`.
                    unsafe {
                        ptr::copy_nonoverlapping(cur, hole.vec.buf.slot(hole.processed - hole.deleted), 1);
                    }
                }
                hole.processed += 1;
            } else {
                hole.processed += 1;
                hole.deleted += 1;
                // SAFETY: slot `cur` is live and now counted as part of the hole.
                unsafe { ptr::drop_in_place(cur) };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::testing::{expect_panic, values, Tracker};
    use crate::vec::HeapVec;

    #[test]
    fn test_retain_is_stable() {
        let mut v: HeapVec<i32> = HeapVec::from([1, 2, 3, 4, 5, 6]);
        v.retain(|x| x % 2 == 0);
        assert_eq!(v.as_slice(), &[2, 4, 6]);
    }

    #[test]
    fn test_retain_all_none_and_edges() {
        let mut v: HeapVec<i32> = HeapVec::from([1, 2, 3, 4]);
        v.retain(|_| true);
        assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
        v.retain(|x| *x == 1 || *x == 4);
        assert_eq!(v.as_slice(), &[1, 4]);
        v.retain(|_| false);
        assert!(v.is_empty());
    }

    #[test]
    fn test_retain_drops_rejected() {
        let tracker = Tracker::new();
        let mut v = HeapVec::new();
        for i in 0..6 {
            v.push(tracker.make(i));
        }
        v.retain(|x| x.value() >= 3);
        assert_eq!(values(&v), [3, 4, 5]);
        assert_eq!(tracker.dropped(), 3);
    }

    #[test]
    fn test_retain_panic_keeps_order() {
        let tracker = Tracker::new();
        let mut v = HeapVec::new();
        for i in 0..6 {
            v.push(tracker.make(i));
        }
        expect_panic(|| {
            v.retain(|x| {
                assert_ne!(x.value(), 3);
                x.value() % 2 == 0
            })
        });
        assert_eq!(values(&v), [0, 2, 3, 4, 5]);
        assert_eq!(tracker.live(), 5);
    }
}
