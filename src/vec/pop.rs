// This file is part of heap-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::HeapVec;

impl<T> HeapVec<T> {
    /// Removes the last element and returns it, or `None` if empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            // SAFETY: before decrementing, slot `len` was the last live slot.
            // It is now outside `[0..len)` and will not be read again.
            Some(unsafe { self.buf.slot(self.len).read() })
        }
    }

    /// Drops the last element in place. No-op when empty.
    #[inline]
    pub fn pop_back(&mut self) {
        if self.len > 0 {
            self.truncate(self.len - 1);
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::testing::Tracker;
    use crate::vec::HeapVec;

    #[test]
    fn test_pop_returns_in_reverse_order() {
        let mut v: HeapVec<i32> = HeapVec::from([1, 2]);
        assert_eq!(v.pop(), Some(2));
        assert_eq!(v.pop(), Some(1));
        assert_eq!(v.pop(), None);
        assert_eq!(v.capacity(), 2);
    }

    #[test]
    fn test_pop_back_drops_last() {
        let tracker = Tracker::new();
        let mut v = HeapVec::new();
        v.push(tracker.make(1));
        v.push(tracker.make(2));
        v.pop_back();
        assert_eq!(tracker.dropped(), 1);
        assert_eq!(v.len(), 1);
        v.pop_back();
        v.pop_back();
        assert!(v.is_empty());
        assert_eq!(tracker.live(), 0);
    }
}
