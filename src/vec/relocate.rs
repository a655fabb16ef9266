// This file is part of heap-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Relocation picks the move path for every `T`: a Rust move is a bitwise copy
// that cannot fail, so there is no type for which moving could leave a
// half-migrated buffer behind. The clone-based path only exists as the
// explicit `reserve_by_clone`.

// Crate imports
use crate::{error::Error, raw::RawBuffer, vec::HeapVec};

// Core imports
use core::{mem, ptr};

/// Moves `count` live values from `src` to `dst`.
///
/// Afterwards the source slots are logically uninitialized; nothing is dropped.
///
/// # Safety
///
/// `src` must point at `count` live values, `dst` at `count` writable slots,
/// and the two ranges must not overlap.
#[inline]
unsafe fn relocate<T>(src: *const T, dst: *mut T, count: usize) {
    // SAFETY: upheld by the caller.
    unsafe { ptr::copy_nonoverlapping(src, dst, count) }
}

impl<T> HeapVec<T> {
    /// Capacity to grow to when appending to a full vector: `max(1, 2 * capacity)`.
    pub(super) fn grown_capacity(&self) -> Result<usize, Error> {
        match self.buf.capacity() {
            0 => Ok(1),
            capacity => capacity.checked_mul(2).ok_or(Error::CapacityOverflow),
        }
    }

    /// Moves every live value into `new_buf` and makes it the storage.
    pub(super) fn relocate_into(&mut self, new_buf: RawBuffer<T>) {
        debug_assert!(new_buf.capacity() >= self.len);
        // SAFETY: `[0..len)` is live in the old buffer and `new_buf` is a
        // distinct allocation with at least `len` slots.
        unsafe { relocate(self.buf.as_ptr(), new_buf.slot(0), self.len) }
        self.install(new_buf);
    }

    /// Writes `value` into slot `index` of `new_buf`, moves the live values
    /// around it (`[0..index)` in front, `[index..len)` one slot further
    /// along) and makes `new_buf` the storage with `len + 1` elements.
    pub(super) fn relocate_around(&mut self, new_buf: RawBuffer<T>, index: usize, value: T) {
        let len = self.len;
        debug_assert!(index <= len && len < new_buf.capacity());
        // SAFETY: `new_buf` is a fresh allocation with more than `len` slots,
        // so slot `index` and the two destination ranges are in bounds and
        // disjoint from the old buffer. Nothing here can panic, so no value
        // is ever owned twice.
        unsafe {
            new_buf.slot(index).write(value);
            relocate(self.buf.as_ptr(), new_buf.slot(0), index);
            relocate(self.buf.slot(index), new_buf.slot(index + 1), len - index);
        }
        self.install(new_buf);
        self.len = len + 1;
    }

    // Replaces the buffer. The old one holds no live values any more and is
    // released without dropping anything.
    fn install(&mut self, new_buf: RawBuffer<T>) {
        #[cfg(feature = "log")]
        log::trace!(
            "reallocating {} -> {} slots ({} live)",
            self.buf.capacity(),
            new_buf.capacity(),
            self.len
        );
        drop(mem::replace(&mut self.buf, new_buf));
    }
}
