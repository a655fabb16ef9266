// This file is part of heap-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `HeapVec` type and its inherent API.
//!
//! `HeapVec<T>` owns a [`RawBuffer<T>`] and a logical length. Each operation
//! lives in its own submodule; this file holds the type, the invariants, the
//! cheap accessors and the slice-forwarding trait impls.

mod clone;
mod drop;
mod extend;
mod from;
mod insert;
mod new;
mod pop;
mod push;
mod relocate;
mod remove;
mod reserve;
mod resize;
mod retain;
mod slice;

// Crate imports
use crate::raw::RawBuffer;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut},
};

/// A growable, heap-allocated vector built on a [`RawBuffer`].
///
/// # Layout and invariants
///
/// `HeapVec<T>` maintains:
///
/// - exactly one owned [`RawBuffer<T>`] with `capacity` slots; and
/// - a logical length `len` with `0 <= len <= capacity`.
///
/// Slots `[0..len)` hold live values; slots `[len..capacity)` are
/// uninitialized and are never read as `T`. Dropping the vector drops the
/// live values and then releases the buffer.
///
/// # Growth policy
///
/// - [`push`](HeapVec::push), [`emplace_back_with`](HeapVec::emplace_back_with),
///   [`insert`](HeapVec::insert) and [`emplace_with`](HeapVec::emplace_with)
///   on a full vector grow the capacity to `max(1, 2 * capacity)`:
///   `0 → 1 → 2 → 4 → 8 → …`.
/// - [`reserve`](HeapVec::reserve) and [`resize`](HeapVec::resize) grow to
///   exactly the requested amount.
/// - Capacity never shrinks, except when [`clone_from`](Clone::clone_from)
///   swaps in a freshly built copy.
///
/// Any operation that reallocates or shifts elements invalidates outstanding
/// pointers into the vector; the borrow checker already rules this out for
/// references.
///
/// # Complexity
///
/// - `push` / `pop`: amortized `O(1)` / `O(1)`.
/// - `insert` / `erase` / `remove`: `O(len - index)`.
/// - `reserve`, `clone`, `clone_from`, `resize`: `O(len)` plus allocation.
/// - `take` / `swap`: `O(1)`, never allocate.
///
/// # Examples
///
/// ```rust
/// use heap_vec::HeapVec;
///
/// let mut v: HeapVec<u32> = HeapVec::with_len(3);
/// assert_eq!(v.as_slice(), &[0, 0, 0]);
///
/// v.resize(5);
/// assert_eq!(v.len(), 5);
///
/// let cap = v.capacity();
/// v.resize(2);
/// assert_eq!(v.len(), 2);
/// assert_eq!(v.capacity(), cap);
/// ```
pub struct HeapVec<T> {
    pub(crate) buf: RawBuffer<T>,
    pub(crate) len: usize,
}

impl<T> HeapVec<T> {
    /// Returns the number of live elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots currently allocated.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns `capacity - len`, the number of appends possible without reallocating.
    #[inline]
    pub const fn spare_capacity(&self) -> usize {
        self.buf.capacity() - self.len
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T: fmt::Debug> fmt::Debug for HeapVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeapVec")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for HeapVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: PartialEq> PartialEq<[T]> for HeapVec<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}
impl<T: Eq> Eq for HeapVec<T> {}
impl<T: Ord> Ord for HeapVec<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd> PartialOrd for HeapVec<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash> Hash for HeapVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> Deref for HeapVec<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T> DerefMut for HeapVec<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for HeapVec<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> AsMut<[T]> for HeapVec<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Borrow<[T]> for HeapVec<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> BorrowMut<[T]> for HeapVec<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
