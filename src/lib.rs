// This file is part of heap-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `heap-vec`
//!
//! A `no_std` + `alloc`, growable, heap-allocated vector built directly on
//! raw memory.
//!
//! The crate has two layers:
//!
//! - [`RawBuffer<T>`] owns an uninitialized allocation with room for exactly
//!   `capacity` values of `T`. It allocates, deallocates, hands out slot
//!   addresses and transfers ownership. It never creates or drops a `T`.
//! - [`HeapVec<T>`] owns one `RawBuffer<T>` plus a logical length `len`. The
//!   prefix `[0..len)` holds live values; `[len..capacity)` is uninitialized.
//!   All construction, relocation and destruction of values happens here.
//!
//! ## Growth
//!
//! Appending or inserting into a full vector doubles the capacity (or sets it
//! to `1` when it is `0`), so `n` appends cost `O(n)` in total.
//! [`HeapVec::reserve`] grows to exactly the requested capacity instead.
//!
//! Growing allocates a fresh buffer, relocates the live values into it and
//! only then releases the old one. Rust moves are plain bitwise copies that
//! cannot fail, so relocation never leaves the vector half-migrated.
//! [`HeapVec::reserve_by_clone`] is the opt-in alternative that rebuilds the
//! buffer through [`Clone`] and keeps the original intact if a clone panics.
//!
//! ## Failure behavior
//!
//! - A panic raised while *constructing* an element (a constructor closure,
//!   [`Clone`], [`Default`]) never leaves the vector in an inconsistent state:
//!   - [`HeapVec::push`], [`HeapVec::emplace_back_with`], [`HeapVec::insert`]
//!     and [`HeapVec::emplace_with`] build the value before anything is moved
//!     or allocated, so the vector is unchanged.
//!   - bulk constructors ([`HeapVec::with_len`], [`Clone::clone`]) drop what
//!     they already built and release the buffer.
//!   - [`Clone::clone_from`] that needs a larger buffer builds a complete
//!     copy first and swaps it in, so the target is unchanged.
//! - Allocation failure aborts through `handle_alloc_error`, and a capacity
//!   whose byte size exceeds `isize::MAX` panics, like `Vec`. The `try_*`
//!   variants ([`HeapVec::try_reserve`], [`HeapVec::try_push`],
//!   [`RawBuffer::try_with_capacity`]) report these as [`Error`] and leave the
//!   vector unchanged.
//! - Index and position misuse panics, exactly like slices.
//!   [`HeapVec::get_unchecked`] is the `unsafe` escape hatch.
//!
//! ## Features
//!
//! - `log` (default): emits a `trace` record for every reallocation through
//!   the [`log`](https://docs.rs/log) facade.
//!
//! ## Example
//!
//! ```rust
//! use heap_vec::HeapVec;
//!
//! let mut v = HeapVec::new();
//! for x in 1..=5 {
//!     v.push(x);
//! }
//! assert_eq!(v.capacity(), 8);
//!
//! v.insert(2, 99);
//! assert_eq!(v.as_slice(), &[1, 2, 99, 3, 4, 5]);
//!
//! v.erase(0);
//! assert_eq!(v.as_slice(), &[2, 99, 3, 4, 5]);
//! assert_eq!((v.len(), v.capacity()), (5, 8));
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]

extern crate alloc;

// Modules
mod error;
mod index;
mod iter;
mod raw;
#[cfg(test)]
mod testing;
mod vec;

// Public exports (crate API surface)
pub use error::Error;
pub use iter::IntoIter;
pub use raw::RawBuffer;
pub use vec::HeapVec;
