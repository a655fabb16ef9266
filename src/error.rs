// This file is part of heap-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the fallible allocation paths.
//!
//! Only the `try_*` entry points report these; the infallible ones panic on
//! capacity overflow and abort on allocation failure, like `Vec`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by [`RawBuffer::try_with_capacity`](crate::RawBuffer::try_with_capacity),
/// [`HeapVec::try_reserve`](crate::HeapVec::try_reserve) and
/// [`HeapVec::try_push`](crate::HeapVec::try_push).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The requested capacity does not fit in `isize::MAX` bytes, or the
    /// length arithmetic overflowed.
    CapacityOverflow,
    /// The global allocator could not satisfy the request.
    AllocFailed {
        /// Size of the failed request, in bytes.
        size: usize,
        /// Alignment of the failed request, in bytes.
        align: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityOverflow => f.write_str("capacity overflow"),
            Self::AllocFailed { size, align } => {
                write!(f, "allocation of {size} bytes (align {align}) failed")
            }
        }
    }
}

impl CoreError for Error {}

#[cfg(test)]
mod tests {
    // Imports
    use crate::Error;
    use alloc::string::{String, ToString};
    use core::error::Error as CoreError;

    fn takes_error(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn test_error_is_core_error() {
        let s = takes_error(&Error::CapacityOverflow);
        assert!(s.contains("overflow"));
    }

    #[test]
    fn test_alloc_failed_display_names_layout() {
        let e = Error::AllocFailed { size: 64, align: 8 };
        assert_eq!(e.to_string(), "allocation of 64 bytes (align 8) failed");
    }
}
