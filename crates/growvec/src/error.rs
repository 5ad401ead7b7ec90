// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for growvec.

use thiserror::Error;

/// Error type for `GrowVec` and `RawGrowVec` operations.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum GrowVecError {
    /// A size or span argument is zero, absent or has the wrong length.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// An index-based access exceeded the current element count.
    #[error("index {index} out of range for count {count}")]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// The element count at the time of the access.
        count: usize,
    },

    /// A removal was attempted on a container with no elements.
    #[error("container is empty")]
    EmptyContainer,

    /// The backing buffer could not be sized to `capacity` elements.
    ///
    /// Also returned when `capacity * element_size` overflows `usize`.
    #[error("allocation failure: could not size buffer to {capacity} elements")]
    AllocationFailure {
        /// The capacity, in elements, that was requested.
        capacity: usize,
    },
}

impl GrowVecError {
    /// Creates an `AllocationFailure` for `capacity` elements and logs it.
    pub(crate) fn allocation_failure(capacity: usize) -> Self {
        debug!("failed to size buffer to {} elements", capacity);
        Self::AllocationFailure { capacity }
    }
}
