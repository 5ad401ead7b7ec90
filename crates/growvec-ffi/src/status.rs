// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! C-compatible status codes.

use core::ffi::c_char;

use growvec::GrowVecError;

/// C-compatible status code returned by all fallible FFI functions.
///
/// `Ok` = 0, all errors are negative. Values are ABI-stable.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GrowVecStatus {
    /// Success.
    Ok = 0,
    /// A handle or pointer is null, or a size argument is zero.
    InvalidArgument = -1,
    /// Index is at or past the element count.
    OutOfRange = -2,
    /// Pop on a container with no elements.
    EmptyContainer = -3,
    /// The backing buffer could not be grown or shrunk.
    AllocationFailure = -4,
    /// A Rust panic was caught at the FFI boundary.
    Panicked = -128,
}

impl GrowVecStatus {
    /// Maps a raw status code back to a `GrowVecStatus`, if it is one.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Ok),
            -1 => Some(Self::InvalidArgument),
            -2 => Some(Self::OutOfRange),
            -3 => Some(Self::EmptyContainer),
            -4 => Some(Self::AllocationFailure),
            -128 => Some(Self::Panicked),
            _ => None,
        }
    }

    /// Static, NUL-terminated description of the status.
    pub(crate) fn message(self) -> &'static core::ffi::CStr {
        match self {
            Self::Ok => c"ok",
            Self::InvalidArgument => c"invalid argument",
            Self::OutOfRange => c"index out of range",
            Self::EmptyContainer => c"container is empty",
            Self::AllocationFailure => c"allocation failure",
            Self::Panicked => c"panic caught at FFI boundary",
        }
    }
}

impl From<&GrowVecError> for GrowVecStatus {
    fn from(e: &GrowVecError) -> Self {
        match e {
            GrowVecError::InvalidArgument(_) => GrowVecStatus::InvalidArgument,
            GrowVecError::OutOfRange { .. } => GrowVecStatus::OutOfRange,
            GrowVecError::EmptyContainer => GrowVecStatus::EmptyContainer,
            GrowVecError::AllocationFailure { .. } => GrowVecStatus::AllocationFailure,
        }
    }
}

impl<T> From<Result<T, GrowVecError>> for GrowVecStatus {
    fn from(result: Result<T, GrowVecError>) -> Self {
        match result {
            Ok(_) => GrowVecStatus::Ok,
            Err(e) => GrowVecStatus::from(&e),
        }
    }
}

/// Returns a static description of `status`.
///
/// Unknown codes yield `"unknown status"`. The pointer is never null and
/// must not be freed.
#[unsafe(no_mangle)]
pub extern "C" fn growvec_status_message(status: i32) -> *const c_char {
    match GrowVecStatus::from_code(status) {
        Some(status) => status.message().as_ptr(),
        None => c"unknown status".as_ptr(),
    }
}
