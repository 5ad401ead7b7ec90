// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # growvec-ffi
//!
//! C ABI for [`growvec::RawGrowVec`].
//!
//! A container is an opaque [`GrowVecHandle`] created with
//! [`growvec_create`] or [`growvec_create_with_capacity`] and released with
//! [`growvec_free`]. Fallible functions return an `i32` status code
//! ([`GrowVecStatus`]): `0` on success, negative on error. Queries on a null
//! handle return `0`.
//!
//! Elements are opaque byte spans of exactly `element_size` bytes, copied in
//! by [`growvec_push`] and out by [`growvec_pop`].
//!
//! ```c
//! GrowVecHandle *vec = NULL;
//! if (growvec_create(sizeof(int32_t), &vec) != 0) { abort(); }
//!
//! int32_t value = 42;
//! growvec_push(vec, &value, NULL);
//!
//! int32_t out = 0;
//! growvec_pop(vec, &out);
//! growvec_free(&vec); /* vec is now NULL */
//! ```
//!
//! A panic inside any entry point is caught and reported as
//! [`GrowVecStatus::Panicked`]; it never unwinds into the caller.
//!
//! ## License
//!
//! GPL-3.0-only
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

/// Runs `$body` under `catch_unwind`, returning `GrowVecStatus::Panicked`
/// as `i32` if it panics.
macro_rules! ffi_guard {
    ($body:block) => {
        ffi_guard_or!($crate::GrowVecStatus::Panicked as i32, $body)
    };
}

/// Runs `$body` under `catch_unwind`, returning `$fallback` if it panics.
macro_rules! ffi_guard_or {
    ($fallback:expr, $body:block) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $body)) {
            Ok(value) => value,
            Err(_) => $fallback,
        }
    };
}

mod handle;
mod status;

#[cfg(test)]
mod tests;

pub use handle::{
    GrowVecHandle, growvec_at, growvec_capacity, growvec_count, growvec_create,
    growvec_create_with_capacity, growvec_element_size, growvec_free, growvec_pop, growvec_push,
};
pub use status::{GrowVecStatus, growvec_status_message};
