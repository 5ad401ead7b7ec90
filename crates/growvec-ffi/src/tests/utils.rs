// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ffi::c_void;
use core::ptr;

use crate::{GrowVecHandle, GrowVecStatus, growvec_create, growvec_push};

pub(crate) const OK: i32 = GrowVecStatus::Ok as i32;

pub(crate) fn create_i32() -> *mut GrowVecHandle {
    let mut handle = ptr::null_mut();
    // SAFETY: &mut handle is valid for writes.
    let status = unsafe { growvec_create(core::mem::size_of::<i32>(), &mut handle) };
    assert_eq!(status, OK);
    assert!(!handle.is_null());
    handle
}

pub(crate) fn push_i32(handle: *mut GrowVecHandle, value: i32) -> i32 {
    // SAFETY: value is a live i32 matching the element size.
    unsafe {
        growvec_push(
            handle,
            (&value as *const i32).cast::<c_void>(),
            ptr::null_mut(),
        )
    }
}
