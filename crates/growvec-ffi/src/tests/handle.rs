// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ffi::c_void;
use core::ptr;

use growvec::MIN_CAPACITY;

use super::utils::{OK, create_i32, push_i32};
use crate::{
    GrowVecHandle, GrowVecStatus, growvec_at, growvec_capacity, growvec_count, growvec_create,
    growvec_create_with_capacity, growvec_element_size, growvec_free, growvec_pop, growvec_push,
};

const INVALID: i32 = GrowVecStatus::InvalidArgument as i32;

// =============================================================================
// create / free
// =============================================================================

#[test]
fn test_create() {
    let mut handle = create_i32();

    // SAFETY: handle is live.
    unsafe {
        assert_eq!(growvec_count(handle), 0);
        assert_eq!(growvec_capacity(handle), MIN_CAPACITY);
        assert_eq!(growvec_element_size(handle), 4);
        growvec_free(&mut handle);
    }
    assert!(handle.is_null());
}

#[test]
fn test_create_invalid_arguments() {
    let mut handle: *mut GrowVecHandle = ptr::null_mut();

    // SAFETY: all out-pointers are null or valid.
    unsafe {
        assert_eq!(growvec_create(0, &mut handle), INVALID);
        assert_eq!(growvec_create(4, ptr::null_mut()), INVALID);
        assert_eq!(growvec_create_with_capacity(4, 0, &mut handle), INVALID);
        assert_eq!(growvec_create_with_capacity(0, 4, &mut handle), INVALID);
        assert_eq!(
            growvec_create_with_capacity(4, 4, ptr::null_mut()),
            INVALID
        );
    }
    assert!(handle.is_null());
}

#[test]
fn test_create_with_capacity() {
    let mut handle = ptr::null_mut();

    // SAFETY: &mut handle is valid for writes; handle is live afterwards.
    unsafe {
        assert_eq!(growvec_create_with_capacity(8, 5, &mut handle), OK);
        assert_eq!(growvec_capacity(handle), 5);
        assert_eq!(growvec_element_size(handle), 8);
        growvec_free(&mut handle);
    }
}

#[test]
fn test_create_with_capacity_overflow() {
    let mut handle = ptr::null_mut();

    // SAFETY: &mut handle is valid for writes.
    let status = unsafe { growvec_create_with_capacity(usize::MAX, 2, &mut handle) };

    assert_eq!(status, GrowVecStatus::AllocationFailure as i32);
    assert!(handle.is_null());
}

#[test]
fn test_free_is_null_safe_and_idempotent() {
    let mut handle = create_i32();

    // SAFETY: null and already-nulled handles are no-ops.
    unsafe {
        growvec_free(ptr::null_mut());
        growvec_free(&mut handle);
        growvec_free(&mut handle);
    }
    assert!(handle.is_null());
}

// =============================================================================
// Null handling
// =============================================================================

#[test]
fn test_queries_on_null_handle() {
    // SAFETY: null handles are accepted.
    unsafe {
        assert_eq!(growvec_count(ptr::null()), 0);
        assert_eq!(growvec_capacity(ptr::null()), 0);
        assert_eq!(growvec_element_size(ptr::null()), 0);
    }
}

#[test]
fn test_null_arguments_do_not_mutate() {
    let mut handle = create_i32();
    assert_eq!(push_i32(handle, 7), OK);

    let value = 1i32;
    let mut element: *mut c_void = ptr::null_mut();
    let mut out = 0i32;

    // SAFETY: handle is live; other pointers are null or valid.
    unsafe {
        assert_eq!(growvec_at(ptr::null_mut(), 0, &mut element), INVALID);
        assert_eq!(growvec_at(handle, 0, ptr::null_mut()), INVALID);
        assert_eq!(
            growvec_push(
                ptr::null_mut(),
                (&value as *const i32).cast(),
                ptr::null_mut()
            ),
            INVALID
        );
        assert_eq!(growvec_push(handle, ptr::null(), ptr::null_mut()), INVALID);
        assert_eq!(
            growvec_pop(ptr::null_mut(), (&mut out as *mut i32).cast()),
            INVALID
        );

        assert!(element.is_null());
        assert_eq!(out, 0);
        assert_eq!(growvec_count(handle), 1);
        assert_eq!(growvec_capacity(handle), MIN_CAPACITY);

        growvec_free(&mut handle);
    }
}

// =============================================================================
// at / push / pop
// =============================================================================

#[test]
fn test_at() {
    let mut handle = create_i32();
    for i in 0..3 {
        assert_eq!(push_i32(handle, i * 10), OK);
    }

    let mut element: *mut c_void = ptr::null_mut();

    // SAFETY: handle is live; element points at 4 live bytes after success.
    unsafe {
        assert_eq!(growvec_at(handle, 2, &mut element), OK);
        assert_eq!(element.cast::<i32>().read_unaligned(), 20);

        // Writes through the pointer land in the container
        element.cast::<i32>().write_unaligned(99);
        assert_eq!(growvec_at(handle, 2, &mut element), OK);
        assert_eq!(element.cast::<i32>().read_unaligned(), 99);

        growvec_free(&mut handle);
    }
}

#[test]
fn test_at_out_of_range() {
    let mut handle = create_i32();
    assert_eq!(push_i32(handle, 1), OK);

    let mut element: *mut c_void = ptr::null_mut();

    // SAFETY: handle is live.
    unsafe {
        assert_eq!(
            growvec_at(handle, 1, &mut element),
            GrowVecStatus::OutOfRange as i32
        );
        assert!(element.is_null());
        growvec_free(&mut handle);
    }
}

#[test]
fn test_push_from_own_element_across_growth() {
    let mut handle = create_i32();
    for i in 0..MIN_CAPACITY as i32 {
        assert_eq!(push_i32(handle, i), OK);
    }

    let mut element: *mut c_void = ptr::null_mut();

    // SAFETY: handle is live; element is re-fetched before every push.
    unsafe {
        assert_eq!(growvec_at(handle, 3, &mut element), OK);

        // Full container: this push reallocates while reading element
        assert_eq!(growvec_push(handle, element, ptr::null_mut()), OK);
        assert_eq!(growvec_capacity(handle), MIN_CAPACITY * 2);

        assert_eq!(growvec_at(handle, MIN_CAPACITY, &mut element), OK);
        assert_eq!(element.cast::<i32>().read_unaligned(), 3);

        // Duplicate the element just pushed
        assert_eq!(growvec_push(handle, element, ptr::null_mut()), OK);
        assert_eq!(growvec_at(handle, MIN_CAPACITY + 1, &mut element), OK);
        assert_eq!(element.cast::<i32>().read_unaligned(), 3);
        assert_eq!(growvec_count(handle), MIN_CAPACITY + 2);

        growvec_free(&mut handle);
    }
}

#[test]
fn test_push_straddling_live_bytes() {
    let mut handle = create_i32();
    assert_eq!(push_i32(handle, 1), OK);

    let mut element: *mut c_void = ptr::null_mut();

    // SAFETY: handle is live; the straddling pointer is rejected unread.
    unsafe {
        assert_eq!(growvec_at(handle, 0, &mut element), OK);
        let straddling = element.cast::<u8>().add(2).cast::<c_void>();

        assert_eq!(growvec_push(handle, straddling, ptr::null_mut()), INVALID);
        assert_eq!(growvec_count(handle), 1);

        growvec_free(&mut handle);
    }
}

#[test]
fn test_push_returns_slot() {
    let mut handle = create_i32();
    let value = 5i32;
    let mut slot: *mut c_void = ptr::null_mut();

    // SAFETY: handle is live; slot points at 4 live bytes after success.
    unsafe {
        assert_eq!(
            growvec_push(handle, (&value as *const i32).cast(), &mut slot),
            OK
        );
        assert!(!slot.is_null());
        slot.cast::<i32>().write_unaligned(6);

        let mut out = 0i32;
        assert_eq!(growvec_pop(handle, (&mut out as *mut i32).cast()), OK);
        assert_eq!(out, 6);

        growvec_free(&mut handle);
    }
}

#[test]
fn test_pop_empty() {
    let mut handle = create_i32();
    let mut out = 3i32;

    // SAFETY: handle is live.
    unsafe {
        assert_eq!(
            growvec_pop(handle, (&mut out as *mut i32).cast()),
            GrowVecStatus::EmptyContainer as i32
        );
        assert_eq!(out, 3);
        assert_eq!(growvec_capacity(handle), MIN_CAPACITY);
        growvec_free(&mut handle);
    }
}

#[test]
fn test_pop_without_out() {
    let mut handle = create_i32();
    assert_eq!(push_i32(handle, 1), OK);

    // SAFETY: handle is live.
    unsafe {
        assert_eq!(growvec_pop(handle, ptr::null_mut()), OK);
        assert_eq!(growvec_count(handle), 0);
        growvec_free(&mut handle);
    }
}
