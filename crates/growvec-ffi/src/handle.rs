// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Handle lifecycle and element access.

use core::ffi::c_void;

use growvec::{GrowVecError, RawGrowVec};

use crate::status::GrowVecStatus;

/// Opaque container handle.
///
/// Only ever seen by C as a pointer. Not thread-safe: callers sharing a
/// handle across threads must provide their own locking.
pub struct GrowVecHandle {
    pub(crate) inner: RawGrowVec,
}

fn publish(
    created: Result<RawGrowVec, GrowVecError>,
    handle_out: *mut *mut GrowVecHandle,
) -> i32 {
    match created {
        Ok(inner) => {
            let handle = Box::into_raw(Box::new(GrowVecHandle { inner }));
            // SAFETY: caller checked handle_out is non-null.
            unsafe { *handle_out = handle };
            GrowVecStatus::Ok as i32
        }
        Err(e) => GrowVecStatus::from(&e) as i32,
    }
}

/// Creates a container for `element_size`-byte elements at the minimum
/// capacity and stores its handle in `*handle_out`.
///
/// Returns `InvalidArgument` if `handle_out` is null or `element_size` is 0.
/// `*handle_out` is only written on success.
///
/// # Safety
///
/// `handle_out` must be null or valid for writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn growvec_create(
    element_size: usize,
    handle_out: *mut *mut GrowVecHandle,
) -> i32 {
    ffi_guard!({
        if handle_out.is_null() {
            return GrowVecStatus::InvalidArgument as i32;
        }

        publish(RawGrowVec::new(element_size), handle_out)
    })
}

/// Creates a container with an explicit initial capacity.
///
/// Returns `InvalidArgument` if `handle_out` is null, or `element_size` or
/// `capacity` is 0, and `AllocationFailure` if the buffer cannot be sized.
///
/// # Safety
///
/// `handle_out` must be null or valid for writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn growvec_create_with_capacity(
    element_size: usize,
    capacity: usize,
    handle_out: *mut *mut GrowVecHandle,
) -> i32 {
    ffi_guard!({
        if handle_out.is_null() {
            return GrowVecStatus::InvalidArgument as i32;
        }

        publish(
            RawGrowVec::with_capacity(element_size, capacity),
            handle_out,
        )
    })
}

/// Number of stored elements, or 0 for a null handle.
///
/// # Safety
///
/// `handle` must be null or a live handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn growvec_count(handle: *const GrowVecHandle) -> usize {
    ffi_guard_or!(0, {
        // SAFETY: caller guarantees handle is null or live.
        match unsafe { handle.as_ref() } {
            Some(handle) => handle.inner.len(),
            None => 0,
        }
    })
}

/// Current capacity in elements, or 0 for a null handle.
///
/// # Safety
///
/// `handle` must be null or a live handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn growvec_capacity(handle: *const GrowVecHandle) -> usize {
    ffi_guard_or!(0, {
        // SAFETY: caller guarantees handle is null or live.
        match unsafe { handle.as_ref() } {
            Some(handle) => handle.inner.capacity(),
            None => 0,
        }
    })
}

/// Element width in bytes, or 0 for a null handle.
///
/// # Safety
///
/// `handle` must be null or a live handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn growvec_element_size(handle: *const GrowVecHandle) -> usize {
    ffi_guard_or!(0, {
        // SAFETY: caller guarantees handle is null or live.
        match unsafe { handle.as_ref() } {
            Some(handle) => handle.inner.element_size(),
            None => 0,
        }
    })
}

/// Stores a pointer to the element at `index` in `*element_out`.
///
/// The pointer addresses `element_size` bytes inside the container and is
/// valid until the next push, pop or free on this handle.
///
/// Returns `InvalidArgument` for a null `handle` or `element_out`, and
/// `OutOfRange` if `index >= count`. `*element_out` is only written on
/// success.
///
/// # Safety
///
/// `handle` must be null or a live handle. `element_out` must be null or
/// valid for writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn growvec_at(
    handle: *mut GrowVecHandle,
    index: usize,
    element_out: *mut *mut c_void,
) -> i32 {
    ffi_guard!({
        if element_out.is_null() {
            return GrowVecStatus::InvalidArgument as i32;
        }
        // SAFETY: caller guarantees handle is null or live.
        let Some(handle) = (unsafe { handle.as_mut() }) else {
            return GrowVecStatus::InvalidArgument as i32;
        };

        match handle.inner.at_mut(index) {
            Ok(element) => {
                // SAFETY: element_out is non-null and valid for writes.
                unsafe { *element_out = element.as_mut_ptr().cast() };
                GrowVecStatus::Ok as i32
            }
            Err(e) => GrowVecStatus::from(&e) as i32,
        }
    })
}

/// Copies `element` out of the container when it points into its live bytes.
///
/// `Ok(None)` means `element` is disjoint from the live bytes and can be read
/// directly.
fn interior_copy(
    inner: &RawGrowVec,
    element: *const u8,
) -> Result<Option<Vec<u8>>, GrowVecStatus> {
    let element_size = inner.element_size();
    let live = inner.as_bytes();
    let live_start = live.as_ptr() as usize;
    let live_end = live_start + live.len();
    let start = element as usize;
    let end = start.saturating_add(element_size);

    if end <= live_start || start >= live_end {
        return Ok(None);
    }
    if start < live_start || end > live_end {
        return Err(GrowVecStatus::InvalidArgument);
    }

    let offset = start - live_start;
    Ok(Some(live[offset..offset + element_size].to_vec()))
}

/// Appends a copy of the `element_size` bytes at `element`.
///
/// If `element_out` is non-null it receives a pointer to the new slot,
/// valid until the next push, pop or free on this handle.
///
/// `element` may point at an element of this same container (for instance
/// one obtained from [`growvec_at`]); its bytes are copied out before the
/// container can reallocate.
///
/// Returns `InvalidArgument` for a null `handle` or `element`, or when
/// `element` straddles the boundary of the container's live bytes, and
/// `AllocationFailure` if growth fails, in which case the container is
/// unchanged.
///
/// # Safety
///
/// `handle` must be null or a live handle. `element` must be null or
/// readable for `element_size` bytes. `element_out` must be null or valid
/// for writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn growvec_push(
    handle: *mut GrowVecHandle,
    element: *const c_void,
    element_out: *mut *mut c_void,
) -> i32 {
    ffi_guard!({
        if element.is_null() {
            return GrowVecStatus::InvalidArgument as i32;
        }
        // SAFETY: caller guarantees handle is null or live.
        let Some(handle) = (unsafe { handle.as_mut() }) else {
            return GrowVecStatus::InvalidArgument as i32;
        };

        let interior = match interior_copy(&handle.inner, element.cast::<u8>()) {
            Ok(interior) => interior,
            Err(status) => return status as i32,
        };

        let result = match &interior {
            Some(copy) => handle.inner.push(copy),
            None => {
                let element_size = handle.inner.element_size();
                // SAFETY: element is non-null, readable for element_size bytes
                // and disjoint from the container's live bytes.
                let element =
                    unsafe { core::slice::from_raw_parts(element.cast::<u8>(), element_size) };
                handle.inner.push(element)
            }
        };

        match result {
            Ok(slot) => {
                if !element_out.is_null() {
                    // SAFETY: element_out is non-null and valid for writes.
                    unsafe { *element_out = slot.as_mut_ptr().cast() };
                }
                GrowVecStatus::Ok as i32
            }
            Err(e) => GrowVecStatus::from(&e) as i32,
        }
    })
}

/// Removes the last element, copying its `element_size` bytes to `out`
/// when `out` is non-null.
///
/// Returns `InvalidArgument` for a null `handle`, `EmptyContainer` if there
/// is nothing to pop, and `AllocationFailure` if the shrink fails. On
/// `AllocationFailure` the element has still been removed and copied.
///
/// # Safety
///
/// `handle` must be null or a live handle. `out` must be null or writable
/// for `element_size` bytes and must not point into this container.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn growvec_pop(handle: *mut GrowVecHandle, out: *mut c_void) -> i32 {
    ffi_guard!({
        // SAFETY: caller guarantees handle is null or live.
        let Some(handle) = (unsafe { handle.as_mut() }) else {
            return GrowVecStatus::InvalidArgument as i32;
        };

        let element_size = handle.inner.element_size();
        let out = if out.is_null() {
            None
        } else {
            // SAFETY: out is non-null and writable for element_size bytes.
            Some(unsafe { core::slice::from_raw_parts_mut(out.cast::<u8>(), element_size) })
        };

        GrowVecStatus::from(handle.inner.pop(out)) as i32
    })
}

/// Destroys the container behind `*handle_ptr` and sets `*handle_ptr` to null.
///
/// A null `handle_ptr` or a null `*handle_ptr` is a no-op, so freeing twice
/// through the same pointer is safe.
///
/// # Safety
///
/// `handle_ptr` must be null or valid for reads and writes, and `*handle_ptr`
/// must be null or a handle returned by `growvec_create*` that has not been
/// freed through another pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn growvec_free(handle_ptr: *mut *mut GrowVecHandle) {
    ffi_guard_or!((), {
        if handle_ptr.is_null() {
            return;
        }
        // SAFETY: handle_ptr is non-null and valid for reads and writes.
        let handle = unsafe { core::ptr::replace(handle_ptr, core::ptr::null_mut()) };
        if !handle.is_null() {
            // SAFETY: handle came from Box::into_raw in growvec_create*.
            drop(unsafe { Box::from_raw(handle) });
        }
    })
}
