// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Capacity policy shared by [`GrowVec`](crate::GrowVec) and
//! [`RawGrowVec`](crate::RawGrowVec).
//!
//! Growth doubles a full buffer. Shrinking halves the buffer once the count
//! falls below a quarter of the capacity, clamped to the floor. Halving at the
//! quarter mark leaves the count at the new capacity's trigger point, so a
//! push/pop sequence oscillating around one count never reallocates twice in
//! a row.

/// Default capacity floor, in elements.
///
/// Fresh containers start here, and neither growth nor shrinking leaves a
/// container below it. Each container type
/// takes the floor as a `MIN` const parameter defaulting to this value, so
/// `GrowVec<T, 4>` uses a floor of 4.
pub const MIN_CAPACITY: usize = 16;

/// Returns the capacity a full container grows to, or `None` on overflow.
///
/// The target is `capacity * 2`, raised to `min` so a container pre-sized
/// below the floor reaches it on its first growth.
///
/// # Example
///
/// ```rust
/// use growvec::policy::grow_target;
///
/// assert_eq!(grow_target(16, 16), Some(32));
/// assert_eq!(grow_target(1, 16), Some(16));
/// assert_eq!(grow_target(usize::MAX, 16), None);
/// ```
#[inline]
pub fn grow_target(capacity: usize, min: usize) -> Option<usize> {
    capacity.checked_mul(2).map(|target| target.max(min))
}

/// Returns the capacity to shrink to after a removal, or `None` when the
/// container should keep its current capacity.
///
/// Shrinks only when `count < capacity / 4` and `capacity > min`; the target
/// is `capacity / 2`, never below `min`.
///
/// # Example
///
/// ```rust
/// use growvec::policy::shrink_target;
///
/// assert_eq!(shrink_target(7, 32, 16), Some(16));
/// assert_eq!(shrink_target(8, 32, 16), None);
/// assert_eq!(shrink_target(0, 16, 16), None);
/// ```
#[inline]
pub fn shrink_target(count: usize, capacity: usize, min: usize) -> Option<usize> {
    if count < capacity / 4 && capacity > min {
        Some((capacity / 2).max(min))
    } else {
        None
    }
}

/// Returns the size in bytes of `capacity` elements of `element_size` bytes,
/// or `None` on overflow.
#[inline]
pub fn byte_len(capacity: usize, element_size: usize) -> Option<usize> {
    capacity.checked_mul(element_size)
}
