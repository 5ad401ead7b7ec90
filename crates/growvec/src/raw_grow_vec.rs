// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;

#[cfg(any(test, feature = "test_utils"))]
use crate::behaviour::GrowVecBehaviour;
use crate::error::GrowVecError;
use crate::policy::{self, MIN_CAPACITY};

/// A growable array of fixed-width byte elements.
///
/// The element width is chosen at runtime and never changes. Elements are
/// copied in and out as byte spans of exactly [`element_size`](Self::element_size)
/// bytes. Capacity follows the same policy as [`GrowVec`](crate::GrowVec).
///
/// Name the type (`RawGrowVec` or `RawGrowVec<MIN>`) at the binding so the
/// `MIN` parameter is known when calling the constructors.
///
/// # Example
///
/// ```rust
/// use growvec::{GrowVecError, RawGrowVec};
///
/// fn example() -> Result<(), GrowVecError> {
///     let mut vec: RawGrowVec = RawGrowVec::new(2)?;
///     vec.push(&[1, 2])?;
///     vec.push(&[3, 4])?;
///
///     assert_eq!(vec.at(1)?, &[3, 4]);
///     assert_eq!(vec.as_bytes(), &[1, 2, 3, 4]);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct RawGrowVec<const MIN: usize = MIN_CAPACITY> {
    element_size: usize,
    capacity: usize,
    // Live bytes only: bytes.len() == len() * element_size.
    bytes: Vec<u8>,
    #[cfg(any(test, feature = "test_utils"))]
    behaviour: GrowVecBehaviour,
}

impl<const MIN: usize> RawGrowVec<MIN> {
    const FLOOR: usize = {
        assert!(MIN > 0, "RawGrowVec: MIN must be positive");
        MIN
    };

    fn allocate(element_size: usize, capacity: usize) -> Result<Self, GrowVecError> {
        if element_size == 0 {
            return Err(GrowVecError::InvalidArgument("element size must be positive"));
        }

        let byte_len = policy::byte_len(capacity, element_size)
            .ok_or_else(|| GrowVecError::allocation_failure(capacity))?;

        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(byte_len)
            .map_err(|_| GrowVecError::allocation_failure(capacity))?;

        Ok(Self {
            element_size,
            capacity,
            bytes,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: GrowVecBehaviour::default(),
        })
    }

    /// Creates an empty container for `element_size`-byte elements with
    /// capacity `MIN`.
    ///
    /// # Errors
    ///
    /// - [`GrowVecError::InvalidArgument`] if `element_size == 0`.
    /// - [`GrowVecError::AllocationFailure`] if the buffer cannot be allocated.
    pub fn new(element_size: usize) -> Result<Self, GrowVecError> {
        Self::allocate(element_size, Self::FLOOR)
    }

    /// Creates an empty container for `element_size`-byte elements with an
    /// explicit initial capacity, which may be below `MIN`. The first growth
    /// of such a container lands on `MIN`.
    ///
    /// # Errors
    ///
    /// - [`GrowVecError::InvalidArgument`] if `element_size == 0` or `capacity == 0`.
    /// - [`GrowVecError::AllocationFailure`] if `capacity * element_size`
    ///   overflows or the buffer cannot be allocated.
    pub fn with_capacity(element_size: usize, capacity: usize) -> Result<Self, GrowVecError> {
        if capacity == 0 {
            return Err(GrowVecError::InvalidArgument("capacity must be positive"));
        }

        Self::allocate(element_size, capacity)
    }

    /// Returns the width of one element in bytes.
    #[inline]
    pub fn element_size(&self) -> usize {
        self.element_size
    }

    /// Returns the number of elements in the container.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len() / self.element_size
    }

    /// Returns `true` if the container holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the number of elements the container holds without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn span(&self, index: usize) -> Result<core::ops::Range<usize>, GrowVecError> {
        let count = self.len();
        if index >= count {
            return Err(GrowVecError::OutOfRange { index, count });
        }

        let start = index * self.element_size;
        Ok(start..start + self.element_size)
    }

    /// Returns the bytes of the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GrowVecError::OutOfRange`] if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&[u8], GrowVecError> {
        let span = self.span(index)?;
        Ok(&self.bytes[span])
    }

    /// Returns the bytes of the element at `index` for in-place mutation.
    ///
    /// # Errors
    ///
    /// Returns [`GrowVecError::OutOfRange`] if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut [u8], GrowVecError> {
        let span = self.span(index)?;
        Ok(&mut self.bytes[span])
    }

    /// Appends a copy of `element` and returns the bytes of the new slot.
    ///
    /// # Errors
    ///
    /// - [`GrowVecError::InvalidArgument`] if `element.len() != element_size()`.
    /// - [`GrowVecError::AllocationFailure`] if growth fails. The container is
    ///   unchanged.
    pub fn push(&mut self, element: &[u8]) -> Result<&mut [u8], GrowVecError> {
        if element.len() != self.element_size {
            return Err(GrowVecError::InvalidArgument(
                "element length must equal element size",
            ));
        }

        debug_assert!(self.len() <= self.capacity);

        if self.len() == self.capacity {
            self.grow()?;
        }

        let start = self.bytes.len();
        self.bytes.extend_from_slice(element);

        Ok(&mut self.bytes[start..])
    }

    /// Removes the last element, copying its bytes into `out` if given.
    ///
    /// # Errors
    ///
    /// - [`GrowVecError::InvalidArgument`] if `out` is given and its length
    ///   differs from `element_size()`. Nothing changes.
    /// - [`GrowVecError::EmptyContainer`] if the container is empty. Nothing changes.
    /// - [`GrowVecError::AllocationFailure`] if the shrink fails. The element
    ///   has still been removed (and copied to `out`); the capacity is unchanged.
    pub fn pop(&mut self, out: Option<&mut [u8]>) -> Result<(), GrowVecError> {
        if out.as_ref().is_some_and(|slot| slot.len() != self.element_size) {
            return Err(GrowVecError::InvalidArgument(
                "output length must equal element size",
            ));
        }

        if self.bytes.is_empty() {
            return Err(GrowVecError::EmptyContainer);
        }

        let start = self.bytes.len() - self.element_size;
        if let Some(slot) = out {
            slot.copy_from_slice(&self.bytes[start..]);
        }
        self.bytes.truncate(start);

        match policy::shrink_target(self.len(), self.capacity, Self::FLOOR) {
            Some(new_capacity) => self.shrink_to(new_capacity),
            None => Ok(()),
        }
    }

    /// Returns the live bytes: `len() * element_size()` bytes, element after element.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns an iterator over the elements as byte spans.
    pub fn iter(&self) -> core::slice::ChunksExact<'_, u8> {
        self.bytes.chunks_exact(self.element_size)
    }

    /// Changes the test behaviour for this container.
    ///
    /// This is only available with the `test_utils` feature and allows injecting
    /// allocation failures for testing error handling paths.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn change_behaviour(&mut self, behaviour: GrowVecBehaviour) {
        self.behaviour = behaviour;
    }

    #[cold]
    #[inline(never)]
    fn grow(&mut self) -> Result<(), GrowVecError> {
        let new_capacity = policy::grow_target(self.capacity, Self::FLOOR)
            .ok_or_else(|| GrowVecError::allocation_failure(self.capacity.saturating_mul(2)))?;
        let new_byte_len = policy::byte_len(new_capacity, self.element_size)
            .ok_or_else(|| GrowVecError::allocation_failure(new_capacity))?;

        #[cfg(any(test, feature = "test_utils"))]
        if matches!(self.behaviour, GrowVecBehaviour::FailAtGrow) {
            return Err(GrowVecError::allocation_failure(new_capacity));
        }

        self.bytes
            .try_reserve_exact(new_byte_len - self.bytes.len())
            .map_err(|_| GrowVecError::allocation_failure(new_capacity))?;

        trace!(
            "RawGrowVec: capacity {} -> {} ({} bytes)",
            self.capacity, new_capacity, new_byte_len
        );
        self.capacity = new_capacity;

        Ok(())
    }

    #[cold]
    #[inline(never)]
    fn shrink_to(&mut self, new_capacity: usize) -> Result<(), GrowVecError> {
        // Cannot overflow: new_capacity < capacity, whose byte length was computed.
        let new_byte_len = new_capacity * self.element_size;

        #[cfg(any(test, feature = "test_utils"))]
        if matches!(self.behaviour, GrowVecBehaviour::FailAtShrink) {
            return Err(GrowVecError::allocation_failure(new_capacity));
        }

        let mut relocated = Vec::new();
        relocated
            .try_reserve_exact(new_byte_len)
            .map_err(|_| GrowVecError::allocation_failure(new_capacity))?;
        relocated.extend_from_slice(&self.bytes);

        trace!(
            "RawGrowVec: capacity {} -> {} ({} bytes)",
            self.capacity, new_capacity, new_byte_len
        );
        self.bytes = relocated;
        self.capacity = new_capacity;

        Ok(())
    }
}

impl<const MIN: usize> core::fmt::Debug for RawGrowVec<MIN> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RawGrowVec")
            .field("element_size", &self.element_size)
            .field("len", &self.len())
            .field("capacity", &self.capacity)
            .finish()
    }
}
