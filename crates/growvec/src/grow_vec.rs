// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;
use core::ops::{Deref, DerefMut};

#[cfg(any(test, feature = "test_utils"))]
use crate::behaviour::GrowVecBehaviour;
use crate::error::GrowVecError;
use crate::policy::{self, MIN_CAPACITY};

/// A growable array that doubles when full and halves when mostly empty.
///
/// `GrowVec` tracks its own logical capacity rather than reporting whatever
/// the allocator rounded up to, so the capacity sequence is exactly the one
/// described in [`policy`]:
///
/// - Starts at `MIN` (or the capacity passed to [`with_capacity`](Self::with_capacity)).
/// - Doubles when a push finds it full, never growing to less than `MIN`.
/// - Halves after a pop leaves fewer than `capacity / 4` elements, never
///   going below `MIN`.
///
/// Every reallocation is fallible. A failed grow leaves the vector exactly as
/// it was; a failed shrink keeps the pop and the old capacity.
///
/// References returned by [`at`](Self::at) and [`push`](Self::push) borrow
/// the vector, so they cannot outlive the next call that could move the
/// buffer.
///
/// # Type Parameters
///
/// - `T`: The element type. Zero-sized types are rejected.
/// - `MIN`: The capacity floor, defaults to [`MIN_CAPACITY`]. Must be positive.
///
/// # Example
///
/// ```rust
/// use growvec::{GrowVec, GrowVecError};
///
/// fn example() -> Result<(), GrowVecError> {
///     let mut vec = GrowVec::<u64, 4>::new()?;
///     for i in 0..5 {
///         vec.push(i)?;
///     }
///     assert_eq!(vec.capacity(), 8);
///
///     for _ in 0..4 {
///         vec.pop(None)?;
///     }
///     assert_eq!(vec.len(), 1);
///     assert_eq!(vec.capacity(), 4);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct GrowVec<T, const MIN: usize = MIN_CAPACITY> {
    inner: Vec<T>,
    capacity: usize,
    #[cfg(any(test, feature = "test_utils"))]
    behaviour: GrowVecBehaviour,
}

impl<T, const MIN: usize> GrowVec<T, MIN> {
    const FLOOR: usize = {
        assert!(MIN > 0, "GrowVec: MIN must be positive");
        MIN
    };

    fn allocate(capacity: usize) -> Result<Self, GrowVecError> {
        if core::mem::size_of::<T>() == 0 {
            return Err(GrowVecError::InvalidArgument(
                "element type must not be zero-sized",
            ));
        }

        let mut inner = Vec::new();
        inner
            .try_reserve_exact(capacity)
            .map_err(|_| GrowVecError::allocation_failure(capacity))?;

        Ok(Self {
            inner,
            capacity,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: GrowVecBehaviour::default(),
        })
    }

    /// Creates an empty `GrowVec` with capacity `MIN`.
    ///
    /// # Errors
    ///
    /// - [`GrowVecError::InvalidArgument`] if `T` is zero-sized.
    /// - [`GrowVecError::AllocationFailure`] if the buffer cannot be allocated.
    ///
    /// # Example
    ///
    /// ```rust
    /// use growvec::{GrowVec, MIN_CAPACITY};
    ///
    /// let vec = GrowVec::<u32>::new().expect("Failed to create GrowVec");
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.capacity(), MIN_CAPACITY);
    /// ```
    pub fn new() -> Result<Self, GrowVecError> {
        Self::allocate(Self::FLOOR)
    }

    /// Creates an empty `GrowVec` with an explicit initial capacity.
    ///
    /// The capacity may be below `MIN`; the first growth then lands on `MIN`
    /// (or twice the capacity, if larger). Shrinking never goes below `MIN`,
    /// so a vector pre-sized above the floor can later halve back down to it.
    ///
    /// # Errors
    ///
    /// - [`GrowVecError::InvalidArgument`] if `capacity == 0` or `T` is zero-sized.
    /// - [`GrowVecError::AllocationFailure`] if the buffer cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self, GrowVecError> {
        if capacity == 0 {
            return Err(GrowVecError::InvalidArgument("capacity must be positive"));
        }

        Self::allocate(capacity)
    }

    /// Returns the number of elements in the vector.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the vector contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of elements the vector holds without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the size in bytes of one element.
    #[inline]
    pub fn element_size(&self) -> usize {
        core::mem::size_of::<T>()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GrowVecError::OutOfRange`] if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T, GrowVecError> {
        let count = self.inner.len();
        self.inner
            .get(index)
            .ok_or(GrowVecError::OutOfRange { index, count })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GrowVecError::OutOfRange`] if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, GrowVecError> {
        let count = self.inner.len();
        self.inner
            .get_mut(index)
            .ok_or(GrowVecError::OutOfRange { index, count })
    }

    /// Appends `value` and returns a mutable reference to its slot.
    ///
    /// Doubles the capacity first if the vector is full.
    ///
    /// # Errors
    ///
    /// Returns [`GrowVecError::AllocationFailure`] if growth fails. The vector
    /// is unchanged and `value` is dropped.
    ///
    /// # Example
    ///
    /// ```rust
    /// use growvec::{GrowVec, GrowVecError};
    ///
    /// fn example() -> Result<(), GrowVecError> {
    ///     let mut vec = GrowVec::<[u8; 4]>::new()?;
    ///     let slot = vec.push([0; 4])?;
    ///     slot[3] = 9;
    ///
    ///     assert_eq!(vec.at(0)?, &[0, 0, 0, 9]);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn push(&mut self, value: T) -> Result<&mut T, GrowVecError> {
        debug_assert!(self.inner.len() <= self.capacity);

        if self.inner.len() == self.capacity {
            self.grow()?;
        }

        let index = self.inner.len();
        self.inner.push(value);

        Ok(&mut self.inner[index])
    }

    /// Removes the last element, moving it into `out` if given.
    ///
    /// After the removal the capacity halves if fewer than `capacity / 4`
    /// elements remain and the capacity is above `MIN`.
    ///
    /// # Errors
    ///
    /// - [`GrowVecError::EmptyContainer`] if the vector is empty. Nothing changes.
    /// - [`GrowVecError::AllocationFailure`] if the shrink fails. The element
    ///   has still been removed (and written to `out`); the capacity is unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use growvec::{GrowVec, GrowVecError};
    ///
    /// fn example() -> Result<(), GrowVecError> {
    ///     let mut vec: GrowVec<u32> = GrowVec::new()?;
    ///     vec.push(42)?;
    ///
    ///     let mut out = 0;
    ///     vec.pop(Some(&mut out))?;
    ///     assert_eq!(out, 42);
    ///
    ///     assert_eq!(vec.pop(None), Err(GrowVecError::EmptyContainer));
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn pop(&mut self, out: Option<&mut T>) -> Result<(), GrowVecError> {
        let value = self.inner.pop().ok_or(GrowVecError::EmptyContainer)?;

        if let Some(slot) = out {
            *slot = value;
        }

        self.maybe_shrink()
    }

    /// Removes and returns the last element, or `None` if the vector is empty.
    ///
    /// Applies the same shrink policy as [`pop`](Self::pop). A failed shrink
    /// is not reported: the element is returned and the vector keeps its
    /// previous capacity, which [`capacity`](Self::capacity) reflects.
    ///
    /// # Example
    ///
    /// ```rust
    /// use growvec::{GrowVec, GrowVecError};
    ///
    /// fn example() -> Result<(), GrowVecError> {
    ///     let mut vec = GrowVec::<String>::new()?;
    ///     vec.push(String::from("last"))?;
    ///
    ///     assert_eq!(vec.pop_value().as_deref(), Some("last"));
    ///     assert_eq!(vec.pop_value(), None);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn pop_value(&mut self) -> Option<T> {
        let value = self.inner.pop()?;
        let _ = self.maybe_shrink();
        Some(value)
    }

    /// Returns a slice over the stored elements.
    pub fn as_slice(&self) -> &[T] {
        &self.inner
    }

    /// Returns a mutable slice over the stored elements.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.inner
    }

    /// Returns an iterator over the stored elements.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.inner.iter()
    }

    /// Changes the test behaviour for this vector.
    ///
    /// This is only available with the `test_utils` feature and allows injecting
    /// allocation failures for testing error handling paths.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn change_behaviour(&mut self, behaviour: GrowVecBehaviour) {
        self.behaviour = behaviour;
    }

    fn maybe_shrink(&mut self) -> Result<(), GrowVecError> {
        match policy::shrink_target(self.inner.len(), self.capacity, Self::FLOOR) {
            Some(new_capacity) => self.shrink_to(new_capacity),
            None => Ok(()),
        }
    }

    #[cold]
    #[inline(never)]
    fn grow(&mut self) -> Result<(), GrowVecError> {
        let new_capacity = policy::grow_target(self.capacity, Self::FLOOR)
            .ok_or_else(|| GrowVecError::allocation_failure(self.capacity.saturating_mul(2)))?;

        #[cfg(any(test, feature = "test_utils"))]
        if matches!(self.behaviour, GrowVecBehaviour::FailAtGrow) {
            return Err(GrowVecError::allocation_failure(new_capacity));
        }

        // Reserve in place: existing elements stay where the allocator puts them.
        self.inner
            .try_reserve_exact(new_capacity - self.inner.len())
            .map_err(|_| GrowVecError::allocation_failure(new_capacity))?;

        trace!("GrowVec: capacity {} -> {}", self.capacity, new_capacity);
        self.capacity = new_capacity;

        Ok(())
    }

    #[cold]
    #[inline(never)]
    fn shrink_to(&mut self, new_capacity: usize) -> Result<(), GrowVecError> {
        #[cfg(any(test, feature = "test_utils"))]
        if matches!(self.behaviour, GrowVecBehaviour::FailAtShrink) {
            return Err(GrowVecError::allocation_failure(new_capacity));
        }

        let mut relocated = Vec::new();
        relocated
            .try_reserve_exact(new_capacity)
            .map_err(|_| GrowVecError::allocation_failure(new_capacity))?;
        relocated.append(&mut self.inner);

        trace!("GrowVec: capacity {} -> {}", self.capacity, new_capacity);
        self.inner = relocated;
        self.capacity = new_capacity;

        Ok(())
    }
}

impl<T, const MIN: usize> core::fmt::Debug for GrowVec<T, MIN>
where
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GrowVec")
            .field("len", &self.len())
            .field("capacity", &self.capacity)
            .field("items", &self.inner)
            .finish()
    }
}

impl<T, const MIN: usize> Deref for GrowVec<T, MIN> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T, const MIN: usize> DerefMut for GrowVec<T, MIN> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<'a, T, const MIN: usize> IntoIterator for &'a GrowVec<T, MIN> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}
