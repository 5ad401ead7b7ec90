// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable array with amortized doubling/halving and fallible reallocation.
//!
//! Two containers share one capacity policy:
//!
//! - [`GrowVec<T>`]: typed container. Elements are moved in and out.
//! - [`RawGrowVec`]: type-erased container. Elements are byte spans of a width
//!   fixed at creation. This is the shape exposed over the C ABI.
//!
//! # Core Guarantees
//!
//! - **Amortized O(1) push**: a full container doubles its capacity.
//! - **Hysteresis on removal**: after a pop, capacity halves only once the
//!   count drops below a quarter of it, and never below the floor
//!   ([`MIN_CAPACITY`] unless overridden through the `MIN` const parameter).
//! - **Fallible reallocation**: every allocation goes through
//!   `try_reserve_exact`. A failed grow leaves the container untouched; a
//!   failed shrink keeps the pop and the previous capacity.
//! - **Errors are values**: every failure is a [`GrowVecError`] returned from
//!   the call that caused it.
//!
//! # Example: Basic Usage
//!
//! ```rust
//! use growvec::{GrowVec, GrowVecError, MIN_CAPACITY};
//!
//! fn example() -> Result<(), GrowVecError> {
//!     let mut vec = GrowVec::<u32>::new()?;
//!
//!     for i in 0..=MIN_CAPACITY as u32 {
//!         vec.push(i)?;
//!     }
//!     assert_eq!(vec.capacity(), MIN_CAPACITY * 2);
//!
//!     let mut last = 0;
//!     vec.pop(Some(&mut last))?;
//!     assert_eq!(last, MIN_CAPACITY as u32);
//!     assert_eq!(*vec.at(0)?, 0);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: Type-erased Elements
//!
//! ```rust
//! use growvec::{GrowVecError, RawGrowVec};
//!
//! fn example() -> Result<(), GrowVecError> {
//!     let mut vec: RawGrowVec = RawGrowVec::new(4)?;
//!     vec.push(&7u32.to_ne_bytes())?;
//!
//!     let mut out = [0u8; 4];
//!     vec.pop(Some(&mut out))?;
//!     assert_eq!(u32::from_ne_bytes(out), 7);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test_utils` feature to inject allocation failures:
//!
//! ```toml
//! [dev-dependencies]
//! growvec = { version = "*", features = ["test_utils"] }
//! ```
//!
//! Then use [`GrowVecBehaviour`] to exercise the error paths of your code.
//!
//! # Logging
//!
//! The crate is silent by default. The `logging` feature routes reallocation
//! traces and allocation failures through the `log` facade.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[macro_use]
mod logging;

mod behaviour;
mod error;
mod grow_vec;
mod raw_grow_vec;

pub mod policy;

#[cfg(test)]
mod tests;

pub use error::GrowVecError;
pub use grow_vec::GrowVec;
pub use policy::MIN_CAPACITY;
pub use raw_grow_vec::RawGrowVec;

#[cfg(any(test, feature = "test_utils"))]
pub use behaviour::GrowVecBehaviour;
