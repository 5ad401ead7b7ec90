// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Test behaviour for injecting allocation failures into `GrowVec` and
/// `RawGrowVec`.
///
/// This is only available with the `test_utils` feature and allows users
/// to test error handling paths in their code without exhausting memory.
///
/// The behaviour is sticky - once set, it remains active until changed.
///
/// # Example
///
/// ```rust
/// // test_utils feature required in dev-dependencies
/// use growvec::{GrowVec, GrowVecBehaviour, GrowVecError};
///
/// #[cfg(test)]
/// mod tests {
///     use super::*;
///
///     #[test]
///     fn test_handles_allocation_failure() -> Result<(), GrowVecError> {
///         let mut vec = GrowVec::<u8, 1>::with_capacity(1)?;
///         vec.push(1)?;
///
///         // Inject failure
///         vec.change_behaviour(GrowVecBehaviour::FailAtGrow);
///
///         // The next push needs to grow, so it fails
///         assert!(vec.push(2).is_err());
///
///         // Reset to normal behaviour
///         vec.change_behaviour(GrowVecBehaviour::None);
///
///         // Now it works
///         vec.push(2)?;
///         Ok(())
///     }
/// }
/// ```
#[cfg(any(test, feature = "test_utils"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrowVecBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// Every growth reallocation fails with `AllocationFailure`.
    FailAtGrow,
    /// Every shrink reallocation fails with `AllocationFailure`.
    FailAtShrink,
}
