// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::GrowVecError;

#[test]
fn test_display_messages() {
    assert_eq!(
        GrowVecError::InvalidArgument("element size must be positive").to_string(),
        "invalid argument: element size must be positive"
    );
    assert_eq!(
        GrowVecError::OutOfRange { index: 3, count: 2 }.to_string(),
        "index 3 out of range for count 2"
    );
    assert_eq!(
        GrowVecError::EmptyContainer.to_string(),
        "container is empty"
    );
    assert_eq!(
        GrowVecError::AllocationFailure { capacity: 32 }.to_string(),
        "allocation failure: could not size buffer to 32 elements"
    );
}

#[test]
fn test_kinds_are_distinguishable() {
    let errors = [
        GrowVecError::InvalidArgument("x"),
        GrowVecError::OutOfRange { index: 0, count: 0 },
        GrowVecError::EmptyContainer,
        GrowVecError::AllocationFailure { capacity: 0 },
    ];

    for (i, a) in errors.iter().enumerate() {
        for (j, b) in errors.iter().enumerate() {
            assert_eq!(i == j, a == b, "{a:?} vs {b:?}");
        }
    }
}

#[test]
fn test_allocation_failure_constructor() {
    assert_eq!(
        GrowVecError::allocation_failure(64),
        GrowVecError::AllocationFailure { capacity: 64 }
    );
}
