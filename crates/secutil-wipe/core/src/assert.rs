// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test helpers for verifying wipe-on-drop behavior.

use super::traits::AssertWipeOnDrop;

/// Asserts that a value wipes itself when dropped.
///
/// Clones the value's [`WipeSentinel`](crate::WipeSentinel), resets it,
/// drops the value and checks the clone was marked.
///
/// # Panics
///
/// Panics if the value's `Drop` did not wipe it.
pub fn assert_wipe_on_drop<T: AssertWipeOnDrop>(value: T) {
    let mut sentinel = value.clone_sentinel();

    sentinel.reset();

    assert!(!sentinel.is_wiped());
    drop(value);
    assert!(sentinel.is_wiped());
}
