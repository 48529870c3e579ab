// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Tagged unions from `core`: `Option<T>` and `Result<T, E>`.
//!
//! Only the active payload is visited. The discriminant is left alone, so a
//! `Some` stays `Some` with a wiped payload.

use crate::engine::wipe_deep_unchecked;
use crate::error::WipeError;
use crate::shape::Shape;
use crate::traits::{WipeMetadata, WipeProbe, Wipeable};

// === === === === === === === === === ===
// Option<T>
// === === === === === === === === === ===

// All-zero is not a valid `Option` for niche-optimized payloads.
unsafe impl<T> WipeMetadata for Option<T> {
    const CAN_BE_BULK_WIPED: bool = false;
}

impl<T: Wipeable> Wipeable for Option<T> {
    fn shape(&self) -> Shape {
        Shape::Union
    }

    fn check_wipe(&self) -> Result<(), WipeError> {
        match self {
            Some(value) => value.check_wipe(),
            None => Ok(()),
        }
    }

    fn wipe_nested(&mut self) {
        if let Some(value) = self {
            wipe_deep_unchecked(value);
        }
    }
}

impl<T: WipeProbe> WipeProbe for Option<T> {
    fn is_wiped(&self) -> bool {
        match self {
            Some(value) => value.is_wiped(),
            None => true,
        }
    }
}

// === === === === === === === === === ===
// Result<T, E>
// === === === === === === === === === ===

unsafe impl<T, E> WipeMetadata for Result<T, E> {
    const CAN_BE_BULK_WIPED: bool = false;
}

impl<T: Wipeable, E: Wipeable> Wipeable for Result<T, E> {
    fn shape(&self) -> Shape {
        Shape::Union
    }

    fn check_wipe(&self) -> Result<(), WipeError> {
        match self {
            Ok(value) => value.check_wipe(),
            Err(err) => err.check_wipe(),
        }
    }

    fn wipe_nested(&mut self) {
        match self {
            Ok(value) => wipe_deep_unchecked(value),
            Err(err) => wipe_deep_unchecked(err),
        }
    }
}

impl<T: WipeProbe, E: WipeProbe> WipeProbe for Result<T, E> {
    fn is_wiped(&self) -> bool {
        match self {
            Ok(value) => value.is_wiped(),
            Err(err) => err.is_wiped(),
        }
    }
}
