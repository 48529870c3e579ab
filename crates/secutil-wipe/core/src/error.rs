// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for the wipe engine.
use thiserror::Error;

use crate::shape::{Shape, WipeMode};

/// Reasons a wipe is refused.
///
/// A refused wipe never writes: shallow wipes reject before touching memory,
/// deep wipes run a full validation pass first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WipeError {
    /// The value has no storage this wipe mode knows how to reach.
    #[error("{mode} wipe does not support {shape} values")]
    UnsupportedShape {
        /// Shape of the refused value.
        shape: Shape,
        /// Entry point that refused it.
        mode: WipeMode,
    },

    /// The storage is shared with other owners and cannot be written in place.
    #[error("{shape} storage is shared and cannot be wiped in place")]
    ImmutableStorage {
        /// Shape of the refused value.
        shape: Shape,
    },
}

impl WipeError {
    /// Builds [`WipeError::UnsupportedShape`].
    pub const fn unsupported_shape(shape: Shape, mode: WipeMode) -> Self {
        Self::UnsupportedShape { shape, mode }
    }

    /// Builds [`WipeError::ImmutableStorage`].
    pub const fn immutable_storage(shape: Shape) -> Self {
        Self::ImmutableStorage { shape }
    }
}
