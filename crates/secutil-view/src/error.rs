// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for view conversion.
use core::str::Utf8Error;

use thiserror::Error;

/// Errors from converting bytes to a text view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ViewError {
    /// The bytes are not valid UTF-8.
    #[error("invalid UTF-8 after {valid_up_to} valid bytes")]
    InvalidUtf8 {
        /// Length of the longest valid UTF-8 prefix.
        valid_up_to: usize,
        /// Length of the invalid sequence, or `None` if the input ends in
        /// the middle of a character.
        error_len: Option<usize>,
    },
}

impl From<Utf8Error> for ViewError {
    fn from(err: Utf8Error) -> Self {
        Self::InvalidUtf8 {
            valid_up_to: err.valid_up_to(),
            error_len: err.error_len(),
        }
    }
}
