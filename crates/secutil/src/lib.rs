// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # secutil
//!
//! Utilities for handling sensitive data in memory:
//!
//! - [`view`]: zero-copy views that reinterpret a mutable byte buffer as text
//!   and back, so a secret never gets an uncontrolled copy on the way.
//! - [`wipe`]: type-directed secure wipe. A shallow wipe zeroes a value's own
//!   buffer, text or pointee; a deep wipe follows references, aggregates,
//!   sequences, maps and tagged unions down to every leaf.
//!
//! # Quick Start
//!
//! ```rust
//! use secutil::wipe::{Wipe, WipeProbe};
//! use secutil::{bytes_to_text_view, wipe_deep};
//!
//! #[derive(Wipe)]
//! struct Login {
//!     user: String,
//!     password: Vec<u8>,
//! }
//!
//! let mut login = Login {
//!     user: String::from("admin"),
//!     password: b"hunter2".to_vec(),
//! };
//!
//! // Read the password as text without copying it.
//! let text = bytes_to_text_view(&mut login.password).unwrap();
//! assert_eq!(&*text, "hunter2");
//!
//! wipe_deep(&mut login).unwrap();
//! assert!(login.is_wiped());
//! ```
//!
//! # What is not covered
//!
//! Copies made before a value reached this crate, pages swapped out by the
//! operating system and map keys are out of reach.
//!
//! # Features
//!
//! - `std` (default): `HashMap` support
//! - `derive` (default): `#[derive(Wipe)]`
//! - `tracing`: emit a `debug` event whenever a wipe is refused

#![cfg_attr(not(test), no_std)]

pub use secutil_util as util;
pub use secutil_view as view;
pub use secutil_wipe as wipe;

pub use secutil_view::{
    BytesView, TextView, ViewError, bytes_to_text_view, bytes_to_text_view_unchecked,
    text_to_bytes_view,
};
pub use secutil_wipe::{WipeError, wipe, wipe_deep};
