// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # secutil-wipe
//!
//! Shallow and deep secure wipe of in-memory values.
//!
//! This is a re-export crate that combines [`secutil-wipe-core`] and
//! [`secutil-wipe-derive`] for convenience.
//!
//! ## Quick Start
//!
//! ```rust
//! use secutil_wipe::{AssertWipeOnDrop, Wipe, WipeProbe, WipeSentinel, wipe_deep};
//!
//! #[derive(Wipe)]
//! #[wipe(drop)]
//! struct ApiKey {
//!     key: Vec<u8>,
//!     scopes: Vec<String>,
//!     __sentinel: WipeSentinel,
//! }
//!
//! let mut api_key = ApiKey {
//!     key: b"sk_live_...".to_vec(),
//!     scopes: vec![String::from("read")],
//!     __sentinel: WipeSentinel::default(),
//! };
//!
//! wipe_deep(&mut api_key).unwrap();
//! assert!(api_key.is_wiped());
//!
//! // Verify wiping happens on drop
//! api_key.assert_wipe_on_drop();
//! ```
//!
//! ## What's Included
//!
//! - **Entry points**: [`wipe`], [`wipe_deep`], [`wipe_deep_unchecked`]
//! - **Traits**: [`Wipe`], [`Wipeable`], [`WipeMetadata`], [`WipeProbe`], [`AssertWipeOnDrop`]
//! - **Types**: [`Shape`], [`WipeMode`], [`WipeError`], [`WipeSentinel`], [`WipingGuard`]
//! - **Derive macro**: `#[derive(Wipe)]` (feature `derive`, on by default)
//! - **Test helpers**: [`assert_wipe_on_drop()`](assert::assert_wipe_on_drop)
//!
//! ## Features
//!
//! - `std` (default): `HashMap` support
//! - `derive` (default): the `Wipe` derive macro
//! - `tracing`: emit a `debug` event whenever a wipe is refused
//!
//! [`secutil-wipe-core`]: secutil_wipe_core
//! [`secutil-wipe-derive`]: https://docs.rs/secutil-wipe-derive

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub use secutil_wipe_core::*;
#[cfg(feature = "derive")]
pub use secutil_wipe_derive::*;
