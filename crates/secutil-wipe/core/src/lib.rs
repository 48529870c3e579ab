// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # secutil-wipe-core
//!
//! Type-directed secure wipe. Given a value, locate the storage it owns and
//! overwrite it with zeroes, either shallowly (the value's own buffer, text or
//! pointee) or deeply (everything reachable through references, aggregates,
//! sequences, maps and tagged unions).
//!
//! The shape of a value is resolved at compile time through the
//! [`WipeMetadata`] and [`Wipeable`] traits rather than runtime reflection.
//! [`Wipeable`] is dyn-compatible, so trait objects behind a `Box` are walked
//! through their vtable.
//!
//! ```rust
//! use secutil_wipe_core::{WipeProbe, wipe, wipe_deep};
//!
//! // Shallow: a buffer is zeroed over its whole capacity.
//! let mut key = vec![0xdbu8; 32];
//! key.truncate(16);
//! wipe(&mut key).unwrap();
//! assert_eq!(key.len(), 16);
//! assert!(key.is_wiped());
//!
//! // Deep: nested storage is reached through the outer sequence.
//! let mut shares = vec![vec![1u8, 2, 3], vec![4, 5]];
//! wipe_deep(&mut shares).unwrap();
//! assert!(shares.is_wiped());
//! ```
//!
//! ## Read-only storage
//!
//! Every entry point takes `&mut`. Storage that cannot be borrowed mutably
//! (string literals, shared `Rc`/`Arc` pointees) is either rejected by the
//! compiler or reported as [`WipeError::ImmutableStorage`].

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod engine;
mod error;
mod maps;
mod pointers;
mod primitives;
mod sentinel;
mod shape;
mod traits;
mod tuples;
mod unions;
mod wiping_guard;

pub mod assert;
pub mod collections;

pub use engine::{wipe, wipe_deep, wipe_deep_unchecked, wipe_flat, wipe_flat_referent};
pub use error::WipeError;
pub use sentinel::WipeSentinel;
pub use shape::{Shape, WipeMode};
pub use traits::{AssertWipeOnDrop, Wipe, WipeMetadata, WipeProbe, Wipeable};
pub use wiping_guard::WipingGuard;
