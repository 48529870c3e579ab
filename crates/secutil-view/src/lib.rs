// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # secutil-view
//!
//! Zero-copy views that reinterpret a mutable byte buffer as text and back.
//!
//! Converting between `Vec<u8>` and `String` through the usual owned APIs is
//! free, but going through `&[u8]` to `String` (or `to_vec`) copies the data,
//! and every copy of a secret is one more place to wipe. The views here
//! borrow the caller's storage instead: same pointer, same length, no
//! allocation.
//!
//! ```rust
//! use secutil_view::bytes_to_text_view;
//! use secutil_wipe_core::wipe;
//!
//! let mut buf = *b"hunter2";
//! let ptr = buf.as_ptr();
//!
//! let mut text = bytes_to_text_view(&mut buf).unwrap();
//! assert_eq!(&*text, "hunter2");
//! assert_eq!(text.as_ptr(), ptr);
//!
//! wipe(&mut text).unwrap();
//! assert_eq!(buf, [0u8; 7]);
//! ```
//!
//! Both views require `&mut` storage, so read-only text such as a string
//! literal cannot be viewed as bytes, and a view never outlives the borrow it
//! was made from.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod bytes_view;
mod error;
mod text_view;

pub use bytes_view::{BytesView, text_to_bytes_view};
pub use error::ViewError;
pub use text_view::{TextView, bytes_to_text_view, bytes_to_text_view_unchecked};
