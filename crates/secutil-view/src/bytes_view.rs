// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Mutable byte view over text.

use core::fmt;
use core::ops::{Deref, DerefMut};

use secutil_wipe_core::{Shape, WipeError, WipeMetadata, WipeProbe, Wipeable};

use crate::error::ViewError;
use crate::text_view::{TextView, bytes_to_text_view};

/// Bytes backed by the same memory as the text they were made from.
///
/// Dereferences to `[u8]`, mutably. `Debug` is redacted.
pub struct BytesView<'a> {
    bytes: &'a mut [u8],
}

/// Views `text` as mutable bytes without copying it.
///
/// The returned view starts at the same address and has the same length as
/// `text`.
///
/// # Safety
///
/// Writes through the view can break UTF-8. The caller must leave valid
/// UTF-8 behind before the borrow of `text` ends. Writing zeroes, as a wipe
/// does, always keeps it valid.
///
/// ```rust
/// use secutil_view::text_to_bytes_view;
///
/// let mut text = String::from("secret");
/// let mut bytes = unsafe { text_to_bytes_view(text.as_mut_str()) };
/// bytes.fill(0);
/// assert_eq!(text, "\0\0\0\0\0\0");
/// ```
pub unsafe fn text_to_bytes_view(text: &mut str) -> BytesView<'_> {
    // SAFETY: guaranteed by the caller.
    let bytes = unsafe { text.as_bytes_mut() };
    BytesView { bytes }
}

impl<'a> BytesView<'a> {
    /// Address of the first byte, shared with the source text.
    pub fn as_ptr(&self) -> *const u8 {
        self.bytes.as_ptr()
    }

    /// Length in bytes, equal to the source text's.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the view has a length of zero bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Turns the view back into a text view over the same storage,
    /// validating the bytes first.
    ///
    /// # Errors
    ///
    /// [`ViewError::InvalidUtf8`] if the bytes were left invalid.
    pub fn into_text_view(self) -> Result<TextView<'a>, ViewError> {
        bytes_to_text_view(self.bytes)
    }
}

impl Deref for BytesView<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.bytes
    }
}

impl DerefMut for BytesView<'_> {
    fn deref_mut(&mut self) -> &mut [u8] {
        self.bytes
    }
}

impl fmt::Debug for BytesView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED BytesView; {} bytes]", self.bytes.len())
    }
}

// Borrows its storage, so the view itself is never memset.
unsafe impl WipeMetadata for BytesView<'_> {
    const CAN_BE_BULK_WIPED: bool = false;
}

impl Wipeable for BytesView<'_> {
    fn shape(&self) -> Shape {
        Shape::Buffer
    }

    fn wipe_shallow(&mut self) -> Result<(), WipeError> {
        self.bytes.wipe_shallow()
    }

    fn wipe_storage(&mut self) {
        self.bytes.wipe_storage();
    }
}

impl WipeProbe for BytesView<'_> {
    fn is_wiped(&self) -> bool {
        self.bytes.is_wiped()
    }
}
