// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Text view over a mutable byte buffer.

use core::fmt;
use core::ops::{Deref, DerefMut};

use secutil_wipe_core::{Shape, WipeError, WipeMetadata, WipeProbe, Wipeable};

use crate::bytes_view::BytesView;
use crate::error::ViewError;

/// Text backed by the same memory as the byte buffer it was made from.
///
/// Dereferences to `str`. `Debug` is redacted; use `Deref` to print the
/// contents on purpose.
pub struct TextView<'a> {
    text: &'a mut str,
}

/// Views `buf` as text without copying it.
///
/// The bytes are validated in place. The returned view starts at the same
/// address and has the same length as `buf`.
///
/// # Errors
///
/// [`ViewError::InvalidUtf8`] if `buf` is not valid UTF-8. Nothing is
/// copied or modified in that case.
///
/// ```rust
/// use secutil_view::{ViewError, bytes_to_text_view};
///
/// let mut buf = vec![b'o', b'k', 0xff];
/// assert_eq!(
///     bytes_to_text_view(&mut buf).unwrap_err(),
///     ViewError::InvalidUtf8 { valid_up_to: 2, error_len: Some(1) }
/// );
/// ```
pub fn bytes_to_text_view(buf: &mut [u8]) -> Result<TextView<'_>, ViewError> {
    let text = core::str::from_utf8_mut(buf)?;
    Ok(TextView { text })
}

/// Views `buf` as text without copying or validating it.
///
/// # Safety
///
/// `buf` must be valid UTF-8.
pub unsafe fn bytes_to_text_view_unchecked(buf: &mut [u8]) -> TextView<'_> {
    // SAFETY: guaranteed by the caller.
    let text = unsafe { core::str::from_utf8_unchecked_mut(buf) };
    TextView { text }
}

impl<'a> TextView<'a> {
    /// Address of the first byte, shared with the source buffer.
    pub fn as_ptr(&self) -> *const u8 {
        self.text.as_ptr()
    }

    /// Length in bytes, equal to the source buffer's.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the view has a length of zero bytes.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Turns the view back into a mutable byte view over the same storage.
    ///
    /// # Safety
    ///
    /// The bytes must be valid UTF-8 again by the time the borrow of the
    /// original storage ends, if that storage is used as `str` afterwards.
    pub unsafe fn into_bytes_view(self) -> BytesView<'a> {
        // SAFETY: forwarded to the caller.
        unsafe { crate::bytes_view::text_to_bytes_view(self.text) }
    }
}

impl Deref for TextView<'_> {
    type Target = str;

    fn deref(&self) -> &str {
        self.text
    }
}

impl DerefMut for TextView<'_> {
    fn deref_mut(&mut self) -> &mut str {
        self.text
    }
}

impl fmt::Debug for TextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED TextView; {} bytes]", self.text.len())
    }
}

// Borrows its storage, so the view itself is never memset.
unsafe impl WipeMetadata for TextView<'_> {
    const CAN_BE_BULK_WIPED: bool = false;
}

impl Wipeable for TextView<'_> {
    fn shape(&self) -> Shape {
        Shape::Text
    }

    fn wipe_shallow(&mut self) -> Result<(), WipeError> {
        self.text.wipe_shallow()
    }

    fn wipe_storage(&mut self) {
        self.text.wipe_storage();
    }
}

impl WipeProbe for TextView<'_> {
    fn is_wiped(&self) -> bool {
        self.text.is_wiped()
    }
}
