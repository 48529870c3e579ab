// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Trait implementations and helpers for buffers, sequences and text
//! (slices, arrays, `Vec<T>`, `str`, `String`).
//!
//! A run of flat elements is a [`Shape::Buffer`] and is zeroed with one
//! memset. A run of compound elements is a [`Shape::Sequence`]: every element
//! is deep-wiped in index order, then only the spare capacity is zeroed, since
//! the element headers must stay valid until they are dropped.
use alloc::string::String;
use alloc::vec::Vec;

use core::sync::atomic::{Ordering, compiler_fence};

use crate::engine::wipe_deep_unchecked;
use crate::error::WipeError;
use crate::shape::{Shape, WipeMode};
use crate::traits::{Wipe, WipeMetadata, WipeProbe, Wipeable};

/// Converts a mutable reference to a trait object (`&mut dyn Wipeable`).
///
/// Helper for visiting heterogeneous members (struct fields, enum payloads).
#[inline(always)]
pub fn to_wipeable_dyn_mut<'a, T: Wipeable>(x: &'a mut T) -> &'a mut (dyn Wipeable + 'a) {
    x
}

/// Converts a reference to a trait object (`&dyn Wipeable`).
#[inline(always)]
pub fn to_wipeable_dyn_ref<'a, T: Wipeable>(x: &'a T) -> &'a (dyn Wipeable + 'a) {
    x
}

/// Converts a reference to a trait object (`&dyn WipeProbe`).
#[inline(always)]
pub fn to_wipe_probe_dyn_ref<'a, T: WipeProbe>(x: &'a T) -> &'a (dyn WipeProbe + 'a) {
    x
}

/// Deep-wipes every member yielded by the iterator, in order.
pub fn wipe_collection(collection_iter: &mut dyn Iterator<Item = &mut dyn Wipeable>) {
    for member in collection_iter {
        wipe_deep_unchecked(member);
        compiler_fence(Ordering::SeqCst);
    }
}

/// Validates every member yielded by the iterator, stopping at the first
/// refusal.
pub fn check_collection(
    collection_iter: &mut dyn Iterator<Item = &dyn Wipeable>,
) -> Result<(), WipeError> {
    for member in collection_iter {
        member.check_wipe()?;
    }

    Ok(())
}

/// Returns `true` if every member yielded by the iterator is wiped.
pub fn collection_wiped(collection_iter: &mut dyn Iterator<Item = &dyn WipeProbe>) -> bool {
    for member in collection_iter {
        if !member.is_wiped() {
            return false;
        }
    }

    true
}

#[inline(always)]
const fn run_shape<T: WipeMetadata>() -> Shape {
    if T::CAN_BE_BULK_WIPED {
        Shape::Buffer
    } else {
        Shape::Sequence
    }
}

// === === === === === === === === === ===
// [T] - slices
// === === === === === === === === === ===

/// Wipes a slice either with a single memset or element by element.
///
/// When `bulk=true`, forces the memset regardless of `T::CAN_BE_BULK_WIPED`;
/// callers must only pass `true` for flat element types.
#[inline(always)]
pub(crate) fn slice_wipe<T: Wipe>(slice: &mut [T], bulk: bool) {
    if bulk {
        // SAFETY: callers only request the bulk path for flat element types.
        unsafe { secutil_util::wipe_slice(slice) };
        compiler_fence(Ordering::SeqCst);
    } else {
        for elem in slice.iter_mut() {
            wipe_deep_unchecked(elem);
            compiler_fence(Ordering::SeqCst);
        }
    }
}

fn slice_check<T: Wipe>(slice: &[T]) -> Result<(), WipeError> {
    if T::CAN_BE_BULK_WIPED {
        return Ok(());
    }

    check_collection(&mut slice.iter().map(to_wipeable_dyn_ref))
}

unsafe impl<T: WipeMetadata> WipeMetadata for [T] {
    const CAN_BE_BULK_WIPED: bool = T::CAN_BE_BULK_WIPED;
}

impl<T: Wipe> Wipeable for [T] {
    fn shape(&self) -> Shape {
        run_shape::<T>()
    }

    fn check_wipe(&self) -> Result<(), WipeError> {
        slice_check(self)
    }

    fn wipe_shallow(&mut self) -> Result<(), WipeError> {
        if !T::CAN_BE_BULK_WIPED {
            return Err(WipeError::unsupported_shape(Shape::Sequence, WipeMode::Shallow));
        }

        slice_wipe(self, true);
        Ok(())
    }

    fn wipe_nested(&mut self) {
        if !T::CAN_BE_BULK_WIPED {
            slice_wipe(self, false);
        }
    }

    fn wipe_storage(&mut self) {
        if T::CAN_BE_BULK_WIPED {
            slice_wipe(self, true);
        }
    }
}

impl<T: WipeProbe> WipeProbe for [T] {
    fn is_wiped(&self) -> bool {
        collection_wiped(&mut self.iter().map(to_wipe_probe_dyn_ref))
    }
}

// === === === === === === === === === ===
// [T; N] - arrays
// === === === === === === === === === ===

unsafe impl<T: WipeMetadata, const N: usize> WipeMetadata for [T; N] {
    // Arrays inherit bulk-wipe capability from their element type
    const CAN_BE_BULK_WIPED: bool = T::CAN_BE_BULK_WIPED;
}

impl<T: Wipe, const N: usize> Wipeable for [T; N] {
    fn shape(&self) -> Shape {
        run_shape::<T>()
    }

    fn check_wipe(&self) -> Result<(), WipeError> {
        slice_check(self)
    }

    fn wipe_shallow(&mut self) -> Result<(), WipeError> {
        self.as_mut_slice().wipe_shallow()
    }

    fn wipe_nested(&mut self) {
        self.as_mut_slice().wipe_nested();
    }

    fn wipe_storage(&mut self) {
        self.as_mut_slice().wipe_storage();
    }
}

impl<T: WipeProbe, const N: usize> WipeProbe for [T; N] {
    fn is_wiped(&self) -> bool {
        self.as_slice().is_wiped()
    }
}

// === === === === === === === === === ===
// Vec<T>
// === === === === === === === === === ===

/// Wipes a Vec either with a single memset over the whole allocation or
/// element by element followed by its spare capacity.
///
/// When `bulk=true`, forces the memset of `[0, capacity)` regardless of
/// `T::CAN_BE_BULK_WIPED`.
#[inline(always)]
pub(crate) fn vec_wipe<T: Wipe>(vec: &mut Vec<T>, bulk: bool) {
    if bulk {
        // SAFETY: callers only request the bulk path for flat element types.
        unsafe { secutil_util::wipe_vec_capacity(vec) };
        compiler_fence(Ordering::SeqCst);
    } else {
        for elem in vec.iter_mut() {
            wipe_deep_unchecked(elem);
            compiler_fence(Ordering::SeqCst);
        }
        secutil_util::wipe_spare_capacity(vec);
        compiler_fence(Ordering::SeqCst);
    }
}

unsafe impl<T> WipeMetadata for Vec<T> {
    // Vec can NEVER be bulk-wiped from outside (has ptr/len/capacity)
    const CAN_BE_BULK_WIPED: bool = false;
}

impl<T: Wipe> Wipeable for Vec<T> {
    fn shape(&self) -> Shape {
        run_shape::<T>()
    }

    fn check_wipe(&self) -> Result<(), WipeError> {
        slice_check(self)
    }

    fn wipe_shallow(&mut self) -> Result<(), WipeError> {
        if !T::CAN_BE_BULK_WIPED {
            return Err(WipeError::unsupported_shape(Shape::Sequence, WipeMode::Shallow));
        }

        vec_wipe(self, true);
        Ok(())
    }

    fn wipe_nested(&mut self) {
        if !T::CAN_BE_BULK_WIPED {
            slice_wipe(self, false);
        }
    }

    fn wipe_storage(&mut self) {
        if T::CAN_BE_BULK_WIPED {
            vec_wipe(self, true);
        } else {
            secutil_util::wipe_spare_capacity(self);
            compiler_fence(Ordering::SeqCst);
        }
    }
}

impl<T: WipeProbe> WipeProbe for Vec<T> {
    /// Returns true if all elements AND spare capacity are zeroed.
    ///
    /// Only meaningful after a wipe: freshly reserved capacity may hold
    /// arbitrary bytes even if nothing sensitive was ever stored there.
    fn is_wiped(&self) -> bool {
        self.as_slice().is_wiped() && secutil_util::is_spare_capacity_zeroed(self)
    }
}

// === === === === === === === === === ===
// str
// === === === === === === === === === ===

// All-zero bytes are valid UTF-8 and `str` owns nothing.
unsafe impl WipeMetadata for str {
    const CAN_BE_BULK_WIPED: bool = true;
}

impl Wipeable for str {
    fn shape(&self) -> Shape {
        Shape::Text
    }

    fn wipe_shallow(&mut self) -> Result<(), WipeError> {
        self.wipe_storage();
        Ok(())
    }

    fn wipe_storage(&mut self) {
        // SAFETY: zero bytes keep the text valid UTF-8.
        unsafe { secutil_util::zero_value_bytes(self) };
    }
}

impl WipeProbe for str {
    fn is_wiped(&self) -> bool {
        secutil_util::is_slice_zeroed(self.as_bytes())
    }
}

// === === === === === === === === === ===
// String
// === === === === === === === === === ===

unsafe impl WipeMetadata for String {
    // String can NEVER be bulk-wiped from outside (has ptr/len/capacity)
    const CAN_BE_BULK_WIPED: bool = false;
}

impl Wipeable for String {
    fn shape(&self) -> Shape {
        Shape::Text
    }

    fn wipe_shallow(&mut self) -> Result<(), WipeError> {
        self.wipe_storage();
        Ok(())
    }

    fn wipe_storage(&mut self) {
        // SAFETY: zero bytes keep the text valid UTF-8; the spare capacity is
        // never observed as text.
        unsafe {
            let bytes = self.as_mut_vec();
            secutil_util::wipe_vec_capacity(bytes);
        }
        compiler_fence(Ordering::SeqCst);
    }
}

impl WipeProbe for String {
    fn is_wiped(&self) -> bool {
        secutil_util::is_slice_zeroed(self.as_bytes())
    }
}

/// Returns `true` if the bytes between `len` and `capacity` of a `String`
/// are zero.
///
/// Only meaningful after a wipe: freshly reserved capacity may hold
/// arbitrary bytes.
pub fn is_string_spare_capacity_zeroed(text: &mut String) -> bool {
    // SAFETY: the vector is only read, so the text stays valid UTF-8.
    let bytes = unsafe { text.as_mut_vec() };
    secutil_util::is_spare_capacity_zeroed(bytes)
}
