// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Core traits for type-directed wiping.

use crate::error::WipeError;
use crate::sentinel::WipeSentinel;
use crate::shape::{Shape, WipeMode};

/// Compile-time wipe strategy for a type.
///
/// **Note:** This trait is NOT dyn-compatible (has associated constants).
/// Use [`Wipeable`] for trait objects.
///
/// # Safety
///
/// Setting `CAN_BE_BULK_WIPED = true` allows the engine to overwrite every
/// byte of the value with zero. Implementors must guarantee that:
/// - all-zero is a valid bit pattern for the type, and
/// - the type owns no resource (heap pointer, handle, refcount) whose loss
///   would corrupt its `Drop` or leak.
pub unsafe trait WipeMetadata {
    /// Whether this type can be wiped with a single memset.
    ///
    /// - `true`: primitives, arrays of primitives, aggregates made only of those
    /// - `false`: anything holding pointers, lengths or a niche discriminant
    const CAN_BE_BULK_WIPED: bool;
}

/// Runtime wipe operations, dyn-compatible.
///
/// A deep wipe is always `wipe_nested` followed by `wipe_storage`: children
/// first, so that lengths and pointers consulted during traversal are still
/// intact when they are read.
///
/// Most types get this through `#[derive(Wipe)]`.
pub trait Wipeable {
    /// Describes how this value is laid out for traversal.
    ///
    /// `&mut T` is itself [`Shape::Reference`], and method lookup on a
    /// `&mut T` binding picks that impl first: `slice.shape()` on a
    /// `&mut [u8]` is `Reference`. Call `(*slice).shape()` or
    /// `Wipeable::shape(&*slice)` to describe the pointee.
    fn shape(&self) -> Shape;

    /// Validates the whole reachable tree before a deep wipe writes anything.
    ///
    /// Compound types must forward to every child they would visit in
    /// [`wipe_nested`](Wipeable::wipe_nested).
    fn check_wipe(&self) -> Result<(), WipeError> {
        Ok(())
    }

    /// Zeroes the value's own directly addressable storage.
    ///
    /// Only scalars, buffers, text and references support this; every other
    /// shape refuses without writing.
    fn wipe_shallow(&mut self) -> Result<(), WipeError> {
        Err(WipeError::unsupported_shape(Wipeable::shape(&*self), WipeMode::Shallow))
    }

    /// Zeroes this value when it is the target of a reference being wiped
    /// shallowly.
    ///
    /// Defaults to [`wipe_shallow`](Wipeable::wipe_shallow). Flat aggregates
    /// override it to overwrite all of their bytes, the way a pointer to a
    /// plain struct can be zeroed in one pass.
    fn wipe_referent(&mut self) -> Result<(), WipeError> {
        self.wipe_shallow()
    }

    /// Deep-wipes every nested value this one owns. Does not touch the
    /// value's own flat storage.
    fn wipe_nested(&mut self) {}

    /// Zeroes the value's own flat storage once all nested values are wiped.
    fn wipe_storage(&mut self) {}
}

/// Combined trait for types with both wipe metadata and runtime wiping.
///
/// This is the bound collections put on their elements: the constant picks
/// between bulk memset and per-element recursion at compile time.
pub trait Wipe: WipeMetadata + Wipeable {}

// Blanket impl: any type implementing both sub-traits automatically gets Wipe
impl<T: WipeMetadata + Wipeable + ?Sized> Wipe for T {}

/// Trait for verifying that a value has been wiped.
///
/// ```rust
/// use secutil_wipe_core::{WipeProbe, wipe};
///
/// let mut pin: u32 = 1234;
/// assert!(!pin.is_wiped());
///
/// wipe(&mut pin).unwrap();
/// assert!(pin.is_wiped());
/// ```
pub trait WipeProbe {
    /// Returns `true` if every byte this value owns reads as zero.
    fn is_wiped(&self) -> bool;
}

/// Trait for types that verify a wipe happened before drop.
///
/// Types implementing this trait contain a [`WipeSentinel`]; derived through
/// `#[derive(Wipe)]` when a `__sentinel` field is present.
pub trait AssertWipeOnDrop {
    /// Clones the internal [`WipeSentinel`] for verification.
    fn clone_sentinel(&self) -> WipeSentinel;

    /// Asserts that the value is wiped when dropped.
    ///
    /// # Panics
    ///
    /// Panics if the sentinel was not wiped during drop.
    fn assert_wipe_on_drop(self);
}
