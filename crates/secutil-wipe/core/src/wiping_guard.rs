// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! RAII guard for owned values that are deep-wiped on drop.

use alloc::boxed::Box;
use core::fmt;
use core::mem;
use core::ops::{Deref, DerefMut};

use crate::assert::assert_wipe_on_drop;
use crate::engine::wipe_deep_unchecked;
use crate::error::WipeError;
use crate::sentinel::WipeSentinel;
use crate::shape::Shape;
use crate::traits::{AssertWipeOnDrop, Wipe, WipeMetadata, WipeProbe, Wipeable};

/// Owns a value on the heap and deep-wipes it when dropped.
///
/// Useful for returning secrets from functions: the caller cannot forget the
/// cleanup. The guard's `Debug` output never shows the value.
///
/// ```rust
/// use secutil_wipe_core::{WipeProbe, WipingGuard};
///
/// fn load_key() -> WipingGuard<Vec<u8>> {
///     let mut key = vec![0x42u8; 32];
///     WipingGuard::from_mut(&mut key)
/// }
///
/// let key = load_key();
/// assert_eq!(key.len(), 32);
/// ```
pub struct WipingGuard<T>
where
    T: Wipe + WipeProbe + Default,
{
    inner: Box<T>,
    __sentinel: WipeSentinel,
}

impl<T> fmt::Debug for WipingGuard<T>
where
    T: Wipe + WipeProbe + Default,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED WipingGuard]")
    }
}

impl<T> WipingGuard<T>
where
    T: Wipe + WipeProbe + Default,
{
    /// Moves `value` into a new guard.
    ///
    /// `value` may already have been copied around on the stack; prefer
    /// [`from_mut`](Self::from_mut) when the source should be wiped too.
    pub fn new(value: T) -> Self {
        Self {
            inner: Box::new(value),
            __sentinel: WipeSentinel::default(),
        }
    }

    /// Swaps the value out of `value` into the guard, then wipes the source
    /// location.
    ///
    /// ```rust
    /// use secutil_wipe_core::{WipeProbe, WipingGuard};
    ///
    /// let mut pin = 4242u32;
    /// let guard = WipingGuard::from_mut(&mut pin);
    /// assert_eq!(*guard, 4242);
    /// assert!(pin.is_wiped());
    /// ```
    pub fn from_mut(value: &mut T) -> Self {
        let mut boxed = Box::new(T::default());
        mem::swap(&mut *boxed, value);
        wipe_deep_unchecked(value);

        Self {
            inner: boxed,
            __sentinel: WipeSentinel::default(),
        }
    }

    /// Creates a guard holding `T::default()`.
    #[inline(always)]
    pub fn from_default() -> Self {
        let mut value = T::default();
        Self::from_mut(&mut value)
    }

    /// Takes the value back out of the guard.
    ///
    /// The caller becomes responsible for wiping it.
    pub fn into_inner(mut self) -> T {
        mem::take(&mut *self.inner)
    }
}

impl<T> Deref for WipingGuard<T>
where
    T: Wipe + WipeProbe + Default,
{
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> DerefMut for WipingGuard<T>
where
    T: Wipe + WipeProbe + Default,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

// Owns a heap allocation.
unsafe impl<T> WipeMetadata for WipingGuard<T>
where
    T: Wipe + WipeProbe + Default,
{
    const CAN_BE_BULK_WIPED: bool = false;
}

impl<T> Wipeable for WipingGuard<T>
where
    T: Wipe + WipeProbe + Default,
{
    fn shape(&self) -> Shape {
        Shape::Reference
    }

    fn check_wipe(&self) -> Result<(), WipeError> {
        self.inner.check_wipe()
    }

    fn wipe_shallow(&mut self) -> Result<(), WipeError> {
        self.inner.wipe_referent()?;
        self.__sentinel.wipe_storage();
        Ok(())
    }

    fn wipe_nested(&mut self) {
        wipe_deep_unchecked(&mut *self.inner);
    }

    fn wipe_storage(&mut self) {
        self.__sentinel.wipe_storage();
    }
}

impl<T> AssertWipeOnDrop for WipingGuard<T>
where
    T: Wipe + WipeProbe + Default,
{
    fn clone_sentinel(&self) -> WipeSentinel {
        self.__sentinel.clone()
    }

    fn assert_wipe_on_drop(self) {
        assert_wipe_on_drop(self);
    }
}

impl<T> WipeProbe for WipingGuard<T>
where
    T: Wipe + WipeProbe + Default,
{
    fn is_wiped(&self) -> bool {
        self.inner.is_wiped()
    }
}

impl<T> Drop for WipingGuard<T>
where
    T: Wipe + WipeProbe + Default,
{
    fn drop(&mut self) {
        wipe_deep_unchecked(self);
    }
}
