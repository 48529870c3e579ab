// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Wipe entry points.

use core::sync::atomic::{Ordering, compiler_fence};

use crate::error::WipeError;
use crate::shape::WipeMode;
use crate::traits::{Wipe, WipeMetadata, Wipeable};

/// Shallow wipe: zeroes the value's own storage.
///
/// | Shape | Zeroed range |
/// |---|---|
/// | scalar | the value's bytes |
/// | buffer | `[0, capacity)`, length and capacity kept |
/// | text | `[0, len)` (plus spare capacity for `String`), length kept |
/// | reference | the pointee |
///
/// Aggregates, sequences, maps, unions and opaque values are refused with
/// [`WipeError::UnsupportedShape`] before anything is written.
///
/// ```rust
/// use secutil_wipe_core::{Shape, WipeError, WipeMode, wipe};
///
/// let mut buf = vec![0xdbu8, 0xdb];
/// buf.truncate(1);
/// wipe(&mut buf).unwrap();
/// assert_eq!((buf.len(), buf.capacity()), (1, 2));
///
/// let mut pair = (1u8, vec![2u8]);
/// assert_eq!(
///     wipe(&mut pair),
///     Err(WipeError::UnsupportedShape { shape: Shape::Aggregate, mode: WipeMode::Shallow })
/// );
/// ```
pub fn wipe<T: Wipeable + ?Sized>(value: &mut T) -> Result<(), WipeError> {
    value.wipe_shallow().inspect_err(log_refused)
}

/// Deep wipe: zeroes everything reachable from the value.
///
/// Runs [`Wipeable::check_wipe`] over the whole tree first, so a refused wipe
/// leaves every byte untouched. Then children are wiped before their parent's
/// own storage.
///
/// Map values are replaced by their `Default` after being wiped in place;
/// map keys are never reachable mutably and are left as is.
pub fn wipe_deep<T: Wipeable + ?Sized>(value: &mut T) -> Result<(), WipeError> {
    value.check_wipe().inspect_err(log_refused)?;
    wipe_deep_unchecked(value);
    Ok(())
}

/// Deep wipe without the validation pass.
///
/// Used by generated `Drop` impls and by the traversal itself. Values that
/// [`wipe_deep`] would refuse (opaque leaves, shared `Rc`/`Arc`) are skipped.
#[inline]
pub fn wipe_deep_unchecked<T: Wipeable + ?Sized>(value: &mut T) {
    value.wipe_nested();
    compiler_fence(Ordering::SeqCst);
    value.wipe_storage();
    compiler_fence(Ordering::SeqCst);
}

/// Overwrites every byte of `value` when its type is bulk-wipeable.
///
/// Returns `false`, writing nothing, for other types.
#[inline(always)]
pub fn wipe_flat<T: WipeMetadata>(value: &mut T) -> bool {
    if !T::CAN_BE_BULK_WIPED {
        return false;
    }

    // SAFETY: `WipeMetadata` is an unsafe trait; `CAN_BE_BULK_WIPED` promises
    // all-zero is valid for `T` and that `T` owns no resources.
    unsafe { secutil_util::zero_value_bytes(value) };
    true
}

/// [`Wipeable::wipe_referent`] for aggregates: zero the whole value if it is
/// flat, refuse otherwise.
#[inline]
pub fn wipe_flat_referent<T: Wipe>(value: &mut T) -> Result<(), WipeError> {
    if wipe_flat(value) {
        Ok(())
    } else {
        Err(WipeError::unsupported_shape(Wipeable::shape(&*value), WipeMode::Shallow))
    }
}

#[cfg(feature = "tracing")]
fn log_refused(err: &WipeError) {
    tracing::debug!(error = %err, "wipe refused");
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
fn log_refused(_err: &WipeError) {}
