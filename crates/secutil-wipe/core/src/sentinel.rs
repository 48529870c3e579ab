// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Runtime evidence that a value was wiped before it was dropped.

use alloc::sync::Arc;
use core::sync::atomic::{AtomicBool, Ordering};

use crate::error::WipeError;
use crate::shape::Shape;
use crate::traits::{WipeMetadata, Wipeable};

/// Shared flag recording whether the owning value has been wiped.
///
/// Clones share the same flag: clone it before dropping the owner, then ask
/// the clone. Dropping a sentinel does not mark it; only a wipe does, so a
/// type that forgets to wipe itself in `Drop` is caught.
///
/// ```rust
/// use secutil_wipe_core::{WipeSentinel, wipe};
///
/// let mut sentinel = WipeSentinel::default();
/// let observer = sentinel.clone();
///
/// assert!(!observer.is_wiped());
/// wipe(&mut sentinel).unwrap();
/// assert!(observer.is_wiped());
/// ```
#[derive(Clone, Debug)]
pub struct WipeSentinel(Arc<AtomicBool>);

impl PartialEq for WipeSentinel {
    fn eq(&self, other: &Self) -> bool {
        self.0.load(Ordering::Relaxed) == other.0.load(Ordering::Relaxed)
    }
}

impl Eq for WipeSentinel {}

impl WipeSentinel {
    /// Puts the sentinel (and every clone) back in the "not wiped" state.
    pub fn reset(&mut self) {
        self.0.store(false, Ordering::Relaxed);
    }

    /// Returns `true` once the sentinel, or any of its clones, was wiped.
    pub fn is_wiped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    fn mark_wiped(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

impl Default for WipeSentinel {
    fn default() -> Self {
        Self(Arc::new(AtomicBool::new(false)))
    }
}

// Holds an `Arc`, never memset.
unsafe impl WipeMetadata for WipeSentinel {
    const CAN_BE_BULK_WIPED: bool = false;
}

impl Wipeable for WipeSentinel {
    fn shape(&self) -> Shape {
        Shape::Scalar
    }

    fn wipe_shallow(&mut self) -> Result<(), WipeError> {
        self.mark_wiped();
        Ok(())
    }

    fn wipe_storage(&mut self) {
        self.mark_wiped();
    }
}
