// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! References: `Box<T>`, `&mut T`, `Rc<T>`, `Arc<T>` and raw pointers.
//!
//! A reference is never sensitive itself; wiping it means wiping what it
//! points to. The pointer value, and the allocation it designates, are left
//! untouched.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::sync::Arc;

use crate::engine::wipe_deep_unchecked;
use crate::error::WipeError;
use crate::shape::{Shape, WipeMode};
use crate::traits::{WipeMetadata, WipeProbe, Wipeable};

// === === === === === === === === === ===
// Box<T>, &mut T - unique references
// === === === === === === === === === ===

unsafe impl<T: ?Sized> WipeMetadata for Box<T> {
    const CAN_BE_BULK_WIPED: bool = false;
}

impl<T: Wipeable + ?Sized> Wipeable for Box<T> {
    fn shape(&self) -> Shape {
        Shape::Reference
    }

    fn check_wipe(&self) -> Result<(), WipeError> {
        (**self).check_wipe()
    }

    fn wipe_shallow(&mut self) -> Result<(), WipeError> {
        (**self).wipe_referent()
    }

    fn wipe_nested(&mut self) {
        wipe_deep_unchecked(&mut **self);
    }
}

impl<T: WipeProbe + ?Sized> WipeProbe for Box<T> {
    fn is_wiped(&self) -> bool {
        (**self).is_wiped()
    }
}

unsafe impl<T: ?Sized> WipeMetadata for &mut T {
    const CAN_BE_BULK_WIPED: bool = false;
}

impl<T: Wipeable + ?Sized> Wipeable for &mut T {
    fn shape(&self) -> Shape {
        Shape::Reference
    }

    fn check_wipe(&self) -> Result<(), WipeError> {
        (**self).check_wipe()
    }

    fn wipe_shallow(&mut self) -> Result<(), WipeError> {
        (**self).wipe_referent()
    }

    fn wipe_nested(&mut self) {
        wipe_deep_unchecked(&mut **self);
    }
}

impl<T: WipeProbe + ?Sized> WipeProbe for &mut T {
    fn is_wiped(&self) -> bool {
        (**self).is_wiped()
    }
}

// === === === === === === === === === ===
// Rc<T>, Arc<T> - shared references
// === === === === === === === === === ===

// The pointee is only writable while this handle is its sole owner (no other
// strong or weak handle). Anything else is reported as immutable storage.
macro_rules! impl_wipe_for_shared_ref {
    ($($ptr:ident),* $(,)?) => {
        $(
            unsafe impl<T: ?Sized> WipeMetadata for $ptr<T> {
                const CAN_BE_BULK_WIPED: bool = false;
            }

            impl<T: Wipeable + ?Sized> Wipeable for $ptr<T> {
                fn shape(&self) -> Shape {
                    Shape::Reference
                }

                fn check_wipe(&self) -> Result<(), WipeError> {
                    if $ptr::strong_count(self) != 1 || $ptr::weak_count(self) != 0 {
                        return Err(WipeError::immutable_storage(Shape::Reference));
                    }

                    (**self).check_wipe()
                }

                fn wipe_shallow(&mut self) -> Result<(), WipeError> {
                    match $ptr::get_mut(self) {
                        Some(inner) => inner.wipe_referent(),
                        None => Err(WipeError::immutable_storage(Shape::Reference)),
                    }
                }

                fn wipe_nested(&mut self) {
                    if let Some(inner) = $ptr::get_mut(self) {
                        wipe_deep_unchecked(inner);
                    }
                }
            }

            impl<T: WipeProbe + ?Sized> WipeProbe for $ptr<T> {
                fn is_wiped(&self) -> bool {
                    (**self).is_wiped()
                }
            }
        )*
    };
}

impl_wipe_for_shared_ref!(Rc, Arc);

// === === === === === === === === === ===
// *mut T, *const T - raw pointers
// === === === === === === === === === ===

// Nothing says who owns the pointee or how large it is, so a deep wipe
// refuses outright instead of silently skipping it. Mark such fields
// `#[wipe(skip)]` when the pointee is handled elsewhere.
macro_rules! impl_wipe_for_raw_ptr {
    ($($mutability:tt),* $(,)?) => {
        $(
            unsafe impl<T: ?Sized> WipeMetadata for *$mutability T {
                const CAN_BE_BULK_WIPED: bool = false;
            }

            impl<T: ?Sized> Wipeable for *$mutability T {
                fn shape(&self) -> Shape {
                    Shape::Opaque
                }

                fn check_wipe(&self) -> Result<(), WipeError> {
                    Err(WipeError::unsupported_shape(Shape::Opaque, WipeMode::Deep))
                }
            }
        )*
    };
}

impl_wipe_for_raw_ptr!(mut, const);
