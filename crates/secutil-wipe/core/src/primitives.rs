// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Scalars and zero-sized markers.

use core::marker::PhantomData;

use secutil_util::wipe_primitive;

use crate::error::WipeError;
use crate::shape::Shape;
use crate::traits::{WipeMetadata, WipeProbe, Wipeable};

macro_rules! impl_wipe_for_scalar {
    (@impl $ty:ty, |$value:ident| $probe:expr) => {
        unsafe impl WipeMetadata for $ty {
            const CAN_BE_BULK_WIPED: bool = true;
        }

        impl Wipeable for $ty {
            #[inline(always)]
            fn shape(&self) -> Shape {
                Shape::Scalar
            }

            #[inline(always)]
            fn wipe_shallow(&mut self) -> Result<(), WipeError> {
                wipe_primitive(self);
                Ok(())
            }

            #[inline(always)]
            fn wipe_storage(&mut self) {
                wipe_primitive(self);
            }
        }

        impl WipeProbe for $ty {
            #[inline(always)]
            fn is_wiped(&self) -> bool {
                let $value = self;
                $probe
            }
        }
    };
    (float: $($ty:ty),* $(,)?) => {
        // `-0.0 == 0.0`, but its sign bit is set.
        $(impl_wipe_for_scalar!(@impl $ty, |value| value.to_bits() == 0);)*
    };
    ($($ty:ty),* $(,)?) => {
        $(impl_wipe_for_scalar!(@impl $ty, |value| *value == <$ty>::default());)*
    };
}

impl_wipe_for_scalar!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool, char,
);
impl_wipe_for_scalar!(float: f32, f64);

// Zero-sized values own no bytes; wiping them always succeeds.

unsafe impl WipeMetadata for () {
    const CAN_BE_BULK_WIPED: bool = true;
}

impl Wipeable for () {
    fn shape(&self) -> Shape {
        Shape::Scalar
    }

    fn wipe_shallow(&mut self) -> Result<(), WipeError> {
        Ok(())
    }
}

impl WipeProbe for () {
    fn is_wiped(&self) -> bool {
        true
    }
}

unsafe impl<T: ?Sized> WipeMetadata for PhantomData<T> {
    const CAN_BE_BULK_WIPED: bool = true;
}

impl<T: ?Sized> Wipeable for PhantomData<T> {
    fn shape(&self) -> Shape {
        Shape::Scalar
    }

    fn wipe_shallow(&mut self) -> Result<(), WipeError> {
        Ok(())
    }
}

impl<T: ?Sized> WipeProbe for PhantomData<T> {
    fn is_wiped(&self) -> bool {
        true
    }
}
