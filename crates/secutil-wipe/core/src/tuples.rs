// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Tuples of arity 1 through 8, treated as aggregates.

use crate::collections::{
    check_collection, collection_wiped, to_wipe_probe_dyn_ref, to_wipeable_dyn_mut,
    to_wipeable_dyn_ref, wipe_collection,
};
use crate::engine::{wipe_flat, wipe_flat_referent};
use crate::error::WipeError;
use crate::shape::Shape;
use crate::traits::{Wipe, WipeMetadata, WipeProbe, Wipeable};

macro_rules! impl_wipe_for_tuple {
    ($len:literal; $($name:ident $idx:tt),+) => {
        unsafe impl<$($name: WipeMetadata),+> WipeMetadata for ($($name,)+) {
            const CAN_BE_BULK_WIPED: bool = true $(&& $name::CAN_BE_BULK_WIPED)+;
        }

        impl<$($name: Wipe),+> Wipeable for ($($name,)+) {
            fn shape(&self) -> Shape {
                Shape::Aggregate
            }

            fn check_wipe(&self) -> Result<(), WipeError> {
                let members: [&dyn Wipeable; $len] = [$(to_wipeable_dyn_ref(&self.$idx)),+];
                check_collection(&mut members.into_iter())
            }

            fn wipe_referent(&mut self) -> Result<(), WipeError> {
                wipe_flat_referent(self)
            }

            fn wipe_nested(&mut self) {
                if Self::CAN_BE_BULK_WIPED {
                    return;
                }

                let members: [&mut dyn Wipeable; $len] =
                    [$(to_wipeable_dyn_mut(&mut self.$idx)),+];
                wipe_collection(&mut members.into_iter());
            }

            fn wipe_storage(&mut self) {
                wipe_flat(self);
            }
        }

        impl<$($name: WipeProbe),+> WipeProbe for ($($name,)+) {
            fn is_wiped(&self) -> bool {
                let members: [&dyn WipeProbe; $len] = [$(to_wipe_probe_dyn_ref(&self.$idx)),+];
                collection_wiped(&mut members.into_iter())
            }
        }
    };
}

impl_wipe_for_tuple!(1; A 0);
impl_wipe_for_tuple!(2; A 0, B 1);
impl_wipe_for_tuple!(3; A 0, B 1, C 2);
impl_wipe_for_tuple!(4; A 0, B 1, C 2, D 3);
impl_wipe_for_tuple!(5; A 0, B 1, C 2, D 3, E 4);
impl_wipe_for_tuple!(6; A 0, B 1, C 2, D 3, E 4, F 5);
impl_wipe_for_tuple!(7; A 0, B 1, C 2, D 3, E 4, F 5, G 6);
impl_wipe_for_tuple!(8; A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);
