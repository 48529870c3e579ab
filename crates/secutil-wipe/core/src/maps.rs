// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Maps: `BTreeMap<K, V>` and, with the `std` feature, `HashMap<K, V, S>`.
//!
//! Maps only hand out `&K`, so a deep wipe cannot reach the keys. Values are
//! deep-wiped in place, then replaced by `V::default()`. Keys stay readable,
//! and memory the map freed while growing or removing entries is out of
//! reach. Keep secrets out of map keys.

use alloc::collections::BTreeMap;
use core::mem;

use crate::collections::{
    check_collection, collection_wiped, to_wipe_probe_dyn_ref, to_wipeable_dyn_ref,
};
use crate::engine::wipe_deep_unchecked;
use crate::error::WipeError;
use crate::shape::Shape;
use crate::traits::{Wipe, WipeMetadata, WipeProbe, Wipeable};

macro_rules! impl_wipe_for_map {
    ($map:ident < K, V $(, $state:ident)? >) => {
        // Owns heap nodes.
        unsafe impl<K, V $(, $state)?> WipeMetadata for $map<K, V $(, $state)?> {
            const CAN_BE_BULK_WIPED: bool = false;
        }

        impl<K, V: Wipe + Default $(, $state)?> Wipeable for $map<K, V $(, $state)?> {
            fn shape(&self) -> Shape {
                Shape::Map
            }

            fn check_wipe(&self) -> Result<(), WipeError> {
                check_collection(&mut self.values().map(to_wipeable_dyn_ref))
            }

            fn wipe_nested(&mut self) {
                for value in self.values_mut() {
                    wipe_deep_unchecked(value);
                }
            }

            fn wipe_storage(&mut self) {
                for value in self.values_mut() {
                    drop(mem::take(value));
                }
            }
        }

        impl<K, V: WipeProbe $(, $state)?> WipeProbe for $map<K, V $(, $state)?> {
            /// Checks the values only; keys are never wiped.
            fn is_wiped(&self) -> bool {
                collection_wiped(&mut self.values().map(to_wipe_probe_dyn_ref))
            }
        }
    };
}

impl_wipe_for_map!(BTreeMap<K, V>);

#[cfg(feature = "std")]
mod hash_map {
    use std::collections::HashMap;

    use super::*;

    impl_wipe_for_map!(HashMap<K, V, S>);
}
