// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::ToString;
use alloc::vec::Vec;
use core::cell::RefCell;

use crate::collections::{
    check_collection, collection_wiped, to_wipe_probe_dyn_ref, to_wipeable_dyn_mut,
    to_wipeable_dyn_ref, wipe_collection,
};
use crate::error::WipeError;
use crate::shape::{Shape, WipeMode};
use crate::traits::{WipeMetadata, WipeProbe, Wipeable};
use crate::{wipe, wipe_deep, wipe_deep_unchecked, wipe_flat, wipe_flat_referent};

// === === === === === === === === === ===
// Test helpers
// === === === === === === === === === ===

// Hand-written the way #[derive(Wipe)] expands a two-field struct.
struct Credentials {
    user: Vec<u8>,
    pin: u32,
}

unsafe impl WipeMetadata for Credentials {
    const CAN_BE_BULK_WIPED: bool = true
        && <Vec<u8> as WipeMetadata>::CAN_BE_BULK_WIPED
        && <u32 as WipeMetadata>::CAN_BE_BULK_WIPED;
}

impl Wipeable for Credentials {
    fn shape(&self) -> Shape {
        Shape::Aggregate
    }

    fn check_wipe(&self) -> Result<(), WipeError> {
        let fields: [&dyn Wipeable; 2] = [
            to_wipeable_dyn_ref(&self.user),
            to_wipeable_dyn_ref(&self.pin),
        ];
        check_collection(&mut fields.into_iter())
    }

    fn wipe_referent(&mut self) -> Result<(), WipeError> {
        wipe_flat_referent(self)
    }

    fn wipe_nested(&mut self) {
        let fields: [&mut dyn Wipeable; 2] = [
            to_wipeable_dyn_mut(&mut self.user),
            to_wipeable_dyn_mut(&mut self.pin),
        ];
        wipe_collection(&mut fields.into_iter());
    }

    fn wipe_storage(&mut self) {
        wipe_flat(self);
    }
}

impl WipeProbe for Credentials {
    fn is_wiped(&self) -> bool {
        let fields: [&dyn WipeProbe; 2] = [
            to_wipe_probe_dyn_ref(&self.user),
            to_wipe_probe_dyn_ref(&self.pin),
        ];
        collection_wiped(&mut fields.into_iter())
    }
}

type Log = Rc<RefCell<Vec<&'static str>>>;

// Records when its nested and storage phases run.
struct Traced {
    name: &'static str,
    log: Log,
    children: Vec<Traced>,
}

impl Traced {
    fn leaf(name: &'static str, log: &Log) -> Self {
        Self {
            name,
            log: log.clone(),
            children: Vec::new(),
        }
    }
}

unsafe impl WipeMetadata for Traced {
    const CAN_BE_BULK_WIPED: bool = false;
}

impl Wipeable for Traced {
    fn shape(&self) -> Shape {
        Shape::Aggregate
    }

    fn wipe_nested(&mut self) {
        for child in self.children.iter_mut() {
            wipe_deep_unchecked(child);
        }
    }

    fn wipe_storage(&mut self) {
        self.log.borrow_mut().push(self.name);
    }
}

// === === === === === === === === === ===
// Shallow
// === === === === === === === === === ===

#[test]
fn test_shallow_scalar() {
    let mut pin = 0xdead_beefu32;

    wipe(&mut pin).expect("scalar wipes shallowly");

    assert_eq!(pin, 0);
}

#[test]
fn test_shallow_aggregate_refused_untouched() {
    let mut creds = Credentials {
        user: vec![0x41; 4],
        pin: 1234,
    };

    assert_eq!(
        wipe(&mut creds),
        Err(WipeError::UnsupportedShape {
            shape: Shape::Aggregate,
            mode: WipeMode::Shallow
        })
    );
    assert_eq!(creds.user, [0x41u8; 4]);
    assert_eq!(creds.pin, 1234);
}

#[test]
fn test_shallow_refusal_reports_own_shape() {
    let mut creds = Credentials {
        user: vec![0x41; 4],
        pin: 1234,
    };

    let err = creds
        .wipe_shallow()
        .expect_err("aggregate refuses shallow wipe");

    assert_eq!(
        err,
        WipeError::UnsupportedShape {
            shape: Shape::Aggregate,
            mode: WipeMode::Shallow
        }
    );
    assert_eq!(err.to_string(), "shallow wipe does not support aggregate values");
}

#[test]
fn test_shallow_refusal_through_box_reports_pointee_shape() {
    let mut boxed = Box::new(Credentials {
        user: vec![0x41; 4],
        pin: 1234,
    });

    assert_eq!(
        wipe(&mut boxed),
        Err(WipeError::UnsupportedShape {
            shape: Shape::Aggregate,
            mode: WipeMode::Shallow
        })
    );
    assert_eq!(
        wipe_flat_referent(&mut *boxed),
        Err(WipeError::UnsupportedShape {
            shape: Shape::Aggregate,
            mode: WipeMode::Shallow
        })
    );
    assert_eq!(boxed.pin, 1234);
}

#[cfg(feature = "tracing")]
#[test]
fn test_refusal_is_reported_with_tracing_enabled() {
    let mut creds = Credentials {
        user: vec![0x41; 4],
        pin: 1234,
    };
    let byte = 0u8;
    let mut opaque = (1u8, &byte as *const u8);

    assert!(wipe(&mut creds).is_err());
    assert!(wipe_deep(&mut opaque).is_err());
    assert_eq!(opaque.0, 1);
}

// === === === === === === === === === ===
// Deep
// === === === === === === === === === ===

#[test]
fn test_deep_two_field_struct() {
    let mut creds = Credentials {
        user: vec![0x41; 4],
        pin: 1234,
    };

    assert!(!creds.is_wiped());
    wipe_deep(&mut creds).expect("aggregate wipes deeply");

    assert!(creds.is_wiped());
    assert_eq!(creds.user.len(), 4);
    assert_eq!(creds.pin, 0);
}

#[test]
fn test_deep_children_before_parent() {
    let log: Log = Rc::default();
    let mut root = Traced {
        name: "root",
        log: log.clone(),
        children: vec![
            Traced {
                name: "a",
                log: log.clone(),
                children: vec![Traced::leaf("a.0", &log), Traced::leaf("a.1", &log)],
            },
            Traced::leaf("b", &log),
        ],
    };

    wipe_deep(&mut root).expect("tree wipes deeply");

    assert_eq!(*log.borrow(), ["a.0", "a.1", "a", "b", "root"]);
}

#[test]
fn test_deep_refusal_writes_nothing() {
    let byte = 0u8;
    let mut value = (vec![0xAAu8; 8], 0x55u64, &byte as *const u8);

    assert_eq!(
        wipe_deep(&mut value),
        Err(WipeError::UnsupportedShape {
            shape: Shape::Opaque,
            mode: WipeMode::Deep
        })
    );
    assert_eq!(value.0, [0xAAu8; 8]);
    assert_eq!(value.1, 0x55);
}

#[test]
fn test_deep_unchecked_skips_opaque() {
    let byte = 0u8;
    let ptr = &byte as *const u8;
    let mut value = (vec![0xAAu8; 8], 0x55u64, ptr);

    wipe_deep_unchecked(&mut value);

    assert!(value.0.is_wiped());
    assert_eq!(value.1, 0);
    assert_eq!(value.2, ptr);
}

// === === === === === === === === === ===
// wipe_flat
// === === === === === === === === === ===

#[test]
fn test_wipe_flat() {
    let mut flat = (1u8, 2u16, [3u32; 4]);
    assert!(wipe_flat(&mut flat));
    assert!(flat.is_wiped());

    let mut owned = vec![1u8];
    assert!(!wipe_flat(&mut owned));
    assert_eq!(owned, [1u8]);
}
