// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::rc::Rc;
use std::sync::Arc;

use crate::error::WipeError;
use crate::shape::{Shape, WipeMode};
use crate::traits::{WipeProbe, Wipeable};
use crate::{wipe, wipe_deep};

// === === === === === === === === === ===
// Box<T>, &mut T
// === === === === === === === === === ===

#[test]
fn test_box_shallow_wipes_pointee_only() {
    let mut boxed = Box::new(0x1122_3344_5566_7788u64);
    let addr: *const u64 = &*boxed;

    assert_eq!(boxed.shape(), Shape::Reference);
    wipe(&mut boxed).expect("reference wipes shallowly");

    assert_eq!(*boxed, 0);
    assert_eq!(&*boxed as *const u64, addr);
}

#[test]
fn test_box_shallow_flat_aggregate() {
    let mut boxed = Box::new((1u32, 2u64, [3u8; 5]));

    wipe(&mut boxed).expect("flat pointee wipes shallowly");

    assert!(boxed.is_wiped());
}

#[test]
fn test_box_shallow_compound_aggregate_refused() {
    let mut boxed = Box::new((1u32, vec![2u8]));

    assert_eq!(
        wipe(&mut boxed),
        Err(WipeError::UnsupportedShape {
            shape: Shape::Aggregate,
            mode: WipeMode::Shallow
        })
    );
    assert_eq!(boxed.0, 1);
    assert_eq!(boxed.1, [2u8]);
}

#[test]
fn test_box_shallow_buffer() {
    let mut boxed = Box::new(vec![0xFFu8; 12]);

    wipe(&mut boxed).expect("boxed buffer wipes shallowly");

    assert_eq!(boxed.len(), 12);
    assert!(boxed.is_wiped());
}

#[test]
fn test_mut_ref_shallow() {
    let mut secret = [0x5Au8; 24];
    let mut reference = &mut secret;

    wipe(&mut reference).expect("reference wipes shallowly");

    assert!(secret.is_wiped());
}

#[test]
fn test_box_deep_nested() {
    let mut boxed = Box::new(Box::new(vec![String::from("a"), String::from("bc")]));

    wipe_deep(&mut boxed).expect("boxes wipe deeply");

    assert!(boxed.is_wiped());
    assert_eq!(boxed[1].len(), 2);
}

trait Secret: Wipeable + WipeProbe {}

impl<T: Wipeable + WipeProbe> Secret for T {}

#[test]
fn test_boxed_trait_objects_deep() {
    let mut secrets: Vec<Box<dyn Secret>> = Vec::new();
    secrets.push(Box::new(vec![1u8, 2, 3]));
    secrets.push(Box::new(String::from("pw")));
    secrets.push(Box::new((4u16, 5u32)));

    wipe_deep(&mut secrets).expect("trait objects wipe deeply");

    assert!(secrets.iter().all(|s| s.is_wiped()));
}

// === === === === === === === === === ===
// Rc<T>, Arc<T>
// === === === === === === === === === ===

#[test]
fn test_unique_rc_wipes() {
    let mut rc = Rc::new(vec![9u8; 4]);

    wipe(&mut rc).expect("unique rc wipes shallowly");
    assert!(rc.is_wiped());

    let mut rc = Rc::new(vec![String::from("x")]);
    wipe_deep(&mut rc).expect("unique rc wipes deeply");
    assert!(rc.is_wiped());
}

#[test]
fn test_shared_rc_is_immutable() {
    let mut rc = Rc::new(42u64);
    let other = rc.clone();

    let expected = Err(WipeError::ImmutableStorage {
        shape: Shape::Reference,
    });
    assert_eq!(wipe(&mut rc), expected);
    assert_eq!(wipe_deep(&mut rc), expected);
    assert_eq!(*other, 42);
}

#[test]
fn test_weak_rc_is_immutable() {
    let mut rc = Rc::new(42u64);
    let _weak = Rc::downgrade(&rc);

    assert_eq!(
        wipe_deep(&mut rc),
        Err(WipeError::ImmutableStorage {
            shape: Shape::Reference
        })
    );
    assert_eq!(*rc, 42);
}

#[test]
fn test_arc_unique_and_shared() {
    let mut arc = Arc::new([0xEEu8; 8]);
    wipe(&mut arc).expect("unique arc wipes shallowly");
    assert!(arc.is_wiped());

    let mut arc = Arc::new(7u8);
    let _other = Arc::clone(&arc);
    assert!(wipe(&mut arc).is_err());
    assert_eq!(*arc, 7);
}

// === === === === === === === === === ===
// Raw pointers
// === === === === === === === === === ===

#[test]
fn test_raw_pointer_is_opaque() {
    let mut value = 1u8;
    let mut ptr: *mut u8 = &mut value;

    assert_eq!(ptr.shape(), Shape::Opaque);
    assert_eq!(
        wipe(&mut ptr),
        Err(WipeError::UnsupportedShape {
            shape: Shape::Opaque,
            mode: WipeMode::Shallow
        })
    );
    assert_eq!(
        wipe_deep(&mut ptr),
        Err(WipeError::UnsupportedShape {
            shape: Shape::Opaque,
            mode: WipeMode::Deep
        })
    );
    assert_eq!(value, 1);
}
