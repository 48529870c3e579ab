// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{is_slice_zeroed, zero_value_bytes};

#[derive(Clone, Copy)]
#[repr(C)]
struct Padded {
    a: u8,
    b: u64,
}

#[test]
fn test_zero_value_bytes_sized() {
    let mut value = Padded { a: 0xdb, b: 0xdbdb_dbdb };

    unsafe { zero_value_bytes(&mut value) };

    assert_eq!(value.a, 0);
    assert_eq!(value.b, 0);
}

#[test]
fn test_zero_value_bytes_unsized_str() {
    let mut owned = String::from("hunter2");
    let text: &mut str = owned.as_mut_str();

    unsafe { zero_value_bytes(text) };

    assert_eq!(owned.len(), 7);
    assert!(is_slice_zeroed(owned.as_bytes()));
}

#[test]
fn test_zero_value_bytes_unsized_slice() {
    let mut data = [0xABu16; 12];
    let slice: &mut [u16] = &mut data[2..10];

    unsafe { zero_value_bytes(slice) };

    assert_eq!(&data[..2], &[0xAB, 0xAB]);
    assert!(data[2..10].iter().all(|&w| w == 0));
    assert_eq!(&data[10..], &[0xAB, 0xAB]);
}

#[test]
fn test_zero_value_bytes_zero_sized() {
    let mut unit = ();
    // Nothing to write, must not touch anything or panic.
    unsafe { zero_value_bytes(&mut unit) };
}
