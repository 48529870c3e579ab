// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::collections::BTreeMap;

use secutil_wipe_core::{
    AssertWipeOnDrop, Shape, WipeError, WipeMetadata, WipeMode, WipeProbe, WipeSentinel,
    Wipeable, wipe, wipe_deep,
};
use secutil_wipe_derive::Wipe;

#[derive(Wipe)]
struct Credentials {
    user: Vec<u8>,
    pin: u32,
}

#[derive(Wipe, Default)]
struct Point {
    x: u32,
    y: u64,
    tag: [u8; 4],
}

#[derive(Wipe)]
#[wipe(drop)]
struct Session {
    token: String,
    scopes: Vec<String>,
    __sentinel: WipeSentinel,
}

#[derive(Wipe)]
#[wipe(drop)]
struct Packet(Vec<u8>, u16, WipeSentinel);

#[derive(Wipe)]
struct Labeled<'a> {
    #[wipe(skip)]
    label: &'a str,
    secret: Vec<u8>,
}

#[derive(Wipe)]
struct Borrowing<'a> {
    secret: &'a mut [u8; 8],
}

#[derive(Wipe)]
enum Credential {
    Password(String),
    Token { id: u32, secret: Vec<u8> },
    Anonymous,
}

#[derive(Wipe)]
struct Vault {
    entries: BTreeMap<u32, Credential>,
    owner: Option<Box<Credentials>>,
}

impl Default for Credential {
    fn default() -> Self {
        Self::Anonymous
    }
}

// === === === === === === === === === ===
// Structs
// === === === === === === === === === ===

#[test]
fn test_two_field_struct_deep() {
    let mut creds = Credentials {
        user: b"root".to_vec(),
        pin: 1234,
    };

    assert!(!creds.is_wiped());
    wipe_deep(&mut creds).expect("struct wipes deeply");

    assert!(creds.is_wiped());
    assert_eq!(creds.user, [0u8; 4]);
    assert_eq!(creds.pin, 0);
}

#[test]
fn test_struct_refuses_shallow() {
    let mut creds = Credentials {
        user: b"root".to_vec(),
        pin: 1234,
    };

    assert_eq!(
        wipe(&mut creds),
        Err(WipeError::UnsupportedShape {
            shape: Shape::Aggregate,
            mode: WipeMode::Shallow
        })
    );
    assert_eq!(creds.user, b"root");
    assert_eq!(creds.pin, 1234);
}

#[test]
fn test_flat_struct_through_reference() {
    assert!(<Point as WipeMetadata>::CAN_BE_BULK_WIPED);
    assert!(!<Credentials as WipeMetadata>::CAN_BE_BULK_WIPED);

    let mut point = Box::new(Point {
        x: 1,
        y: 2,
        tag: *b"abcd",
    });

    wipe(&mut point).expect("flat pointee wipes shallowly");

    assert!(point.is_wiped());
}

#[test]
fn test_compound_struct_through_reference_refused() {
    let mut creds = Box::new(Credentials {
        user: vec![1],
        pin: 2,
    });

    assert_eq!(
        wipe(&mut creds),
        Err(WipeError::UnsupportedShape {
            shape: Shape::Aggregate,
            mode: WipeMode::Shallow
        })
    );
}

#[test]
fn test_sentinel_struct_wipes_on_drop() {
    let session = Session {
        token: String::from("bearer abc"),
        scopes: vec![String::from("read"), String::from("write")],
        __sentinel: WipeSentinel::default(),
    };

    session.assert_wipe_on_drop();
}

#[test]
fn test_sentinel_struct_probe_ignores_sentinel() {
    let mut session = Session {
        token: String::from("bearer abc"),
        scopes: vec![String::from("read")],
        __sentinel: WipeSentinel::default(),
    };
    let observer = session.clone_sentinel();

    wipe_deep(&mut session).expect("struct wipes deeply");

    assert!(session.is_wiped());
    assert!(observer.is_wiped());
}

#[test]
fn test_tuple_struct_with_sentinel() {
    let packet = Packet(vec![0xFF; 64], 443, WipeSentinel::default());

    packet.assert_wipe_on_drop();
}

#[test]
fn test_skipped_field_untouched() {
    let label = String::from("primary");
    let mut labeled = Labeled {
        label: &label,
        secret: vec![7; 3],
    };

    wipe_deep(&mut labeled).expect("struct wipes deeply");

    assert_eq!(labeled.label, "primary");
    assert!(labeled.secret.is_wiped());
    assert!(labeled.is_wiped());
}

#[test]
fn test_mut_reference_field() {
    let mut key = [0xAB; 8];
    let mut borrowing = Borrowing { secret: &mut key };

    wipe_deep(&mut borrowing).expect("struct wipes deeply");
    assert!(borrowing.is_wiped());

    assert_eq!(key, [0; 8]);
}

// === === === === === === === === === ===
// Enums
// === === === === === === === === === ===

#[test]
fn test_enum_active_variant_only() {
    let mut password = Credential::Password(String::from("hunter2"));
    let mut token = Credential::Token {
        id: 9,
        secret: vec![1, 2, 3],
    };
    let mut anonymous = Credential::Anonymous;

    assert_eq!(password.shape(), Shape::Union);
    for credential in [&mut password, &mut token, &mut anonymous] {
        wipe_deep(credential).expect("enum wipes deeply");
        assert!(credential.is_wiped());
    }

    assert!(matches!(password, Credential::Password(ref p) if p.len() == 7));
    assert!(matches!(token, Credential::Token { id: 0, ref secret } if secret.len() == 3));
}

#[test]
fn test_enum_refuses_shallow() {
    let mut password = Credential::Password(String::from("hunter2"));

    assert_eq!(
        wipe(&mut password),
        Err(WipeError::UnsupportedShape {
            shape: Shape::Union,
            mode: WipeMode::Shallow
        })
    );
    assert!(!password.is_wiped());
}

// === === === === === === === === === ===
// Nested
// === === === === === === === === === ===

#[test]
fn test_nested_vault() {
    let mut vault = Vault {
        entries: BTreeMap::from([
            (1, Credential::Password(String::from("a"))),
            (2, Credential::Token {
                id: 5,
                secret: vec![9; 9],
            }),
        ]),
        owner: Some(Box::new(Credentials {
            user: b"admin".to_vec(),
            pin: 42,
        })),
    };

    wipe_deep(&mut vault).expect("vault wipes deeply");

    assert!(vault.is_wiped());
    assert!(vault
        .entries
        .values()
        .all(|c| matches!(c, Credential::Anonymous)));
    let owner = vault.owner.as_ref().expect("discriminant is kept");
    assert_eq!(owner.user, [0u8; 5]);
}
