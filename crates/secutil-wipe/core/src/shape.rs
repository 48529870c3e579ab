// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Value descriptors.

use core::fmt;

/// Runtime classification of a value, used to decide how it is traversed
/// and which storage it owns directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// A primitive living entirely in its own bytes.
    Scalar,
    /// A contiguous run of flat elements (`Vec<u8>`, `[u32; 8]`).
    Buffer,
    /// UTF-8 text whose bytes are owned in place (`str`, `String`).
    Text,
    /// Owns exactly one nested value through a pointer (`Box<T>`, `&mut T`).
    Reference,
    /// Fixed set of named or positional members (structs, tuples).
    Aggregate,
    /// Variable-length run of compound elements (`Vec<Vec<u8>>`).
    Sequence,
    /// Key to value container (`BTreeMap`, `HashMap`).
    Map,
    /// Exactly one active payload among several (`Option`, enums).
    Union,
    /// Reachable storage cannot be followed safely (raw pointers).
    Opaque,
}

impl Shape {
    /// Returns `true` for shapes whose own storage is a single directly
    /// addressable range, i.e. the shapes a shallow wipe accepts.
    pub const fn is_directly_addressable(self) -> bool {
        matches!(
            self,
            Shape::Scalar | Shape::Buffer | Shape::Text | Shape::Reference
        )
    }

    /// Returns `true` for shapes that own nested values.
    pub const fn is_compound(self) -> bool {
        matches!(
            self,
            Shape::Reference | Shape::Aggregate | Shape::Sequence | Shape::Map | Shape::Union
        )
    }

    fn name(self) -> &'static str {
        match self {
            Shape::Scalar => "scalar",
            Shape::Buffer => "buffer",
            Shape::Text => "text",
            Shape::Reference => "reference",
            Shape::Aggregate => "aggregate",
            Shape::Sequence => "sequence",
            Shape::Map => "map",
            Shape::Union => "union",
            Shape::Opaque => "opaque",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which wipe entry point refused a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WipeMode {
    /// [`wipe`](crate::wipe): own storage only.
    Shallow,
    /// [`wipe_deep`](crate::wipe_deep): everything reachable.
    Deep,
}

impl fmt::Display for WipeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WipeMode::Shallow => f.write_str("shallow"),
            WipeMode::Deep => f.write_str("deep"),
        }
    }
}
