// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Kind taxonomy for dynamic values.
//!
//! Every [`Value`](crate::Value) maps to exactly one `Kind`. The enumeration is
//! closed and ordered: the numeric kinds are declared contiguously
//! (signed integers, then unsigned integers, then floats) so the numeric
//! predicates reduce to discriminant range checks.

use std::fmt;

/// Kind identifies the runtime type tag of a dynamic value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Kind {
    /// No type information (absent value)
    Invalid = 0,

    /// Boolean
    Bool = 1,

    // --- Signed integers (contiguous) ---
    /// Pointer-width signed integer (`isize`)
    Int = 2,
    /// Signed 8-bit integer
    I8 = 3,
    /// Signed 16-bit integer
    I16 = 4,
    /// Signed 32-bit integer
    I32 = 5,
    /// Signed 64-bit integer
    I64 = 6,

    // --- Unsigned integers (contiguous) ---
    /// Pointer-width unsigned integer (`usize`)
    Uint = 7,
    /// Unsigned 8-bit integer
    U8 = 8,
    /// Unsigned 16-bit integer
    U16 = 9,
    /// Unsigned 32-bit integer
    U32 = 10,
    /// Unsigned 64-bit integer
    U64 = 11,

    // --- Floating point (contiguous) ---
    /// 32-bit IEEE floating point
    F32 = 12,
    /// 64-bit IEEE floating point
    F64 = 13,

    // --- Containers and references ---
    /// Fixed-length sequence
    Array = 0x20,
    /// Channel handle
    Chan = 0x21,
    /// Function
    Func = 0x22,
    /// Boxed dynamic reference
    Interface = 0x23,
    /// Mapping (string keys)
    Map = 0x24,
    /// Pointer to a shared referent
    Ptr = 0x25,
    /// Resizable sequence
    Slice = 0x26,
    /// Raw byte sequence
    Bytes = 0x27,
    /// Text
    String = 0x28,

    // --- Capabilities ---
    /// Error value
    Error = 0x30,
    /// Anything else (opaque user types)
    Other = 0x31,
}

impl Kind {
    const FIRST_SIGNED: Kind = Kind::Int;
    const LAST_SIGNED: Kind = Kind::I64;
    const FIRST_UNSIGNED: Kind = Kind::Uint;
    const LAST_UNSIGNED: Kind = Kind::U64;
    const FIRST_FLOAT: Kind = Kind::F32;
    const LAST_FLOAT: Kind = Kind::F64;

    /// Canonical u8 tag for this kind.
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    const fn within(self, first: Kind, last: Kind) -> bool {
        first.to_u8() <= self.to_u8() && self.to_u8() <= last.to_u8()
    }

    /// Returns true for every integer and floating point kind.
    pub const fn is_numeric(self) -> bool {
        self.within(Self::FIRST_SIGNED, Self::LAST_FLOAT)
    }

    /// Returns true for `Int`, `I8`, `I16`, `I32`, `I64`.
    pub const fn is_signed(self) -> bool {
        self.within(Self::FIRST_SIGNED, Self::LAST_SIGNED)
    }

    /// Returns true for `Uint`, `U8`, `U16`, `U32`, `U64`.
    pub const fn is_unsigned(self) -> bool {
        self.within(Self::FIRST_UNSIGNED, Self::LAST_UNSIGNED)
    }

    /// Returns true for `F32` and `F64`.
    pub const fn is_float(self) -> bool {
        self.within(Self::FIRST_FLOAT, Self::LAST_FLOAT)
    }

    /// Returns true for kinds whose values may hold no referent.
    pub const fn is_nilable(self) -> bool {
        matches!(
            self,
            Kind::Chan
                | Kind::Func
                | Kind::Map
                | Kind::Ptr
                | Kind::Slice
                | Kind::Bytes
                | Kind::Interface
        )
    }

    /// Returns the size in bytes for numeric and boolean kinds, None for others.
    pub const fn primitive_size(self) -> Option<usize> {
        match self {
            Kind::Bool | Kind::I8 | Kind::U8 => Some(1),
            Kind::I16 | Kind::U16 => Some(2),
            Kind::I32 | Kind::U32 | Kind::F32 => Some(4),
            Kind::I64 | Kind::U64 | Kind::F64 => Some(8),
            Kind::Int => Some(std::mem::size_of::<isize>()),
            Kind::Uint => Some(std::mem::size_of::<usize>()),
            _ => None,
        }
    }

    /// Stable lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Invalid => "invalid",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::I8 => "int8",
            Kind::I16 => "int16",
            Kind::I32 => "int32",
            Kind::I64 => "int64",
            Kind::Uint => "uint",
            Kind::U8 => "uint8",
            Kind::U16 => "uint16",
            Kind::U32 => "uint32",
            Kind::U64 => "uint64",
            Kind::F32 => "float32",
            Kind::F64 => "float64",
            Kind::Array => "array",
            Kind::Chan => "chan",
            Kind::Func => "func",
            Kind::Interface => "interface",
            Kind::Map => "map",
            Kind::Ptr => "ptr",
            Kind::Slice => "slice",
            Kind::Bytes => "bytes",
            Kind::String => "string",
            Kind::Error => "error",
            Kind::Other => "other",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Kind; 25] = [
        Kind::Invalid,
        Kind::Bool,
        Kind::Int,
        Kind::I8,
        Kind::I16,
        Kind::I32,
        Kind::I64,
        Kind::Uint,
        Kind::U8,
        Kind::U16,
        Kind::U32,
        Kind::U64,
        Kind::F32,
        Kind::F64,
        Kind::Array,
        Kind::Chan,
        Kind::Func,
        Kind::Interface,
        Kind::Map,
        Kind::Ptr,
        Kind::Slice,
        Kind::Bytes,
        Kind::String,
        Kind::Error,
        Kind::Other,
    ];

    #[test]
    fn test_numeric_ranges_are_disjoint() {
        for kind in ALL {
            let hits = [kind.is_signed(), kind.is_unsigned(), kind.is_float()]
                .iter()
                .filter(|b| **b)
                .count();
            if kind.is_numeric() {
                assert_eq!(hits, 1, "{kind} must be in exactly one numeric range");
            } else {
                assert_eq!(hits, 0, "{kind} must not be numeric");
            }
        }
    }

    #[test]
    fn test_ordering_signed_unsigned_float() {
        assert!(Kind::I64 < Kind::Uint);
        assert!(Kind::U64 < Kind::F32);
        assert!(Kind::Bool < Kind::Int);
        assert!(Kind::F64 < Kind::Array);
    }

    #[test]
    fn test_nilable_kinds() {
        let nilable: Vec<_> = ALL.into_iter().filter(|k| k.is_nilable()).collect();
        assert_eq!(
            nilable,
            vec![
                Kind::Chan,
                Kind::Func,
                Kind::Interface,
                Kind::Map,
                Kind::Ptr,
                Kind::Slice,
                Kind::Bytes
            ]
        );
    }

    #[test]
    fn test_primitive_size() {
        assert_eq!(Kind::Bool.primitive_size(), Some(1));
        assert_eq!(Kind::I16.primitive_size(), Some(2));
        assert_eq!(Kind::F32.primitive_size(), Some(4));
        assert_eq!(Kind::U64.primitive_size(), Some(8));
        assert_eq!(Kind::String.primitive_size(), None);
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = ALL.iter().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ALL.len());
        assert_eq!(Kind::I64.to_string(), "int64");
    }
}
