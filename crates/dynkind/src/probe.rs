// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Nil-ability, length and capacity probes.

use crate::value::{Chan, Value};

/// True if the value is absent or a reference-like value with no referent.
///
/// Zero numbers and empty text are never nil.
pub fn is_nil(value: &Value) -> bool {
    match value {
        Value::Nil => true,
        Value::Chan(c) => c.is_none(),
        Value::Func(f) => f.is_none(),
        Value::Map(m) => m.is_none(),
        Value::Ptr(p) => p.is_none(),
        Value::Slice(s) => s.is_none(),
        Value::Bytes(b) => b.is_none(),
        Value::Interface(i) => i.is_none(),
        _ => false,
    }
}

/// Current length of a sized value.
///
/// Maps count entries, text counts characters, channels count queued
/// messages. Nil slices, byte slices and channels have length 0. A nil map
/// has no storage and, like unsized kinds, yields `None`.
pub fn len_of(value: &Value) -> Option<usize> {
    match value {
        Value::Map(Some(m)) => Some(m.len()),
        Value::Array(items) => Some(items.len()),
        Value::Slice(items) => Some(items.as_ref().map_or(0, Vec::len)),
        Value::Bytes(bytes) => Some(bytes.as_ref().map_or(0, Vec::len)),
        Value::Str(s) => Some(s.chars().count()),
        Value::Chan(ch) => Some(ch.as_ref().map_or(0, Chan::len)),
        _ => None,
    }
}

/// Capacity of an array, slice, byte slice or bounded channel.
///
/// Nil slices, byte slices and channels have capacity 0.
pub fn cap_of(value: &Value) -> Option<usize> {
    match value {
        Value::Array(items) => Some(items.len()),
        Value::Slice(items) => Some(items.as_ref().map_or(0, Vec::capacity)),
        Value::Bytes(bytes) => Some(bytes.as_ref().map_or(0, Vec::capacity)),
        Value::Chan(None) => Some(0),
        Value::Chan(Some(ch)) => ch.capacity(),
        _ => None,
    }
}
