// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Text view of a value.
//!
//! Tried in order: text, raw bytes, textual rendering. Error values carry a
//! message but no rendering, so they have no text view.

use crate::config::BytesText;
use crate::value::Value;
use std::borrow::Cow;

/// View a value as text, decoding byte slices lossily.
pub fn to_text(value: &Value) -> Option<Cow<'_, str>> {
    to_text_with(value, BytesText::Lossy)
}

/// View a value as text with an explicit byte decoding mode.
pub fn to_text_with(value: &Value, bytes: BytesText) -> Option<Cow<'_, str>> {
    match value {
        Value::Str(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Bytes(None) => Some(Cow::Borrowed("")),
        Value::Bytes(Some(raw)) => match bytes {
            BytesText::Lossy => Some(String::from_utf8_lossy(raw)),
            BytesText::Utf8Only => std::str::from_utf8(raw).ok().map(Cow::Borrowed),
        },
        Value::Opaque(o) => o.render().map(Cow::Owned),
        _ => None,
    }
}
