// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Kind predicates.
//!
//! Every predicate is a pure function of the value's kind. An absent value
//! ([`Value::Nil`]) is never classified as anything; use
//! [`Inspector`](crate::Inspector) with [`AbsentInput::Fault`](crate::AbsentInput)
//! to turn that case into an error instead.
//!
//! `is_chan` and `is_func` consult [`is_nil`] first, so a nil channel or
//! function is reported as false. The other container predicates look at the
//! type tag only: a nil map is still a map.

use crate::kind::Kind;
use crate::probe::is_nil;
use crate::value::Value;

/// True iff the value is a pointer reference (nil or not).
pub fn is_ptr(value: &Value) -> bool {
    value.kind() == Kind::Ptr
}

/// True iff the value is a boolean.
pub fn is_bool(value: &Value) -> bool {
    value.kind() == Kind::Bool
}

/// True for every signed, unsigned and floating point value.
pub fn is_number(value: &Value) -> bool {
    value.kind().is_numeric()
}

/// True for every signed integer width.
pub fn is_signed_integer(value: &Value) -> bool {
    value.kind().is_signed()
}

/// True for every unsigned integer width.
pub fn is_unsigned_integer(value: &Value) -> bool {
    value.kind().is_unsigned()
}

/// True for `f32` and `f64`.
pub fn is_float(value: &Value) -> bool {
    value.kind().is_float()
}

/// True iff the value carries an error.
pub fn is_error(value: &Value) -> bool {
    matches!(value, Value::Error(_))
}

/// True iff the value is a non-nil channel.
pub fn is_chan(value: &Value) -> bool {
    !is_nil(value) && value.kind() == Kind::Chan
}

/// True iff the value is a map, nil or not.
pub fn is_map(value: &Value) -> bool {
    value.kind() == Kind::Map
}

/// True for arrays, slices and byte slices.
pub fn is_array_or_slice(value: &Value) -> bool {
    matches!(value.kind(), Kind::Array | Kind::Slice | Kind::Bytes)
}

/// True iff the value is text.
pub fn is_string(value: &Value) -> bool {
    value.kind() == Kind::String
}

/// True iff the value is a non-nil function.
pub fn is_func(value: &Value) -> bool {
    !is_nil(value) && value.kind() == Kind::Func
}
