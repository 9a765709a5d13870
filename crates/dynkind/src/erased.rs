// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Build a [`Value`] from a type-erased reference.
//!
//! Supported concrete types are recovered by downcasting; anything else
//! becomes an opaque value of kind [`Kind::Other`](crate::Kind::Other).

use crate::value::{Opaque, Value};
use std::any::Any;
use std::collections::HashMap;

macro_rules! downcast_copy {
    ($any:expr, $($ty:ty),*) => {
        $(
            if let Some(v) = $any.downcast_ref::<$ty>() {
                return Some(Value::from(*v));
            }
        )*
    };
}

fn downcast(any: &dyn Any) -> Option<Value> {
    downcast_copy!(
        any, bool, isize, i8, i16, i32, i64, usize, u8, u16, u32, u64, f32, f64
    );
    if let Some(s) = any.downcast_ref::<String>() {
        return Some(Value::Str(s.clone()));
    }
    if let Some(s) = any.downcast_ref::<&'static str>() {
        return Some(Value::from(*s));
    }
    if let Some(bytes) = any.downcast_ref::<Vec<u8>>() {
        return Some(Value::Bytes(Some(bytes.clone())));
    }
    if let Some(items) = any.downcast_ref::<Vec<Value>>() {
        return Some(Value::Slice(Some(items.clone())));
    }
    if let Some(map) = any.downcast_ref::<HashMap<String, Value>>() {
        return Some(Value::Map(Some(map.clone())));
    }
    any.downcast_ref::<Value>().cloned()
}

/// Classify any `T` by value, keeping its type name for unsupported types.
pub fn erase<T: Any>(value: &T) -> Value {
    downcast(value).unwrap_or_else(|| Value::Opaque(Opaque::named(std::any::type_name::<T>())))
}

/// Classify a `&dyn Any` whose concrete type is unknown.
pub fn erase_any(value: &dyn Any) -> Value {
    downcast(value).unwrap_or_else(|| Value::Opaque(Opaque::named("unknown")))
}
