// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Numeric coercion.
//!
//! The three coercions accept any numeric kind and share one failure shape,
//! [`KindError::NotANumber`], for everything else.
//!
//! | from \ to  | `i64`                 | `u64`                 | `f64`      |
//! |------------|-----------------------|-----------------------|------------|
//! | signed     | sign-extend           | reinterpret bits      | convert    |
//! | unsigned   | reinterpret bits      | zero-extend           | convert    |
//! | float      | truncate toward zero  | truncate toward zero  | widen      |
//!
//! Float to integer casts saturate at the target range and map NaN to 0.

use crate::error::{KindError, Result};
use crate::text::to_text;
use crate::value::Value;

/// Numeric payload widened to its 64-bit family.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Number {
    Signed(i64),
    Unsigned(u64),
    Float(f64),
}

fn number(value: &Value) -> Option<Number> {
    let n = match *value {
        Value::Int(v) => Number::Signed(v as i64),
        Value::I8(v) => Number::Signed(v.into()),
        Value::I16(v) => Number::Signed(v.into()),
        Value::I32(v) => Number::Signed(v.into()),
        Value::I64(v) => Number::Signed(v),
        Value::Uint(v) => Number::Unsigned(v as u64),
        Value::U8(v) => Number::Unsigned(v.into()),
        Value::U16(v) => Number::Unsigned(v.into()),
        Value::U32(v) => Number::Unsigned(v.into()),
        Value::U64(v) => Number::Unsigned(v),
        Value::F32(v) => Number::Float(v.into()),
        Value::F64(v) => Number::Float(v),
        _ => return None,
    };
    Some(n)
}

fn not_a_number(op: &str, value: &Value) -> KindError {
    log::trace!("{}: not a number: <{}>", op, value.type_name());
    KindError::not_a_number(value)
}

/// Coerce a numeric value to `i64`.
pub fn to_i64(value: &Value) -> Result<i64> {
    match number(value) {
        Some(Number::Signed(v)) => Ok(v),
        Some(Number::Unsigned(v)) => Ok(v as i64),
        Some(Number::Float(v)) => Ok(v as i64),
        None => Err(not_a_number("to_i64", value)),
    }
}

/// Coerce a numeric value to `u64`.
pub fn to_u64(value: &Value) -> Result<u64> {
    match number(value) {
        Some(Number::Signed(v)) => Ok(v as u64),
        Some(Number::Unsigned(v)) => Ok(v),
        Some(Number::Float(v)) => Ok(v as u64),
        None => Err(not_a_number("to_u64", value)),
    }
}

/// Coerce a numeric value to `f64`. Large integers may lose precision.
pub fn to_f64(value: &Value) -> Result<f64> {
    match number(value) {
        Some(Number::Signed(v)) => Ok(v as f64),
        Some(Number::Unsigned(v)) => Ok(v as f64),
        Some(Number::Float(v)) => Ok(v),
        None => Err(not_a_number("to_f64", value)),
    }
}

/// Trait for extracting a concrete type from a [`Value`].
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Result<Self>;
}

impl Value {
    /// Extract this value as `T`, coercing numerics.
    pub fn get<T: FromValue>(&self) -> Result<T> {
        T::from_value(self)
    }
}

// Narrow widths go through the 64-bit coercion, then wrap with `as`.
macro_rules! impl_from_value {
    ($via:ident => $($ty:ty),*) => {
        $(
            impl FromValue for $ty {
                #[allow(clippy::unnecessary_cast)]
                fn from_value(value: &Value) -> Result<Self> {
                    $via(value).map(|v| v as $ty)
                }
            }
        )*
    };
}

impl_from_value!(to_i64 => i8, i16, i32, i64, isize);
impl_from_value!(to_u64 => u8, u16, u32, u64, usize);
impl_from_value!(to_f64 => f32, f64);

impl FromValue for bool {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Bool(b) => Ok(*b),
            other => Err(KindError::not_bool(other)),
        }
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self> {
        to_text(value)
            .map(|t| t.into_owned())
            .ok_or_else(|| KindError::not_text(value))
    }
}

impl FromValue for Value {
    fn from_value(value: &Value) -> Result<Self> {
        Ok(value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncation_toward_zero() {
        assert_eq!(to_i64(&Value::from(3.9f64)).unwrap(), 3);
        assert_eq!(to_i64(&Value::from(-3.9f64)).unwrap(), -3);
        assert_eq!(to_u64(&Value::from(7.99f32)).unwrap(), 7);
    }

    #[test]
    fn test_sign_reinterpretation() {
        assert_eq!(to_u64(&Value::from(-1i64)).unwrap(), u64::MAX);
        assert_eq!(to_u64(&Value::from(-1i8)).unwrap(), u64::MAX);
        assert_eq!(to_i64(&Value::from(u64::MAX)).unwrap(), -1);
        assert_eq!(to_i64(&Value::from(1u64 << 63)).unwrap(), i64::MIN);
    }

    #[test]
    fn test_pass_through() {
        assert_eq!(to_i64(&Value::from(i64::MIN)).unwrap(), i64::MIN);
        assert_eq!(to_u64(&Value::from(u64::MAX)).unwrap(), u64::MAX);
        assert_eq!(to_f64(&Value::from(2.5f64)).unwrap(), 2.5);
        assert_eq!(to_i64(&Value::from(-42isize)).unwrap(), -42);
        assert_eq!(to_u64(&Value::from(42usize)).unwrap(), 42);
    }

    #[test]
    fn test_to_f64_from_integers() {
        assert_eq!(to_f64(&Value::from(-7i32)).unwrap(), -7.0);
        assert_eq!(to_f64(&Value::from(255u8)).unwrap(), 255.0);
        assert_eq!(to_f64(&Value::from(u64::MAX)).unwrap(), 2f64.powi(64));
    }

    #[test]
    fn test_float_saturation() {
        assert_eq!(to_i64(&Value::from(f64::NAN)).unwrap(), 0);
        assert_eq!(to_i64(&Value::from(f64::INFINITY)).unwrap(), i64::MAX);
        assert_eq!(to_u64(&Value::from(-5.5f64)).unwrap(), 0);
    }

    #[test]
    fn test_non_numeric_fails() {
        for v in [
            Value::Nil,
            Value::from(true),
            Value::from("12"),
            Value::from(vec![1u8]),
            Value::empty_map(),
        ] {
            assert!(matches!(to_i64(&v), Err(KindError::NotANumber { .. })));
            assert!(matches!(to_u64(&v), Err(KindError::NotANumber { .. })));
            assert!(matches!(to_f64(&v), Err(KindError::NotANumber { .. })));
        }
    }

    #[test]
    fn test_failure_carries_type_and_rendering() {
        let err = to_i64(&Value::from("12")).unwrap_err();
        assert_eq!(
            err,
            KindError::NotANumber {
                type_name: "string".to_string(),
                value: "\"12\"".to_string(),
            }
        );
    }

    #[test]
    fn test_get_narrow_widths() {
        let v = Value::from(300i64);
        assert_eq!(v.get::<i64>().unwrap(), 300);
        assert_eq!(v.get::<u8>().unwrap(), 44);
        assert_eq!(Value::from(-1i32).get::<u16>().unwrap(), u16::MAX);
        assert_eq!(Value::from(2.75f64).get::<i32>().unwrap(), 2);
        assert_eq!(Value::from(3u8).get::<f32>().unwrap(), 3.0);
    }

    #[test]
    fn test_get_bool_and_string() {
        assert!(Value::from(true).get::<bool>().unwrap());
        assert!(matches!(
            Value::from(1i32).get::<bool>(),
            Err(KindError::NotBool { .. })
        ));
        assert_eq!(Value::from("abc").get::<String>().unwrap(), "abc");
        assert!(matches!(
            Value::from(1i32).get::<String>(),
            Err(KindError::NotText { .. })
        ));
    }
}
