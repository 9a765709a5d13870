// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Configured entry point.
//!
//! The free functions in [`classify`](crate::classify) and
//! [`text`](crate::text) use the lenient defaults. `Inspector` applies a
//! [`ProbeConfig`] to the operations the configuration affects.
//!
//! ```
//! use dynkind::{Inspector, KindError, ProbeConfig, Value};
//!
//! let strict = Inspector::new(ProbeConfig::strict());
//! assert_eq!(strict.is_bool(&Value::from(true)), Ok(true));
//! assert!(matches!(strict.is_bool(&Value::Nil), Err(KindError::Absent { .. })));
//! ```

use crate::classify;
use crate::config::{AbsentInput, ProbeConfig};
use crate::error::{KindError, Result};
use crate::kind::Kind;
use crate::text::to_text_with;
use crate::value::Value;
use std::borrow::Cow;

/// Applies a [`ProbeConfig`] to classification and text coercion.
#[derive(Debug, Clone, Copy, Default)]
pub struct Inspector {
    config: ProbeConfig,
}

impl Inspector {
    pub fn new(config: ProbeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Kind of `value`. Under [`AbsentInput::Fault`] an absent value is an error.
    pub fn kind(&self, value: &Value) -> Result<Kind> {
        self.typed("kind", value).map(Value::kind)
    }

    pub fn is_ptr(&self, value: &Value) -> Result<bool> {
        self.typed("is_ptr", value).map(classify::is_ptr)
    }

    pub fn is_bool(&self, value: &Value) -> Result<bool> {
        self.typed("is_bool", value).map(classify::is_bool)
    }

    pub fn is_signed_integer(&self, value: &Value) -> Result<bool> {
        self.typed("is_signed_integer", value)
            .map(classify::is_signed_integer)
    }

    pub fn is_unsigned_integer(&self, value: &Value) -> Result<bool> {
        self.typed("is_unsigned_integer", value)
            .map(classify::is_unsigned_integer)
    }

    pub fn is_float(&self, value: &Value) -> Result<bool> {
        self.typed("is_float", value).map(classify::is_float)
    }

    /// Text view using the configured byte decoding.
    pub fn to_text<'a>(&self, value: &'a Value) -> Option<Cow<'a, str>> {
        to_text_with(value, self.config.bytes_text)
    }

    fn typed<'a>(&self, op: &'static str, value: &'a Value) -> Result<&'a Value> {
        match (self.config.absent_input, value) {
            (AbsentInput::Fault, Value::Nil) => {
                log::trace!("{}: rejected absent value", op);
                Err(KindError::Absent { op })
            }
            _ => Ok(value),
        }
    }
}
