// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error types.

use crate::value::Value;
use thiserror::Error;

/// Typed, recoverable "wrong kind" fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum KindError {
    /// A numeric coercion received a non-numeric value.
    #[error("expected a number, got <{type_name}> {value}")]
    NotANumber { type_name: String, value: String },

    /// Text extraction received a value with no text view.
    #[error("expected text, got <{type_name}>")]
    NotText { type_name: String },

    /// Boolean extraction received a non-boolean value.
    #[error("expected a bool, got <{type_name}>")]
    NotBool { type_name: String },

    /// A typed predicate received an absent value under the strict policy.
    #[error("{op}: absent value has no type")]
    Absent { op: &'static str },
}

impl KindError {
    /// Build a `NotANumber` fault describing `value`.
    pub fn not_a_number(value: &Value) -> Self {
        Self::NotANumber {
            type_name: value.type_name().into_owned(),
            value: format!("{:?}", value),
        }
    }

    pub(crate) fn not_text(value: &Value) -> Self {
        Self::NotText {
            type_name: value.type_name().into_owned(),
        }
    }

    pub(crate) fn not_bool(value: &Value) -> Self {
        Self::NotBool {
            type_name: value.type_name().into_owned(),
        }
    }
}

/// Result alias for kind operations.
pub type Result<T> = std::result::Result<T, KindError>;

/// Errors raised while loading a [`ProbeConfig`](crate::ProbeConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(String),
}
