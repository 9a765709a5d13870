// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # dynkind - runtime kind classification and coercion
//!
//! Answers predicate questions about a value whose static type is unknown
//! ("is this a number?", "is this nil?", "is this a collection?") and
//! performs best-effort coercions to `i64`, `u64`, `f64` and text.
//!
//! ## Quick Start
//!
//! ```rust
//! use dynkind::{classify, coerce, probe, text, Value};
//!
//! let v = Value::from(-3.9f64);
//! assert!(classify::is_number(&v));
//! assert_eq!(coerce::to_i64(&v).unwrap(), -3);
//!
//! let m = Value::nil_map();
//! assert!(probe::is_nil(&m));
//! assert_eq!(probe::len_of(&m), None);
//!
//! let b = Value::from(vec![104u8, 105]);
//! assert_eq!(text::to_text(&b).as_deref(), Some("hi"));
//! ```
//!
//! ## Modules Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`kind`] | Closed, ordered [`Kind`] taxonomy |
//! | [`value`] | [`Value`] tagged wrapper and reference handles |
//! | [`classify`] | Kind predicates |
//! | [`coerce`] | Numeric coercion and [`FromValue`] extraction |
//! | [`probe`] | Nil-ability, length and capacity |
//! | [`text`] | Text view with ordered fallbacks |
//! | [`erased`] | `Value` from `&dyn Any` |
//! | [`config`] | [`ProbeConfig`] (YAML with `config-loaders`) |
//!
//! Every operation borrows its input, never mutates it and keeps no state,
//! so all of them are safe to call concurrently.

pub mod classify;
pub mod coerce;
pub mod config;
pub mod erased;
mod error;
mod inspector;
pub mod kind;
pub mod probe;
pub mod text;
pub mod value;

pub use classify::{
    is_array_or_slice, is_bool, is_chan, is_error, is_float, is_func, is_map, is_number, is_ptr,
    is_signed_integer, is_string, is_unsigned_integer,
};
pub use coerce::{to_f64, to_i64, to_u64, FromValue};
pub use config::{AbsentInput, BytesText, ProbeConfig};
pub use erased::{erase, erase_any};
pub use error::{ConfigError, KindError, Result};
pub use inspector::Inspector;
pub use kind::Kind;
pub use probe::{cap_of, is_nil, len_of};
pub use text::{to_text, to_text_with};
pub use value::{Chan, Func, Opaque, Ptr, Value};

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
