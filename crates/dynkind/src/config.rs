// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Probe configuration.
//!
//! [`ProbeConfig`] selects how an [`Inspector`](crate::Inspector) treats
//! absent input and undecodable bytes. With the `config-loaders` feature it
//! can be read from YAML:
//!
//! ```yaml
//! absent_input: fault     # or: lenient
//! bytes_text: utf8_only   # or: lossy
//! ```

#[cfg(feature = "config-loaders")]
use crate::error::ConfigError;
#[cfg(feature = "config-loaders")]
use serde::Deserialize;
#[cfg(feature = "config-loaders")]
use std::path::Path;

/// Policy for absent input passed to a typed predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config-loaders", derive(Deserialize))]
#[cfg_attr(feature = "config-loaders", serde(rename_all = "snake_case"))]
pub enum AbsentInput {
    /// Every predicate answers `false`.
    #[default]
    Lenient,
    /// `is_ptr`, `is_bool` and the numeric sub-range predicates fail with
    /// [`KindError::Absent`](crate::KindError::Absent).
    Fault,
}

/// How raw bytes are decoded into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config-loaders", derive(Deserialize))]
#[cfg_attr(feature = "config-loaders", serde(rename_all = "snake_case"))]
pub enum BytesText {
    /// Invalid sequences become U+FFFD.
    #[default]
    Lossy,
    /// Invalid UTF-8 has no text view.
    Utf8Only,
}

/// Configuration for an [`Inspector`](crate::Inspector).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config-loaders", derive(Deserialize))]
#[cfg_attr(feature = "config-loaders", serde(default, deny_unknown_fields))]
pub struct ProbeConfig {
    pub absent_input: AbsentInput,
    pub bytes_text: BytesText,
}

impl ProbeConfig {
    /// Lenient, lossy defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail on absent input instead of answering `false`.
    pub fn strict() -> Self {
        Self::default().absent_input(AbsentInput::Fault)
    }

    pub fn absent_input(mut self, policy: AbsentInput) -> Self {
        self.absent_input = policy;
        self
    }

    pub fn bytes_text(mut self, mode: BytesText) -> Self {
        self.bytes_text = mode;
        self
    }
}

#[cfg(feature = "config-loaders")]
impl ProbeConfig {
    /// Parse configuration from YAML text. Missing keys keep their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))?;
        log::debug!("loaded probe config: {:?}", config);
        Ok(config)
    }

    /// Load configuration from a YAML file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::debug!("reading probe config from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }
}
