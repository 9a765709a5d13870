// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! YAML configuration loader tests (`config-loaders` feature).

use dynkind::{AbsentInput, BytesText, ConfigError, Inspector, KindError, ProbeConfig, Value};
use std::io::Write;

#[test]
fn test_parse_full_document() {
    let config = ProbeConfig::from_yaml_str("absent_input: fault\nbytes_text: utf8_only\n")
        .expect("parse");
    assert_eq!(config.absent_input, AbsentInput::Fault);
    assert_eq!(config.bytes_text, BytesText::Utf8Only);
}

#[test]
fn test_missing_keys_keep_defaults() {
    let config = ProbeConfig::from_yaml_str("bytes_text: lossy\n").expect("parse");
    assert_eq!(config, ProbeConfig::default());
}

#[test]
fn test_unknown_policy_is_rejected() {
    let err = ProbeConfig::from_yaml_str("absent_input: panic\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));

    let err = ProbeConfig::from_yaml_str("absent: fault\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_load_from_file_drives_inspector() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    writeln!(file, "absent_input: fault").expect("write");

    let config = ProbeConfig::from_yaml_file(file.path()).expect("load");
    let inspector = Inspector::new(config);
    assert!(matches!(
        inspector.is_bool(&Value::Nil),
        Err(KindError::Absent { op: "is_bool" })
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = ProbeConfig::from_yaml_file(dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
