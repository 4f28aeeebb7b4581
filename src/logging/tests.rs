// ndk-conf: Android NDK Toolchain Configuration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use super::{LogConfig, LogLevel};

#[test]
fn test_log_level_from_number() {
    let levels: Vec<_> = (0..=6_u8)
        .map(|n| LogLevel::try_from(n).unwrap())
        .collect();
    insta::assert_debug_snapshot!(levels, @r"
    [
        Silent,
        Error,
        Warn,
        Info,
        Debug,
        Trace,
        Dump,
    ]
    ");
    assert!(levels.iter().zip(0_u8..).all(|(l, n)| l.as_u8() == n));
}

#[test]
fn test_log_level_out_of_range() {
    let err = LogLevel::try_from(7_u8).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"invalid value for 'log_level' in section '[global]': log level must be 0-6, got 7");
}

#[test]
fn test_log_level_serde_as_number() {
    assert_eq!(serde_json::to_value(LogLevel::Debug).unwrap(), 4);
    assert_eq!(
        serde_json::from_value::<LogLevel>(serde_json::json!(2)).unwrap(),
        LogLevel::Warn
    );
    assert!(serde_json::from_value::<LogLevel>(serde_json::json!(9)).is_err());
}

#[test]
fn test_log_level_directives() {
    let directives: Vec<_> = (0..=6_u8)
        .filter_map(|n| LogLevel::try_from(n).ok())
        .map(LogLevel::directive)
        .collect();
    assert_eq!(
        directives,
        ["off", "error", "warn", "info", "debug", "trace", "trace"]
    );
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::Info);
    assert_eq!(config.file_level(), LogLevel::Trace);
    assert!(config.log_file().is_none());
    assert!(config.show_timestamps());
}

#[test]
fn test_log_config_builder() {
    let config = LogConfig::builder()
        .with_console_level(LogLevel::Silent)
        .with_log_file("logs/ndkconf.log")
        .with_show_timestamps(false)
        .build();

    assert_eq!(config.console_level(), LogLevel::Silent);
    assert_eq!(config.log_file(), Some(Path::new("logs/ndkconf.log")));
    assert!(!config.show_timestamps());
}
