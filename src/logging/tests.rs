// ghcommit-rs: Verified GitHub Commits from CI
//
// SPDX-FileCopyrightText: 2026 The ghcommit-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogFormat, LogLevel};

#[test]
fn test_log_level_bounds() {
    assert!(LogLevel::new(0).is_ok());
    assert!(LogLevel::new(6).is_ok());
    assert!(LogLevel::new(7).is_err());
    assert_eq!(LogLevel::from_u8(9), None);
}

#[test]
fn test_log_level_filters() {
    let filters: Vec<_> = (0..=6)
        .filter_map(LogLevel::from_u8)
        .map(|level| format!("{} => {}", level.as_u8(), level.to_filter_string()))
        .collect();

    insta::assert_snapshot!(filters.join("\n"), @r"
    0 => off
    1 => error
    2 => warn
    3 => warn,ghcommit=info,ghcommit_rs=info
    4 => warn,ghcommit=debug,ghcommit_rs=debug
    5 => warn,ghcommit=trace,ghcommit_rs=trace
    6 => trace
    ");
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert_eq!(config.console_format(), LogFormat::Text);
    assert!(config.log_file().is_none());
    assert!(!config.show_target());
}
