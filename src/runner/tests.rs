// ghcommit-rs: Verified GitHub Commits from CI
//
// SPDX-FileCopyrightText: 2026 The ghcommit-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Outputs, escape_data, format_command, format_output, write_command};
use crate::error::ActionError;
use uuid::Uuid;

#[test]
fn test_escape_data() {
    insta::assert_snapshot!(escape_data("100% done\r\nnext line"), @"100%25 done%0D%0Anext line");
}

#[test]
fn test_format_command() {
    assert_eq!(
        format_command("notice", "No changes found"),
        "::notice::No changes found"
    );
    assert_eq!(
        format_command("error", "Parent commit mismatch\nlocal abc"),
        "::error::Parent commit mismatch%0Alocal abc"
    );
}

#[test]
fn test_write_command_one_line_per_call() {
    let mut out: Vec<u8> = Vec::new();
    write_command(&mut out, "notice", "No changes found").unwrap();
    write_command(&mut out, "warning", "two\nlines").unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "::notice::No changes found\n::warning::two%0Alines\n"
    );
}

#[test]
fn test_format_output_heredoc() {
    let entry = format_output("commit-sha", "feedface");
    let lines: Vec<&str> = entry.lines().collect();
    assert_eq!(lines.len(), 3);

    let (name, delimiter) = lines[0].split_once("<<").expect("heredoc header");
    assert_eq!(name, "commit-sha");
    let token = delimiter
        .strip_prefix("ghadelimiter_")
        .expect("delimiter prefix");
    assert!(Uuid::parse_str(token).is_ok(), "{delimiter}");
    assert_eq!(lines[1], "feedface");
    assert_eq!(lines[2], delimiter);
    assert!(entry.ends_with('\n'));
}

#[test]
fn test_format_output_delimiters_are_unique() {
    let delimiter = |entry: &str| entry.lines().next().unwrap().to_string();
    let first = format_output("commit-sha", "abc");
    let second = format_output("commit-sha", "abc");
    assert_ne!(delimiter(&first), delimiter(&second));
}

#[test]
fn test_format_output_multiline_value() {
    let entry = format_output("summary", "line one\nline two");
    let lines: Vec<&str> = entry.lines().collect();
    assert_eq!(lines[1..3], ["line one", "line two"]);
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_outputs_append_to_file() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("output");
    std::fs::write(&path, "existing=1\n").unwrap();

    let outputs = Outputs::new(Some(path.clone()));
    outputs.set("commit-sha", "abc123").unwrap();
    outputs.set("tag-commit-sha", "abc123").unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("existing=1\n"));
    assert_eq!(contents.matches("commit-sha<<ghadelimiter_").count(), 2);
    assert!(contents.contains("tag-commit-sha<<ghadelimiter_"));
    assert_eq!(contents.lines().filter(|l| *l == "abc123").count(), 2);
}

#[test]
fn test_outputs_without_file_is_noop() {
    let outputs = Outputs::default();
    assert!(outputs.file().is_none());
    assert!(outputs.set("commit-sha", "abc123").is_ok());
}

#[test]
fn test_outputs_unwritable_file() {
    let temp = tempfile::tempdir().unwrap();
    let outputs = Outputs::new(Some(temp.path().join("missing-dir").join("output")));
    let result = outputs.set("commit-sha", "abc123");
    assert!(matches!(result, Err(ActionError::Fs(_))), "{result:?}");
}
