// ghcommit-rs: Verified GitHub Commits from CI
//
// SPDX-FileCopyrightText: 2026 The ghcommit-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Action inputs and runner context.
//!
//! # Input Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. ghcommit.toml (cwd, optional)
//! 3. --config
//! 4. INPUT_* env vars (GitHub Actions)
//! 5. --set overrides
//! 6. commit subcommand flags
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! INPUT_FILES="a.txt\nb.txt"       → files = ["a.txt", "b.txt"]
//! INPUT_BRANCH-NAME=release        → branch-name = "release"
//! INPUT_BRANCH-PUSH-FORCE=true     → branch-push-force = true
//! INPUT_TAG-ONLY-IF-FILE-CHANGES= → tag-only-if-file-changes = true (default)
//! ```
//!
//! The runner sets every declared input, using an empty string for the ones
//! the workflow leaves out, so blank values are treated as unset.

pub mod context;
pub mod loader;


use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::Result;

use loader::ConfigLoader;

/// Commit message used when none is given.
pub const DEFAULT_COMMIT_MESSAGE: &str = "Automated commit from CI";

/// Name of the optional file picked up from the working directory.
pub const LOCAL_CONFIG_FILE: &str = "ghcommit.toml";

/// Resolved action inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Paths to stage, relative to the workspace.
    #[serde(deserialize_with = "deserialize_file_list")]
    pub files: Vec<String>,
    /// Branch to commit to instead of the triggering ref's branch.
    pub branch_name: Option<String>,
    pub commit_message: String,
    /// Tag to create on the new commit.
    pub tag: Option<String>,
    #[serde(deserialize_with = "deserialize_flag_default_true")]
    pub tag_only_if_file_changes: bool,
    #[serde(deserialize_with = "deserialize_flag_default_false")]
    pub branch_push_force: bool,
    /// Git working tree. Falls back to `GITHUB_WORKSPACE`, then the cwd.
    pub workspace: Option<PathBuf>,
    #[serde(skip_serializing)]
    pub github_token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            branch_name: None,
            commit_message: DEFAULT_COMMIT_MESSAGE.to_string(),
            tag: None,
            tag_only_if_file_changes: true,
            branch_push_force: false,
            workspace: None,
            github_token: None,
        }
    }
}

/// `files` arrives either as one newline-delimited string (`INPUT_FILES`) or
/// as a TOML array.
#[derive(Deserialize)]
#[serde(untagged)]
enum FileList {
    Lines(String),
    List(Vec<String>),
}

fn deserialize_file_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = match FileList::deserialize(deserializer)? {
        FileList::Lines(s) => s.lines().map(str::to_string).collect(),
        FileList::List(list) => list,
    };
    Ok(split_file_list(entries))
}

fn split_file_list(entries: Vec<String>) -> Vec<String> {
    entries
        .into_iter()
        .map(|entry| entry.trim().to_string())
        .filter(|entry| !entry.is_empty())
        .collect()
}

/// Boolean inputs arrive as TOML booleans or as strings. The runner passes
/// `true`/`false` in any case, and a blank string when the input is unset.
#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Text(String),
}

fn parse_flag<'de, D>(deserializer: D, default: bool) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => Ok(value),
        Flag::Text(text) => match text.trim() {
            "" => Ok(default),
            t if t.eq_ignore_ascii_case("true") => Ok(true),
            t if t.eq_ignore_ascii_case("false") => Ok(false),
            t => Err(de::Error::invalid_value(
                Unexpected::Str(t),
                &"true, false or an empty string",
            )),
        },
    }
}

fn deserialize_flag_default_true<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    parse_flag(deserializer, true)
}

fn deserialize_flag_default_false<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    parse_flag(deserializer, false)
}

fn blank_to_none(value: &mut Option<String>) {
    if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
        *value = None;
    }
}

impl Config {
    /// Create a new input loader.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ghcommit_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("ghcommit.toml")
    ///     .with_env_prefix("INPUT")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load inputs from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Drop blank optional values and fall back to the default message.
    pub fn normalize(&mut self) {
        blank_to_none(&mut self.branch_name);
        blank_to_none(&mut self.tag);
        blank_to_none(&mut self.github_token);
        if self.commit_message.trim().is_empty() {
            self.commit_message = DEFAULT_COMMIT_MESSAGE.to_string();
        }
        if self
            .workspace
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            self.workspace = None;
        }
        self.files = split_file_list(std::mem::take(&mut self.files));
    }

    /// Format inputs for display, one `key = value` line each.
    ///
    /// The token is shown as `[hidden]`. Output is ordered by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let opt = |v: &Option<String>| v.clone().unwrap_or_default();

        let mut options = BTreeMap::new();
        options.insert("files", self.files.join(", "));
        options.insert("branch-name", opt(&self.branch_name));
        options.insert("commit-message", self.commit_message.replace('\n', "\\n"));
        options.insert("tag", opt(&self.tag));
        options.insert(
            "tag-only-if-file-changes",
            self.tag_only_if_file_changes.to_string(),
        );
        options.insert("branch-push-force", self.branch_push_force.to_string());
        options.insert(
            "workspace",
            self.workspace
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        if self.github_token.is_some() {
            options.insert("github-token", "[hidden]".to_string());
        }

        let max_key_len = options.keys().map(|k| k.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
