// ghcommit-rs: Verified GitHub Commits from CI
//
// SPDX-FileCopyrightText: 2026 The ghcommit-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Runner context from `GITHUB_*` variables.
//!
//! ```text
//! GITHUB_REPOSITORY=octo/widgets     → repository
//! GITHUB_REF=refs/heads/main         → ref
//! GITHUB_HEAD_REF=feature            → head_ref (pull requests only)
//! GITHUB_EVENT_NAME=push             → event_name
//! GITHUB_OUTPUT=/path/to/file        → output
//! GITHUB_GRAPHQL_URL=https://...     → graphql_url
//! ```

use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{ActionResult, ConfigError};
use crate::github::client::DEFAULT_GRAPHQL_URL;
use crate::github::types::RepoSlug;

/// Workflow run context.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RunnerContext {
    pub repository: Option<String>,
    #[serde(rename = "ref")]
    pub git_ref: Option<String>,
    pub head_ref: Option<String>,
    pub event_name: Option<String>,
    pub sha: Option<String>,
    pub workspace: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub graphql_url: Option<String>,
}

impl RunnerContext {
    /// Read the context from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be deserialized.
    pub fn from_env() -> crate::error::Result<Self> {
        Self::load(None)
    }

    /// Read the context from `vars` instead of the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be deserialized.
    pub fn from_vars(vars: HashMap<String, String>) -> crate::error::Result<Self> {
        Self::load(Some(vars))
    }

    fn load(vars: Option<HashMap<String, String>>) -> crate::error::Result<Self> {
        let cfg = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("GITHUB")
                    .prefix_separator("_")
                    .source(vars),
            )
            .build()?;
        let mut context: Self = cfg.try_deserialize()?;
        for value in [
            &mut context.repository,
            &mut context.git_ref,
            &mut context.head_ref,
            &mut context.event_name,
            &mut context.sha,
            &mut context.graphql_url,
        ] {
            if value.as_deref().is_some_and(str::is_empty) {
                *value = None;
            }
        }
        for path in [&mut context.workspace, &mut context.output] {
            if path.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
                *path = None;
            }
        }
        Ok(context)
    }

    /// `GITHUB_REPOSITORY` as an `owner/name` pair.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingKey` if unset, or `InvalidValue` if it is
    /// not of the form `owner/name`.
    pub fn repository(&self) -> ActionResult<RepoSlug> {
        let raw = self
            .repository
            .as_deref()
            .ok_or_else(|| ConfigError::MissingKey {
                section: "context".to_string(),
                key: "GITHUB_REPOSITORY".to_string(),
            })?;
        Ok(raw.parse()?)
    }

    /// Branch named by `GITHUB_REF`, if it is a branch ref.
    #[must_use]
    pub fn ref_branch(&self) -> Option<&str> {
        self.git_ref
            .as_deref()
            .and_then(|r| r.strip_prefix("refs/heads/"))
            .filter(|b| !b.is_empty())
    }

    #[must_use]
    pub fn graphql_url(&self) -> &str {
        self.graphql_url.as_deref().unwrap_or(DEFAULT_GRAPHQL_URL)
    }

    #[must_use]
    pub fn event_name(&self) -> &str {
        self.event_name.as_deref().unwrap_or("unknown")
    }
}
