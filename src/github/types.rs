// ghcommit-rs: Verified GitHub Commits from CI
//
// SPDX-FileCopyrightText: 2026 The ghcommit-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Data model shared by the GraphQL operations.
//!
//! # Key Types
//!
//! | Type                 | Purpose                                   |
//! |----------------------|-------------------------------------------|
//! | `RepoSlug`           | `owner/name` parsed from the runner       |
//! | `FileChanges`        | additions (base64) and deletions          |
//! | `CommittableBranch`  | mutation target                           |
//! | `ParentCommit`       | expected head oid (compare-and-swap)      |
//! | `CommitMessage`      | headline + optional body                  |
//! | `RepositorySnapshot` | repository id + `RemoteRef`               |

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Repository identified as `owner/name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    owner: String,
    name: String,
}

impl RepoSlug {
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for RepoSlug {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(Self {
                    owner: owner.to_string(),
                    name: name.to_string(),
                })
            }
            _ => Err(ConfigError::InvalidValue {
                section: "context".to_string(),
                key: "repository".to_string(),
                message: format!("expected 'owner/name', got '{s}'"),
            }),
        }
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// A file to create or replace. `contents` is base64 once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileAddition {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contents: Option<String>,
}

impl FileAddition {
    /// An addition whose contents are still on disk.
    #[must_use]
    pub const fn unloaded(path: String) -> Self {
        Self {
            path,
            contents: None,
        }
    }

    #[must_use]
    pub const fn with_contents(path: String, contents: String) -> Self {
        Self {
            path,
            contents: Some(contents),
        }
    }
}

/// A file to remove.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileDeletion {
    pub path: String,
}

impl FileDeletion {
    #[must_use]
    pub const fn new(path: String) -> Self {
        Self { path }
    }
}

/// The `fileChanges` field of `createCommitOnBranch`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileChanges {
    pub additions: Vec<FileAddition>,
    pub deletions: Vec<FileDeletion>,
}

impl FileChanges {
    #[must_use]
    pub const fn len(&self) -> usize {
        self.additions.len() + self.deletions.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Target branch of the commit mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommittableBranch {
    pub repository_name_with_owner: String,
    pub branch_name: String,
}

impl CommittableBranch {
    #[must_use]
    pub fn new(repository: &RepoSlug, branch: impl Into<String>) -> Self {
        Self {
            repository_name_with_owner: repository.to_string(),
            branch_name: branch.into(),
        }
    }
}

/// Commit the caller believes is the current branch tip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentCommit {
    pub oid: String,
}

impl ParentCommit {
    #[must_use]
    pub fn new(oid: impl Into<String>) -> Self {
        Self { oid: oid.into() }
    }
}

/// Commit message in the mutation's `{ headline, body }` shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitMessage {
    pub headline: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl CommitMessage {
    /// Split a message into its first line and the rest.
    ///
    /// ```
    /// use ghcommit_rs::github::types::CommitMessage;
    ///
    /// let message = CommitMessage::parse("chore: bump\n\nRegenerated lockfile.");
    /// assert_eq!(message.headline, "chore: bump");
    /// assert_eq!(message.body.as_deref(), Some("Regenerated lockfile."));
    /// ```
    #[must_use]
    pub fn parse(message: &str) -> Self {
        let message = message.trim();
        let (headline, rest) = message.split_once('\n').unwrap_or((message, ""));
        let body = rest.trim();
        Self {
            headline: headline.trim().to_string(),
            body: (!body.is_empty()).then(|| body.to_string()),
        }
    }
}

/// Most recent commit of a remote ref.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteCommit {
    pub oid: String,
    pub message: String,
    pub committed_date: String,
}

/// State of the target branch on the remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteRef {
    /// Branch does not exist remotely yet.
    Missing,
    /// Branch exists; `commit` is its tip.
    Existing { name: String, commit: RemoteCommit },
}

impl RemoteRef {
    /// Oid of the remote tip, if the branch exists.
    #[must_use]
    pub fn head_oid(&self) -> Option<&str> {
        match self {
            Self::Missing => None,
            Self::Existing { commit, .. } => Some(&commit.oid),
        }
    }
}

/// Remote state fetched before committing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySnapshot {
    pub id: String,
    pub name_with_owner: String,
    pub default_branch: Option<String>,
    pub remote_ref: RemoteRef,
}

/// Commit created by `createCommitOnBranch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedCommit {
    pub oid: String,
}

/// Tag ref created by `createRef`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRef {
    pub name: String,
    pub oid: String,
}
