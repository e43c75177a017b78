// ghcommit-rs: Verified GitHub Commits from CI
//
// SPDX-FileCopyrightText: 2026 The ghcommit-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Staged diff parsing.
//!
//! ```text
//! git diff --cached --name-status --no-renames -z HEAD
//!   "A\0new.txt\0M\0src/lib.rs\0D\0old.txt\0"
//!        |
//!        v
//! StagedChanges { additions: [new.txt, src/lib.rs], deletions: [old.txt] }
//! ```

use crate::error::{ActionResult, GitError};
use crate::github::types::{FileAddition, FileChanges, FileDeletion};

/// Paths staged in the index relative to HEAD, repository-root relative.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StagedChanges {
    pub additions: Vec<String>,
    pub deletions: Vec<String>,
}

impl StagedChanges {
    /// Total number of changed paths.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.additions.len() + self.deletions.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Convert into mutation file changes. Addition contents stay unloaded.
    #[must_use]
    pub fn into_file_changes(self) -> FileChanges {
        FileChanges {
            additions: self
                .additions
                .into_iter()
                .map(FileAddition::unloaded)
                .collect(),
            deletions: self.deletions.into_iter().map(FileDeletion::new).collect(),
        }
    }
}

/// Parse NUL-separated `--name-status` output.
///
/// `D` is a deletion; `A`, `M` and `T` (type change) are additions, since the
/// mutation replaces the whole file either way.
///
/// # Errors
///
/// Returns `GitError::MalformedDiff` for a dangling status or an unknown status
/// letter (e.g. `U` for unmerged paths).
pub fn parse_name_status(output: &str) -> ActionResult<StagedChanges> {
    let mut changes = StagedChanges::default();
    let mut fields = output.split('\0').filter(|field| !field.is_empty());

    while let Some(status) = fields.next() {
        let path = fields
            .next()
            .ok_or_else(|| GitError::MalformedDiff(format!("status '{status}' without a path")))?;

        match status.chars().next() {
            Some('D') => changes.deletions.push(path.to_string()),
            Some('A' | 'M' | 'T') => changes.additions.push(path.to_string()),
            _ => {
                return Err(
                    GitError::MalformedDiff(format!("unsupported status '{status}' for {path}"))
                        .into(),
                );
            }
        }
    }

    Ok(changes)
}
