// ghcommit-rs: Verified GitHub Commits from CI
//
// SPDX-FileCopyrightText: 2026 The ghcommit-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git query operations using gix backend.
//!
//! ```text
//! query.rs --> GixBackend --> .git/ (no subprocess)
//! ```

use crate::error::ActionResult;
use std::path::{Path, PathBuf};

use super::backend::{GitQuery, GixBackend};

/// Get current branch name (None if HEAD is detached).
///
/// # Errors
///
/// Returns a `GitError` if repository discovery or head resolution fails.
pub fn current_branch(path: &Path) -> ActionResult<Option<String>> {
    GixBackend::current_branch(path)
}

/// Get the sha of the locally checked-out commit.
///
/// # Errors
///
/// Returns a `GitError` if repository discovery fails or HEAD is unborn.
pub fn head_sha(path: &Path) -> ActionResult<String> {
    GixBackend::head_sha(path)
}

/// Get the work tree root containing `path`.
///
/// # Errors
///
/// Returns a `GitError` if repository discovery fails or the repository is bare.
pub fn work_tree(path: &Path) -> ActionResult<PathBuf> {
    GixBackend::work_tree(path)
}
