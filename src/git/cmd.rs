// ghcommit-rs: Verified GitHub Commits from CI
//
// SPDX-FileCopyrightText: 2026 The ghcommit-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git command operations using shell backend.
//!
//! ```text
//! switch_branch        git checkout -b <name>
//! add_file_changes     git add --all -- <paths>
//! get_file_changes     git diff --cached --name-status -z HEAD
//! push_current_branch  git push --set-upstream origin HEAD:refs/heads/<branch>
//! ```

use crate::error::{ActionResult, GitError};
use std::path::Path;
use tracing::{debug, info};

use super::backend::{GitMutation, ShellBackend};
use super::changes::{StagedChanges, parse_name_status};
use super::query::current_branch;

/// Create and check out a local branch at HEAD.
///
/// # Errors
///
/// Returns a `GitError` if the branch already exists or the checkout conflicts.
pub fn switch_branch(repo_path: &Path, branch: &str) -> ActionResult<()> {
    info!(branch, "switching to new local branch");
    ShellBackend::switch_branch(repo_path, branch)
}

/// Stage the given paths (new, modified and deleted).
///
/// # Errors
///
/// Returns a `GitError` if any pathspec matches nothing or `git add` fails.
pub fn add_file_changes(repo_path: &Path, paths: &[String]) -> ActionResult<()> {
    debug!(count = paths.len(), "staging file changes");
    ShellBackend::add_paths(repo_path, paths)
}

/// Read the staged diff against HEAD.
///
/// # Errors
///
/// Returns a `GitError` if `git diff` fails or prints unexpected output.
pub fn get_file_changes(repo_path: &Path) -> ActionResult<StagedChanges> {
    let output = ShellBackend::diff_cached(repo_path)?;
    let changes = parse_name_status(&output)?;
    debug!(
        additions = changes.additions.len(),
        deletions = changes.deletions.len(),
        "staged changes"
    );
    Ok(changes)
}

/// Push the checked-out branch to `origin`, establishing it remotely.
///
/// # Errors
///
/// Returns `GitError::DetachedHead` when no branch is checked out, or a
/// `GitError` if the push fails.
pub fn push_current_branch(repo_path: &Path, force: bool) -> ActionResult<String> {
    let branch = current_branch(repo_path)?.ok_or_else(|| GitError::DetachedHead {
        path: repo_path.display().to_string(),
    })?;
    info!(branch = %branch, force, "pushing branch to origin");
    ShellBackend::push_branch(repo_path, &branch, force)?;
    Ok(branch)
}
