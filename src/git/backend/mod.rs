// ghcommit-rs: Verified GitHub Commits from CI
//
// SPDX-FileCopyrightText: 2026 The ghcommit-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git backend abstraction layer.
//!
//! ```text
//! GitQuery (read)     --> GixBackend (pure Rust gix)
//! GitMutation (write) --> ShellBackend (git CLI)
//! ```

use crate::error::{ActionResult, GitError, GixError};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::trace;

// --- Query Trait (Read-only operations) ---

/// Read-only git query operations.
///
/// Implementors provide methods to inspect repository state without modification.
pub trait GitQuery {
    /// Get current branch name (None if HEAD is detached).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery or head resolution fails.
    fn current_branch(path: &Path) -> ActionResult<Option<String>>;

    /// Get the full hex sha of the commit HEAD points at.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery fails or HEAD is unborn.
    fn head_sha(path: &Path) -> ActionResult<String>;

    /// Get the root directory of the work tree containing `path`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery fails or the repository is bare.
    fn work_tree(path: &Path) -> ActionResult<PathBuf>;
}

// --- Mutation Trait (Write operations) ---

/// Git operations that modify the index, branches or remotes.
pub trait GitMutation {
    /// Create a new local branch at HEAD and check it out.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the branch already exists or the checkout conflicts.
    fn switch_branch(repo_path: &Path, branch: &str) -> ActionResult<()>;

    /// Stage the given paths, including deletions of missing tracked paths.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if a pathspec matches nothing or `git add` fails.
    fn add_paths(repo_path: &Path, paths: &[String]) -> ActionResult<()>;

    /// Push `branch` to `origin` and set it as upstream.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the push is rejected or the remote is unreachable.
    fn push_branch(repo_path: &Path, branch: &str, force: bool) -> ActionResult<()>;
}

// --- GixBackend Implementation (Pure Rust) ---

/// Pure Rust git backend using gix.
///
/// Provides read-only operations without spawning subprocesses.
pub struct GixBackend;

impl GixBackend {
    fn discover(path: &Path) -> ActionResult<gix::Repository> {
        gix::discover(path)
            .map_err(|e| GitError::Gix(GixError::Discover(Box::new(e))).into())
    }
}

impl GitQuery for GixBackend {
    fn current_branch(path: &Path) -> ActionResult<Option<String>> {
        let repo = Self::discover(path)?;
        let head = repo
            .head_name()
            .map_err(|e| GitError::Gix(GixError::Head(e)))?;
        Ok(head.map(|name| name.shorten().to_string()))
    }

    fn head_sha(path: &Path) -> ActionResult<String> {
        let repo = Self::discover(path)?;
        let id = repo
            .head_id()
            .map_err(|e| GitError::Gix(GixError::HeadId(e.to_string())))?;
        Ok(id.to_string())
    }

    fn work_tree(path: &Path) -> ActionResult<PathBuf> {
        let repo = Self::discover(path)?;
        repo.workdir()
            .map(Path::to_path_buf)
            .ok_or_else(|| {
                GitError::CommandFailed {
                    command: "work tree lookup".to_string(),
                    message: "repository has no worktree (bare repository)".to_string(),
                }
                .into()
            })
    }
}

// --- ShellBackend Implementation (Git CLI) ---

/// Shell-based git backend using git CLI.
///
/// Required for every write: staging, branch creation and pushing through the
/// runner's configured credentials.
pub struct ShellBackend;

/// Resolved path of the `git` executable, looked up once.
fn git_executable() -> ActionResult<&'static Path> {
    static GIT: OnceLock<Option<PathBuf>> = OnceLock::new();
    GIT.get_or_init(|| which::which("git").ok())
        .as_deref()
        .ok_or_else(|| GitError::GitNotFound.into())
}

impl ShellBackend {
    /// Execute a git command and return its raw stdout.
    /// Sets `GCM_INTERACTIVE=never` and `GIT_TERMINAL_PROMPT=0`.
    fn git_output(args: &[&str], cwd: &Path) -> ActionResult<Vec<u8>> {
        use std::process::Command;

        trace!(cwd = %cwd.display(), "git {}", args.join(" "));

        let output = Command::new(git_executable()?)
            .args(args)
            .current_dir(cwd)
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()
            .map_err(|e| std::io::Error::new(e.kind(), format!("failed to execute git: {e}")))?;

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command: format!("git {}", args.join(" ")),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }
        Ok(output.stdout)
    }

    /// Execute a git command and return its trimmed stdout.
    pub(crate) fn git_command(args: &[&str], cwd: &Path) -> ActionResult<String> {
        Self::git_output(args, cwd).map(|out| String::from_utf8_lossy(&out).trim().to_string())
    }

    /// NUL-separated `--name-status` diff of the index against HEAD.
    /// Output that is not valid UTF-8 is a `MalformedDiff`.
    pub(crate) fn diff_cached(repo_path: &Path) -> ActionResult<String> {
        let output = Self::git_output(
            &[
                "diff",
                "--cached",
                "--name-status",
                "--no-renames",
                "-z",
                "HEAD",
            ],
            repo_path,
        )?;
        String::from_utf8(output).map_err(|e| {
            GitError::MalformedDiff(format!("path is not valid UTF-8: {e}")).into()
        })
    }
}

impl GitMutation for ShellBackend {
    fn switch_branch(repo_path: &Path, branch: &str) -> ActionResult<()> {
        Self::git_command(&["checkout", "-q", "-b", branch], repo_path)?;
        Ok(())
    }

    fn add_paths(repo_path: &Path, paths: &[String]) -> ActionResult<()> {
        let mut args = vec!["add", "--all", "--"];
        args.extend(paths.iter().map(String::as_str));
        Self::git_command(&args, repo_path)?;
        Ok(())
    }

    fn push_branch(repo_path: &Path, branch: &str, force: bool) -> ActionResult<()> {
        let refspec = format!("HEAD:refs/heads/{branch}");
        let mut args = vec!["push", "--quiet", "--set-upstream"];
        if force {
            args.push("--force");
        }
        args.extend(["origin", refspec.as_str()]);
        Self::git_command(&args, repo_path)?;
        Ok(())
    }
}
