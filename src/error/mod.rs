// ghcommit-rs: Verified GitHub Commits from CI
//
// SPDX-FileCopyrightText: 2026 The ghcommit-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!                 ActionError (~24 bytes)
//!                        |
//!   +-------+-------+----+----+-------+-------+------+
//!   |       |       |         |       |       |      |
//!   v       v       v         v       v       v      v
//! Files  Event  NoChanges  Parent    Git   GraphQl  Cfg/Fs/Io
//! Req.   Box    (notice)   Box       Box   Box      Box
//!
//! Sub-errors (unboxed internally):
//!   Git      Gix, CommandFailed, GitNotFound
//!   GraphQl  Response, HttpError, Reqwest, MalformedResponse
//!   Config   MissingKey, InvalidValue
//!   Fs       IoError
//!
//! Top-level dispatch: NoFileChanges => notice + success,
//!                     everything else => ::error:: + failure
//! ```

use std::fmt;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`ActionError`].
pub type ActionResult<T> = std::result::Result<T, ActionError>;

/// Top-level error type of a commit run.
///
/// All payload-carrying variants are boxed to keep this enum at ~24 bytes.
#[derive(Debug, Error)]
pub enum ActionError {
    /// The `files` input is empty.
    #[error("Input <files> is required")]
    InputFilesRequired,

    /// The target branch cannot be derived from the triggering event.
    #[error("Unsupported event '{0}': unable to determine the target branch")]
    UnsupportedEvent(Box<str>),

    /// The staged diff is empty. Not a failure.
    #[error("No changes found")]
    NoFileChanges,

    /// Local HEAD does not match the remote branch tip.
    #[error("{0}")]
    ParentMismatch(Box<ParentMismatch>),

    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// GraphQL request failed. Displays the server's message unchanged.
    #[error("{0}")]
    GraphQl(#[from] Box<GraphQlError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

impl ActionError {
    /// Create an [`ActionError::UnsupportedEvent`] for the given event name.
    pub fn unsupported_event(event: impl Into<String>) -> Self {
        Self::UnsupportedEvent(event.into().into_boxed_str())
    }

    /// Create an [`ActionError::ParentMismatch`].
    pub fn parent_mismatch(
        branch: impl Into<String>,
        local: impl Into<String>,
        remote: impl Into<String>,
    ) -> Self {
        Self::ParentMismatch(Box::new(ParentMismatch {
            branch: branch.into(),
            local: local.into(),
            remote: remote.into(),
        }))
    }

    /// Whether the run should still end successfully.
    #[must_use]
    pub const fn is_informational(&self) -> bool {
        matches!(self, Self::NoFileChanges)
    }
}

/// Details of a stale local checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentMismatch {
    pub branch: String,
    pub local: String,
    pub remote: String,
}

impl fmt::Display for ParentMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parent commit mismatch on '{}': local HEAD is {} but the remote branch is at {}",
            self.branch, self.local, self.remote
        )
    }
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for ActionError {
                fn from(err: $error) -> Self {
                    ActionError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    GraphQlError => GraphQl,
    ConfigError => Config,
    FsError => Fs,
    std::io::Error => Io,
}

// --- Gix Errors ---

/// Wrapper for gix-specific errors.
///
/// Large error types are boxed to keep enum size manageable.
#[derive(Debug, Error)]
pub enum GixError {
    /// Failed to discover repository from path.
    #[error("failed to discover repository: {0}")]
    Discover(#[from] Box<gix::discover::Error>),

    /// Failed to get HEAD reference.
    #[error("failed to get head reference: {0}")]
    Head(#[from] gix::reference::find::existing::Error),

    /// Failed to peel HEAD to a commit id.
    #[error("failed to resolve HEAD commit: {0}")]
    HeadId(String),
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// The `git` executable is not on `PATH`.
    #[error("git executable not found in PATH")]
    GitNotFound,

    /// Git command execution failed.
    #[error("git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    /// Error from gix library.
    #[error("gix error: {0}")]
    Gix(#[from] GixError),

    /// `git diff` produced output that could not be parsed.
    #[error("unexpected diff output: {0}")]
    MalformedDiff(String),

    /// HEAD is detached where a branch is required.
    #[error("HEAD is detached in {path}")]
    DetachedHead { path: String },
}

// --- GraphQL Errors ---

/// GitHub GraphQL transport and response errors.
#[derive(Debug, Error)]
pub enum GraphQlError {
    /// The response carried an `errors` array; holds the first message.
    #[error("{message}")]
    Response { message: String },

    /// Non-success HTTP status.
    #[error("http error {status}: {body}")]
    HttpError { status: u16, body: String },

    /// Error from reqwest library.
    #[error("request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The response did not have the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
