// ghcommit-rs: Verified GitHub Commits from CI
//
// SPDX-FileCopyrightText: 2026 The ghcommit-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations module.
//!
//! ```text
//!        Public API
//!     query.rs    cmd.rs
//!         \         /
//!          v       v
//!      ,------------------,
//!      | backend (traits) |
//!      '--+----------+----'
//!         |          |
//!         v          v
//!    GitQuery    GitMutation
//!   (gix, read)  (CLI, write)
//!         |          |
//!         v          v
//!    GixBackend  ShellBackend
//!    .branch     .switch_branch
//!    .head_sha   .add_paths
//!    .work_tree  .push_branch
//!                .diff_cached --> changes.rs
//! ```
//!
//! **`GixBackend`**: pure Rust, no subprocess, read-only.
//! **`ShellBackend`**: git CLI for index writes and pushes.

pub mod backend;
pub mod changes;
pub mod cmd;
pub mod query;
