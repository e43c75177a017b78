// ghcommit-rs: Verified GitHub Commits from CI
//
// SPDX-FileCopyrightText: 2026 The ghcommit-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |                commit / options
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |    config      runner     |
//!              |  INPUT_*,     ::notice::, |
//!              |  GITHUB_*   GITHUB_OUTPUT |
//!              '-------------+-------------'
//!                            v
//!                         commit
//!              branch, stage, reconcile, submit
//!                            |
//!                  +---------+---------+
//!                  v                   v
//!                 git               github
//!              gix/CLI          GraphQL client,
//!                            queries, mutations
//!
//!   +-----------------------------------------+
//!   |  foundation        error, logging       |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod github;
pub mod logging;
pub mod runner;
