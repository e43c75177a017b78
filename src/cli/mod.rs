// ghcommit-rs: Verified GitHub Commits from CI
//
// SPDX-FileCopyrightText: 2026 The ghcommit-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for ghcommit-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! ghcommit [global options] <command>
//! commit [--file F]... [--branch-name B] [--tag T] ...
//! options
//! sources
//! version
//! ```

pub mod commit;
pub mod global;


use crate::cli::commit::CommitArgs;
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Verified GitHub commits from CI.
#[derive(Debug, Parser)]
#[command(
    name = "ghcommit",
    author,
    version,
    about = "Commit CI changes to GitHub through the GraphQL API",
    long_about = "ghcommit-rs Copyright (C) 2026 The ghcommit-rs Contributors\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Stages the given files in the workspace and commits them to the\n\
                  target branch with createCommitOnBranch, so the commit is signed\n\
                  by GitHub. Run `ghcommit commit` as a GitHub Actions step.",
    after_help = "INPUTS:\n\n\
                  Inputs are read, lowest priority first, from `ghcommit.toml` in the\n\
                  current directory, files given with --config, INPUT_* environment\n\
                  variables set by the Actions runner, --set KEY=VALUE, and finally\n\
                  the flags of the commit command."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all inputs and their resolved values.
    Options,

    /// Lists the configuration files that were loaded.
    Sources,

    /// Stages the files and commits them through the GitHub API.
    Commit(CommitArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
