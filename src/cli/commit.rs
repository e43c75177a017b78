// ghcommit-rs: Verified GitHub Commits from CI
//
// SPDX-FileCopyrightText: 2026 The ghcommit-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI arguments for the `commit` command.
//!
//! ```text
//! ghcommit commit                              (inputs from INPUT_*)
//! ghcommit commit -f a.txt -f docs/ -m "chore: regenerate"
//! ghcommit commit -f CHANGELOG.md --branch-name release --tag v1.2.0
//! ```
//!
//! Flags given here override every other input source.

use clap::Args;
use std::path::PathBuf;

use crate::config::Config;

/// Arguments for the `commit` command.
#[derive(Debug, Clone, Default, Args)]
pub struct CommitArgs {
    /// File or directory to stage. Can be specified multiple times.
    #[arg(short = 'f', long = "file", value_name = "PATH", action = clap::ArgAction::Append)]
    pub files: Vec<String>,

    /// Branch to commit to (created from HEAD when it differs from the current one).
    #[arg(short = 'b', long = "branch-name", value_name = "BRANCH")]
    pub branch_name: Option<String>,

    /// Commit message. The first line becomes the headline.
    #[arg(short = 'm', long = "commit-message", value_name = "MESSAGE")]
    pub commit_message: Option<String>,

    /// Tag to create on the new commit.
    #[arg(short = 't', long = "tag", value_name = "TAG")]
    pub tag: Option<String>,

    /// Also tag HEAD when there is nothing to commit.
    #[arg(long = "tag-without-changes")]
    pub tag_without_changes: bool,

    /// Force-push when creating the remote branch.
    #[arg(long = "branch-push-force")]
    pub branch_push_force: bool,

    /// Git working tree (default: `GITHUB_WORKSPACE`, then the current directory).
    #[arg(short = 'w', long = "workspace", value_name = "DIR")]
    pub workspace: Option<PathBuf>,

    /// GitHub token used for the GraphQL API.
    #[arg(long = "github-token", value_name = "TOKEN", env = "GH_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,
}

impl CommitArgs {
    /// Overlay the given flags onto `config`.
    pub fn apply_to(&self, config: &mut Config) {
        if !self.files.is_empty() {
            config.files.clone_from(&self.files);
        }
        if let Some(branch) = &self.branch_name {
            config.branch_name = Some(branch.clone());
        }
        if let Some(message) = &self.commit_message {
            config.commit_message.clone_from(message);
        }
        if let Some(tag) = &self.tag {
            config.tag = Some(tag.clone());
        }
        if self.tag_without_changes {
            config.tag_only_if_file_changes = false;
        }
        if self.branch_push_force {
            config.branch_push_force = true;
        }
        if let Some(workspace) = &self.workspace {
            config.workspace = Some(workspace.clone());
        }
        if let Some(token) = &self.github_token {
            config.github_token = Some(token.clone());
        }
        config.normalize();
    }
}
