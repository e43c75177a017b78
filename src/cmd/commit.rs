// ghcommit-rs: Verified GitHub Commits from CI
//
// SPDX-FileCopyrightText: 2026 The ghcommit-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `commit` command.
//!
//! ```text
//! CommitArgs + Config + RunnerContext
//!        |
//!   CommitRequest, GraphQlClient
//!        |
//!   commit::run
//!        |
//!   Ok             --> outputs commit-sha [, tag-commit-sha]
//!   NoFileChanges  --> [tag HEAD] ::notice:: + success
//!   other          --> error (printed as ::error:: by main)
//! ```

use anyhow::Context as _;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use crate::cli::commit::CommitArgs;
use crate::commit::{self, CommitRequest, resolve_branch};
use crate::config::Config;
use crate::config::context::RunnerContext;
use crate::error::{ActionError, ConfigError, Result};
use crate::github::client::GraphQlClient;
use crate::github::types::CommitMessage;
use crate::runner::{self, Outputs};

/// Output holding the new commit's oid.
pub const COMMIT_SHA_OUTPUT: &str = "commit-sha";
/// Output holding the oid the tag points at.
pub const TAG_COMMIT_SHA_OUTPUT: &str = "tag-commit-sha";

/// Run the `commit` command. Workflow commands go to `console`.
///
/// # Errors
///
/// Returns an error for missing inputs or runner context, and for every
/// failed step except an empty change set, which ends in a notice.
pub async fn run_commit_command<W: Write + ?Sized>(
    args: &CommitArgs,
    mut config: Config,
    context: &RunnerContext,
    console: &mut W,
) -> Result<()> {
    args.apply_to(&mut config);
    if config.files.is_empty() {
        return Err(ActionError::InputFilesRequired.into());
    }

    let token = config
        .github_token
        .clone()
        .ok_or_else(|| ConfigError::MissingKey {
            section: "inputs".to_string(),
            key: "github-token".to_string(),
        })?;
    let client = GraphQlClient::builder()
        .with_endpoint(context.graphql_url())
        .with_token(token)
        .build();

    let request = build_request(config, context)?;
    let outputs = Outputs::new(context.output.clone());

    match commit::run(&client, &request).await {
        Ok(outcome) => {
            info!(
                oid = %outcome.commit.oid,
                branch = %outcome.branch,
                pushed = outcome.pushed,
                "commit created"
            );
            outputs.set(COMMIT_SHA_OUTPUT, &outcome.commit.oid)?;
            if let Some(tag) = &outcome.tag {
                outputs.set(TAG_COMMIT_SHA_OUTPUT, &tag.oid)?;
            }
            Ok(())
        }
        Err(e) if e.is_informational() => {
            if request.tags_without_changes()
                && let Some(tag) = commit::tag_head(&client, &request).await?
            {
                outputs.set(TAG_COMMIT_SHA_OUTPUT, &tag.oid)?;
            }
            runner::write_command(console, "notice", &e.to_string())
                .context("Failed to write workflow command")?;
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Combine inputs and runner context into a commit request.
///
/// # Errors
///
/// Returns an error if the repository or the target branch cannot be
/// determined, or the current directory is unavailable.
pub fn build_request(config: Config, context: &RunnerContext) -> Result<CommitRequest> {
    let repository = context.repository()?;
    let branch = resolve_branch(config.branch_name.as_deref(), context)?;
    let workspace = resolve_workspace(config.workspace, context)?;

    Ok(CommitRequest::builder()
        .with_workspace(workspace)
        .with_repository(repository)
        .with_branch(branch)
        .with_files(config.files)
        .with_message(CommitMessage::parse(&config.commit_message))
        .maybe_with_tag(config.tag)
        .with_tag_only_if_file_changes(config.tag_only_if_file_changes)
        .with_push_force(config.branch_push_force)
        .build())
}

fn resolve_workspace(input: Option<PathBuf>, context: &RunnerContext) -> Result<PathBuf> {
    match input.or_else(|| context.workspace.clone()) {
        Some(path) => Ok(path),
        None => std::env::current_dir().context("Failed to determine the current directory"),
    }
}
