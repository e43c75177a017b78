// ghcommit-rs: Verified GitHub Commits from CI
//
// SPDX-FileCopyrightText: 2026 The ghcommit-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Commit workflow.
//!
//! # State Machine
//!
//! ```text
//! ResolveBranch        (resolve_branch, before run)
//!      |
//! StageChanges         files empty --> InputFilesRequired
//!      |               switch branch if requested, git add
//! CheckForChanges      empty diff  --> NoFileChanges (no network)
//!      |
//! FetchRemoteState     get_repository(branch)
//!      |
//! ReconcileParent      Existing: local HEAD == remote tip, else ParentMismatch
//!      |               Missing:  push current branch (once)
//! SubmitCommit         createCommitOnBranch(expectedHeadOid = local HEAD)
//!      |
//! TagCommit            optional createRef
//!      v
//! CommitOutcome
//! ```
//!
//! Only the most recent remote commit is compared with local HEAD; a remote
//! tip that is an ancestor of HEAD is still a mismatch.


use bon::Builder;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::config::context::RunnerContext;
use crate::error::{ActionError, ActionResult};
use crate::git;
use crate::github::client::GraphQlClient;
use crate::github::commit::create_commit_on_branch;
use crate::github::repository::get_repository;
use crate::github::tag::create_tag;
use crate::github::types::{
    CommitMessage, CommittableBranch, CreatedCommit, ParentCommit, RemoteRef, RepoSlug, TagRef,
};

/// Branch the commit goes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchTarget {
    pub name: String,
    /// Create and check out `name` locally before staging.
    pub switch: bool,
}

/// Decide the target branch.
///
/// An explicit `input` wins and is switched to when it differs from the
/// triggering ref's branch. Otherwise the branch comes from `GITHUB_REF`
/// (`refs/heads/<name>`), then `GITHUB_HEAD_REF` for pull requests.
///
/// # Errors
///
/// Returns `ActionError::UnsupportedEvent` if no branch can be determined.
pub fn resolve_branch(input: Option<&str>, context: &RunnerContext) -> ActionResult<BranchTarget> {
    let triggering = context.ref_branch().or(context.head_ref.as_deref());

    match (input.map(str::trim).filter(|b| !b.is_empty()), triggering) {
        (Some(requested), current) => Ok(BranchTarget {
            name: requested.to_string(),
            switch: current != Some(requested),
        }),
        (None, Some(current)) => Ok(BranchTarget {
            name: current.to_string(),
            switch: false,
        }),
        (None, None) => Err(ActionError::unsupported_event(context.event_name())),
    }
}

/// Everything one commit run needs.
#[derive(Debug, Clone, Builder)]
pub struct CommitRequest {
    #[builder(into, setters(name = with_workspace))]
    workspace: PathBuf,
    #[builder(setters(name = with_repository))]
    repository: RepoSlug,
    #[builder(setters(name = with_branch))]
    branch: BranchTarget,
    #[builder(default, setters(name = with_files))]
    files: Vec<String>,
    #[builder(setters(name = with_message))]
    message: CommitMessage,
    #[builder(setters(name = with_tag))]
    tag: Option<String>,
    #[builder(default = true, setters(name = with_tag_only_if_file_changes))]
    tag_only_if_file_changes: bool,
    #[builder(default, setters(name = with_push_force))]
    push_force: bool,
}

impl CommitRequest {
    #[must_use]
    pub fn workspace(&self) -> &Path {
        &self.workspace
    }

    #[must_use]
    pub const fn branch(&self) -> &BranchTarget {
        &self.branch
    }

    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Whether a run without file changes still creates the tag (at HEAD).
    #[must_use]
    pub const fn tags_without_changes(&self) -> bool {
        self.tag.is_some() && !self.tag_only_if_file_changes
    }
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitOutcome {
    pub branch: String,
    pub commit: CreatedCommit,
    /// Whether the branch had to be pushed first.
    pub pushed: bool,
    pub tag: Option<TagRef>,
}

/// Stage, verify and submit the commit.
///
/// # Errors
///
/// - `InputFilesRequired` for an empty file list.
/// - `NoFileChanges` when the staged diff is empty (informational).
/// - `ParentMismatch` when the remote branch moved away from local HEAD.
/// - `Git`, `GraphQl` or `Fs` errors from the steps themselves.
pub async fn run(client: &GraphQlClient, request: &CommitRequest) -> ActionResult<CommitOutcome> {
    if request.files.is_empty() {
        return Err(ActionError::InputFilesRequired);
    }
    let workspace = request.workspace.as_path();
    let branch = &request.branch.name;

    // StageChanges
    if request.branch.switch {
        git::cmd::switch_branch(workspace, branch)?;
    }
    git::cmd::add_file_changes(workspace, &request.files)?;
    let staged = git::cmd::get_file_changes(workspace)?;

    // CheckForChanges
    if staged.is_empty() {
        info!("staged diff is empty");
        return Err(ActionError::NoFileChanges);
    }
    info!(
        additions = staged.additions.len(),
        deletions = staged.deletions.len(),
        branch = %branch,
        "committing staged changes"
    );

    // FetchRemoteState
    let root = git::query::work_tree(workspace)?;
    let snapshot = get_repository(client, &request.repository, Some(branch)).await?;
    let head = git::query::head_sha(&root)?;

    // ReconcileParent
    let pushed = match &snapshot.remote_ref {
        RemoteRef::Existing { commit, .. } => {
            if commit.oid != head {
                return Err(ActionError::parent_mismatch(branch, &head, &commit.oid));
            }
            debug!(oid = %head, "local HEAD matches remote tip");
            false
        }
        RemoteRef::Missing => {
            let pushed_branch = git::cmd::push_current_branch(&root, request.push_force)?;
            if &pushed_branch != branch {
                warn!(
                    pushed = %pushed_branch,
                    target = %branch,
                    "checked-out branch differs from target branch"
                );
            }
            true
        }
    };

    // SubmitCommit
    let commit = create_commit_on_branch(
        client,
        &root,
        CommittableBranch::new(&request.repository, branch.as_str()),
        &ParentCommit::new(head),
        staged.into_file_changes(),
        request.message.clone(),
    )
    .await?;

    // TagCommit
    let tag = match &request.tag {
        Some(tag) => Some(create_tag(client, &snapshot.id, tag, &commit.oid).await?),
        None => None,
    };

    Ok(CommitOutcome {
        branch: branch.clone(),
        commit,
        pushed,
        tag,
    })
}

/// Tag local HEAD. Used when a run ends without file changes but the tag is
/// still wanted.
///
/// # Errors
///
/// Returns a `Git` or `GraphQl` error. Returns `Ok(None)` if the request has
/// no tag.
pub async fn tag_head(
    client: &GraphQlClient,
    request: &CommitRequest,
) -> ActionResult<Option<TagRef>> {
    let Some(tag) = &request.tag else {
        return Ok(None);
    };
    let head = git::query::head_sha(&request.workspace)?;
    let snapshot = get_repository(client, &request.repository, None).await?;
    info!(tag = %tag, oid = %head, "tagging HEAD without new commit");
    Ok(Some(create_tag(client, &snapshot.id, tag, &head).await?))
}
