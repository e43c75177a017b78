// ghcommit-rs: Verified GitHub Commits from CI
//
// SPDX-FileCopyrightText: 2026 The ghcommit-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Commit submission through `createCommitOnBranch`.
//!
//! ```text
//! FileChanges (unloaded)
//!        |
//!   populate_contents (additions only)
//!        |
//!        v
//! CreateCommitOnBranchInput { branch, expectedHeadOid, message, fileChanges }
//!        |
//!   one request, no retry
//!        v
//! server: tip == expectedHeadOid ? create commit : reject whole mutation
//! ```

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::path::Path;
use tracing::{debug, info};

use super::blob::populate_contents;
use super::client::GraphQlClient;
use super::types::{CommitMessage, CommittableBranch, CreatedCommit, FileChanges, ParentCommit};
use crate::error::{ActionResult, GraphQlError};

const CREATE_COMMIT_MUTATION: &str = r"
mutation CreateCommitOnBranch($input: CreateCommitOnBranchInput!) {
  createCommitOnBranch(input: $input) {
    commit {
      oid
    }
  }
}
";

/// Input object of the mutation.
#[derive(Debug, Clone, Serialize, Builder)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommitOnBranchInput {
    #[builder(setters(name = with_branch))]
    branch: CommittableBranch,
    #[builder(into, setters(name = with_expected_head_oid))]
    expected_head_oid: String,
    #[builder(setters(name = with_message))]
    message: CommitMessage,
    #[builder(setters(name = with_file_changes))]
    file_changes: FileChanges,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateCommitData {
    create_commit_on_branch: Option<CreateCommitPayload>,
}

#[derive(Debug, Deserialize)]
struct CreateCommitPayload {
    commit: Option<CommitOid>,
}

#[derive(Debug, Deserialize)]
struct CommitOid {
    oid: String,
}

/// Create a commit on `branch` whose parent must be `parent`.
///
/// Additions without contents are read from `root` first.
///
/// # Errors
///
/// Returns an `FsError` if an added file cannot be read, or a `GraphQlError`
/// if the mutation is rejected (including a moved branch tip).
pub async fn create_commit_on_branch(
    client: &GraphQlClient,
    root: &Path,
    branch: CommittableBranch,
    parent: &ParentCommit,
    mut file_changes: FileChanges,
    message: CommitMessage,
) -> ActionResult<CreatedCommit> {
    let loaded = populate_contents(root, &mut file_changes).await?;
    debug!(
        loaded,
        additions = file_changes.additions.len(),
        deletions = file_changes.deletions.len(),
        "file changes ready"
    );

    let input = CreateCommitOnBranchInput::builder()
        .with_branch(branch)
        .with_expected_head_oid(parent.oid.as_str())
        .with_message(message)
        .with_file_changes(file_changes)
        .build();

    let data: CreateCommitData = client
        .execute(CREATE_COMMIT_MUTATION, &json!({ "input": input }))
        .await?;

    let oid = data
        .create_commit_on_branch
        .and_then(|payload| payload.commit)
        .map(|commit| commit.oid)
        .ok_or_else(|| {
            GraphQlError::MalformedResponse("createCommitOnBranch returned no commit".to_string())
        })?;

    info!(oid = %oid, parent = %parent.oid, "created commit");
    Ok(CreatedCommit { oid })
}
