// ghcommit-rs: Verified GitHub Commits from CI
//
// SPDX-FileCopyrightText: 2026 The ghcommit-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository and branch tip query.
//!
//! ```text
//! get_repository(slug, Some("feature"))
//!   repository { id nameWithOwner
//!                defaultBranchRef { name target.history(first: 1) }
//!                ref("refs/heads/feature") { ... } }
//!        |
//!        v
//!   ref == null  --> RemoteRef::Missing
//!   ref != null  --> RemoteRef::Existing { name, commit }
//! ```

use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::client::GraphQlClient;
use super::types::{RemoteCommit, RemoteRef, RepoSlug, RepositorySnapshot};
use crate::error::GraphQlError;

const REPOSITORY_QUERY: &str = r"
query Repository($owner: String!, $repo: String!, $ref: String!, $byName: Boolean!) {
  repository(owner: $owner, name: $repo) {
    id
    nameWithOwner
    defaultBranchRef {
      ...RefTip
    }
    ref(qualifiedName: $ref) @include(if: $byName) {
      ...RefTip
    }
  }
}

fragment RefTip on Ref {
  name
  target {
    ... on Commit {
      history(first: 1) {
        nodes {
          oid
          message
          committedDate
        }
      }
    }
  }
}
";

#[derive(Debug, Deserialize)]
struct RepositoryData {
    repository: Option<RawRepository>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRepository {
    id: String,
    name_with_owner: String,
    #[serde(default)]
    default_branch_ref: Option<RawRef>,
    #[serde(rename = "ref", default)]
    branch_ref: Option<RawRef>,
}

#[derive(Debug, Deserialize)]
struct RawRef {
    name: String,
    #[serde(default)]
    target: Option<RawTarget>,
}

#[derive(Debug, Deserialize)]
struct RawTarget {
    #[serde(default)]
    history: Option<RawHistory>,
}

#[derive(Debug, Deserialize)]
struct RawHistory {
    nodes: Vec<RawCommit>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCommit {
    oid: String,
    message: String,
    committed_date: String,
}

impl RawRef {
    fn into_remote_ref(self) -> Result<RemoteRef, GraphQlError> {
        let commit = self
            .target
            .and_then(|target| target.history)
            .and_then(|history| history.nodes.into_iter().next())
            .ok_or_else(|| {
                GraphQlError::MalformedResponse(format!("ref '{}' has no commit history", self.name))
            })?;

        Ok(RemoteRef::Existing {
            name: self.name,
            commit: RemoteCommit {
                oid: commit.oid,
                message: commit.message,
                committed_date: commit.committed_date,
            },
        })
    }
}

/// Fetch the repository id and the tip of `branch` (or of the default branch
/// when `branch` is `None`).
///
/// A branch that does not exist is reported as [`RemoteRef::Missing`], not as
/// an error.
///
/// # Errors
///
/// Returns a `GraphQlError` if the request fails, the server reports errors, or
/// an existing ref has no commit history.
pub async fn get_repository(
    client: &GraphQlClient,
    repository: &RepoSlug,
    branch: Option<&str>,
) -> Result<RepositorySnapshot, GraphQlError> {
    let variables = json!({
        "owner": repository.owner(),
        "repo": repository.name(),
        "ref": branch.map(|b| format!("refs/heads/{b}")).unwrap_or_default(),
        "byName": branch.is_some(),
    });

    let data: RepositoryData = client.execute(REPOSITORY_QUERY, &variables).await?;
    let raw = data.repository.ok_or_else(|| {
        GraphQlError::MalformedResponse(format!("repository '{repository}' not found"))
    })?;

    let default_branch = raw.default_branch_ref.as_ref().map(|r| r.name.clone());
    let selected = if branch.is_some() {
        raw.branch_ref
    } else {
        raw.default_branch_ref
    };
    let remote_ref = match selected {
        Some(r) => r.into_remote_ref()?,
        None => RemoteRef::Missing,
    };

    debug!(
        repository = %raw.name_with_owner,
        branch = branch.unwrap_or("<default>"),
        remote_head = remote_ref.head_oid().unwrap_or("<missing>"),
        "fetched remote state"
    );

    Ok(RepositorySnapshot {
        id: raw.id,
        name_with_owner: raw.name_with_owner,
        default_branch,
        remote_ref,
    })
}
