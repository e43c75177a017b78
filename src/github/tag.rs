// ghcommit-rs: Verified GitHub Commits from CI
//
// SPDX-FileCopyrightText: 2026 The ghcommit-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Lightweight tag creation through `createRef`.

use serde::Deserialize;
use serde_json::json;
use tracing::info;

use super::client::GraphQlClient;
use super::types::TagRef;
use crate::error::GraphQlError;

const CREATE_REF_MUTATION: &str = r"
mutation CreateRef($input: CreateRefInput!) {
  createRef(input: $input) {
    ref {
      name
      target {
        oid
      }
    }
  }
}
";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateRefData {
    create_ref: Option<CreateRefPayload>,
}

#[derive(Debug, Deserialize)]
struct CreateRefPayload {
    #[serde(rename = "ref")]
    created: Option<RawTagRef>,
}

#[derive(Debug, Deserialize)]
struct RawTagRef {
    name: String,
    target: RawTarget,
}

#[derive(Debug, Deserialize)]
struct RawTarget {
    oid: String,
}

/// Fully qualified ref name for a tag (`v1` -> `refs/tags/v1`).
#[must_use]
pub fn qualified_tag_name(tag: &str) -> String {
    if tag.starts_with("refs/tags/") {
        tag.to_string()
    } else {
        format!("refs/tags/{tag}")
    }
}

/// Create tag `tag` pointing at `oid`.
///
/// # Errors
///
/// Returns a `GraphQlError` if the tag already exists or the request fails.
pub async fn create_tag(
    client: &GraphQlClient,
    repository_id: &str,
    tag: &str,
    oid: &str,
) -> Result<TagRef, GraphQlError> {
    let variables = json!({
        "input": {
            "repositoryId": repository_id,
            "name": qualified_tag_name(tag),
            "oid": oid,
        }
    });

    let data: CreateRefData = client.execute(CREATE_REF_MUTATION, &variables).await?;
    let created = data
        .create_ref
        .and_then(|payload| payload.created)
        .ok_or_else(|| GraphQlError::MalformedResponse("createRef returned no ref".to_string()))?;

    info!(tag = %created.name, oid = %created.target.oid, "created tag");
    Ok(TagRef {
        name: created.name,
        oid: created.target.oid,
    })
}
