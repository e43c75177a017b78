// ghcommit-rs: Verified GitHub Commits from CI
//
// SPDX-FileCopyrightText: 2026 The ghcommit-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::blob::{load_blob, populate_contents};
use super::client::GraphQlClient;
use super::commit::create_commit_on_branch;
use super::repository::get_repository;
use super::tag::{create_tag, qualified_tag_name};
use super::types::{
    CommitMessage, CommittableBranch, FileAddition, FileChanges, FileDeletion, ParentCommit,
    RemoteRef, RepoSlug,
};
use crate::error::{ActionError, FsError, GraphQlError};
use serde_json::json;
use std::io;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use wiremock::matchers::{body_partial_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn client_for(server: &MockServer) -> GraphQlClient {
    GraphQlClient::builder()
        .with_endpoint(format!("{}/graphql", server.uri()))
        .with_token("test-token")
        .build()
}

fn slug() -> RepoSlug {
    "octo/widgets".parse().expect("valid slug")
}

fn history(oid: &str) -> serde_json::Value {
    json!({
        "target": {
            "history": {
                "nodes": [{
                    "oid": oid,
                    "message": "previous commit",
                    "committedDate": "2026-10-01T12:00:00Z"
                }]
            }
        }
    })
}

/// In-memory log sink for asserting on emitted events.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("log buffer")).into_owned()
    }
}

// =============================================================================
// types
// =============================================================================

#[test]
fn test_repo_slug_parse() {
    let slug = slug();
    assert_eq!(slug.owner(), "octo");
    assert_eq!(slug.name(), "widgets");
    assert_eq!(slug.to_string(), "octo/widgets");

    for invalid in ["", "octo", "/widgets", "octo/", "a/b/c"] {
        assert!(invalid.parse::<RepoSlug>().is_err(), "{invalid:?} should fail");
    }
}

#[test]
fn test_commit_message_parse() {
    let single = CommitMessage::parse("chore: update generated files\n");
    assert_eq!(single.headline, "chore: update generated files");
    assert_eq!(single.body, None);

    let multi = CommitMessage::parse("fix: regenerate\n\nFirst paragraph.\n\nSecond.");
    assert_eq!(multi.headline, "fix: regenerate");
    assert_eq!(multi.body.as_deref(), Some("First paragraph.\n\nSecond."));
}

#[test]
fn test_qualified_tag_name() {
    assert_eq!(qualified_tag_name("v1.2.3"), "refs/tags/v1.2.3");
    assert_eq!(qualified_tag_name("refs/tags/v1.2.3"), "refs/tags/v1.2.3");
}

#[test]
fn test_file_changes_serialize_in_mutation_shape() {
    let changes = FileChanges {
        additions: vec![FileAddition::with_contents(
            "a.txt".to_string(),
            "aGk=".to_string(),
        )],
        deletions: vec![FileDeletion::new("b.txt".to_string())],
    };
    let value = serde_json::to_value(&changes).expect("serialize");
    assert_eq!(
        value,
        json!({
            "additions": [{ "path": "a.txt", "contents": "aGk=" }],
            "deletions": [{ "path": "b.txt" }]
        })
    );

    let branch = CommittableBranch::new(&slug(), "main");
    assert_eq!(
        serde_json::to_value(&branch).expect("serialize"),
        json!({ "repositoryNameWithOwner": "octo/widgets", "branchName": "main" })
    );
}

// =============================================================================
// blob loader
// =============================================================================

#[tokio::test]
async fn test_load_blob_encodes_base64() {
    let temp = temp_dir();
    std::fs::create_dir_all(temp.path().join("docs")).expect("create docs");
    std::fs::write(temp.path().join("docs/a.txt"), b"hello").expect("write file");

    let addition = load_blob(temp.path(), "docs/a.txt").await.expect("load");
    assert_eq!(addition.path, "docs/a.txt");
    assert_eq!(addition.contents.as_deref(), Some("aGVsbG8="));
}

#[tokio::test]
async fn test_load_blob_missing_file_is_io_error() {
    let temp = temp_dir();
    match load_blob(temp.path(), "vanished.txt").await {
        Err(ActionError::Fs(boxed)) => match *boxed {
            FsError::IoError { path, source } => {
                assert!(path.ends_with("vanished.txt"), "{path}");
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected IoError, got {other:?}"),
        },
        other => panic!("expected ActionError::Fs, got {other:?}"),
    }
}

#[tokio::test]
async fn test_populate_contents_only_loads_missing_additions() {
    let temp = temp_dir();
    std::fs::write(temp.path().join("disk.txt"), b"from disk").expect("write file");

    // inline.txt and gone.txt do not exist on disk; reading either would fail.
    let mut changes = FileChanges {
        additions: vec![
            FileAddition::unloaded("disk.txt".to_string()),
            FileAddition::with_contents("inline.txt".to_string(), "aW5saW5l".to_string()),
        ],
        deletions: vec![FileDeletion::new("gone.txt".to_string())],
    };

    let loaded = populate_contents(temp.path(), &mut changes)
        .await
        .expect("populate");
    assert_eq!(loaded, 1);
    assert_eq!(
        changes.additions[0].contents.as_deref(),
        Some("ZnJvbSBkaXNr")
    );
    assert_eq!(changes.additions[1].contents.as_deref(), Some("aW5saW5l"));
}

// =============================================================================
// client
// =============================================================================

#[tokio::test]
async fn test_execute_sends_bearer_token_and_decodes_data() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("authorization", "Bearer test-token"))
        .and(body_partial_json(json!({ "variables": { "answer": 42 } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "ok": true } })))
        .expect(1)
        .mount(&server)
        .await;

    let data: serde_json::Value = client_for(&server)
        .execute("query { ok }", &json!({ "answer": 42 }))
        .await
        .expect("request should succeed");
    assert_eq!(data, json!({ "ok": true }));
}

#[tokio::test]
async fn test_execute_reports_first_error_and_logs_query_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [
                { "message": "Could not resolve to a Repository" },
                { "message": "Second problem" }
            ]
        })))
        .mount(&server)
        .await;

    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let result = client_for(&server)
        .execute::<_, serde_json::Value>("query Probe { viewer { login } }", &json!({ "probe": "xyz" }))
        .await;

    match result {
        Err(GraphQlError::Response { message }) => {
            assert_eq!(message, "Could not resolve to a Repository");
        }
        other => panic!("expected GraphQlError::Response, got {other:?}"),
    }

    let output = logs.contents();
    assert_eq!(output.matches("GraphQL request failed").count(), 2, "{output}");
    assert_eq!(output.matches("failed GraphQL request").count(), 1, "{output}");
    assert!(output.contains("query Probe"), "{output}");
    assert!(output.contains("xyz"), "{output}");
}

#[tokio::test]
async fn test_execute_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Bad credentials"))
        .mount(&server)
        .await;

    let result = client_for(&server)
        .execute::<_, serde_json::Value>("query { ok }", &json!({}))
        .await;
    match result {
        Err(GraphQlError::HttpError { status, body }) => {
            assert_eq!(status, 401);
            assert_eq!(body, "Bad credentials");
        }
        other => panic!("expected HttpError, got {other:?}"),
    }
}

#[test]
fn test_client_debug_hides_token() {
    let client = GraphQlClient::builder().with_token("ghp_secret").build();
    let debug = format!("{client:?}");
    assert!(!debug.contains("ghp_secret"), "{debug}");
    assert!(debug.contains("api.github.com/graphql"), "{debug}");
}

// =============================================================================
// repository query
// =============================================================================

#[tokio::test]
async fn test_get_repository_missing_branch_is_not_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({
            "variables": { "owner": "octo", "repo": "widgets", "ref": "refs/heads/feature", "byName": true }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "repository": {
                    "id": "R_kgDO123",
                    "nameWithOwner": "octo/widgets",
                    "defaultBranchRef": { "name": "main" },
                    "ref": null
                }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let snapshot = get_repository(&client_for(&server), &slug(), Some("feature"))
        .await
        .expect("query should succeed");
    assert_eq!(snapshot.id, "R_kgDO123");
    assert_eq!(snapshot.default_branch.as_deref(), Some("main"));
    assert_eq!(snapshot.remote_ref, RemoteRef::Missing);
}

#[tokio::test]
async fn test_get_repository_existing_branch() {
    let server = MockServer::start().await;
    let mut branch_ref = history("abc123");
    branch_ref["name"] = json!("feature");
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "repository": {
                    "id": "R_kgDO123",
                    "nameWithOwner": "octo/widgets",
                    "defaultBranchRef": { "name": "main" },
                    "ref": branch_ref
                }
            }
        })))
        .mount(&server)
        .await;

    let snapshot = get_repository(&client_for(&server), &slug(), Some("feature"))
        .await
        .expect("query should succeed");
    match &snapshot.remote_ref {
        RemoteRef::Existing { name, commit } => {
            assert_eq!(name, "feature");
            assert_eq!(commit.oid, "abc123");
            assert_eq!(commit.message, "previous commit");
            assert_eq!(commit.committed_date, "2026-10-01T12:00:00Z");
        }
        RemoteRef::Missing => panic!("expected an existing ref"),
    }
    assert_eq!(snapshot.remote_ref.head_oid(), Some("abc123"));
}

#[tokio::test]
async fn test_get_repository_defaults_to_default_branch() {
    let server = MockServer::start().await;
    let mut default_ref = history("def456");
    default_ref["name"] = json!("main");
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({ "variables": { "byName": false } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "repository": {
                    "id": "R_kgDO123",
                    "nameWithOwner": "octo/widgets",
                    "defaultBranchRef": default_ref
                }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let snapshot = get_repository(&client_for(&server), &slug(), None)
        .await
        .expect("query should succeed");
    assert_eq!(snapshot.remote_ref.head_oid(), Some("def456"));
}

#[tokio::test]
async fn test_get_repository_ref_without_history_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "repository": {
                    "id": "R_kgDO123",
                    "nameWithOwner": "octo/widgets",
                    "defaultBranchRef": { "name": "main" },
                    "ref": { "name": "feature", "target": {} }
                }
            }
        })))
        .mount(&server)
        .await;

    let result = get_repository(&client_for(&server), &slug(), Some("feature")).await;
    assert!(
        matches!(result, Err(GraphQlError::MalformedResponse(ref m)) if m.contains("feature")),
        "{result:?}"
    );
}

// =============================================================================
// commit submission
// =============================================================================

#[tokio::test]
async fn test_create_commit_sends_parent_and_loaded_contents() {
    let temp = temp_dir();
    std::fs::write(temp.path().join("a.txt"), b"hello").expect("write file");

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("createCommitOnBranch"))
        .and(body_partial_json(json!({
            "variables": {
                "input": {
                    "branch": {
                        "repositoryNameWithOwner": "octo/widgets",
                        "branchName": "feature"
                    },
                    "expectedHeadOid": "0123456789abcdef0123456789abcdef01234567",
                    "message": { "headline": "chore: sync", "body": "Details." },
                    "fileChanges": {
                        "additions": [{ "path": "a.txt", "contents": "aGVsbG8=" }],
                        "deletions": [{ "path": "gone.txt" }]
                    }
                }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "createCommitOnBranch": { "commit": { "oid": "feedface" } } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let changes = FileChanges {
        additions: vec![FileAddition::unloaded("a.txt".to_string())],
        deletions: vec![FileDeletion::new("gone.txt".to_string())],
    };
    let commit = create_commit_on_branch(
        &client_for(&server),
        temp.path(),
        CommittableBranch::new(&slug(), "feature"),
        &ParentCommit::new("0123456789abcdef0123456789abcdef01234567"),
        changes,
        CommitMessage::parse("chore: sync\n\nDetails."),
    )
    .await
    .expect("commit should succeed");

    assert_eq!(commit.oid, "feedface");
}

#[tokio::test]
async fn test_create_commit_unreadable_file_sends_nothing() {
    let temp = temp_dir();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let result = create_commit_on_branch(
        &client_for(&server),
        temp.path(),
        CommittableBranch::new(&slug(), "feature"),
        &ParentCommit::new("abc"),
        FileChanges {
            additions: vec![FileAddition::unloaded("missing.txt".to_string())],
            deletions: vec![],
        },
        CommitMessage::parse("chore: sync"),
    )
    .await;

    assert!(matches!(result, Err(ActionError::Fs(_))), "{result:?}");
}

#[tokio::test]
async fn test_create_commit_rejected_head_surfaces_server_message() {
    let temp = temp_dir();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "createCommitOnBranch": null },
            "errors": [{ "message": "Expected branch to point to \"abc\" but it did not" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = create_commit_on_branch(
        &client_for(&server),
        temp.path(),
        CommittableBranch::new(&slug(), "feature"),
        &ParentCommit::new("abc"),
        FileChanges {
            additions: vec![],
            deletions: vec![FileDeletion::new("old.txt".to_string())],
        },
        CommitMessage::parse("chore: sync"),
    )
    .await;

    let err = result.expect_err("mutation should fail");
    assert_eq!(
        err.to_string(),
        "Expected branch to point to \"abc\" but it did not"
    );
}

// =============================================================================
// tag creation
// =============================================================================

#[tokio::test]
async fn test_create_tag() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("createRef"))
        .and(body_partial_json(json!({
            "variables": {
                "input": { "repositoryId": "R_kgDO123", "name": "refs/tags/v1.0.0", "oid": "feedface" }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "createRef": { "ref": { "name": "v1.0.0", "target": { "oid": "feedface" } } }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let tag = create_tag(&client_for(&server), "R_kgDO123", "v1.0.0", "feedface")
        .await
        .expect("tag should be created");
    assert_eq!(tag.name, "v1.0.0");
    assert_eq!(tag.oid, "feedface");
}
