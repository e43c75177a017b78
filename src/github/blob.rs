// ghcommit-rs: Verified GitHub Commits from CI
//
// SPDX-FileCopyrightText: 2026 The ghcommit-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Blob loading for file additions.
//!
//! ```text
//! <work tree>/<path> --read--> bytes --base64--> FileAddition { path, contents }
//! ```

use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::path::Path;
use tracing::trace;

use super::types::{FileAddition, FileChanges};
use crate::error::{ActionResult, FsError};

/// Read `path` (relative to `root`) and encode it as a file addition.
///
/// # Errors
///
/// Returns `FsError::IoError` if the file cannot be read, e.g. because it was
/// removed after being listed as changed.
pub async fn load_blob(root: &Path, path: &str) -> ActionResult<FileAddition> {
    let full_path = root.join(path);
    let bytes = tokio::fs::read(&full_path)
        .await
        .map_err(|source| FsError::IoError {
            path: full_path.display().to_string(),
            source,
        })?;

    trace!(path, bytes = bytes.len(), "loaded blob");
    Ok(FileAddition::with_contents(
        path.to_string(),
        STANDARD.encode(bytes),
    ))
}

/// Load contents for every addition that has none. Deletions are untouched.
///
/// Returns the number of blobs loaded.
///
/// # Errors
///
/// Returns the first `FsError` hit while reading.
pub async fn populate_contents(root: &Path, changes: &mut FileChanges) -> ActionResult<usize> {
    let mut loaded = 0;
    for addition in &mut changes.additions {
        if addition.contents.is_none() {
            *addition = load_blob(root, &addition.path).await?;
            loaded += 1;
        }
    }
    Ok(loaded)
}
