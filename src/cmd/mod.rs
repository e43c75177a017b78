// ghcommit-rs: Verified GitHub Commits from CI
//
// SPDX-FileCopyrightText: 2026 The ghcommit-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   commit, options, sources
//! ```

pub mod commit;
pub mod config;


use crate::error::ActionError;

/// Message shown for a failed run.
///
/// Action errors already carry their full message; anything else shows its
/// context chain.
#[must_use]
pub fn failure_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<ActionError>() {
        Some(action_error) => action_error.to_string(),
        None => format!("{err:#}"),
    }
}
