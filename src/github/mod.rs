// ghcommit-rs: Verified GitHub Commits from CI
//
// SPDX-FileCopyrightText: 2026 The ghcommit-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! GitHub GraphQL API.
//!
//! ```text
//!   repository.rs   commit.rs        tag.rs
//!   get_repository  create_commit_   create_tag
//!        |          on_branch            |
//!        |             |   \             |
//!        |             |    blob.rs      |
//!        v             v                 v
//!      ,----------------------------------,
//!      |  client.rs  GraphQlClient        |
//!      |  bearer auth, error logging      |
//!      '----------------------------------'
//!                     |
//!                  types.rs
//! ```

pub mod blob;
pub mod client;
pub mod commit;
pub mod repository;
pub mod tag;
pub mod types;

#[cfg(test)]
mod tests;
