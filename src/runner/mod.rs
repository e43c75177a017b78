// ghcommit-rs: Verified GitHub Commits from CI
//
// SPDX-FileCopyrightText: 2026 The ghcommit-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! GitHub Actions runner surface.
//!
//! ```text
//! write_command/error  --> stdout   ::<command>::<escaped message>
//! Outputs::set         --> $GITHUB_OUTPUT
//!                            name<<ghadelimiter_<uuid>
//!                            value
//!                            ghadelimiter_<uuid>
//! ```
//!
//! Without `$GITHUB_OUTPUT` (local runs) outputs are only logged.

#[cfg(test)]
mod tests;

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{ActionResult, FsError};

/// Escape a workflow command message.
#[must_use]
pub fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Format `::<command>::<message>`.
#[must_use]
pub fn format_command(command: &str, message: &str) -> String {
    format!("::{command}::{}", escape_data(message))
}

/// Write one workflow command line to `out`.
///
/// # Errors
///
/// Returns the underlying I/O error if `out` cannot be written to.
pub fn write_command<W: Write + ?Sized>(
    out: &mut W,
    command: &str,
    message: &str,
) -> io::Result<()> {
    writeln!(out, "{}", format_command(command, message))
}

pub fn error(message: &str) {
    println!("{}", format_command("error", message));
}

/// Step outputs, written to the runner's output file.
#[derive(Debug, Clone, Default)]
pub struct Outputs {
    file: Option<PathBuf>,
}

impl Outputs {
    #[must_use]
    pub const fn new(file: Option<PathBuf>) -> Self {
        Self { file }
    }

    #[must_use]
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// Set output `name` to `value`.
    ///
    /// # Errors
    ///
    /// Returns `FsError::IoError` if the output file cannot be appended to.
    pub fn set(&self, name: &str, value: &str) -> ActionResult<()> {
        info!(name, value, "step output");

        let Some(path) = &self.file else {
            debug!(name, "no output file; output not persisted");
            return Ok(());
        };

        let entry = format_output(name, value);
        let io_error = |source| FsError::IoError {
            path: path.display().to_string(),
            source,
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(io_error)?;
        file.write_all(entry.as_bytes()).map_err(io_error)?;
        Ok(())
    }
}

/// Heredoc entry for the output file. The delimiter never occurs in `name`
/// or `value`.
#[must_use]
pub fn format_output(name: &str, value: &str) -> String {
    let mut delimiter = new_delimiter();
    while name.contains(&delimiter) || value.contains(&delimiter) {
        delimiter = new_delimiter();
    }
    format!("{name}<<{delimiter}\n{value}\n{delimiter}\n")
}

fn new_delimiter() -> String {
    format!("ghadelimiter_{}", Uuid::new_v4())
}
