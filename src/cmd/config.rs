// ghcommit-rs: Verified GitHub Commits from CI
//
// SPDX-FileCopyrightText: 2026 The ghcommit-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Input loading and the commands that display it.

use std::collections::HashMap;

use crate::cli::global::GlobalOptions;
use crate::config::loader::ConfigLoader;
use crate::config::{Config, LOCAL_CONFIG_FILE};
use crate::error::Result;

/// Prefix of the variables the Actions runner exports for step inputs.
pub const INPUT_ENV_PREFIX: &str = "INPUT";

/// Build the input loader for the given global options.
///
/// `env` replaces the process environment when given.
///
/// # Errors
///
/// Returns an error if a `--set` value is malformed.
pub fn build_config_loader(
    global: &GlobalOptions,
    env: Option<HashMap<String, String>>,
) -> Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    if !global.no_default_config {
        loader = loader.add_toml_file_optional(LOCAL_CONFIG_FILE);
    }
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix(INPUT_ENV_PREFIX);
    if let Some(vars) = env {
        loader = loader.with_env_vars(vars);
    }
    for (key, value) in global.to_config_overrides()? {
        loader = loader.set(&key, value)?;
    }
    Ok(loader)
}

/// Load inputs for the given global options.
///
/// # Errors
///
/// Returns an error if any source cannot be read or does not deserialize.
pub fn load_config(global: &GlobalOptions) -> Result<Config> {
    build_config_loader(global, None)?.build()
}

/// Display resolved inputs.
pub fn run_options_command(config: &Config) {
    for line in config.format_options() {
        println!("{line}");
    }
}

/// Display loaded configuration files.
pub fn run_sources_command(config_files: &[String]) {
    if config_files.is_empty() {
        println!("No configuration files loaded");
    } else {
        for line in config_files {
            println!("{line}");
        }
    }
}
