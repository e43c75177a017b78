// ghcommit-rs: Verified GitHub Commits from CI
//
// SPDX-FileCopyrightText: 2026 The ghcommit-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Command Dispatch
//!   Commit | Options | Sources | Version
//! failure --> ::error::<message>, exit 1
//! ```

use std::process::ExitCode;

use ghcommit_rs::cli::global::GlobalOptions;
use ghcommit_rs::cli::{self, Command};
use ghcommit_rs::cmd::commit::run_commit_command;
use ghcommit_rs::cmd::config::{
    build_config_loader, load_config, run_options_command, run_sources_command,
};
use ghcommit_rs::cmd::failure_message;
use ghcommit_rs::config::context::RunnerContext;
use ghcommit_rs::logging::init_logging;
use ghcommit_rs::logging::{LogConfig, LogLevel};
use ghcommit_rs::runner;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli).await
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::INFO);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .with_console_format(global.log_format)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

async fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => load_config(&cli.global).map(|config| run_options_command(&config)),
        Some(Command::Sources) => build_config_loader(&cli.global, None)
            .map(|loader| run_sources_command(&loader.format_loaded_files())),
        Some(Command::Commit(args)) => match (load_config(&cli.global), RunnerContext::from_env()) {
            (Ok(config), Ok(context)) => {
                run_commit_command(args, config, &context, &mut std::io::stdout()).await
            }
            (Err(e), _) | (_, Err(e)) => Err(e),
        },
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            runner::error(&failure_message(&e));
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}
