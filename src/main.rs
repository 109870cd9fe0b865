// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 snakegen contributors

//! snakegen - Snake Contribution Workflow Generator
//!
//! Turns snake-config.yaml into a GitHub Actions workflow that renders
//! contribution snake graphics.

use clap::Parser;
use miette::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use snakegen::cli::{Cli, Commands};
use snakegen::workflow::DEFAULT_WORKFLOW_PATH;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_filter = if cli.verbose { "snakegen=debug" } else { "snakegen=warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Change to specified directory if provided
    if let Some(ref dir) = cli.directory {
        std::env::set_current_dir(dir).map_err(|e| {
            miette::miette!("Failed to change to directory '{}': {}", dir.display(), e)
        })?;
    }

    // Dispatch to command handlers
    match cli.command {
        None => snakegen::cli::generate::run(
            cli.config,
            DEFAULT_WORKFLOW_PATH.into(),
            false,
            cli.dry_run,
            cli.verbose,
        ),
        Some(Commands::Generate { output, skip_readme }) => {
            snakegen::cli::generate::run(cli.config, output, skip_readme, cli.dry_run, cli.verbose)
        }
        Some(Commands::Validate { format }) => {
            snakegen::cli::validate::run(cli.config, format, cli.verbose)
        }
        Some(Commands::Init { force }) => snakegen::cli::init::run(&cli.config, force, cli.verbose),
    }
}
