// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 snakegen contributors

//! CLI command definitions and handlers
//!
//! Defines the command-line interface for snakegen.

pub mod generate;
pub mod init;
pub mod validate;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_PATH;

/// Snake contribution workflow generator
///
/// Reads snake-config.yaml and writes a GitHub Actions workflow that renders
/// contribution snake graphics on a schedule.
#[derive(Parser, Debug)]
#[clap(
    name = "snakegen",
    version,
    about = "Generate GitHub Actions workflows for snake contribution graphics",
    long_about = None,
    after_help = "Examples:\n\
        snakegen                        Generate the workflow from snake-config.yaml\n\
        snakegen --dry-run              Print the workflow without writing it\n\
        snakegen -c my.yaml validate    Check a configuration file\n\
        snakegen init                   Write a starter configuration\n\n\
        See 'snakegen <command> --help' for more information on a specific command."
)]
pub struct Cli {
    /// Command to run (defaults to `generate`)
    #[clap(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file
    #[clap(
        short,
        long,
        global = true,
        env = "SNAKEGEN_CONFIG",
        default_value = DEFAULT_CONFIG_PATH,
        value_name = "PATH"
    )]
    pub config: PathBuf,

    /// Print generated documents instead of writing them
    #[clap(long, global = true)]
    pub dry_run: bool,

    /// Enable verbose output
    #[clap(short, long, global = true)]
    pub verbose: bool,

    /// Change to directory before executing
    #[clap(short = 'C', long, global = true, value_name = "DIR")]
    pub directory: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the workflow and update the README
    Generate {
        /// Workflow output path
        #[clap(short, long, default_value = crate::workflow::DEFAULT_WORKFLOW_PATH)]
        output: PathBuf,

        /// Do not touch the README even if integration is enabled
        #[clap(long)]
        skip_readme: bool,
    },

    /// Validate the configuration without generating anything
    Validate {
        /// Output format
        #[clap(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Write a starter configuration file
    Init {
        /// Overwrite an existing configuration
        #[clap(short, long)]
        force: bool,
    },
}

/// Output format for the validate command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
