// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 snakegen contributors

//! # snakegen - Snake Contribution Workflow Generator
//!
//! `snakegen` reads a small declarative configuration describing the snake
//! contribution graphics you want and emits a GitHub Actions workflow that
//! renders them with the `Platane/snk` action.
//!
//! ## Features
//!
//! - **Validation** - Every field is checked and reported by its dotted path
//! - **Deterministic output** - The same configuration always yields the same workflow
//! - **README integration** - Keeps an image snippet between idempotency markers
//!
//! ## Quick Start
//!
//! ```bash
//! # Write a starter configuration
//! snakegen init
//!
//! # Check it
//! snakegen validate
//!
//! # Generate .github/workflows/generate-snake.yml
//! snakegen
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod readme;
pub mod utils;
pub mod workflow;

// Re-export commonly used types
pub use config::{ConfigValidator, SnakeConfig};
pub use errors::{FieldIssue, SnakegenError, SnakegenResult};
pub use workflow::{Workflow, WorkflowSynthesizer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
