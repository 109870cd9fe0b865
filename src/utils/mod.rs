// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 snakegen contributors

//! Utility modules
//!
//! Terminal styling and file helpers shared by the CLI commands.

pub mod colors;
pub mod fs;

pub use colors::*;
pub use fs::{read_optional, write_atomic, WriteOutcome};
