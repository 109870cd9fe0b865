// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 snakegen contributors

//! Configuration loading and validation
//!
//! A configuration is read in two steps. The file is first deserialized
//! into a loosely typed [`ConfigDocument`], with defaults filled in for
//! absent optional fields. [`ConfigValidator`] then checks it and turns it
//! into a strongly typed [`SnakeConfig`]. Every bad value is reported with
//! its dotted field path instead of being silently replaced.

mod cron;
mod definition;
mod loader;
mod model;
mod validation;

pub use cron::CronSchedule;
pub use definition::*;
pub use loader::{detect_format, load_config, load_document, parse_document, ConfigFormat};
pub use model::*;
pub use validation::{ConfigValidator, ValidatedConfig, ValidationResult};

/// Default location of the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "snake-config.yaml";

/// Username shipped in the starter configuration; must be replaced
pub const USERNAME_PLACEHOLDER: &str = "your-github-username";
