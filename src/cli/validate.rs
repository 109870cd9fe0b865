// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 snakegen contributors

//! Validate command - check the configuration

use colored::Colorize;
use miette::Result;
use std::path::PathBuf;

use super::OutputFormat;
use crate::config::{load_document, ConfigValidator, ValidationResult};
use crate::errors::{FieldIssue, SnakegenError};
use crate::utils::{print_error, print_header, print_info, print_section, print_success, print_warning};

/// Run the validate command
pub fn run(config_path: PathBuf, format: OutputFormat, verbose: bool) -> Result<()> {
    let document = load_document(&config_path)?;
    let result = ConfigValidator::validate(&document);

    match format {
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Text => print_text(&config_path, &result, verbose),
    }

    if result.is_valid() {
        Ok(())
    } else {
        Err(SnakegenError::Validation {
            issues: result.errors,
        }
        .into())
    }
}

fn print_json(result: &ValidationResult) -> Result<()> {
    let issues = |list: &[FieldIssue]| -> Vec<serde_json::Value> {
        list.iter()
            .map(|i| serde_json::json!({ "field": i.field, "reason": i.reason }))
            .collect()
    };

    let report = serde_json::json!({
        "valid": result.is_valid(),
        "errors": issues(&result.errors),
        "warnings": issues(&result.warnings),
        "outputs": result
            .config
            .as_ref()
            .map(|c| c.outputs.iter().map(|o| o.path.clone()).collect::<Vec<_>>())
            .unwrap_or_default(),
    });

    let text = serde_json::to_string_pretty(&report).map_err(SnakegenError::from)?;
    println!("{}", text);
    Ok(())
}

fn print_text(config_path: &std::path::Path, result: &ValidationResult, verbose: bool) {
    print_header(&format!("Validating {}...", config_path.display()));

    if !result.errors.is_empty() {
        print_section(&"Errors".red().bold().to_string());
        for error in &result.errors {
            print_error(&error.to_string());
        }
    }

    if result.has_warnings() {
        print_section(&"Warnings".yellow().bold().to_string());
        for warning in &result.warnings {
            print_warning(&warning.to_string());
        }
    }

    if let (true, Some(config)) = (verbose, &result.config) {
        print_section("Configuration summary");
        print_info(&format!("User: {}", config.github.username));
        print_info(&format!(
            "Schedule: {}",
            if config.automation.enabled {
                config.automation.schedule.as_str()
            } else {
                "disabled"
            }
        ));
        for output in &config.outputs {
            print_info(&format!("{} ({})", output.path, output.kind));
        }
    }

    println!();
    if result.is_valid() {
        print_success(&"Configuration is valid!".green().bold().to_string());
    }
}
