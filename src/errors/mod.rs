// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 snakegen contributors

//! Error types
//!
//! Every error names the file or configuration field it is about, so the
//! message alone is enough to fix the input and re-run.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for snakegen operations
pub type SnakegenResult<T> = Result<T, SnakegenError>;

/// A single problem found while validating a configuration
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
#[error("{field}: {reason}")]
#[diagnostic(code(snakegen::field))]
pub struct FieldIssue {
    /// Dotted path of the offending field, e.g. `outputs[1].color_dots`
    pub field: String,
    /// What is wrong with it
    pub reason: String,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Main error type for snakegen
#[derive(Error, Debug, Diagnostic)]
pub enum SnakegenError {
    // ─────────────────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(snakegen::config_not_found),
        help("Create one with 'snakegen init' or pass --config <PATH>")
    )]
    ConfigNotFound { path: PathBuf },

    #[error("Failed to parse configuration '{path}': {message}")]
    #[diagnostic(
        code(snakegen::config_parse),
        help("Check the document syntax and that each section has the expected shape")
    )]
    ConfigParse { path: PathBuf, message: String },

    #[error("Invalid configuration: {}", summarize(.issues))]
    #[diagnostic(code(snakegen::validation))]
    Validation {
        #[related]
        issues: Vec<FieldIssue>,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Document Insertion Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("Insertion line {line} is beyond the end of the document ({line_count} lines)")]
    #[diagnostic(
        code(snakegen::insertion_position),
        help("Use 'top', 'bottom', or a line number between 0 and {line_count}")
    )]
    InsertionPosition { line: usize, line_count: usize },

    #[error("Document contains '{start}' without a matching '{end}' after it")]
    #[diagnostic(
        code(snakegen::malformed_markers),
        help("Remove the stray marker or restore the missing one, then re-run")
    )]
    MalformedMarkers { start: String, end: String },

    // ─────────────────────────────────────────────────────────────────────────
    // IO/System Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("Failed to read file '{path}': {error}")]
    #[diagnostic(code(snakegen::file_read_error))]
    FileReadError { path: PathBuf, error: String },

    #[error("Failed to write file '{path}': {error}")]
    #[diagnostic(code(snakegen::file_write_error))]
    WriteError { path: PathBuf, error: String },

    #[error("YAML serialization error: {message}")]
    #[diagnostic(code(snakegen::yaml_error))]
    Yaml { message: String },

    #[error("JSON serialization error: {message}")]
    #[diagnostic(code(snakegen::json_error))]
    Json { message: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(snakegen::io_error))]
    Io { message: String },
}

fn summarize(issues: &[FieldIssue]) -> String {
    match issues {
        [] => "no issues recorded".to_string(),
        [only] => only.to_string(),
        [first, rest @ ..] => format!("{} (and {} more)", first, rest.len()),
    }
}

impl From<std::io::Error> for SnakegenError {
    fn from(e: std::io::Error) -> Self {
        Self::Io { message: e.to_string() }
    }
}

impl From<serde_yaml::Error> for SnakegenError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Yaml { message: e.to_string() }
    }
}

impl From<serde_json::Error> for SnakegenError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json { message: e.to_string() }
    }
}

impl SnakegenError {
    /// Build a validation error from a single field problem
    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            issues: vec![FieldIssue::new(field, reason)],
        }
    }

    /// Field issues carried by a validation error, empty for other kinds
    pub fn issues(&self) -> &[FieldIssue] {
        match self {
            Self::Validation { issues } => issues,
            _ => &[],
        }
    }
}
