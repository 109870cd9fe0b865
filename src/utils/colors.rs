// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 snakegen contributors

//! Terminal output helpers
//!
//! Consistent markers for the CLI's human-readable reports.

use colored::Colorize;

use crate::errors::FieldIssue;

/// Print a styled header
pub fn print_header(title: &str) {
    println!("{}", title.bold());
    println!();
}

/// Print a styled section
pub fn print_section(title: &str) {
    println!();
    println!("{}:", title.bold());
}

/// Print a success check
pub fn print_success(msg: &str) {
    println!("  {} {}", "✓".green(), msg);
}

/// Print an error cross
pub fn print_error(msg: &str) {
    println!("  {} {}", "✗".red(), msg);
}

/// Print a warning
pub fn print_warning(msg: &str) {
    println!("  {} {}", "⚠".yellow(), msg);
}

/// Print an info item
pub fn print_info(msg: &str) {
    println!("  {} {}", "→".blue(), msg);
}

/// Print validation warnings to stderr, leaving stdout for generated text
pub fn eprint_warnings(warnings: &[FieldIssue]) {
    for warning in warnings {
        eprintln!("  {} {}", "⚠".yellow(), warning);
    }
}
