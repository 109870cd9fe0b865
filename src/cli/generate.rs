// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 snakegen contributors

//! Generate command - write the workflow and README snippet

use colored::Colorize;
use miette::Result;
use std::path::{Path, PathBuf};

use crate::config::load_config;
use crate::readme::update_readme;
use crate::utils::{
    eprint_warnings, print_header, print_info, print_success, print_warning, read_optional,
    write_atomic, WriteOutcome,
};
use crate::workflow::WorkflowSynthesizer;

/// Run the generate command
pub fn run(
    config_path: PathBuf,
    output: PathBuf,
    skip_readme: bool,
    dry_run: bool,
    verbose: bool,
) -> Result<()> {
    let validated = load_config(&config_path)?;
    let config = &validated.config;

    // Render everything before touching the filesystem so a failure
    // leaves no partial output behind
    let workflow = WorkflowSynthesizer::render(config, &config_path)?;

    let readme = if skip_readme || !config.readme.enabled {
        None
    } else {
        let existing = read_optional(&config.readme.path)?;
        update_readme(config, existing.as_deref())?.map(|text| (config.readme.path.clone(), text))
    };

    if dry_run {
        eprint_warnings(&validated.warnings);
        print!("{}", workflow);
        if let Some((path, text)) = &readme {
            eprintln!("{}", format!("--- {} (not written) ---", path.display()).dimmed());
            print!("{}", text);
        }
        return Ok(());
    }

    print_header("Generating snake workflow...");
    for warning in &validated.warnings {
        print_warning(&warning.to_string());
    }

    report(&output, write_atomic(&output, &workflow)?);

    if let Some((path, text)) = &readme {
        report(path, write_atomic(path, text)?);
    }

    if verbose {
        for out in &config.outputs {
            print_info(&format!("{} ({})", out.path, out.kind));
        }
    }

    println!();
    println!("{}", "Snake workflow is ready!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Commit and push {}", output.display().to_string().cyan());
    println!("  2. Run the workflow once from the Actions tab, or wait for the schedule");

    Ok(())
}

fn report(path: &Path, outcome: WriteOutcome) {
    let message = format!("{} {}", capitalize(&outcome.to_string()), path.display());
    match outcome {
        WriteOutcome::Unchanged => print_info(&message),
        WriteOutcome::Created | WriteOutcome::Updated => print_success(&message),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
