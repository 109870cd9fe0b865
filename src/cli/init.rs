// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 snakegen contributors

//! Init command - write a starter configuration

use colored::Colorize;
use miette::Result;
use std::path::Path;

use crate::config::USERNAME_PLACEHOLDER;
use crate::utils::{print_header, print_success, write_atomic};

/// Run the init command
pub fn run(config_path: &Path, force: bool, verbose: bool) -> Result<()> {
    print_header("Initializing snake configuration...");

    if config_path.exists() && !force {
        return Err(miette::miette!(
            help = "Pass --force to overwrite it",
            "{} already exists",
            config_path.display()
        ));
    }

    let content = starter_config();
    write_atomic(config_path, &content)?;
    print_success(&format!("Created {}", config_path.display()));

    println!();
    println!("Next steps:");
    println!(
        "  1. Replace {} in {} with your GitHub username",
        USERNAME_PLACEHOLDER.yellow(),
        config_path.display().to_string().cyan()
    );
    println!("  2. Adjust the outputs and schedule as needed");
    println!("  3. Run {} to generate the workflow", "snakegen".cyan());
    println!();

    if verbose {
        println!("{}", "Generated configuration:".dimmed());
        println!("{}", "─".repeat(50).dimmed());
        println!("{}", content.dimmed());
    }

    Ok(())
}

/// Commented starter configuration
pub fn starter_config() -> String {
    format!(
        r##"# snakegen configuration
# Run `snakegen` after editing to regenerate .github/workflows/generate-snake.yml

github:
  username: "{USERNAME_PLACEHOLDER}"
  # Secret used to push the generated graphics
  token_secret: GITHUB_TOKEN

outputs:
  - path: dist/github-snake.svg
    type: svg
    palette: github
  - path: dist/github-snake-dark.svg
    type: svg
    palette: github-dark
  - path: dist/ocean.gif
    type: gif
    color_snake: orange
    # zero, low, medium, high, highest contribution buckets
    color_dots: "#bfd6f6,#8dbdff,#64a1f4,#4b91f1,#3c7dd9"

automation:
  enabled: true
  # minute hour day-of-month month day-of-week
  schedule: "0 0 1,15 * *"
  commit_branch: main
  auto_commit: true
  commit_message: "Update snake contributions on ${{DATE}}"

readme_integration:
  enabled: false
  readme_path: README.md
  # picture (light/dark sources) or img
  tag_type: picture
  # top, bottom, or a line number to insert after
  position: top
"##
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_document, ConfigFormat, ConfigValidator};

    #[test]
    fn test_starter_config_only_needs_a_username() {
        let doc = parse_document(&starter_config(), ConfigFormat::Yaml, Path::new("snake-config.yaml")).unwrap();
        let result = ConfigValidator::validate(&doc);

        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].field, "github.username");

        let mut doc = doc;
        doc.github.as_mut().unwrap().username = Some("octocat".into());
        let config = ConfigValidator::validate(&doc).config.unwrap();
        assert_eq!(config.outputs.len(), 3);
        assert_eq!(config.automation.commit_message, "Update snake contributions on ${DATE}");
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("snake-config.yaml");
        std::fs::write(&path, "keep me").unwrap();

        assert!(run(&path, false, false).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "keep me");

        run(&path, true, false).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains(USERNAME_PLACEHOLDER));
    }
}
