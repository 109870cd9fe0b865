// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 snakegen contributors

//! Configuration validation
//!
//! Checks a [`ConfigDocument`] and converts it into a [`SnakeConfig`].
//! All problems are collected in one pass so a user can fix them together.

use regex::Regex;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::OnceLock;

use super::{
    Automation, AutomationSection, ConfigDocument, CronSchedule, Github, GithubSection,
    InsertPosition, Output, OutputKind, OutputSection, Palette, PositionValue,
    ReadmeIntegration, ReadmeSection, SnakeConfig, TagKind, DOT_COLOR_COUNT,
    USERNAME_PLACEHOLDER,
};
use crate::errors::{FieldIssue, SnakegenError, SnakegenResult};

/// Characters the rendering action reads as option or entry separators
const PATH_RESERVED: [char; 4] = ['?', '&', '\n', '\r'];

fn color_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(#([0-9a-fA-F]{3}|[0-9a-fA-F]{4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})|[a-zA-Z]+)$")
            .expect("color pattern is valid")
    })
}

fn branch_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9._/\-]+$").expect("branch pattern is valid"))
}

fn secret_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("secret pattern is valid"))
}

fn repository_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_.\-]+/[A-Za-z0-9_.\-]+$").expect("repository pattern is valid")
    })
}

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a configuration document
    pub fn validate(doc: &ConfigDocument) -> ValidationResult {
        let mut result = ValidationResult::new();

        let github = Self::validate_github(doc.github.as_ref(), &mut result);
        let outputs = Self::validate_outputs(doc.outputs.as_deref(), &mut result);
        let automation =
            Self::validate_automation(&doc.automation.clone().unwrap_or_default(), &mut result);
        let readme = Self::validate_readme(
            &doc.readme_integration.clone().unwrap_or_default(),
            &mut result,
        );

        if let (Some(automation), Some(readme)) = (&automation, &readme) {
            Self::check_cross_section(&outputs, automation, readme, &mut result);
        }

        if result.is_valid() {
            if let (Some(github), Some(automation), Some(readme)) = (github, automation, readme) {
                result.config = Some(SnakeConfig {
                    github,
                    outputs,
                    automation,
                    readme,
                });
            }
        }

        result
    }

    fn validate_github(section: Option<&GithubSection>, result: &mut ValidationResult) -> Option<Github> {
        let Some(section) = section else {
            result.add_error("github", "section is required");
            return None;
        };

        let username = section.username.as_deref().map(str::trim).unwrap_or_default();
        let mut valid = true;

        if username.is_empty() {
            result.add_error("github.username", "is required and must not be empty");
            valid = false;
        } else if username == USERNAME_PLACEHOLDER {
            result.add_error(
                "github.username",
                format!("still set to the placeholder '{}'; use your GitHub username", USERNAME_PLACEHOLDER),
            );
            valid = false;
        }

        if !secret_pattern().is_match(&section.token_secret) {
            result.add_error(
                "github.token_secret",
                format!("'{}' is not a valid secret name", section.token_secret),
            );
            valid = false;
        }

        if let Some(repo) = &section.repository {
            if !repository_pattern().is_match(repo) {
                result.add_error(
                    "github.repository",
                    format!("'{}' must have the form owner/name", repo),
                );
                valid = false;
            }
        }

        valid.then(|| Github {
            username: username.to_string(),
            token_secret: section.token_secret.clone(),
            repository: section.repository.clone(),
        })
    }

    fn validate_outputs(outputs: Option<&[OutputSection]>, result: &mut ValidationResult) -> Vec<Output> {
        let outputs = match outputs {
            None => {
                result.add_error("outputs", "section is required");
                return Vec::new();
            }
            Some([]) => {
                result.add_error("outputs", "must list at least one output");
                return Vec::new();
            }
            Some(outputs) => outputs,
        };

        let mut seen_paths = HashSet::new();
        let mut validated = Vec::with_capacity(outputs.len());

        for (index, section) in outputs.iter().enumerate() {
            if let Some(output) = Self::validate_output(index, section, result) {
                if !seen_paths.insert(output.path.clone()) {
                    result.add_error(
                        format!("outputs[{}].path", index),
                        format!("'{}' is already used by an earlier output", output.path),
                    );
                    continue;
                }
                validated.push(output);
            }
        }

        validated
    }

    /// Validate a single output entry
    fn validate_output(index: usize, section: &OutputSection, result: &mut ValidationResult) -> Option<Output> {
        let field = |name: &str| format!("outputs[{}].{}", index, name);
        let errors_before = result.errors.len();

        // An absent type means svg; a present but unknown one is an error
        let kind = match section.kind.as_deref() {
            None => Some(OutputKind::Svg),
            Some(raw) => match raw.parse::<OutputKind>() {
                Ok(kind) => Some(kind),
                Err(reason) => {
                    result.add_error(field("type"), reason);
                    None
                }
            },
        };

        let path = match section.path.as_deref().map(str::trim) {
            Some("") => {
                result.add_error(field("path"), "must not be empty");
                None
            }
            Some(path) if path.contains(PATH_RESERVED) => {
                result.add_error(
                    field("path"),
                    format!("'{}' must not contain '?', '&' or line breaks", path.escape_debug()),
                );
                None
            }
            Some(path) => Some(path.to_string()),
            None => kind.map(|k| format!("output-{}.{}", index, k.extension())),
        };

        let palette = match section.palette.as_deref() {
            None => None,
            Some(raw) => match raw.parse::<Palette>() {
                Ok(palette) => Some(palette),
                Err(reason) => {
                    result.add_error(field("palette"), reason);
                    None
                }
            },
        };

        let color_snake = section.color_snake.as_deref().map(str::trim).map(str::to_string);
        if let Some(color) = &color_snake {
            if !color_pattern().is_match(color) {
                result.add_error(
                    field("color_snake"),
                    format!("'{}' is not a hex color (#rgb, #rrggbb) or color name", color),
                );
            }
        }

        let color_dots = match &section.color_dots {
            None => {
                if kind == Some(OutputKind::Gif) {
                    result.add_error(
                        field("color_dots"),
                        format!("is required for gif outputs ({} comma-separated colors)", DOT_COLOR_COUNT),
                    );
                }
                None
            }
            Some(list) => Self::validate_dots(&field("color_dots"), &list.entries(), result),
        };

        if let (Some(path), Some(kind)) = (&path, kind) {
            let matches_kind = path
                .rsplit_once('.')
                .map(|(_, ext)| ext.eq_ignore_ascii_case(kind.extension()))
                .unwrap_or(false);
            if !matches_kind {
                result.add_warning(
                    field("path"),
                    format!("'{}' does not end in .{} but type is {}", path, kind.extension(), kind),
                );
            }
        }

        if result.errors.len() > errors_before {
            return None;
        }

        Some(Output {
            path: path?,
            kind: kind?,
            palette,
            color_snake,
            color_dots,
        })
    }

    fn validate_dots(
        field: &str,
        entries: &[String],
        result: &mut ValidationResult,
    ) -> Option<[String; DOT_COLOR_COUNT]> {
        if entries.len() != DOT_COLOR_COUNT {
            result.add_error(
                field,
                format!(
                    "expected exactly {} colors (zero, low, medium, high, highest), found {}",
                    DOT_COLOR_COUNT,
                    entries.len()
                ),
            );
            return None;
        }

        let mut valid = true;
        for (i, color) in entries.iter().enumerate() {
            if color.is_empty() {
                result.add_error(field, format!("color #{} is empty", i + 1));
                valid = false;
            } else if !color_pattern().is_match(color) {
                result.add_error(
                    field,
                    format!("color #{} '{}' is not a hex color or color name", i + 1, color),
                );
                valid = false;
            }
        }

        if !valid {
            return None;
        }

        <[String; DOT_COLOR_COUNT]>::try_from(entries.to_vec()).ok()
    }

    fn validate_automation(section: &AutomationSection, result: &mut ValidationResult) -> Option<Automation> {
        let mut valid = true;

        let schedule = match CronSchedule::parse(&section.schedule) {
            Ok(schedule) => Some(schedule),
            Err(reason) => {
                result.add_error("automation.schedule", reason);
                None
            }
        };

        let commit_branch = section.commit_branch.trim();
        if commit_branch.is_empty() {
            result.add_error("automation.commit_branch", "must not be empty");
            valid = false;
        } else if !branch_pattern().is_match(commit_branch) {
            result.add_error(
                "automation.commit_branch",
                format!("'{}' is not a valid branch name", commit_branch),
            );
            valid = false;
        }

        for (i, branch) in section.trigger_branches.iter().enumerate() {
            if branch.trim().is_empty() {
                result.add_error(format!("automation.trigger_branches[{}]", i), "must not be empty");
                valid = false;
            }
        }

        if section.commit_message.trim().is_empty() {
            result.add_error("automation.commit_message", "must not be empty");
            valid = false;
        }

        if !section.auto_commit {
            result.add_warning(
                "automation.auto_commit",
                "disabled; generated graphics will not be committed back to the repository",
            );
        }

        let schedule = schedule?;
        valid.then(|| Automation {
            enabled: section.enabled,
            schedule,
            commit_branch: commit_branch.to_string(),
            auto_commit: section.auto_commit,
            commit_message: section.commit_message.clone(),
            manual_trigger: section.manual_trigger,
            on_push: section.on_push,
            on_pull_request: section.on_pull_request,
            trigger_branches: section.trigger_branches.iter().map(|b| b.trim().to_string()).collect(),
        })
    }

    fn validate_readme(section: &ReadmeSection, result: &mut ValidationResult) -> Option<ReadmeIntegration> {
        let mut valid = true;

        let tag = match section.tag_type.parse::<TagKind>() {
            Ok(tag) => Some(tag),
            Err(reason) => {
                result.add_error("readme_integration.tag_type", reason);
                None
            }
        };

        let position = match Self::parse_position(&section.position) {
            Ok(position) => Some(position),
            Err(reason) => {
                result.add_error("readme_integration.position", reason);
                None
            }
        };

        let path = section.readme_path.trim();
        if section.enabled && path.is_empty() {
            result.add_error("readme_integration.readme_path", "must not be empty");
            valid = false;
        }

        let (tag, position) = (tag?, position?);
        valid.then(|| ReadmeIntegration {
            enabled: section.enabled,
            path: PathBuf::from(path),
            tag,
            position,
        })
    }

    fn parse_position(value: &PositionValue) -> Result<InsertPosition, String> {
        match value {
            PositionValue::Line(n) => usize::try_from(*n)
                .map(InsertPosition::AfterLine)
                .map_err(|_| format!("line number {} must not be negative", n)),
            PositionValue::Keyword(word) => match word.trim().to_lowercase().as_str() {
                "top" => Ok(InsertPosition::Top),
                "bottom" => Ok(InsertPosition::Bottom),
                other => other.parse::<usize>().map(InsertPosition::AfterLine).map_err(|_| {
                    format!("'{}' is not 'top', 'bottom' or a line number", word)
                }),
            },
        }
    }

    fn check_cross_section(
        outputs: &[Output],
        automation: &Automation,
        readme: &ReadmeIntegration,
        result: &mut ValidationResult,
    ) {
        if readme.enabled && !outputs.is_empty() && !outputs.iter().any(|o| o.kind == OutputKind::Svg) {
            result.add_warning(
                "readme_integration.enabled",
                "no svg output is configured, so there is nothing to insert",
            );
        }

        if !automation.enabled && !automation.manual_trigger && !automation.on_push && !automation.on_pull_request {
            result.add_warning("automation", "every trigger is disabled; the workflow will never run");
        }
    }
}

/// Result of configuration validation
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Present only when `errors` is empty
    pub config: Option<SnakeConfig>,
    pub errors: Vec<FieldIssue>,
    pub warnings: Vec<FieldIssue>,
}

/// A configuration that passed validation, with any warnings raised on the way
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    pub config: SnakeConfig,
    pub warnings: Vec<FieldIssue>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, field: impl Into<String>, reason: impl Into<String>) {
        self.errors.push(FieldIssue::new(field, reason));
    }

    pub fn add_warning(&mut self, field: impl Into<String>, reason: impl Into<String>) {
        self.warnings.push(FieldIssue::new(field, reason));
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Turn the result into a validated configuration or a validation error
    pub fn into_validated(self) -> SnakegenResult<ValidatedConfig> {
        match self.config {
            Some(config) if self.errors.is_empty() => Ok(ValidatedConfig {
                config,
                warnings: self.warnings,
            }),
            _ => Err(SnakegenError::Validation { issues: self.errors }),
        }
    }
}
