// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 snakegen contributors

//! Configuration document structures
//!
//! Defines the on-disk schema of `snake-config.yaml`. Enumerated values
//! are kept as strings here so that a bad `type` or `palette` surfaces as
//! a validation error naming the field, not as a parse failure.

use serde::{Deserialize, Serialize};

/// Raw configuration document
///
/// Unknown keys are ignored so newer configuration files keep working.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigDocument {
    /// Account settings
    #[serde(default)]
    pub github: Option<GithubSection>,

    /// Requested graphics, in generation order
    #[serde(default)]
    pub outputs: Option<Vec<OutputSection>>,

    /// Workflow triggers and commit behaviour
    #[serde(default)]
    pub automation: Option<AutomationSection>,

    /// README snippet insertion
    #[serde(default)]
    pub readme_integration: Option<ReadmeSection>,
}

/// `github` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubSection {
    #[serde(default)]
    pub username: Option<String>,

    /// Name of the secret used to push the generated files
    #[serde(default = "default_token_secret")]
    pub token_secret: String,

    /// Repository to check out instead of the one running the workflow
    #[serde(default)]
    pub repository: Option<String>,
}

impl Default for GithubSection {
    fn default() -> Self {
        Self {
            username: None,
            token_secret: default_token_secret(),
            repository: None,
        }
    }
}

fn default_token_secret() -> String {
    "GITHUB_TOKEN".to_string()
}

/// One entry of `outputs`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSection {
    #[serde(default)]
    pub path: Option<String>,

    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    #[serde(default)]
    pub palette: Option<String>,

    #[serde(default)]
    pub color_snake: Option<String>,

    #[serde(default)]
    pub color_dots: Option<ColorList>,
}

/// Dot colors, either `"#a,#b,#c"` or a YAML sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorList {
    Csv(String),
    List(Vec<String>),
}

impl ColorList {
    /// Individual color entries, trimmed, empties preserved
    pub fn entries(&self) -> Vec<String> {
        match self {
            Self::Csv(s) => s.split(',').map(|c| c.trim().to_string()).collect(),
            Self::List(v) => v.iter().map(|c| c.trim().to_string()).collect(),
        }
    }
}

/// `automation` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutomationSection {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_schedule")]
    pub schedule: String,

    #[serde(default = "default_branch")]
    pub commit_branch: String,

    #[serde(default = "default_true")]
    pub auto_commit: bool,

    #[serde(default = "default_commit_message")]
    pub commit_message: String,

    #[serde(default = "default_true")]
    pub manual_trigger: bool,

    #[serde(default = "default_true")]
    pub on_push: bool,

    #[serde(default = "default_true")]
    pub on_pull_request: bool,

    #[serde(default = "default_trigger_branches")]
    pub trigger_branches: Vec<String>,
}

impl Default for AutomationSection {
    fn default() -> Self {
        Self {
            enabled: true,
            schedule: default_schedule(),
            commit_branch: default_branch(),
            auto_commit: true,
            commit_message: default_commit_message(),
            manual_trigger: true,
            on_push: true,
            on_pull_request: true,
            trigger_branches: default_trigger_branches(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_schedule() -> String {
    "0 0 1,15 * *".to_string()
}

fn default_branch() -> String {
    "main".to_string()
}

fn default_commit_message() -> String {
    "Update snake contributions on ${DATE}".to_string()
}

fn default_trigger_branches() -> Vec<String> {
    vec!["main".to_string(), "master".to_string()]
}

/// `readme_integration` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadmeSection {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_readme_path")]
    pub readme_path: String,

    #[serde(default = "default_tag_type")]
    pub tag_type: String,

    #[serde(default)]
    pub position: PositionValue,
}

impl Default for ReadmeSection {
    fn default() -> Self {
        Self {
            enabled: false,
            readme_path: default_readme_path(),
            tag_type: default_tag_type(),
            position: PositionValue::default(),
        }
    }
}

fn default_readme_path() -> String {
    "README.md".to_string()
}

fn default_tag_type() -> String {
    "picture".to_string()
}

/// `position` is either a keyword or a line number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PositionValue {
    Line(i64),
    Keyword(String),
}

impl Default for PositionValue {
    fn default() -> Self {
        Self::Keyword("top".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_document() {
        let yaml = r#"
github:
  username: octocat
outputs:
  - path: dist/snake.svg
    type: svg
"#;

        let doc: ConfigDocument = serde_yaml::from_str(yaml).unwrap();
        let github = doc.github.unwrap();
        assert_eq!(github.username.as_deref(), Some("octocat"));
        assert_eq!(github.token_secret, "GITHUB_TOKEN");
        assert!(doc.automation.is_none());
        assert_eq!(doc.outputs.unwrap()[0].kind.as_deref(), Some("svg"));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let yaml = r#"
github:
  username: octocat
  avatar: ignored
theme_song: ignored
outputs:
  - path: a.svg
"#;

        let doc: ConfigDocument = serde_yaml::from_str(yaml).unwrap();
        assert!(doc.github.is_some());
    }

    #[test]
    fn test_partial_automation_takes_defaults() {
        let yaml = r#"
automation:
  schedule: "0 */6 * * *"
"#;

        let doc: ConfigDocument = serde_yaml::from_str(yaml).unwrap();
        let automation = doc.automation.unwrap();
        assert_eq!(automation.schedule, "0 */6 * * *");
        assert!(automation.enabled);
        assert!(automation.auto_commit);
        assert_eq!(automation.commit_branch, "main");
        assert_eq!(automation.trigger_branches, vec!["main", "master"]);
    }

    #[test]
    fn test_color_dots_forms() {
        let csv = ColorList::Csv("#000, #111,#222".into());
        assert_eq!(csv.entries(), vec!["#000", "#111", "#222"]);

        let yaml = "color_dots: ['#000', '#111']";
        let section: OutputSection = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            section.color_dots.unwrap(),
            ColorList::List(vec!["#000".into(), "#111".into()])
        );
    }

    #[test]
    fn test_position_forms() {
        let line: ReadmeSection = serde_yaml::from_str("position: 12").unwrap();
        assert_eq!(line.position, PositionValue::Line(12));

        let keyword: ReadmeSection = serde_yaml::from_str("position: bottom").unwrap();
        assert_eq!(keyword.position, PositionValue::Keyword("bottom".into()));

        let default: ReadmeSection = serde_yaml::from_str("enabled: true").unwrap();
        assert_eq!(default.position, PositionValue::Keyword("top".into()));
        assert_eq!(default.readme_path, "README.md");
    }
}
