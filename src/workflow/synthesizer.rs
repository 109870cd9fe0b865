// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 snakegen contributors

//! Workflow synthesis
//!
//! Maps a validated [`SnakeConfig`] onto a [`Workflow`]: checkout first,
//! one rendering step per output, commit-and-push last.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use super::{BranchFilter, CronEntry, Job, Step, Triggers, Workflow};
use crate::config::{Automation, Output, SnakeConfig};
use crate::errors::SnakegenResult;

/// External action that renders the graphics
pub const SNAKE_ACTION: &str = "Platane/snk@v3";

/// Checkout action used by the first step
pub const CHECKOUT_ACTION: &str = "actions/checkout@v4";

/// Default location of the generated workflow
pub const DEFAULT_WORKFLOW_PATH: &str = ".github/workflows/generate-snake.yml";

pub const WORKFLOW_NAME: &str = "Generate Snake Contributions";
pub const JOB_NAME: &str = "generate-snake";

/// Placeholder in commit messages replaced by the run date
const DATE_TOKEN: &str = "${DATE}";
const DATE_EXPANSION: &str = "$(date -u +%Y-%m-%d)";

/// Pull request runs check out an unreviewed merge commit and must never push it
const NOT_PULL_REQUEST: &str = "github.event_name != 'pull_request'";

/// Builds workflows from configurations
pub struct WorkflowSynthesizer;

impl WorkflowSynthesizer {
    /// Build the workflow model
    pub fn synthesize(config: &SnakeConfig) -> Workflow {
        let mut steps = Vec::with_capacity(config.outputs.len() + 2);
        steps.push(Self::checkout_step(config));
        steps.extend(config.outputs.iter().map(|o| Self::render_step(&config.github.username, o)));
        steps.push(Self::commit_step(config));

        let mut jobs = BTreeMap::new();
        jobs.insert(
            JOB_NAME.to_string(),
            Job {
                runs_on: "ubuntu-latest".to_string(),
                steps,
            },
        );

        let mut permissions = BTreeMap::new();
        permissions.insert("contents".to_string(), "write".to_string());

        debug!(
            outputs = config.outputs.len(),
            scheduled = config.automation.enabled,
            "synthesized workflow"
        );

        Workflow {
            name: WORKFLOW_NAME.to_string(),
            triggers: Self::triggers(&config.automation),
            permissions,
            jobs,
        }
    }

    /// Render the workflow file text, including the generated-file header
    ///
    /// `source` is the configuration path shown in the header.
    pub fn render(config: &SnakeConfig, source: &Path) -> SnakegenResult<String> {
        let body = Self::synthesize(config).to_yaml()?;
        let source = source
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_else(|| source.to_string_lossy());
        Ok(format!(
            "# Generated by snakegen from {}.\n\
             # Edit the configuration and re-run snakegen instead of changing this file.\n\
             \n\
             {}",
            source,
            body
        ))
    }

    fn triggers(automation: &Automation) -> Triggers {
        let branches = || BranchFilter {
            branches: automation.trigger_branches.clone(),
        };

        Triggers {
            push: automation.on_push.then(branches),
            pull_request: automation.on_pull_request.then(branches),
            schedule: automation.enabled.then(|| {
                vec![CronEntry {
                    cron: automation.schedule.as_str().to_string(),
                }]
            }),
            workflow_dispatch: automation.manual_trigger.then(BTreeMap::new),
        }
    }

    /// Checkout persists its token for later git commands, so the push uses `token_secret`
    fn checkout_step(config: &SnakeConfig) -> Step {
        let step = Step::uses("Checkout repository", CHECKOUT_ACTION)
            .with_input("token", secret_expr(&config.github.token_secret));
        match &config.github.repository {
            Some(repo) => step.with_input("repository", repo.as_str()),
            None => step,
        }
    }

    fn render_step(username: &str, output: &Output) -> Step {
        Step::uses(
            format!("Generate {} snake: {}", output.kind, output.path),
            SNAKE_ACTION,
        )
        .with_input("github_user_name", username)
        .with_input("outputs", output_spec(output))
    }

    fn commit_step(config: &SnakeConfig) -> Step {
        let automation = &config.automation;
        let paths: Vec<String> = config.outputs.iter().map(|o| shell_quote(&o.path)).collect();

        let script = format!(
            "git config --local user.email \"action@github.com\"\n\
             git config --local user.name \"GitHub Action\"\n\
             git add -- {paths}\n\
             git diff --staged --quiet || git commit -m {message}\n\
             git push origin HEAD:{branch}\n",
            paths = paths.join(" "),
            message = commit_message_arg(&automation.commit_message),
            branch = shell_quote(&automation.commit_branch),
        );

        Step::run("Commit generated graphics", script)
            .when(format!("${{{{ {} && {} }}}}", automation.auto_commit, NOT_PULL_REQUEST))
            .with_env("GITHUB_TOKEN", secret_expr(&config.github.token_secret))
    }
}

/// The `outputs` input of the rendering action: `path?key=value&...`
pub fn output_spec(output: &Output) -> String {
    let mut params = Vec::new();
    if let Some(palette) = output.palette {
        params.push(format!("palette={}", palette));
    }
    if let Some(color) = &output.color_snake {
        params.push(format!("color_snake={}", color));
    }
    if let Some(dots) = &output.color_dots {
        params.push(format!("color_dots={}", dots.join(",")));
    }

    if params.is_empty() {
        output.path.clone()
    } else {
        format!("{}?{}", output.path, params.join("&"))
    }
}

fn secret_expr(name: &str) -> String {
    format!("${{{{ secrets.{} }}}}", name)
}

/// Quote a word for POSIX sh
fn shell_quote(word: &str) -> String {
    if !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-' | '/'))
    {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}

/// Double-quoted commit message with `${DATE}` left to the shell
fn commit_message_arg(message: &str) -> String {
    let escaped: Vec<String> = message
        .split(DATE_TOKEN)
        .map(|piece| {
            piece
                .replace('\\', "\\\\")
                .replace('"', "\\\"")
                .replace('$', "\\$")
                .replace('`', "\\`")
        })
        .collect();
    format!("\"{}\"", escaped.join(DATE_EXPANSION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigDocument, ConfigValidator};

    fn config(yaml: &str) -> SnakeConfig {
        let doc: ConfigDocument = serde_yaml::from_str(yaml).unwrap();
        let result = ConfigValidator::validate(&doc);
        assert!(result.is_valid(), "{:?}", result.errors);
        result.config.unwrap()
    }

    fn parsed(config: &SnakeConfig) -> serde_yaml::Value {
        let text = WorkflowSynthesizer::render(config, Path::new("snake-config.yaml")).unwrap();
        serde_yaml::from_str(&text).unwrap()
    }

    const SINGLE_SVG: &str = r#"
github:
  username: octocat
outputs:
  - path: s.svg
    type: svg
    palette: github
automation:
  schedule: "0 0 1,15 * *"
"#;

    #[test]
    fn test_schedule_and_single_invocation() {
        let config = config(SINGLE_SVG);
        let doc = parsed(&config);

        assert_eq!(doc["on"]["schedule"][0]["cron"].as_str(), Some("0 0 1,15 * *"));

        let steps = doc["jobs"][JOB_NAME]["steps"].as_sequence().unwrap();
        let invocations: Vec<&serde_yaml::Value> = steps
            .iter()
            .filter(|s| s["uses"].as_str() == Some(SNAKE_ACTION))
            .collect();
        assert_eq!(invocations.len(), 1);
        assert_eq!(invocations[0]["with"]["outputs"].as_str(), Some("s.svg?palette=github"));
        assert_eq!(invocations[0]["with"]["github_user_name"].as_str(), Some("octocat"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let config = config(SINGLE_SVG);
        let first = WorkflowSynthesizer::render(&config, Path::new("snake-config.yaml")).unwrap();
        let second = WorkflowSynthesizer::render(&config, Path::new("snake-config.yaml")).unwrap();
        assert_eq!(first, second);
        assert!(first.starts_with("# Generated by snakegen from snake-config.yaml."));
    }

    #[test]
    fn test_step_order_and_permissions() {
        let config = config(
            r##"
github:
  username: octocat
outputs:
  - path: dist/light.svg
  - path: dist/dark.svg
    palette: github-dark
  - path: dist/anim.gif
    type: gif
    color_snake: "#ff00aa"
    color_dots: "#ebedf0,#9be9a8,#40c463,#30a14e,#216e39"
"##,
        );
        let workflow = WorkflowSynthesizer::synthesize(&config);
        let steps: Vec<&Step> = workflow.steps().collect();

        assert_eq!(steps.len(), 5);
        assert_eq!(steps[0].uses.as_deref(), Some(CHECKOUT_ACTION));
        assert!(steps[1].name.contains("dist/light.svg"));
        assert!(steps[2].name.contains("dist/dark.svg"));
        assert!(steps[3].name.contains("gif"));
        assert!(steps[4].run.is_some());
        assert_eq!(workflow.permissions.get("contents").map(String::as_str), Some("write"));

        let gif_outputs = &steps[3].with.as_ref().unwrap()["outputs"];
        assert_eq!(
            gif_outputs,
            "dist/anim.gif?color_snake=#ff00aa&color_dots=#ebedf0,#9be9a8,#40c463,#30a14e,#216e39"
        );
    }

    #[test]
    fn test_commit_step_follows_automation() {
        let config = config(
            r#"
github:
  username: octocat
  token_secret: SNAKE_PAT
outputs:
  - path: "my dir/s.svg"
automation:
  auto_commit: false
  commit_branch: output
  commit_message: "Snake \"refresh\" ${DATE}"
"#,
        );
        let workflow = WorkflowSynthesizer::synthesize(&config);
        let commit = workflow.steps().last().unwrap();

        assert_eq!(
            commit.condition.as_deref(),
            Some("${{ false && github.event_name != 'pull_request' }}")
        );
        let script = commit.run.as_deref().unwrap();
        assert!(script.contains("git add -- 'my dir/s.svg'"));
        assert!(script.contains("git push origin HEAD:output"));
        assert!(script.contains(r#"-m "Snake \"refresh\" $(date -u +%Y-%m-%d)""#));
        assert_eq!(
            commit.env.as_ref().unwrap()["GITHUB_TOKEN"],
            "${{ secrets.SNAKE_PAT }}"
        );
    }

    #[test]
    fn test_triggers_follow_automation_flags() {
        let config = config(
            r#"
github:
  username: octocat
outputs:
  - path: s.svg
automation:
  enabled: false
  on_pull_request: false
  trigger_branches: [trunk]
"#,
        );
        let doc = parsed(&config);

        assert!(doc["on"].get("schedule").is_none());
        assert!(doc["on"].get("pull_request").is_none());
        assert!(doc["on"]["workflow_dispatch"].is_mapping());
        assert_eq!(doc["on"]["push"]["branches"][0].as_str(), Some("trunk"));
        assert_eq!(doc["permissions"]["contents"].as_str(), Some("write"));
    }

    #[test]
    fn test_checkout_of_other_repository() {
        let config = config(
            r#"
github:
  username: octocat
  repository: octocat/octocat
outputs:
  - path: s.svg
"#,
        );
        let workflow = WorkflowSynthesizer::synthesize(&config);
        let checkout = workflow.steps().next().unwrap();
        let with = checkout.with.as_ref().unwrap();

        assert_eq!(with["repository"], "octocat/octocat");
        assert_eq!(with["token"], "${{ secrets.GITHUB_TOKEN }}");
    }

    #[test]
    fn test_token_secret_reaches_checkout() {
        let config = config(
            r#"
github:
  username: octocat
  token_secret: SNAKE_PAT
outputs:
  - path: s.svg
"#,
        );
        let workflow = WorkflowSynthesizer::synthesize(&config);
        let checkout = workflow.steps().next().unwrap();
        let with = checkout.with.as_ref().unwrap();

        assert_eq!(with["token"], "${{ secrets.SNAKE_PAT }}");
        assert!(!with.contains_key("repository"));
    }

    #[test]
    fn test_pull_request_runs_never_push() {
        let config = config(SINGLE_SVG);
        assert!(config.automation.on_pull_request);

        let doc = parsed(&config);
        assert!(doc["on"]["pull_request"].is_mapping());

        let steps = doc["jobs"][JOB_NAME]["steps"].as_sequence().unwrap();
        let pushing: Vec<&serde_yaml::Value> = steps
            .iter()
            .filter(|s| s["run"].as_str().map_or(false, |r| r.contains("git push")))
            .collect();
        assert_eq!(pushing.len(), 1);
        assert_eq!(
            pushing[0]["if"].as_str(),
            Some("${{ true && github.event_name != 'pull_request' }}")
        );
    }

    #[test]
    fn test_header_names_config_file_only() {
        let config = config(SINGLE_SVG);
        let relative = WorkflowSynthesizer::render(&config, Path::new("snake-config.yaml")).unwrap();
        let absolute =
            WorkflowSynthesizer::render(&config, Path::new("/home/me/profile/snake-config.yaml")).unwrap();

        assert_eq!(relative, absolute);
        assert!(!absolute.contains("/home/me"));
    }

    #[test]
    fn test_output_spec_without_options() {
        let config = config("github:\n  username: octocat\noutputs:\n  - path: plain.svg\n");
        assert_eq!(output_spec(&config.outputs[0]), "plain.svg");
    }

    #[test]
    fn test_shell_quote() {
        assert_eq!(shell_quote("dist/snake.svg"), "dist/snake.svg");
        assert_eq!(shell_quote("it's.svg"), r"'it'\''s.svg'");
    }
}
