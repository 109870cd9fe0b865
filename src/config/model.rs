// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 snakegen contributors

//! Validated configuration types
//!
//! Values of these types only come out of [`super::ConfigValidator`], so
//! downstream code can rely on every invariant without re-checking.

use std::path::PathBuf;

use super::CronSchedule;

/// Number of contribution-intensity buckets, from zero to highest
pub const DOT_COLOR_COUNT: usize = 5;

/// A fully validated configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnakeConfig {
    pub github: Github,
    pub outputs: Vec<Output>,
    pub automation: Automation,
    pub readme: ReadmeIntegration,
}

/// Account settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Github {
    pub username: String,
    pub token_secret: String,
    pub repository: Option<String>,
}

/// One requested graphic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub path: String,
    pub kind: OutputKind,
    pub palette: Option<Palette>,
    pub color_snake: Option<String>,
    /// Colors for the zero, low, medium, high and highest buckets
    pub color_dots: Option<[String; DOT_COLOR_COUNT]>,
}

impl Output {
    /// Whether this output is meant for a dark background
    pub fn is_dark_variant(&self) -> bool {
        self.palette == Some(Palette::GithubDark) || self.path.to_lowercase().contains("dark")
    }
}

/// Output file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    /// Static vector image
    Svg,
    /// Animated image
    Gif,
}

impl OutputKind {
    pub const ALL: [OutputKind; 2] = [OutputKind::Svg, OutputKind::Gif];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Gif => "gif",
        }
    }

    /// File extension the rendering action uses for this kind
    pub fn extension(&self) -> &'static str {
        self.as_str()
    }
}

impl std::str::FromStr for OutputKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "gif" => Ok(Self::Gif),
            _ => Err(format!(
                "unknown type '{}', expected one of: {}",
                s,
                OutputKind::ALL.map(|k| k.as_str()).join(", ")
            )),
        }
    }
}

impl std::fmt::Display for OutputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Named color theme understood by the rendering action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    Github,
    GithubLight,
    GithubDark,
}

impl Palette {
    pub const ALL: [Palette; 3] = [Palette::Github, Palette::GithubLight, Palette::GithubDark];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::GithubLight => "github-light",
            Self::GithubDark => "github-dark",
        }
    }
}

impl std::str::FromStr for Palette {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "github" => Ok(Self::Github),
            "github-light" => Ok(Self::GithubLight),
            "github-dark" => Ok(Self::GithubDark),
            _ => Err(format!(
                "unknown palette '{}', expected one of: {}",
                s,
                Palette::ALL.map(|p| p.as_str()).join(", ")
            )),
        }
    }
}

impl std::fmt::Display for Palette {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Workflow trigger and commit settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automation {
    /// Emit the cron trigger
    pub enabled: bool,
    pub schedule: CronSchedule,
    pub commit_branch: String,
    pub auto_commit: bool,
    /// May contain `${DATE}`, expanded when the workflow runs
    pub commit_message: String,
    pub manual_trigger: bool,
    pub on_push: bool,
    pub on_pull_request: bool,
    pub trigger_branches: Vec<String>,
}

/// README snippet settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadmeIntegration {
    pub enabled: bool,
    pub path: PathBuf,
    pub tag: TagKind,
    pub position: InsertPosition,
}

/// Markup used for the README snippet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// `<picture>` with light/dark sources when a dark variant exists
    Picture,
    /// Plain `<img>`
    Img,
}

impl std::str::FromStr for TagKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "picture" => Ok(Self::Picture),
            "img" => Ok(Self::Img),
            _ => Err(format!("unknown tag type '{}', expected 'picture' or 'img'", s)),
        }
    }
}

/// Where a snippet goes when the document has no markers yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    Top,
    Bottom,
    /// After the given 1-based line; `0` is the same as `Top`
    AfterLine(usize),
}

impl std::fmt::Display for InsertPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Top => write!(f, "top"),
            Self::Bottom => write!(f, "bottom"),
            Self::AfterLine(n) => write!(f, "after line {}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_kind_from_str() {
        assert_eq!("svg".parse::<OutputKind>().unwrap(), OutputKind::Svg);
        assert_eq!("GIF".parse::<OutputKind>().unwrap(), OutputKind::Gif);

        let err = "png".parse::<OutputKind>().unwrap_err();
        assert!(err.contains("png"));
        assert!(err.contains("svg, gif"));
    }

    #[test]
    fn test_palette_from_str() {
        assert_eq!("github-dark".parse::<Palette>().unwrap(), Palette::GithubDark);
        assert!("solarized".parse::<Palette>().is_err());
    }

    #[test]
    fn test_dark_variant_detection() {
        let mut output = Output {
            path: "dist/snake.svg".into(),
            kind: OutputKind::Svg,
            palette: None,
            color_snake: None,
            color_dots: None,
        };
        assert!(!output.is_dark_variant());

        output.palette = Some(Palette::GithubDark);
        assert!(output.is_dark_variant());

        output.palette = None;
        output.path = "dist/snake-Dark.svg".into();
        assert!(output.is_dark_variant());
    }
}
