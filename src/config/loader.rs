// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 snakegen contributors

//! Configuration file loading

use std::path::Path;

use tracing::{debug, info};

use super::{ConfigDocument, ConfigValidator, ValidatedConfig};
use crate::errors::{SnakegenError, SnakegenResult};

/// Syntax of a configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
    Toml,
}

/// Pick the parser from the file extension, YAML unless told otherwise
pub fn detect_format(path: &Path) -> ConfigFormat {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .as_deref()
    {
        Some("json") => ConfigFormat::Json,
        Some("toml") => ConfigFormat::Toml,
        _ => ConfigFormat::Yaml,
    }
}

/// Parse configuration text in the given format
///
/// `path` is only used to label errors.
pub fn parse_document(content: &str, format: ConfigFormat, path: &Path) -> SnakegenResult<ConfigDocument> {
    if content.trim().is_empty() {
        return Ok(ConfigDocument::default());
    }

    let parsed = match format {
        ConfigFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        ConfigFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        ConfigFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
    };

    parsed.map_err(|message| SnakegenError::ConfigParse {
        path: path.to_path_buf(),
        message,
    })
}

/// Read and parse a configuration file without validating it
pub fn load_document(path: &Path) -> SnakegenResult<ConfigDocument> {
    if !path.exists() {
        return Err(SnakegenError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| SnakegenError::FileReadError {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;

    let format = detect_format(path);
    debug!(path = %path.display(), ?format, bytes = content.len(), "parsing configuration");
    parse_document(&content, format, path)
}

/// Read, parse and validate a configuration file
pub fn load_config(path: &Path) -> SnakegenResult<ValidatedConfig> {
    let document = load_document(path)?;
    let validated = ConfigValidator::validate(&document).into_validated()?;

    info!(
        path = %path.display(),
        outputs = validated.config.outputs.len(),
        warnings = validated.warnings.len(),
        "configuration loaded"
    );
    Ok(validated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_detect_format() {
        assert_eq!(detect_format(&PathBuf::from("snake-config.yaml")), ConfigFormat::Yaml);
        assert_eq!(detect_format(&PathBuf::from("snake.yml")), ConfigFormat::Yaml);
        assert_eq!(detect_format(&PathBuf::from("snake.JSON")), ConfigFormat::Json);
        assert_eq!(detect_format(&PathBuf::from("snake.toml")), ConfigFormat::Toml);
        assert_eq!(detect_format(&PathBuf::from("snakerc")), ConfigFormat::Yaml);
    }

    #[test]
    fn test_parse_json_and_toml() {
        let json = r#"{"github": {"username": "octocat"}, "outputs": [{"path": "s.svg"}]}"#;
        let doc = parse_document(json, ConfigFormat::Json, Path::new("c.json")).unwrap();
        assert_eq!(doc.outputs.unwrap()[0].path.as_deref(), Some("s.svg"));

        let toml = r#"
[github]
username = "octocat"

[[outputs]]
path = "s.svg"
type = "svg"
"#;
        let doc = parse_document(toml, ConfigFormat::Toml, Path::new("c.toml")).unwrap();
        assert_eq!(doc.github.unwrap().username.as_deref(), Some("octocat"));
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = parse_document("github: [unclosed", ConfigFormat::Yaml, Path::new("bad.yaml")).unwrap_err();
        match err {
            SnakegenError::ConfigParse { path, .. } => assert_eq!(path, PathBuf::from("bad.yaml")),
            other => panic!("expected ConfigParse, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_file_is_empty_document() {
        let doc = parse_document("  \n", ConfigFormat::Yaml, Path::new("c.yaml")).unwrap();
        assert!(doc.github.is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_config(&temp_dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, SnakegenError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_load_config_from_disk() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("snake-config.yaml");
        std::fs::write(
            &path,
            "github:\n  username: octocat\noutputs:\n  - path: s.svg\n    type: svg\n",
        )
        .unwrap();

        let validated = load_config(&path).unwrap();
        assert_eq!(validated.config.outputs.len(), 1);
        assert!(validated.warnings.is_empty());
    }
}
