// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 snakegen contributors

//! README integration
//!
//! Builds an image snippet for the generated graphics and keeps it in the
//! target document between idempotency markers.

mod insertion;
mod snippet;

pub use insertion::{insert_snippet, MarkerPair, END_MARKER, START_MARKER};
pub use snippet::build_snippet;

use crate::config::SnakeConfig;
use crate::errors::SnakegenResult;

/// Compute the updated README text
///
/// `existing` is the current document, `None` if it does not exist yet.
/// Returns `None` when integration is disabled or there is nothing to
/// reference.
pub fn update_readme(config: &SnakeConfig, existing: Option<&str>) -> SnakegenResult<Option<String>> {
    if !config.readme.enabled {
        return Ok(None);
    }

    let Some(snippet) = build_snippet(&config.outputs, config.readme.tag) else {
        tracing::warn!("readme integration enabled but no svg output to reference");
        return Ok(None);
    };

    insert_snippet(
        existing.unwrap_or_default(),
        &snippet,
        config.readme.position,
        &MarkerPair::default(),
    )
    .map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigDocument, ConfigValidator};

    fn config(yaml: &str) -> SnakeConfig {
        let doc: ConfigDocument = serde_yaml::from_str(yaml).unwrap();
        ConfigValidator::validate(&doc).config.unwrap()
    }

    #[test]
    fn test_disabled_integration_is_noop() {
        let config = config("github:\n  username: octocat\noutputs:\n  - path: s.svg\n");
        assert_eq!(update_readme(&config, Some("# Hi\n")).unwrap(), None);
    }

    #[test]
    fn test_enabled_integration_creates_document() {
        let config = config(
            r#"
github:
  username: octocat
outputs:
  - path: dist/snake.svg
readme_integration:
  enabled: true
  position: bottom
"#,
        );

        let created = update_readme(&config, None).unwrap().unwrap();
        assert!(created.contains(START_MARKER));
        assert!(created.contains("dist/snake.svg"));

        let again = update_readme(&config, Some(&created)).unwrap().unwrap();
        assert_eq!(created, again);
    }

    #[test]
    fn test_gif_only_yields_nothing() {
        let config = config(
            r#"
github:
  username: octocat
outputs:
  - path: s.gif
    type: gif
    color_dots: "red,green,blue,white,black"
readme_integration:
  enabled: true
"#,
        );
        assert_eq!(update_readme(&config, Some("# Hi\n")).unwrap(), None);
    }
}
