// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 snakegen contributors

//! README markup for the generated graphics

use crate::config::{Output, OutputKind, TagKind};

const ALT_TEXT: &str = "Snake Contribution Graphics";

/// Build the markup snippet for the configured outputs
///
/// Only svg outputs are referenced. The first non-dark svg is the primary
/// image and the first dark one, if any, becomes the dark-scheme source of
/// a `<picture>`. Returns `None` when there is no svg output.
pub fn build_snippet(outputs: &[Output], tag: TagKind) -> Option<String> {
    let svgs: Vec<&Output> = outputs.iter().filter(|o| o.kind == OutputKind::Svg).collect();
    let dark = svgs.iter().find(|o| o.is_dark_variant());
    let light = svgs.iter().find(|o| !o.is_dark_variant());

    match (tag, light, dark) {
        (TagKind::Picture, Some(light), Some(dark)) => Some(format!(
            "<picture>\n  \
             <source media=\"(prefers-color-scheme: dark)\" srcset=\"{dark}\" />\n  \
             <source media=\"(prefers-color-scheme: light)\" srcset=\"{light}\" />\n  \
             <img alt=\"{ALT_TEXT}\" src=\"{light}\" />\n\
             </picture>",
            dark = escape_attr(&dark.path),
            light = escape_attr(&light.path),
        )),
        (_, Some(primary), _) | (_, None, Some(primary)) => Some(format!(
            "<img src=\"{}\" alt=\"{}\" />",
            escape_attr(&primary.path),
            ALT_TEXT
        )),
        (_, None, None) => None,
    }
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
