// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 snakegen contributors

//! Marker-delimited snippet insertion
//!
//! A snippet is stored between a start and an end marker. When the markers
//! are already present only the text between them is replaced, so applying
//! the same snippet twice leaves the document unchanged.

use tracing::debug;

use crate::config::InsertPosition;
use crate::errors::{SnakegenError, SnakegenResult};

pub const START_MARKER: &str = "<!-- snakegen:start -->";
pub const END_MARKER: &str = "<!-- snakegen:end -->";

/// Sentinel lines around the managed region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerPair {
    pub start: String,
    pub end: String,
}

impl Default for MarkerPair {
    fn default() -> Self {
        Self {
            start: START_MARKER.to_string(),
            end: END_MARKER.to_string(),
        }
    }
}

impl MarkerPair {
    fn block(&self, snippet: &str) -> String {
        format!("{}\n{}\n{}", self.start, snippet.trim_end_matches('\n'), self.end)
    }

    /// Byte range of the managed region, markers included
    fn find(&self, document: &str) -> SnakegenResult<Option<(usize, usize)>> {
        let malformed = || SnakegenError::MalformedMarkers {
            start: self.start.clone(),
            end: self.end.clone(),
        };

        match document.find(&self.start) {
            Some(start) => {
                let search_from = start + self.start.len();
                let end = document[search_from..]
                    .find(&self.end)
                    .map(|offset| search_from + offset + self.end.len())
                    .ok_or_else(malformed)?;
                Ok(Some((start, end)))
            }
            None if document.contains(&self.end) => Err(malformed()),
            None => Ok(None),
        }
    }
}

/// Insert or refresh `snippet` in `document`
pub fn insert_snippet(
    document: &str,
    snippet: &str,
    position: InsertPosition,
    markers: &MarkerPair,
) -> SnakegenResult<String> {
    let block = markers.block(snippet);

    if let Some((start, end)) = markers.find(document)? {
        debug!(start, end, "replacing existing marked region");
        return Ok(format!("{}{}{}", &document[..start], block, &document[end..]));
    }

    debug!(%position, "inserting new marked region");
    match position {
        InsertPosition::Top | InsertPosition::AfterLine(0) => Ok(prepend(document, &block)),
        InsertPosition::Bottom => Ok(append(document, &block)),
        InsertPosition::AfterLine(line) => {
            let lines: Vec<&str> = document.split_inclusive('\n').collect();
            if line > lines.len() {
                return Err(SnakegenError::InsertionPosition {
                    line,
                    line_count: lines.len(),
                });
            }

            let mut head = lines[..line].concat();
            if !head.ends_with('\n') {
                head.push('\n');
            }
            Ok(format!("{}{}\n{}", head, block, lines[line..].concat()))
        }
    }
}

fn prepend(document: &str, block: &str) -> String {
    if document.is_empty() {
        format!("{}\n", block)
    } else {
        format!("{}\n\n{}", block, document)
    }
}

fn append(document: &str, block: &str) -> String {
    let body = document.trim_end_matches('\n');
    if body.is_empty() {
        format!("{}\n", block)
    } else {
        format!("{}\n\n{}\n", body, block)
    }
}
