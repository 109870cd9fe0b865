// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 snakegen contributors

//! File helpers
//!
//! Whole-file reads and atomic replacement writes.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::errors::{SnakegenError, SnakegenResult};

/// What a write did to the destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    Updated,
    Unchanged,
}

impl std::fmt::Display for WriteOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::Updated => write!(f, "updated"),
            Self::Unchanged => write!(f, "unchanged"),
        }
    }
}

/// Read a file, `None` if it does not exist
pub fn read_optional(path: &Path) -> SnakegenResult<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(SnakegenError::FileReadError {
            path: path.to_path_buf(),
            error: e.to_string(),
        }),
    }
}

/// Replace `path` with `content` via a temporary file and rename
///
/// Parent directories are created. Identical content is not rewritten.
pub fn write_atomic(path: &Path, content: &str) -> SnakegenResult<WriteOutcome> {
    let write_error = |e: &dyn std::fmt::Display| SnakegenError::WriteError {
        path: path.to_path_buf(),
        error: e.to_string(),
    };

    let existing = read_optional(path)?;
    if existing.as_deref() == Some(content) {
        debug!(path = %path.display(), "content unchanged, skipping write");
        return Ok(WriteOutcome::Unchanged);
    }

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(|e| write_error(&e))?;

    // The temp file starts out private; give it the destination's mode
    let permissions = match std::fs::metadata(path) {
        Ok(meta) => Some(meta.permissions()),
        Err(_) => new_file_permissions(),
    };

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| write_error(&e))?;
    temp.write_all(content.as_bytes()).map_err(|e| write_error(&e))?;
    temp.flush().map_err(|e| write_error(&e))?;
    if let Some(permissions) = permissions {
        temp.as_file()
            .set_permissions(permissions)
            .map_err(|e| write_error(&e))?;
    }
    temp.persist(path).map_err(|e| write_error(&e.error))?;

    debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(if existing.is_some() {
        WriteOutcome::Updated
    } else {
        WriteOutcome::Created
    })
}

#[cfg(unix)]
fn new_file_permissions() -> Option<std::fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(std::fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<std::fs::Permissions> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_parents_then_skips_identical() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".github/workflows/generate-snake.yml");

        assert_eq!(write_atomic(&path, "a: 1\n").unwrap(), WriteOutcome::Created);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a: 1\n");

        assert_eq!(write_atomic(&path, "a: 1\n").unwrap(), WriteOutcome::Unchanged);
        assert_eq!(write_atomic(&path, "a: 2\n").unwrap(), WriteOutcome::Updated);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a: 2\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_write_keeps_readable_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let mode = |p: &Path| std::fs::metadata(p).unwrap().permissions().mode() & 0o777;

        let created = temp_dir.path().join("generate-snake.yml");
        write_atomic(&created, "a: 1\n").unwrap();
        assert_eq!(mode(&created), 0o644);

        let readme = temp_dir.path().join("README.md");
        std::fs::write(&readme, "# Hi\n").unwrap();
        std::fs::set_permissions(&readme, std::fs::Permissions::from_mode(0o664)).unwrap();
        assert_eq!(write_atomic(&readme, "# Hello\n").unwrap(), WriteOutcome::Updated);
        assert_eq!(mode(&readme), 0o664);
    }

    #[test]
    fn test_read_optional_missing() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(read_optional(&temp_dir.path().join("README.md")).unwrap(), None);
    }

    #[test]
    fn test_write_into_file_parent_fails() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();

        let err = write_atomic(&blocker.join("out.yml"), "a").unwrap_err();
        assert!(matches!(err, SnakegenError::WriteError { .. } | SnakegenError::FileReadError { .. }));
    }
}
