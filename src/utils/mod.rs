//! Utility functions for lipstick
//!
//! This module provides common utility functions used throughout the application.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Get the current working directory
pub fn get_current_dir() -> Result<PathBuf> {
    std::env::current_dir().context("Failed to get current directory")
}

/// Replace the contents of `path` atomically.
///
/// The data is written to a temporary file next to `path` and renamed over
/// it, so readers see either the old or the new contents. Permissions of an
/// existing file are kept.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    tmp.write_all(contents)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    if let Ok(metadata) = std::fs::metadata(path) {
        std::fs::set_permissions(tmp.path(), metadata.permissions())
            .with_context(|| format!("Failed to copy permissions of {}", path.display()))?;
    }

    tmp.persist(path)
        .with_context(|| format!("Failed to replace {}", path.display()))?;

    Ok(())
}
