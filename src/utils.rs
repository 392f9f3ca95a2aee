// ABOUTME: Utility functions for the podium application
// ABOUTME: Provides helpers for path validation and directory tree copying

use crate::errors::{PodiumError, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Validate that a directory exists
pub fn validate_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(PodiumError::PathNotFoundError(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(PodiumError::ValidationError(format!(
            "Path is not a directory: {:?}",
            path
        )));
    }
    Ok(())
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    } else if !path.is_dir() {
        return Err(PodiumError::ValidationError(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    }
    Ok(())
}

/// Ensure a file's parent directory exists
pub fn ensure_parent_directory_exists(file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        ensure_directory_exists(parent)?;
    }
    Ok(())
}

/// Get the absolute path
pub fn get_absolute_path(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|e| {
        PodiumError::ValidationError(format!("Failed to get absolute path for {:?}: {}", path, e))
    })
}

/// Recursively copy a directory tree, overwriting files that already exist.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<()> {
    validate_directory_exists(src)?;

    debug!("Copying tree {:?} -> {:?}", src, dst);
    for entry in WalkDir::new(src) {
        let entry = entry?;
        let relative = entry.path().strip_prefix(src).map_err(|e| {
            PodiumError::ValidationError(format!(
                "Path {:?} escaped copy root {:?}: {}",
                entry.path(),
                src,
                e
            ))
        })?;
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            ensure_parent_directory_exists(&target)?;
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
