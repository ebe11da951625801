use crate::error::{MergeError, Result};
use std::path::{Path, PathBuf};

/// Checks user-supplied paths before any command is run against them.
pub struct PathValidator;

impl PathValidator {
    /// Validates and canonicalises the local module directory.
    pub fn validate_project_path(path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();

        let canonical = path.canonicalize().map_err(|e| {
            MergeError::InvalidPath(format!("Invalid module path '{}': {e}", path.display()))
        })?;

        if !canonical.is_dir() {
            return Err(MergeError::InvalidPath(format!(
                "Module path '{}' is not a directory",
                canonical.display()
            )));
        }

        Ok(canonical)
    }

    /// Ensures the foreign manifest exists and is a regular file.
    pub fn validate_manifest_file(path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();

        let canonical = path.canonicalize().map_err(|e| {
            MergeError::InvalidPath(format!("Invalid manifest '{}': {e}", path.display()))
        })?;

        if !canonical.is_file() {
            return Err(MergeError::InvalidPath(format!(
                "Manifest '{}' is not a file",
                canonical.display()
            )));
        }

        Ok(canonical)
    }
}
