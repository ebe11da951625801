use crate::error::{MergeError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::debug;

/// A throwaway module root holding nothing but a copy of the foreign go.mod,
/// so the foreign graph can be resolved without touching the caller's module.
///
/// The directory is removed when the handle is dropped.
pub struct ScratchWorkspace {
    dir: TempDir,
}

impl ScratchWorkspace {
    pub fn with_manifest(manifest: &Path) -> Result<Self> {
        let contents = fs::read(manifest).map_err(|e| {
            MergeError::io(format!("Failed to read '{}'", manifest.display()), e)
        })?;

        let dir = tempfile::Builder::new()
            .prefix("gomodmerge-")
            .tempdir()
            .map_err(|e| MergeError::io("Failed to create scratch directory", e))?;

        let target = dir.path().join("go.mod");
        fs::write(&target, contents).map_err(|e| {
            MergeError::io(format!("Failed to write '{}'", target.display()), e)
        })?;

        debug!(dir = %dir.path().display(), "scratch workspace ready");
        Ok(Self { dir })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.dir.path().join("go.mod")
    }
}

impl Drop for ScratchWorkspace {
    fn drop(&mut self) {
        debug!(dir = %self.dir.path().display(), "releasing scratch workspace");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const FOREIGN: &str = "module example.com/other\n\ngo 1.21\n\nrequire mod/a v1.3.0\n";

    #[test]
    fn copies_manifest_into_fresh_root() {
        let source = tempdir().unwrap();
        let manifest = source.path().join("other.mod");
        fs::write(&manifest, FOREIGN).unwrap();

        let scratch = ScratchWorkspace::with_manifest(&manifest).unwrap();

        assert_ne!(scratch.root(), source.path());
        assert_eq!(fs::read_to_string(scratch.manifest_path()).unwrap(), FOREIGN);
        assert_eq!(fs::read_dir(scratch.root()).unwrap().count(), 1);
    }

    #[test]
    fn directory_is_removed_on_drop() {
        let source = tempdir().unwrap();
        let manifest = source.path().join("go.mod");
        fs::write(&manifest, FOREIGN).unwrap();

        let scratch = ScratchWorkspace::with_manifest(&manifest).unwrap();
        let root = scratch.root().to_path_buf();
        assert!(root.exists());

        drop(scratch);
        assert!(!root.exists());
        assert!(manifest.exists());
    }

    #[test]
    fn unreadable_manifest_is_an_io_error() {
        let source = tempdir().unwrap();
        let err = ScratchWorkspace::with_manifest(&source.path().join("missing.mod"))
            .err()
            .unwrap();
        assert!(matches!(err, MergeError::Io { .. }));
    }
}
