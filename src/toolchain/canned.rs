use super::GoToolchain;
use crate::agents::update::Pin;
use crate::error::{MergeError, Result};
use std::cell::RefCell;
use std::path::{Path, PathBuf};

/// Serves prepared module listings and records edit requests instead of
/// running Go. The listing for `local_root` is `local`; every other root gets
/// `foreign`.
pub struct CannedToolchain {
    local_root: PathBuf,
    local: Vec<u8>,
    foreign: Vec<u8>,
    fail_edit: bool,
    pub listed_roots: RefCell<Vec<PathBuf>>,
    pub foreign_manifests: RefCell<Vec<String>>,
    pub edits: RefCell<Vec<Vec<Pin>>>,
}

impl CannedToolchain {
    pub fn new(local_root: impl AsRef<Path>, local: Vec<u8>, foreign: Vec<u8>) -> Self {
        Self {
            local_root: local_root.as_ref().to_path_buf(),
            local,
            foreign,
            fail_edit: false,
            listed_roots: RefCell::new(Vec::new()),
            foreign_manifests: RefCell::new(Vec::new()),
            edits: RefCell::new(Vec::new()),
        }
    }

    pub fn failing_edit(mut self) -> Self {
        self.fail_edit = true;
        self
    }

    /// Renders a listing the way `go list -m -json all` does: the main module
    /// first, without a version, followed by one object per dependency.
    pub fn listing(main_module: &str, modules: &[(&str, &str)]) -> Vec<u8> {
        let mut out = serde_json::to_string_pretty(&serde_json::json!({
            "Path": main_module,
            "Main": true,
            "GoVersion": "1.21",
        }))
        .unwrap_or_default();
        out.push('\n');

        for (path, version) in modules {
            let record = serde_json::json!({ "Path": path, "Version": version });
            out.push_str(&serde_json::to_string_pretty(&record).unwrap_or_default());
            out.push('\n');
        }
        out.into_bytes()
    }
}

impl GoToolchain for CannedToolchain {
    fn list_modules(&self, root: &Path) -> Result<Vec<u8>> {
        self.listed_roots.borrow_mut().push(root.to_path_buf());
        if root == self.local_root {
            return Ok(self.local.clone());
        }

        let manifest = std::fs::read_to_string(root.join("go.mod"))
            .map_err(|e| MergeError::io("Canned toolchain found no go.mod", e))?;
        self.foreign_manifests.borrow_mut().push(manifest);
        Ok(self.foreign.clone())
    }

    fn edit_requirements(&self, _root: &Path, pins: &[Pin]) -> Result<()> {
        self.edits.borrow_mut().push(pins.to_vec());
        if self.fail_edit {
            return Err(MergeError::CommandFailed {
                command: "go mod edit".to_string(),
                code: Some(1),
            });
        }
        Ok(())
    }
}
