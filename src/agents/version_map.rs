use crate::agents::update::VersionMap;
use crate::error::{MergeError, Result};
use crate::gomod::ModuleStream;
use crate::toolchain::GoToolchain;
use std::path::Path;
use tracing::debug;

/// VersionMapBuilder flattens a resolved module graph into module -> version
pub struct VersionMapBuilder<'a, T: GoToolchain + ?Sized> {
    toolchain: &'a T,
}

impl<'a, T: GoToolchain + ?Sized> VersionMapBuilder<'a, T> {
    pub fn new(toolchain: &'a T) -> Self {
        Self { toolchain }
    }

    /// Resolve the graph rooted at `root` and collect every versioned module.
    ///
    /// Records without a version (the main module) are skipped. A record that
    /// fails to decode aborts the whole build.
    pub fn build(&self, root: &Path) -> Result<VersionMap> {
        let stdout = self.toolchain.list_modules(root)?;

        let mut versions = VersionMap::new();
        let mut skipped = 0usize;
        let mut indirect = 0usize;
        for record in ModuleStream::new(stdout.as_slice()) {
            let record = record.map_err(|source| MergeError::Decode {
                command: self.toolchain.list_command(),
                source,
            })?;

            match record.resolved_version() {
                Some(version) => {
                    if record.indirect {
                        indirect += 1;
                    }
                    versions.insert(record.path.clone(), version.to_string());
                }
                None => {
                    debug!(
                        module = record.path.as_str(),
                        main = record.main,
                        "skipping unversioned module"
                    );
                    skipped += 1;
                }
            }
        }

        debug!(
            root = %root.display(),
            modules = versions.len(),
            indirect,
            skipped,
            "resolved module graph"
        );
        Ok(versions)
    }
}
