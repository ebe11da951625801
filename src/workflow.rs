use crate::agents::{ApplyOutcome, ManifestUpdater, ScratchWorkspace, VersionMapBuilder, merge};
use crate::error::Result;
use crate::toolchain::GoToolchain;
use crate::utils::path_validator::PathValidator;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Merge the dependency versions implied by `modfile` into the module at
/// `project_path`.
///
/// Both graphs are resolved first; the local go.mod is only edited once the
/// complete update set is known. Every failure aborts the run.
pub fn execute_merge<T, W>(
    toolchain: &T,
    project_path: &Path,
    modfile: &Path,
    dry_run: bool,
    out: &mut W,
) -> Result<ApplyOutcome>
where
    T: GoToolchain + ?Sized,
    W: Write,
{
    let project_path = PathValidator::validate_project_path(project_path)?;
    let modfile = PathValidator::validate_manifest_file(modfile)?;
    let builder = VersionMapBuilder::new(toolchain);

    // Step 1: resolve the local graph
    let local = builder.build(&project_path)?;
    debug!(modules = local.len(), "local graph resolved");

    // Step 2: resolve the foreign graph in isolation
    let foreign = {
        let scratch = ScratchWorkspace::with_manifest(&modfile)?;
        debug!(manifest = %scratch.manifest_path().display(), "resolving foreign graph");
        builder.build(scratch.root())?
    };
    debug!(modules = foreign.len(), "foreign graph resolved");

    // Step 3: diff
    let updates = merge(&local, &foreign);
    info!(updates = updates.len(), "merge computed");

    // Step 4: commit or report
    let updater = ManifestUpdater::new(toolchain, &project_path);
    if dry_run {
        updater.plan(&updates, out)
    } else {
        updater.apply(&updates, out)
    }
}
