use crate::agents::update::{Pin, UpdateSet};
use crate::error::{MergeError, Result};
use crate::toolchain::GoToolchain;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// What happened to an update set once it reached the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Nothing to change; the editor was not invoked
    UpToDate,
    /// The editor pinned these modules, in this order
    Applied(Vec<Pin>),
    /// Dry run: these modules would have been pinned
    Planned(Vec<Pin>),
}

/// ManifestUpdater commits an update set to the local go.mod
pub struct ManifestUpdater<'a, T: GoToolchain + ?Sized> {
    toolchain: &'a T,
    project_path: PathBuf,
}

impl<'a, T: GoToolchain + ?Sized> ManifestUpdater<'a, T> {
    pub fn new<P: AsRef<Path>>(toolchain: &'a T, project_path: P) -> Self {
        Self {
            toolchain,
            project_path: project_path.as_ref().to_path_buf(),
        }
    }

    /// Pin every module of `updates` with one editor call, then report each
    /// change to `out` as `<module> <version>` in lexical module order.
    pub fn apply<W: Write>(&self, updates: &UpdateSet, out: &mut W) -> Result<ApplyOutcome> {
        if updates.is_empty() {
            Self::report_up_to_date(out)?;
            return Ok(ApplyOutcome::UpToDate);
        }

        let pins = updates.pins();
        info!(count = pins.len(), "pinning updated requirements");
        self.toolchain.edit_requirements(&self.project_path, &pins)?;

        for pin in &pins {
            writeln!(out, "{} {}", pin.module, pin.version).map_err(Self::output_error)?;
        }
        Ok(ApplyOutcome::Applied(pins))
    }

    /// Report what [`ManifestUpdater::apply`] would do without editing anything.
    pub fn plan<W: Write>(&self, updates: &UpdateSet, out: &mut W) -> Result<ApplyOutcome> {
        if updates.is_empty() {
            Self::report_up_to_date(out)?;
            return Ok(ApplyOutcome::UpToDate);
        }

        debug!(count = updates.len(), "dry run, go.mod left untouched");
        for (module, update) in updates.sorted() {
            let written = match &update.previous {
                Some(previous) => writeln!(out, "{module} {} (was {previous})", update.version),
                None => writeln!(out, "{module} {} (new)", update.version),
            };
            written.map_err(Self::output_error)?;
        }
        Ok(ApplyOutcome::Planned(updates.pins()))
    }

    fn report_up_to_date<W: Write>(out: &mut W) -> Result<()> {
        writeln!(out, "no updates required").map_err(Self::output_error)
    }

    fn output_error(e: std::io::Error) -> MergeError {
        MergeError::io("Failed to write update report", e)
    }
}
