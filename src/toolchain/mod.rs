use crate::agents::update::Pin;
use crate::error::Result;
use std::path::Path;

#[cfg(test)]
pub mod canned;
#[cfg(test)]
pub use canned::CannedToolchain;

/// The two Go commands the merge depends on.
pub trait GoToolchain {
    /// Runs the module listing (`go list -m -json all`) rooted at `root` and
    /// returns its standard output once the command has succeeded.
    fn list_modules(&self, root: &Path) -> Result<Vec<u8>>;

    /// Pins every module in `pins` in the go.mod under `root` with a single
    /// `go mod edit` invocation.
    fn edit_requirements(&self, root: &Path, pins: &[Pin]) -> Result<()>;

    /// Human-readable command line for the listing, used in error context.
    fn list_command(&self) -> String {
        "go list -m -json all".to_string()
    }
}
