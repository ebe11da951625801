pub mod go_execution;
pub mod manifest_updater;
pub mod merge_engine;
pub mod scratch;
pub mod update;
pub mod version_map;

pub use go_execution::GoExecutionAgent;
pub use manifest_updater::{ApplyOutcome, ManifestUpdater};
pub use merge_engine::merge;
pub use scratch::ScratchWorkspace;
pub use version_map::VersionMapBuilder;
