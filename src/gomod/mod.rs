pub mod record;
pub mod version;

pub use record::ModuleStream;
pub use version::VersionComparator;
