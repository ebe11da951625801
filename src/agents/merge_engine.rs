use crate::agents::update::{Update, UpdateSet, VersionMap};
use crate::gomod::VersionComparator;
use tracing::debug;

/// Computes the upgrades needed for the local graph to satisfy the foreign one.
///
/// A module is selected when it is missing locally or when its foreign version
/// has strictly higher precedence than the local one. Equal or older foreign
/// versions are ignored, so applying the result never downgrades anything.
pub fn merge(local: &VersionMap, foreign: &VersionMap) -> UpdateSet {
    let mut updates = UpdateSet::new();

    for (module, foreign_version) in foreign {
        let previous = match local.get(module) {
            None => None,
            Some(local_version) if VersionComparator::is_newer(foreign_version, local_version) => {
                Some(local_version.clone())
            }
            Some(_) => continue,
        };

        debug!(
            module = module.as_str(),
            from = previous.as_deref().unwrap_or("(none)"),
            to = foreign_version.as_str(),
            "selected update"
        );
        updates.insert(
            module.clone(),
            Update {
                version: foreign_version.clone(),
                previous,
            },
        );
    }

    updates
}
