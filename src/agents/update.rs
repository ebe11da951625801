use std::collections::HashMap;
use std::fmt;

/// Module identity to resolved version, as produced for one dependency graph.
pub type VersionMap = HashMap<String, String>;

/// An explicit requirement handed to the manifest editor as `module@version`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pin {
    pub module: String,
    pub version: String,
}

impl Pin {
    pub fn new(module: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.module, self.version)
    }
}

/// A chosen upgrade together with what the local graph held before.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    pub version: String,
    /// `None` when the module is new to the local graph
    pub previous: Option<String>,
}

/// The modules whose foreign version must be pinned locally.
///
/// Iteration order of the underlying map is unspecified; use [`UpdateSet::sorted`]
/// whenever the entries are emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateSet {
    updates: HashMap<String, Update>,
}

impl UpdateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, module: String, update: Update) {
        self.updates.insert(module, update);
    }

    #[cfg(test)]
    pub fn get(&self, module: &str) -> Option<&Update> {
        self.updates.get(module)
    }

    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.updates.len()
    }

    /// Entries ordered lexically by module identity.
    pub fn sorted(&self) -> Vec<(&str, &Update)> {
        let mut entries: Vec<_> = self
            .updates
            .iter()
            .map(|(module, update)| (module.as_str(), update))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Pins in lexical module order.
    pub fn pins(&self) -> Vec<Pin> {
        self.sorted()
            .into_iter()
            .map(|(module, update)| Pin::new(module, update.version.as_str()))
            .collect()
    }
}
