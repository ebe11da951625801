use serde::Deserialize;
use serde_json::de::IoRead;
use std::io::Read;

/// One module as reported by `go list -m -json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModuleRecord {
    pub path: String,
    #[serde(default)]
    pub version: Option<String>,
    /// Set on the module the listing was run from
    #[serde(default)]
    pub main: bool,
    #[serde(default)]
    pub indirect: bool,
}

impl ModuleRecord {
    /// The resolved version, or `None` for the main module and any other
    /// record that carries no version.
    pub fn resolved_version(&self) -> Option<&str> {
        self.version.as_deref().filter(|v| !v.is_empty())
    }
}

/// Lazily decodes the concatenated JSON objects of a module listing.
///
/// The stream is finite and cannot be restarted. Decoding stops being
/// meaningful after the first error; callers are expected to bail out on it.
pub struct ModuleStream<R: Read> {
    inner: serde_json::StreamDeserializer<'static, IoRead<R>, ModuleRecord>,
}

impl<R: Read> ModuleStream<R> {
    pub fn new(reader: R) -> Self {
        Self {
            inner: serde_json::Deserializer::from_reader(reader).into_iter(),
        }
    }
}

impl<R: Read> Iterator for ModuleStream<R> {
    type Item = Result<ModuleRecord, serde_json::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}
