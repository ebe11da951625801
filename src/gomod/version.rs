use std::cmp::Ordering;

/// A Go module version such as `v1.4.2`, `v0.0.0-20200101120000-abcdef123456`
/// or `v2.0.0+incompatible`.
#[derive(Debug, Clone)]
pub struct ModuleVersion {
    /// `None` when the string is not a semantic version
    pub parsed: Option<semver::Version>,
}

impl ModuleVersion {
    pub fn parse(version: &str) -> Self {
        ModuleVersion {
            parsed: Self::parse_semantic(version),
        }
    }

    fn parse_semantic(version: &str) -> Option<semver::Version> {
        let body = version.strip_prefix('v').unwrap_or(version);
        if let Ok(v) = semver::Version::parse(body) {
            return Some(v);
        }

        // Go accepts `v1` and `v1.2` as shorthands for `v1.0.0` and `v1.2.0`.
        let parts: Vec<&str> = body.split('.').collect();
        if parts.len() > 2 || !parts.iter().all(|p| Self::is_numeric_identifier(p)) {
            return None;
        }

        let mut numbers = [0u64; 3];
        for (slot, part) in numbers.iter_mut().zip(&parts) {
            *slot = part.parse().ok()?;
        }
        Some(semver::Version::new(numbers[0], numbers[1], numbers[2]))
    }

    fn is_numeric_identifier(part: &str) -> bool {
        !part.is_empty()
            && part.bytes().all(|b| b.is_ascii_digit())
            && (part == "0" || !part.starts_with('0'))
    }
}

impl PartialEq for ModuleVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ModuleVersion {}

impl PartialOrd for ModuleVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ModuleVersion {
    /// Semantic-version precedence. Build metadata never takes part, and an
    /// unparsable version sorts below every valid one.
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.parsed, &other.parsed) {
            (Some(a), Some(b)) => a
                .major
                .cmp(&b.major)
                .then(a.minor.cmp(&b.minor))
                .then(a.patch.cmp(&b.patch))
                .then_with(|| a.pre.cmp(&b.pre)),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        }
    }
}

pub struct VersionComparator;

impl VersionComparator {
    /// Check if version `a` is newer than version `b`
    pub fn is_newer(a: &str, b: &str) -> bool {
        ModuleVersion::parse(a) > ModuleVersion::parse(b)
    }
}
