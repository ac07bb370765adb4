//! ---
//! backend_section: "versioning"
//! backend_subsection: "module"
//! backend_type: "source"
//! backend_scope: "code"
//! backend_description: "Version metadata and build information helpers."
//! backend_version: "v0.1.0"
//! backend_owner: "tbd"
//! ---
use std::fmt;

use semver::Version;

/// Parse a version string, accepting the abbreviated `MAJOR` and
/// `MAJOR.MINOR` forms in addition to full semantic versions.
pub(crate) fn parse_lenient(raw: &str) -> Option<Version> {
    if let Ok(version) = Version::parse(raw) {
        return Some(version);
    }
    // Three components must already be valid semver.
    let parts: Vec<&str> = raw.split('.').collect();
    if parts.len() >= 3 {
        return None;
    }
    let mut numbers = [0u64; 3];
    for (slot, part) in numbers.iter_mut().zip(&parts) {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if part.len() > 1 && part.starts_with('0') {
            return None;
        }
        *slot = part.parse().ok()?;
    }
    Some(Version::new(numbers[0], numbers[1], numbers[2]))
}

/// Toolchain version requirement such as `1.5+` (this release or newer) or
/// `1.21` (the 1.21 line).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ToolchainRequirement {
    minimum: Version,
    open_ended: bool,
    text: String,
}

impl ToolchainRequirement {
    /// Parse a requirement, returning `None` when the text is not a version
    /// with an optional trailing `+`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let text = raw.trim();
        let (base, open_ended) = match text.strip_suffix('+') {
            Some(base) => (base, true),
            None => (text, false),
        };
        let minimum = parse_lenient(base)?;
        Some(Self {
            minimum,
            open_ended,
            text: text.to_owned(),
        })
    }

    /// Lowest toolchain release accepted by the requirement.
    #[must_use]
    pub fn minimum(&self) -> &Version {
        &self.minimum
    }

    /// Whether any newer release also satisfies the requirement.
    #[must_use]
    pub fn is_open_ended(&self) -> bool {
        self.open_ended
    }

    /// Check whether a concrete toolchain release satisfies the requirement.
    #[must_use]
    pub fn satisfied_by(&self, version: &Version) -> bool {
        if self.open_ended {
            return version >= &self.minimum;
        }
        version.major == self.minimum.major
            && version.minor == self.minimum.minor
            && version >= &self.minimum
    }
}

impl fmt::Display for ToolchainRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
