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

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, VersionError>;

/// Identifies which of the two version strings failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionField {
    /// The component's own version.
    Product,
    /// The build toolchain version.
    Toolchain,
}

impl fmt::Display for VersionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionField::Product => f.write_str("product"),
            VersionField::Toolchain => f.write_str("toolchain"),
        }
    }
}

/// Errors raised at the [`crate::VersionInfo`] construction boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VersionError {
    /// The supplied string was empty or whitespace only.
    #[error("{field} version must not be empty")]
    Empty {
        /// Offending field.
        field: VersionField,
    },
    /// The supplied string is not a recognisable version.
    #[error("{field} version '{value}' is not a well-formed version")]
    Malformed {
        /// Offending field.
        field: VersionField,
        /// Value as supplied, after trimming.
        value: String,
    },
}

impl VersionError {
    /// Field that failed validation.
    #[must_use]
    pub fn field(&self) -> VersionField {
        match self {
            VersionError::Empty { field } | VersionError::Malformed { field, .. } => *field,
        }
    }
}
