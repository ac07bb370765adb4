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
use serde::Serialize;

use crate::error::{Result, VersionError, VersionField};
use crate::toolchain::{parse_lenient, ToolchainRequirement};

/// Version of the backend component itself.
pub const PRODUCT_VERSION: &str = "0.1";
/// Minimum toolchain the backend is built with.
pub const TOOLCHAIN_VERSION: &str = "1.5+";

const PRODUCT_NAME: &str = "backend";
const TOOLCHAIN_NAME: &str = "go";

/// Immutable pair of product and toolchain versions with a human readable
/// description.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct VersionInfo {
    product_version: String,
    toolchain_version: String,
    #[serde(skip)]
    product: Version,
    #[serde(skip)]
    toolchain: ToolchainRequirement,
}

impl VersionInfo {
    /// Validate and construct a [`VersionInfo`].
    ///
    /// Surrounding whitespace is trimmed. The product version must be a
    /// semantic version (`MAJOR` and `MAJOR.MINOR` are accepted); the
    /// toolchain version may additionally end in `+`.
    pub fn new(product: impl Into<String>, toolchain: impl Into<String>) -> Result<Self> {
        let product_version = non_empty(product.into(), VersionField::Product)?;
        let toolchain_version = non_empty(toolchain.into(), VersionField::Toolchain)?;

        let product = parse_lenient(&product_version).ok_or_else(|| VersionError::Malformed {
            field: VersionField::Product,
            value: product_version.clone(),
        })?;
        let toolchain = ToolchainRequirement::parse(&toolchain_version).ok_or_else(|| {
            VersionError::Malformed {
                field: VersionField::Toolchain,
                value: toolchain_version.clone(),
            }
        })?;

        Ok(Self {
            product_version,
            toolchain_version,
            product,
            toolchain,
        })
    }

    /// Version information baked into this release.
    #[must_use]
    pub fn backend() -> Self {
        Self::new(PRODUCT_VERSION, TOOLCHAIN_VERSION)
            .expect("built-in version strings are well-formed")
    }

    /// Product version exactly as configured.
    #[must_use]
    pub fn product_version(&self) -> &str {
        &self.product_version
    }

    /// Toolchain version exactly as configured.
    #[must_use]
    pub fn toolchain_version(&self) -> &str {
        &self.toolchain_version
    }

    /// Product version as a full semantic version (`0.1` becomes `0.1.0`).
    #[must_use]
    pub fn product_semver(&self) -> &Version {
        &self.product
    }

    /// Parsed toolchain requirement.
    #[must_use]
    pub fn toolchain_requirement(&self) -> &ToolchainRequirement {
        &self.toolchain
    }

    /// Human readable description, e.g. `backend version 0.1, build on go 1.5+`.
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Description using the historical `verion` spelling, for consumers that
    /// still match the old output byte for byte.
    #[must_use]
    pub fn describe_legacy(&self) -> String {
        format!(
            "{PRODUCT_NAME} verion {}, build on {TOOLCHAIN_NAME} {}",
            self.product_version, self.toolchain_version
        )
    }
}

impl Default for VersionInfo {
    fn default() -> Self {
        Self::backend()
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{PRODUCT_NAME} version {}, build on {TOOLCHAIN_NAME} {}",
            self.product_version, self.toolchain_version
        )
    }
}

fn non_empty(value: String, field: VersionField) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(VersionError::Empty { field });
    }
    Ok(trimmed.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_description_matches_release_string() {
        let info = VersionInfo::backend();
        assert_eq!(info.describe(), "backend version 0.1, build on go 1.5+");
        assert_eq!(info.product_semver(), &Version::new(0, 1, 0));
    }

    #[test]
    fn describe_is_stable_across_calls() {
        let info = VersionInfo::default();
        let first = info.describe();
        for _ in 0..8 {
            assert_eq!(info.describe(), first);
        }
        assert_eq!(info.to_string(), first);
    }

    #[test]
    fn description_contains_both_versions_verbatim() {
        let info = VersionInfo::new("2.4.1-beta.2", "1.21+").expect("valid versions");
        let description = info.describe();
        assert!(description.contains("2.4.1-beta.2"));
        assert!(description.contains("1.21+"));
    }

    #[test]
    fn legacy_description_keeps_old_spelling() {
        assert_eq!(
            VersionInfo::backend().describe_legacy(),
            "backend verion 0.1, build on go 1.5+"
        );
    }

    #[test]
    fn whitespace_is_trimmed() {
        let info = VersionInfo::new("  1.2 ", "\t1.9+\n").expect("valid versions");
        assert_eq!(info.product_version(), "1.2");
        assert_eq!(info.toolchain_version(), "1.9+");
    }

    #[test]
    fn blank_strings_are_rejected() {
        assert_eq!(
            VersionInfo::new("", "1.5+"),
            Err(VersionError::Empty {
                field: VersionField::Product
            })
        );
        assert_eq!(
            VersionInfo::new("0.1", "   "),
            Err(VersionError::Empty {
                field: VersionField::Toolchain
            })
        );
    }

    #[test]
    fn malformed_strings_are_rejected() {
        let err = VersionInfo::new("latest", "1.5+").unwrap_err();
        assert_eq!(err.field(), VersionField::Product);

        let err = VersionInfo::new("01.02.03", "1.5+").unwrap_err();
        assert_eq!(
            err,
            VersionError::Malformed {
                field: VersionField::Product,
                value: "01.02.03".into()
            }
        );
        assert!(VersionInfo::new("0.1", "01.5+").is_err());

        let err = VersionInfo::new("0.1", "go1.5").unwrap_err();
        assert_eq!(
            err,
            VersionError::Malformed {
                field: VersionField::Toolchain,
                value: "go1.5".into()
            }
        );
    }

    #[test]
    fn serializes_configured_strings_only() {
        let json = serde_json::to_value(VersionInfo::backend()).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "product_version": "0.1",
                "toolchain_version": "1.5+"
            })
        );
    }

    #[test]
    fn version_info_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<VersionInfo>();
    }
}
