//! ---
//! backend_section: "versioning"
//! backend_subsection: "module"
//! backend_type: "source"
//! backend_scope: "code"
//! backend_description: "Version metadata and build information helpers."
//! backend_version: "v0.1.0"
//! backend_owner: "tbd"
//! ---
use serde::Serialize;

use crate::info::VersionInfo;

const UNKNOWN: &str = "UNKNOWN";

/// Compile-time build metadata captured via `vergen`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    /// Version of the crate that produced the binary.
    pub crate_version: String,
    /// Git commit hash captured at build time.
    pub git_sha: String,
    /// Build timestamp from the compilation environment.
    pub build_timestamp: String,
    /// Target triple used for the build.
    pub target: String,
    /// Version of the Rust compiler.
    pub rustc: String,
}

impl BuildInfo {
    /// Construct a new [`BuildInfo`] from the environment captured at build time.
    #[must_use]
    pub fn current() -> Self {
        Self {
            crate_version: env!("CARGO_PKG_VERSION").to_owned(),
            git_sha: known(option_env!("VERGEN_GIT_SHA")),
            build_timestamp: known(option_env!("VERGEN_BUILD_TIMESTAMP")),
            target: known(option_env!("VERGEN_CARGO_TARGET_TRIPLE")),
            rustc: known(option_env!("VERGEN_RUSTC_SEMVER")),
        }
    }

    /// Short banner used in log lines.
    #[must_use]
    pub fn banner(&self) -> String {
        format!("backend-versioning v{} (git {})", self.crate_version, self.git_sha)
    }
}

/// Multi-line description suitable for a long `--version` output.
#[must_use]
pub fn extended_version(info: &VersionInfo, build: &BuildInfo) -> String {
    format!(
        "{description}\nBuilt: {built}\nTarget: {target}\nRustc: {rustc}",
        description = info.describe(),
        built = build.build_timestamp,
        target = build.target,
        rustc = build.rustc
    )
}

// vergen emits a placeholder instead of failing when git is unavailable.
fn known(value: Option<&str>) -> String {
    match value {
        Some(value) if !value.is_empty() && value != "VERGEN_IDEMPOTENT_OUTPUT" => {
            value.to_owned()
        }
        _ => UNKNOWN.to_owned(),
    }
}
