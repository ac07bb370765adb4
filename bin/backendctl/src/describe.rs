//! ---
//! backend_section: "cli"
//! backend_subsection: "binary"
//! backend_type: "source"
//! backend_scope: "code"
//! backend_description: "Control CLI reporting backend version information."
//! backend_version: "v0.1.0"
//! backend_owner: "tbd"
//! ---
use anyhow::{Context, Result};
use backend_versioning::{BuildInfo, VersionInfo};
use clap::{Args, ValueEnum};
use serde::Serialize;

/// Output styles for the `describe` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `backend version X, build on go Y`.
    Text,
    /// Object with the description, both versions and build metadata.
    Json,
    /// The historical `verion` spelling.
    Legacy,
}

/// Options for the `describe` command.
#[derive(Debug, Args)]
pub struct DescribeArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct VersionReport<'a> {
    description: String,
    #[serde(flatten)]
    version: &'a VersionInfo,
    build: &'a BuildInfo,
}

/// Render the description in the requested format.
pub fn render(version: &VersionInfo, build: &BuildInfo, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(version.describe()),
        OutputFormat::Legacy => Ok(version.describe_legacy()),
        OutputFormat::Json => {
            let report = VersionReport {
                description: version.describe(),
                version,
                build,
            };
            serde_json::to_string_pretty(&report).context("failed to serialise version report")
        }
    }
}
