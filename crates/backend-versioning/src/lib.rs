//! ---
//! backend_section: "versioning"
//! backend_subsection: "module"
//! backend_type: "source"
//! backend_scope: "code"
//! backend_description: "Version metadata and build information helpers."
//! backend_version: "v0.1.0"
//! backend_owner: "tbd"
//! ---
#![warn(missing_docs)]

//! Version metadata for the backend component.
//!
//! A [`VersionInfo`] is constructed once by the process entry point (either
//! from the built-in strings or from configuration) and passed to whatever
//! needs to report it. It is immutable and can be shared freely between
//! threads.

pub mod build_info;
pub mod error;
pub mod info;
pub mod toolchain;

pub use build_info::{extended_version, BuildInfo};
pub use error::{VersionError, VersionField};
pub use info::{VersionInfo, PRODUCT_VERSION, TOOLCHAIN_VERSION};
pub use toolchain::ToolchainRequirement;
