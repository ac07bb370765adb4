//! ---
//! backend_section: "configuration"
//! backend_subsection: "module"
//! backend_type: "source"
//! backend_scope: "code"
//! backend_description: "Configuration loading and validation."
//! backend_version: "v0.1.0"
//! backend_owner: "tbd"
//! ---
//! TOML configuration for the backend.
//!
//! Every key is optional; an absent file yields the built-in version strings
//! and the default logging setup.

use std::fs;
use std::path::{Path, PathBuf};

use backend_logging::LoggingConfig;
use backend_versioning::{VersionError, VersionInfo, PRODUCT_VERSION, TOOLCHAIN_VERSION};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Environment variable naming an explicit configuration file.
pub const ENV_CONFIG_PATH: &str = "BACKEND_CONFIG";

pub type Result<T> = std::result::Result<T, ConfigError>;

fn default_product() -> String {
    PRODUCT_VERSION.to_owned()
}

fn default_toolchain() -> String {
    TOOLCHAIN_VERSION.to_owned()
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to parse configuration: {0}")]
    Syntax(#[from] toml::de::Error),
    #[error("config file {} named by BACKEND_CONFIG does not exist", .path.display())]
    MissingOverride { path: PathBuf },
    #[error("no configuration files found. inspected: {inspected}")]
    NotFound { inspected: String },
    #[error("invalid version configuration: {0}")]
    Version(#[from] VersionError),
}

/// Top-level configuration document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BackendConfig {
    #[serde(default)]
    pub version: VersionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// `[version]` section overriding the strings reported by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VersionConfig {
    #[serde(default = "default_product")]
    pub product: String,
    #[serde(default = "default_toolchain")]
    pub toolchain: String,
}

impl Default for VersionConfig {
    fn default() -> Self {
        Self {
            product: default_product(),
            toolchain: default_toolchain(),
        }
    }
}

/// A [`BackendConfig`] together with the file it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: BackendConfig,
    /// `None` when the built-in defaults are in effect.
    pub source: Option<PathBuf>,
}

impl LoadedConfig {
    /// Human readable origin, for log lines.
    pub fn origin(&self) -> String {
        match &self.source {
            Some(path) => path.display().to_string(),
            None => "built-in defaults".to_owned(),
        }
    }
}

impl BackendConfig {
    /// Load configuration, respecting the `BACKEND_CONFIG` override, and fail
    /// when no file can be found.
    pub fn load_with_source<P: AsRef<Path>>(candidates: &[P]) -> Result<LoadedConfig> {
        resolve(env_override(), candidates)?.ok_or_else(|| ConfigError::NotFound {
            inspected: candidates
                .iter()
                .map(|p| p.as_ref().display().to_string())
                .collect::<Vec<_>>()
                .join(", "),
        })
    }

    /// Load configuration like [`BackendConfig::load_with_source`], falling back
    /// to defaults when none of the candidates exists.
    pub fn load_or_default<P: AsRef<Path>>(candidates: &[P]) -> Result<LoadedConfig> {
        Ok(
            resolve(env_override(), candidates)?.unwrap_or_else(|| LoadedConfig {
                config: BackendConfig::default(),
                source: None,
            }),
        )
    }

    /// Read, parse and validate a single configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(config_path = %path.display(), "loading configuration");
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str::<BackendConfig>(&contents).map_err(|source| {
            ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate structural invariants.
    pub fn validate(&self) -> Result<()> {
        self.version_info().map(|_| ())
    }

    /// Build the [`VersionInfo`] described by the `[version]` section.
    pub fn version_info(&self) -> Result<VersionInfo> {
        Ok(VersionInfo::new(
            self.version.product.as_str(),
            self.version.toolchain.as_str(),
        )?)
    }
}

impl std::str::FromStr for BackendConfig {
    type Err = ConfigError;

    fn from_str(content: &str) -> Result<Self> {
        let config: BackendConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

fn env_override() -> Option<PathBuf> {
    std::env::var(ENV_CONFIG_PATH)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}

fn resolve<P: AsRef<Path>>(
    override_path: Option<PathBuf>,
    candidates: &[P],
) -> Result<Option<LoadedConfig>> {
    if let Some(path) = override_path {
        if !path.exists() {
            return Err(ConfigError::MissingOverride { path });
        }
        let config = BackendConfig::from_path(&path)?;
        return Ok(Some(LoadedConfig {
            config,
            source: Some(path),
        }));
    }

    for candidate in candidates {
        let path = candidate.as_ref();
        if path.exists() {
            let config = BackendConfig::from_path(path)?;
            return Ok(Some(LoadedConfig {
                config,
                source: Some(path.to_path_buf()),
            }));
        }
    }
    Ok(None)
}
