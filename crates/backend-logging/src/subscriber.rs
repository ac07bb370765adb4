//! ---
//! backend_section: "logging"
//! backend_subsection: "module"
//! backend_type: "source"
//! backend_scope: "code"
//! backend_description: "Structured logging setup and event helpers."
//! backend_version: "v0.1.0"
//! backend_owner: "tbd"
//! ---
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::daily;
use tracing_subscriber::filter::{EnvFilter, ParseError};
use tracing_subscriber::fmt::{self, time::UtcTime, writer::BoxMakeWriter};
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

const LOG_ENV: &str = "BACKEND_LOG";
const RUST_LOG_ENV: &str = "RUST_LOG";

fn default_level() -> String {
    "info".to_owned()
}

/// Available log formats.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LogFormat {
    /// One JSON object per event.
    StructuredJson,
    /// Human readable single-line events.
    #[default]
    Pretty,
}

/// Console stream receiving log events.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogOutput {
    /// Standard output.
    Stdout,
    /// Standard error, keeping stdout free for command output.
    #[default]
    Stderr,
}

/// Logging section of the backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Filter directive used when neither `BACKEND_LOG` nor `RUST_LOG` is set.
    #[serde(default = "default_level")]
    pub level: String,
    /// Console format.
    #[serde(default)]
    pub format: LogFormat,
    /// Console stream.
    #[serde(default)]
    pub output: LogOutput,
    /// Directory for a daily rolling JSON log file. Disabled when unset.
    #[serde(default)]
    pub directory: Option<PathBuf>,
    /// File name prefix for the rolling log, defaulting to the service name.
    #[serde(default)]
    pub file_prefix: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
            output: LogOutput::default(),
            directory: None,
            file_prefix: None,
        }
    }
}

/// Errors raised while installing the tracing subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The configured filter directive could not be parsed.
    #[error("invalid log filter '{directive}': {source}")]
    Filter {
        /// Directive as configured.
        directive: String,
        /// Parser error.
        #[source]
        source: ParseError,
    },
    /// The log directory could not be created.
    #[error("unable to create log directory {}: {source}", .path.display())]
    Directory {
        /// Directory that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Keeps the background file writer alive; drop it only at shutdown so
/// buffered events are flushed.
#[derive(Debug)]
#[must_use = "dropping the guard stops the file log writer"]
pub struct LogGuard {
    _file: Option<WorkerGuard>,
}

/// Initialize the tracing subscriber from configuration and the environment.
///
/// * `BACKEND_LOG` overrides the filter (e.g. `info`, `debug,backend_config=trace`).
///   An unparsable value is reported on stderr and ignored.
/// * `RUST_LOG` is honoured next, then `config.level`.
/// * When `config.directory` is set, a daily rolling JSON file is written
///   there in addition to the console stream.
///
/// A subscriber that is already installed is left in place.
pub fn init_tracing(service_name: &str, config: &LoggingConfig) -> Result<LogGuard, LoggingError> {
    let filter = build_filter(
        std::env::var(LOG_ENV).ok(),
        std::env::var(RUST_LOG_ENV).ok(),
        &config.level,
    )?;

    let stream = match config.output {
        LogOutput::Stdout => BoxMakeWriter::new(std::io::stdout),
        LogOutput::Stderr => BoxMakeWriter::new(std::io::stderr),
    };
    let console_layer = match config.format {
        LogFormat::StructuredJson => fmt::layer()
            .with_target(false)
            .with_timer(UtcTime::rfc_3339())
            .json()
            .with_writer(stream)
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .with_target(true)
            .with_timer(UtcTime::rfc_3339())
            .with_writer(stream)
            .boxed(),
    };

    let mut file_guard = None;
    let file_layer = match &config.directory {
        Some(directory) => {
            std::fs::create_dir_all(directory).map_err(|source| LoggingError::Directory {
                path: directory.clone(),
                source,
            })?;
            let prefix = config
                .file_prefix
                .clone()
                .unwrap_or_else(|| service_name.to_owned());
            let (writer, guard) =
                tracing_appender::non_blocking(daily(directory, format!("{prefix}.log")));
            file_guard = Some(guard);
            Some(
                fmt::layer()
                    .with_target(true)
                    .with_timer(UtcTime::rfc_3339())
                    .json()
                    .with_writer(writer)
                    .boxed(),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .ok();

    info!(
        service = %service_name,
        format = ?config.format,
        log_dir = ?config.directory,
        "tracing initialised"
    );
    Ok(LogGuard { _file: file_guard })
}

fn build_filter(
    backend_log: Option<String>,
    rust_log: Option<String>,
    configured: &str,
) -> Result<EnvFilter, LoggingError> {
    if let Some(directive) = backend_log.filter(|d| !d.trim().is_empty()) {
        match EnvFilter::try_new(&directive) {
            Ok(filter) => return Ok(filter),
            Err(err) => eprintln!("invalid {LOG_ENV} directive ({err}); ignoring it"),
        }
    }
    if let Some(directive) = rust_log.filter(|d| !d.trim().is_empty()) {
        if let Ok(filter) = EnvFilter::try_new(&directive) {
            return Ok(filter);
        }
    }
    EnvFilter::try_new(configured).map_err(|source| LoggingError::Filter {
        directive: configured.to_owned(),
        source,
    })
}
