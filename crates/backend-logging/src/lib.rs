//! ---
//! backend_section: "logging"
//! backend_subsection: "module"
//! backend_type: "source"
//! backend_scope: "code"
//! backend_description: "Structured logging setup and event helpers."
//! backend_version: "v0.1.0"
//! backend_owner: "tbd"
//! ---
#![warn(missing_docs)]

//! Tracing subscriber setup and consistently shaped log events for the
//! backend binaries.

use tracing::Level;

pub mod macros;
pub mod subscriber;

pub use subscriber::{init_tracing, LogFormat, LogOutput, LoggingConfig, LoggingError};

#[doc(hidden)]
pub use tracing as __tracing;

/// Structured logging context propagated by the convenience macros.
#[derive(Debug, Default, Clone)]
pub struct LogContext<'a> {
    /// Service emitting the event.
    pub service: Option<&'a str>,
    /// Sub-component or command within the service.
    pub component: Option<&'a str>,
    /// Product version reported by the service.
    pub version: Option<&'a str>,
}

impl<'a> LogContext<'a> {
    /// Create an empty logging context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a service name.
    pub fn with_service(mut self, service: &'a str) -> Self {
        self.service = Some(service);
        self
    }

    /// Attach a component name.
    pub fn with_component(mut self, component: &'a str) -> Self {
        self.component = Some(component);
        self
    }

    /// Attach the product version.
    pub fn with_version(mut self, version: &'a str) -> Self {
        self.version = Some(version);
        self
    }
}

/// High-level outcome used when emitting lifecycle log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemEventOutcome {
    /// The operation completed successfully.
    Success,
    /// The operation failed or was aborted.
    Fault,
}

impl SystemEventOutcome {
    fn as_str(&self) -> &'static str {
        match self {
            SystemEventOutcome::Success => "success",
            SystemEventOutcome::Fault => "fault",
        }
    }
}

/// Emit a standardized system event with a success/fault outcome.
pub fn log_system_event(
    context: Option<&LogContext>,
    event: &str,
    message: &str,
    outcome: SystemEventOutcome,
) {
    let ctx = context.cloned().unwrap_or_default();
    // `tracing::event!` needs a constant level, so branch per outcome.
    match outcome {
        SystemEventOutcome::Success => tracing::event!(
            Level::INFO,
            event,
            outcome = outcome.as_str(),
            service = ctx.service.unwrap_or(""),
            component = ctx.component.unwrap_or(""),
            version = ctx.version.unwrap_or(""),
            message = %message
        ),
        SystemEventOutcome::Fault => tracing::event!(
            Level::ERROR,
            event,
            outcome = outcome.as_str(),
            service = ctx.service.unwrap_or(""),
            component = ctx.component.unwrap_or(""),
            version = ctx.version.unwrap_or(""),
            message = %message
        ),
    }
}
