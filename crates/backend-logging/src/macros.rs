//! ---
//! backend_section: "logging"
//! backend_subsection: "module"
//! backend_type: "source"
//! backend_scope: "code"
//! backend_description: "Structured logging setup and event helpers."
//! backend_version: "v0.1.0"
//! backend_owner: "tbd"
//! ---
//! Logging macros that attach a [`LogContext`](crate::LogContext) to every event.

#[doc(hidden)]
#[macro_export]
macro_rules! __backend_event {
    ($level:expr, $ctx:expr, $($arg:tt)+) => {{
        let ctx = &$ctx;
        $crate::__tracing::event!(
            $level,
            service = ctx.service.unwrap_or(""),
            component = ctx.component.unwrap_or(""),
            version = ctx.version.unwrap_or(""),
            message = %format_args!($($arg)+)
        );
    }};
}

/// Emit an informational log enriched with backend context.
#[macro_export]
macro_rules! backend_info {
    (context = $ctx:expr, $($arg:tt)+) => {
        $crate::__backend_event!($crate::__tracing::Level::INFO, $ctx, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__backend_event!(
            $crate::__tracing::Level::INFO,
            $crate::LogContext::default(),
            $($arg)+
        )
    };
}

/// Emit a debug log enriched with backend context.
#[macro_export]
macro_rules! backend_debug {
    (context = $ctx:expr, $($arg:tt)+) => {
        $crate::__backend_event!($crate::__tracing::Level::DEBUG, $ctx, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__backend_event!(
            $crate::__tracing::Level::DEBUG,
            $crate::LogContext::default(),
            $($arg)+
        )
    };
}

/// Emit an error log enriched with backend context.
#[macro_export]
macro_rules! backend_error {
    (context = $ctx:expr, $($arg:tt)+) => {
        $crate::__backend_event!($crate::__tracing::Level::ERROR, $ctx, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__backend_event!(
            $crate::__tracing::Level::ERROR,
            $crate::LogContext::default(),
            $($arg)+
        )
    };
}
