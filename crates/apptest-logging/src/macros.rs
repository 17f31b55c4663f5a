//! ---
//! apptest_section: "03-logging"
//! apptest_subsection: "module"
//! apptest_type: "source"
//! apptest_scope: "code"
//! apptest_description: "Context-enriched logging macros."
//! apptest_version: "v0.1.0"
//! apptest_owner: "tbd"
//! ---

#[doc(hidden)]
#[macro_export]
macro_rules! __at_event {
    ($level:expr, $ctx:expr, $($arg:tt)+) => {{
        let ctx = &$ctx;
        tracing::event!(
            $level,
            app = ctx.app.unwrap_or(""),
            compiler = ctx.compiler.unwrap_or(""),
            simulator = ctx.simulator.unwrap_or(""),
            message = %format_args!($($arg)+)
        );
    }};
}

/// Emit an informational log enriched with harness context.
#[macro_export]
macro_rules! at_info {
    (context = $ctx:expr, $($arg:tt)+) => {
        $crate::__at_event!(tracing::Level::INFO, $ctx, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__at_event!(tracing::Level::INFO, $crate::LogContext::default(), $($arg)+)
    };
}

/// Emit a debug log enriched with harness context.
#[macro_export]
macro_rules! at_debug {
    (context = $ctx:expr, $($arg:tt)+) => {
        $crate::__at_event!(tracing::Level::DEBUG, $ctx, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__at_event!(tracing::Level::DEBUG, $crate::LogContext::default(), $($arg)+)
    };
}

/// Emit an error log enriched with harness context.
#[macro_export]
macro_rules! at_error {
    (context = $ctx:expr, $($arg:tt)+) => {
        $crate::__at_event!(tracing::Level::ERROR, $ctx, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__at_event!(tracing::Level::ERROR, $crate::LogContext::default(), $($arg)+)
    };
}
