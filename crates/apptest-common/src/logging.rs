//! ---
//! apptest_section: "01-core-functionality"
//! apptest_subsection: "module"
//! apptest_type: "source"
//! apptest_scope: "code"
//! apptest_description: "Tracing subscriber setup for the harness binary."
//! apptest_version: "v0.1.0"
//! apptest_owner: "tbd"
//! ---
use anyhow::Result;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::debug;
use tracing_appender::rolling::daily;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LoggingConfig;

const LOG_ENV: &str = "APPTEST_LOG";

static FILE_GUARD: OnceCell<tracing_appender::non_blocking::WorkerGuard> = OnceCell::new();
static STDERR_GUARD: OnceCell<tracing_appender::non_blocking::WorkerGuard> = OnceCell::new();

/// Console log formats. Logs always go to stderr so stdout stays reserved
/// for the report.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    StructuredJson,
}

/// Build the filter from `APPTEST_LOG`, then `RUST_LOG`, then `fallback`.
pub fn resolve_filter(fallback: &str) -> EnvFilter {
    let directive = std::env::var(LOG_ENV)
        .or_else(|_| std::env::var(EnvFilter::DEFAULT_ENV))
        .unwrap_or_else(|_| fallback.to_owned());
    EnvFilter::try_new(&directive).unwrap_or_else(|err| {
        eprintln!(
            "invalid log directive '{}' ({}); defaulting to warn",
            directive, err
        );
        EnvFilter::new("warn")
    })
}

/// Initialize the tracing subscriber from configuration and environment.
///
/// * `APPTEST_LOG` overrides the filter, then `RUST_LOG`, then `config.filter`.
/// * Console output is written to stderr through a non-blocking writer.
/// * When `config.directory` is set a daily rolling JSON log is written there too.
pub fn init_tracing(service_name: &str, config: &LoggingConfig) -> Result<()> {
    let filter = resolve_filter(&config.filter);

    let (stderr_writer, stderr_guard) = tracing_appender::non_blocking(std::io::stderr());
    let _ = STDERR_GUARD.set(stderr_guard);

    let console_layer = match config.format {
        LogFormat::Pretty => fmt::layer()
            .with_target(true)
            .with_writer(stderr_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .with_writer(stderr_writer)
            .boxed(),
        LogFormat::StructuredJson => fmt::layer()
            .with_target(false)
            .with_timer(fmt::time::UtcTime::rfc_3339())
            .json()
            .with_writer(stderr_writer)
            .boxed(),
    };

    let file_layer = match &config.directory {
        Some(directory) => {
            std::fs::create_dir_all(directory)?;
            let prefix = config
                .file_prefix
                .clone()
                .unwrap_or_else(|| service_name.to_owned());
            let appender = daily(directory, format!("{}.log", prefix));
            let (file_writer, file_guard) = tracing_appender::non_blocking(appender);
            let _ = FILE_GUARD.set(file_guard);
            Some(
                fmt::layer()
                    .with_target(true)
                    .with_timer(fmt::time::UtcTime::rfc_3339())
                    .json()
                    .with_writer(file_writer)
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

    debug!(service = %service_name, format = ?config.format, "tracing initialised");
    Ok(())
}
