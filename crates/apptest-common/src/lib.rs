//! ---
//! apptest_section: "01-core-functionality"
//! apptest_subsection: "module"
//! apptest_type: "source"
//! apptest_scope: "code"
//! apptest_description: "Shared configuration and tracing primitives."
//! apptest_version: "v0.1.0"
//! apptest_owner: "tbd"
//! ---
//! Shared primitives for the apptest workspace.
//! This crate exposes configuration loading and tracing initialisation
//! consumed by the harness library and the command-line driver.

pub mod config;
pub mod logging;

pub use config::{HarnessConfig, LoadedHarnessConfig, LoggingConfig, DEFAULT_CONFIG_FILE};
pub use logging::{init_tracing, LogFormat};
