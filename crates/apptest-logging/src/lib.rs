//! ---
//! apptest_section: "03-logging"
//! apptest_subsection: "module"
//! apptest_type: "source"
//! apptest_scope: "code"
//! apptest_description: "Structured logging context and step events for harness runs."
//! apptest_version: "v0.1.0"
//! apptest_owner: "tbd"
//! ---
#![warn(missing_docs)]
//! Structured logging helpers shared by the harness drivers.

use tracing::Level;
use tracing_subscriber::{fmt as subscriber_fmt, prelude::*, EnvFilter, Registry};

pub mod macros;

/// Initialize a baseline tracing subscriber suitable for tests and tooling.
pub fn init() {
    let _ = Registry::default()
        .with(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(subscriber_fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Identifies which application, compiler and simulator a log event belongs to.
#[derive(Debug, Default, Clone)]
pub struct LogContext<'a> {
    /// Application under test.
    pub app: Option<&'a str>,
    /// Compiler identifier for build steps.
    pub compiler: Option<&'a str>,
    /// Simulator identifier for model builds and runs.
    pub simulator: Option<&'a str>,
}

impl<'a> LogContext<'a> {
    /// Create an empty logging context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an application name.
    pub fn with_app(mut self, app: &'a str) -> Self {
        self.app = Some(app);
        self
    }

    /// Attach a compiler identifier.
    pub fn with_compiler(mut self, compiler: &'a str) -> Self {
        self.compiler = Some(compiler);
        self
    }

    /// Attach a simulator identifier.
    pub fn with_simulator(mut self, simulator: &'a str) -> Self {
        self.simulator = Some(simulator);
        self
    }
}

/// Outcome attached to a step event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The step completed successfully.
    Success,
    /// The step ran and failed.
    Failure,
    /// The step exceeded its time budget.
    TimedOut,
    /// The step was not attempted.
    Skipped,
}

impl StepOutcome {
    /// Stable lowercase label used as the `outcome` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            StepOutcome::Success => "success",
            StepOutcome::Failure => "failure",
            StepOutcome::TimedOut => "timed-out",
            StepOutcome::Skipped => "skipped",
        }
    }
}

/// Emit a standardized event for a compile, model build or simulation step.
pub fn log_step_event(
    context: Option<&LogContext>,
    event: &str,
    message: &str,
    outcome: StepOutcome,
) {
    let ctx = context.cloned().unwrap_or_default();
    let app = ctx.app.unwrap_or("");
    let compiler = ctx.compiler.unwrap_or("");
    let simulator = ctx.simulator.unwrap_or("");
    let outcome_label = outcome.as_str();
    match outcome {
        StepOutcome::Failure => {
            tracing::error!(event, outcome = outcome_label, app, compiler, simulator, message = %message)
        }
        StepOutcome::TimedOut => {
            tracing::warn!(event, outcome = outcome_label, app, compiler, simulator, message = %message)
        }
        StepOutcome::Success | StepOutcome::Skipped => {
            tracing::info!(event, outcome = outcome_label, app, compiler, simulator, message = %message)
        }
    }
}
