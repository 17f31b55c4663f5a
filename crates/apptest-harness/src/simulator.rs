//! ---
//! apptest_section: "02-harness"
//! apptest_subsection: "module"
//! apptest_type: "source"
//! apptest_scope: "code"
//! apptest_description: "Simulator driver: model generation and application runs."
//! apptest_version: "v0.1.0"
//! apptest_owner: "tbd"
//! ---
use std::time::Duration;

use apptest_common::HarnessConfig;
use apptest_logging::{at_debug, log_step_event, LogContext, StepOutcome};
use regex::Regex;

use crate::application::SimResult;
use crate::error::{HarnessError, Result};
use crate::process::{CommandRunner, ProcessError, ProcessSpec};
use crate::settings::BuildSettings;

/// Default wall-clock budget for a single simulation.
pub const DEFAULT_SIMULATION_TIMEOUT: Duration = Duration::from_secs(180);

/// A simulator reachable through `<build-tool> <name>-build` and
/// `<build-tool> <name>-run`.
#[derive(Debug, Clone)]
pub struct Simulator {
    name: String,
    /// Group 1 captures the program's return value.
    error_pattern: Regex,
}

/// Result of generating a simulator model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    DryRun { command: String },
    Built,
}

/// What happened when an application ran on a simulator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    DryRun { command: String },
    Passed,
    /// `output` is the captured stdout, or the spawn error.
    Failed { output: String },
    TimedOut,
}

impl RunOutcome {
    pub fn result(&self) -> SimResult {
        match self {
            RunOutcome::DryRun { .. } | RunOutcome::Passed => SimResult::Passed,
            RunOutcome::Failed { .. } => SimResult::Failed,
            RunOutcome::TimedOut => SimResult::TimedOut,
        }
    }
}

impl Simulator {
    pub fn new(name: impl Into<String>, error_pattern: &str) -> Result<Self> {
        let name = name.into();
        let error_pattern =
            Regex::new(error_pattern).map_err(|err| HarnessError::InvalidErrorPattern {
                simulator: name.clone(),
                reason: err.to_string(),
            })?;
        if error_pattern.captures_len() < 2 {
            return Err(HarnessError::InvalidErrorPattern {
                simulator: name,
                reason: "pattern needs a capture group for the return value".to_owned(),
            });
        }
        Ok(Self {
            name,
            error_pattern,
        })
    }

    /// Build every simulator listed in `config`, failing on the first one
    /// without an error pattern.
    pub fn all_from_config(config: &HarnessConfig) -> Result<Vec<Self>> {
        config
            .simulators
            .iter()
            .map(|name| {
                let pattern = config
                    .error_pattern(name)
                    .ok_or_else(|| HarnessError::MissingErrorPattern(name.clone()))?;
                Self::new(name.as_str(), pattern)
            })
            .collect()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn build_spec(&self, settings: &BuildSettings) -> ProcessSpec {
        settings.build_command().arg(format!("{}-build", self.name))
    }

    pub fn run_spec(&self, settings: &BuildSettings, timeout: Duration) -> ProcessSpec {
        settings
            .build_command()
            .arg(format!("{}-run", self.name))
            .timeout(timeout)
    }

    /// Generate the simulator model. Any failure is fatal for the run.
    pub fn build<R>(&self, runner: &R, settings: &BuildSettings) -> Result<BuildOutcome>
    where
        R: CommandRunner + ?Sized,
    {
        let spec = self.build_spec(settings);
        if settings.dry_run {
            return Ok(BuildOutcome::DryRun {
                command: spec.to_string(),
            });
        }

        let ctx = LogContext::new().with_simulator(&self.name);
        let details = match runner.run(&spec) {
            Ok(output) if output.success() => {
                log_step_event(Some(&ctx), "model.build", "model generated", StepOutcome::Success);
                return Ok(BuildOutcome::Built);
            }
            Ok(output) => output.stderr,
            Err(err) => err.to_string(),
        };
        log_step_event(
            Some(&ctx),
            "model.build",
            "model generation failed",
            StepOutcome::Failure,
        );
        Err(HarnessError::ModelBuild {
            simulator: self.name.clone(),
            details,
        })
    }

    /// Run the most recently compiled `app` on this simulator.
    ///
    /// Pass/fail comes only from `error_pattern` matched against stdout; the
    /// process exit status is not consulted.
    pub fn run_app<R>(
        &self,
        runner: &R,
        settings: &BuildSettings,
        app: &str,
        timeout: Duration,
    ) -> RunOutcome
    where
        R: CommandRunner + ?Sized,
    {
        let spec = self.run_spec(settings, timeout);
        if settings.dry_run {
            return RunOutcome::DryRun {
                command: spec.to_string(),
            };
        }

        let ctx = LogContext::new().with_app(app).with_simulator(&self.name);
        let outcome = match runner.run(&spec) {
            Ok(output) => {
                at_debug!(context = ctx, "simulator exited with {:?}", output.code);
                match self.classify(&output.stdout) {
                    SimResult::Passed => RunOutcome::Passed,
                    _ => RunOutcome::Failed {
                        output: output.stdout,
                    },
                }
            }
            Err(ProcessError::TimedOut { .. }) => RunOutcome::TimedOut,
            Err(err) => RunOutcome::Failed {
                output: err.to_string(),
            },
        };

        let (message, step) = match &outcome {
            RunOutcome::Passed => ("passed", StepOutcome::Success),
            RunOutcome::TimedOut => ("timed out", StepOutcome::TimedOut),
            _ => ("failed", StepOutcome::Failure),
        };
        log_step_event(Some(&ctx), "sim.run", message, step);
        outcome
    }

    /// `Passed` iff the first match of the error pattern captured exactly `0`.
    pub fn classify(&self, stdout: &str) -> SimResult {
        match self
            .error_pattern
            .captures(stdout)
            .and_then(|caps| caps.get(1))
        {
            Some(value) if value.as_str() == "0" => SimResult::Passed,
            _ => SimResult::Failed,
        }
    }
}
