//! ---
//! apptest_section: "02-harness"
//! apptest_subsection: "module"
//! apptest_type: "source"
//! apptest_scope: "code"
//! apptest_description: "Run orchestration across applications, toolchains and simulators."
//! apptest_version: "v0.1.0"
//! apptest_owner: "tbd"
//! ---
use std::time::Duration;

use apptest_common::HarnessConfig;
use apptest_logging::{at_info, log_step_event, LogContext, StepOutcome};

use crate::application::{Application, CompileStatus, SimResult};
use crate::compiler::{compile, CompileRequest};
use crate::error::Result;
use crate::process::CommandRunner;
use crate::report::{Reporter, RunPlan};
use crate::results::{filter_results, in_list, ResultCounts};
use crate::settings::BuildSettings;
use crate::simulator::{Simulator, DEFAULT_SIMULATION_TIMEOUT};
use crate::toolchain::Toolchain;

/// Switches that change what a run does, independent of configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    pub compile_only: bool,
    pub simulation_timeout: Duration,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            compile_only: false,
            simulation_timeout: DEFAULT_SIMULATION_TIMEOUT,
        }
    }
}

/// Drives every application through compilation and simulation, strictly
/// in order, and reports as it goes.
pub struct Harness<'a> {
    runner: &'a dyn CommandRunner,
    config: &'a HarnessConfig,
    settings: BuildSettings,
    toolchains: Vec<Toolchain>,
    simulators: Vec<Simulator>,
    options: RunOptions,
}

impl<'a> Harness<'a> {
    pub fn new(
        runner: &'a dyn CommandRunner,
        config: &'a HarnessConfig,
        settings: BuildSettings,
        toolchains: Vec<Toolchain>,
        simulators: Vec<Simulator>,
        options: RunOptions,
    ) -> Self {
        Self {
            runner,
            config,
            settings,
            toolchains,
            simulators,
            options,
        }
    }

    /// Test every application in `apps`, filling in their records.
    ///
    /// Only a failed model build aborts the run; compile and simulation
    /// failures are recorded and summarised.
    pub fn run(&self, apps: &mut [Application], reporter: &mut dyn Reporter) -> Result<ResultCounts> {
        let blacklist = self.config.effective_blacklist();
        reporter.run_started(&RunPlan {
            apps: &*apps,
            blacklist,
            toolchains: &self.toolchains,
            simulators: &self.simulators,
            compile_only: self.options.compile_only,
            dry_run: self.settings.dry_run,
        })?;
        at_info!(
            "testing {} applications with {} toolchains",
            apps.len(),
            self.toolchains.len()
        );

        if !self.options.compile_only {
            for simulator in &self.simulators {
                reporter.model_build_started(simulator.name())?;
                let outcome = simulator.build(self.runner, &self.settings)?;
                reporter.model_build_finished(simulator.name(), &outcome)?;
            }
        }

        for app in apps.iter_mut() {
            if in_list(&app.name, blacklist) {
                reporter.app_skipped(&app.name)?;
                continue;
            }
            self.compile_all(app, reporter)?;
            if !self.options.compile_only && app.compilation_succeeded() {
                self.simulate_all(app, reporter)?;
            }
            reporter.app_finished(app)?;
        }

        let buckets = filter_results(apps, blacklist);
        reporter.run_finished(&buckets)?;
        let counts = buckets.counts();
        at_info!(
            "run finished: {} ok, {} compile failures, {} simulation failures, {} timeouts",
            counts.ok,
            counts.compile_failed,
            counts.sim_failed,
            counts.sim_timed_out
        );
        Ok(counts)
    }

    fn compile_all(&self, app: &mut Application, reporter: &mut dyn Reporter) -> Result<()> {
        let linker = self.config.linker.as_str();
        for toolchain in &self.toolchains {
            if in_list(&app.name, self.config.compiler_exclusions(&toolchain.compiler)) {
                let ctx = LogContext::new()
                    .with_app(&app.name)
                    .with_compiler(&toolchain.compiler);
                log_step_event(Some(&ctx), "compile", "excluded", StepOutcome::Skipped);
                reporter.compile_skipped(&app.name, &toolchain.compiler)?;
                app.set_compilation_status(toolchain.compiler.as_str(), CompileStatus::Skipped);
                continue;
            }

            reporter.compile_started(&app.name, toolchain, linker)?;
            let request = CompileRequest {
                app: &app.name,
                toolchain,
                linker,
                extra_args: &self.config.extra_make_args,
            };
            let outcome = compile(self.runner, &self.settings, &request);
            reporter.compile_finished(&app.name, toolchain, linker, &outcome)?;
            app.set_compilation_status(toolchain.compiler.as_str(), outcome.status());
        }
        Ok(())
    }

    fn simulate_all(&self, app: &mut Application, reporter: &mut dyn Reporter) -> Result<()> {
        for simulator in &self.simulators {
            if in_list(&app.name, self.config.simulator_exclusions(simulator.name())) {
                let ctx = LogContext::new()
                    .with_app(&app.name)
                    .with_simulator(simulator.name());
                log_step_event(Some(&ctx), "sim.run", "excluded", StepOutcome::Skipped);
                reporter.simulation_skipped(&app.name, simulator.name())?;
                app.add_simulation_result(simulator.name(), SimResult::Skipped);
                continue;
            }

            reporter.simulation_started(&app.name, simulator.name())?;
            let outcome = simulator.run_app(
                self.runner,
                &self.settings,
                &app.name,
                self.options.simulation_timeout,
            );
            reporter.simulation_finished(&app.name, simulator.name(), &outcome)?;
            app.add_simulation_result(simulator.name(), outcome.result());
        }
        let ctx = LogContext::new().with_app(&app.name);
        at_info!(context = ctx, "simulations finished");
        Ok(())
    }
}
