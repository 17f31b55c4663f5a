//! ---
//! apptest_section: "02-harness"
//! apptest_subsection: "module"
//! apptest_type: "source"
//! apptest_scope: "code"
//! apptest_description: "Compile-and-simulate test harness for firmware applications."
//! apptest_version: "v0.1.0"
//! apptest_owner: "tbd"
//! ---
//! Builds every application under test with each requested toolchain, runs
//! the result on each simulator and classifies the outcome from the
//! simulator's console output.

pub mod application;
pub mod compiler;
pub mod discovery;
pub mod error;
pub mod harness;
pub mod process;
pub mod report;
pub mod results;
pub mod settings;
pub mod simulator;
pub mod toolchain;

pub use application::{Application, CompileStatus, SimResult};
pub use compiler::{compile, CompileOutcome, CompileRequest};
pub use discovery::discover_applications;
pub use error::{HarnessError, Result};
pub use harness::{Harness, RunOptions};
pub use process::{CommandRunner, ProcessError, ProcessOutput, ProcessSpec, ScriptedRunner, SystemRunner};
pub use report::{reporter_for, Palette, ReportMode, Reporter, RunPlan, StreamReporter, TableReporter};
pub use results::{filter_results, in_list, ResultBuckets, ResultCounts};
pub use settings::BuildSettings;
pub use simulator::{BuildOutcome, RunOutcome, Simulator, DEFAULT_SIMULATION_TIMEOUT};
pub use toolchain::{resolve_toolchains, Toolchain, ToolchainOverrides};
