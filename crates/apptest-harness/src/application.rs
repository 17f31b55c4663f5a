//! ---
//! apptest_section: "02-harness"
//! apptest_subsection: "module"
//! apptest_type: "source"
//! apptest_scope: "code"
//! apptest_description: "Per-application compile and simulation records."
//! apptest_version: "v0.1.0"
//! apptest_owner: "tbd"
//! ---
use std::fmt;

use indexmap::IndexMap;

/// Result of building an application with one compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompileStatus {
    Succeeded,
    Failed,
    /// The compiler was excluded for this application and never invoked.
    Skipped,
}

impl From<bool> for CompileStatus {
    fn from(success: bool) -> Self {
        if success {
            CompileStatus::Succeeded
        } else {
            CompileStatus::Failed
        }
    }
}

/// Result of running an application on one simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimResult {
    Passed,
    Failed,
    TimedOut,
    Skipped,
}

impl SimResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            SimResult::Passed => "Passed",
            SimResult::Failed => "Failed",
            SimResult::TimedOut => "Timed out",
            SimResult::Skipped => "Skipped",
        }
    }
}

impl fmt::Display for SimResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An application under test together with everything recorded about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    pub name: String,
    compilation_success: IndexMap<String, CompileStatus>,
    simulation_results: IndexMap<String, SimResult>,
}

impl Application {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            compilation_success: IndexMap::new(),
            simulation_results: IndexMap::new(),
        }
    }

    /// Record the build outcome for `compiler`, replacing any earlier entry.
    pub fn set_compilation_status(&mut self, compiler: impl Into<String>, status: CompileStatus) {
        self.compilation_success.insert(compiler.into(), status);
    }

    /// Record the run outcome for `simulator`, replacing any earlier entry.
    pub fn add_simulation_result(&mut self, simulator: impl Into<String>, result: SimResult) {
        self.simulation_results.insert(simulator.into(), result);
    }

    /// True when every recorded build succeeded. A skipped compiler counts
    /// as not succeeded; no entries at all counts as succeeded.
    pub fn compilation_succeeded(&self) -> bool {
        self.compilation_success
            .values()
            .all(|status| *status == CompileStatus::Succeeded)
    }

    pub fn compilation_status(&self, compiler: &str) -> Option<CompileStatus> {
        self.compilation_success.get(compiler).copied()
    }

    pub fn simulation_result(&self, simulator: &str) -> Option<SimResult> {
        self.simulation_results.get(simulator).copied()
    }

    pub fn compilation_statuses(&self) -> impl Iterator<Item = (&str, CompileStatus)> {
        self.compilation_success
            .iter()
            .map(|(compiler, status)| (compiler.as_str(), *status))
    }

    pub fn simulation_results(&self) -> impl Iterator<Item = (&str, SimResult)> {
        self.simulation_results
            .iter()
            .map(|(simulator, result)| (simulator.as_str(), *result))
    }

    /// Simulators, in recording order, that produced `result`.
    pub fn simulators_with(&self, result: SimResult) -> impl Iterator<Item = &str> {
        self.simulation_results()
            .filter(move |(_, recorded)| *recorded == result)
            .map(|(simulator, _)| simulator)
    }
}
