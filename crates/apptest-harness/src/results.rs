//! ---
//! apptest_section: "02-harness"
//! apptest_subsection: "module"
//! apptest_type: "source"
//! apptest_scope: "code"
//! apptest_description: "Partitioning of application results into report buckets."
//! apptest_version: "v0.1.0"
//! apptest_owner: "tbd"
//! ---
use crate::application::{Application, SimResult};

/// True when any entry of `patterns` is a substring of `name`.
pub fn in_list(name: &str, patterns: &[String]) -> bool {
    patterns.iter().any(|pattern| name.contains(pattern.as_str()))
}

/// Applications grouped by outcome.
///
/// Every application is in exactly one of `skipped`, `ok` and
/// `compile_failed`. Applications that compiled but failed or timed out on
/// some simulator are in `sim_failed` and/or `sim_timed_out` instead of `ok`.
#[derive(Debug, Default)]
pub struct ResultBuckets<'a> {
    pub total: usize,
    pub skipped: Vec<&'a Application>,
    pub ok: Vec<&'a Application>,
    pub compile_failed: Vec<&'a Application>,
    pub sim_failed: Vec<&'a Application>,
    pub sim_timed_out: Vec<&'a Application>,
}

impl<'a> ResultBuckets<'a> {
    /// Timeouts alone do not count as failures.
    pub fn has_failures(&self) -> bool {
        !self.compile_failed.is_empty() || !self.sim_failed.is_empty()
    }

    pub fn counts(&self) -> ResultCounts {
        ResultCounts {
            total: self.total,
            skipped: self.skipped.len(),
            ok: self.ok.len(),
            compile_failed: self.compile_failed.len(),
            sim_failed: self.sim_failed.len(),
            sim_timed_out: self.sim_timed_out.len(),
        }
    }
}

/// Bucket sizes detached from the application list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultCounts {
    pub total: usize,
    pub skipped: usize,
    pub ok: usize,
    pub compile_failed: usize,
    pub sim_failed: usize,
    pub sim_timed_out: usize,
}

impl ResultCounts {
    pub fn has_failures(&self) -> bool {
        self.compile_failed > 0 || self.sim_failed > 0
    }

    /// Process exit code for the run.
    pub fn exit_code(&self) -> u8 {
        u8::from(self.has_failures())
    }
}

/// Partition `apps` using `blacklist` (substring patterns).
pub fn filter_results<'a>(apps: &'a [Application], blacklist: &[String]) -> ResultBuckets<'a> {
    let mut buckets = ResultBuckets {
        total: apps.len(),
        ..ResultBuckets::default()
    };

    for app in apps {
        if in_list(&app.name, blacklist) {
            buckets.skipped.push(app);
        } else if !app.compilation_succeeded() {
            buckets.compile_failed.push(app);
        } else {
            let failed = app.simulators_with(SimResult::Failed).next().is_some();
            let timed_out = app.simulators_with(SimResult::TimedOut).next().is_some();
            if failed {
                buckets.sim_failed.push(app);
            }
            if timed_out {
                buckets.sim_timed_out.push(app);
            }
            if !failed && !timed_out {
                buckets.ok.push(app);
            }
        }
    }
    buckets
}
