//! ---
//! apptest_section: "02-harness"
//! apptest_subsection: "module"
//! apptest_type: "source"
//! apptest_scope: "code"
//! apptest_description: "External process execution with explicit environment and timeouts."
//! apptest_version: "v0.1.0"
//! apptest_owner: "tbd"
//! ---
//! Every build or simulator invocation is described by a [`ProcessSpec`]
//! and executed through a [`CommandRunner`]. Environment entries travel with
//! the spec, so the harness never mutates its own environment.

use std::cell::RefCell;
use std::fmt;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use thiserror::Error;
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

/// A fully described external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessSpec {
    pub program: String,
    pub args: Vec<String>,
    /// Extra environment entries applied to the child only.
    pub env: Vec<(String, String)>,
    pub current_dir: Option<PathBuf>,
    pub timeout: Option<Duration>,
}

impl ProcessSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            env: Vec::new(),
            current_dir: None,
            timeout: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    pub fn current_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.current_dir = dir;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Program and arguments joined by spaces, without environment entries.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for ProcessSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.env {
            write!(f, "{}={} ", key, value)?;
        }
        f.write_str(&self.command_line())
    }
}

/// Captured result of a finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code, `None` when terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn exited(code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("`{command}` did not finish within {}s", .limit.as_secs())]
    TimedOut { command: String, limit: Duration },
}

/// Executes process specs. Implementations block until the process ends or
/// its timeout expires.
pub trait CommandRunner {
    fn run(&self, spec: &ProcessSpec) -> Result<ProcessOutput, ProcessError>;
}

/// Runs commands on the host through a current-thread tokio runtime.
#[derive(Debug)]
pub struct SystemRunner {
    runtime: Runtime,
}

impl SystemRunner {
    pub fn new() -> std::io::Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self { runtime })
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, spec: &ProcessSpec) -> Result<ProcessOutput, ProcessError> {
        debug!(command = %spec, timeout = ?spec.timeout, "spawning process");
        self.runtime.block_on(run_spec(spec))
    }
}

async fn run_spec(spec: &ProcessSpec) -> Result<ProcessOutput, ProcessError> {
    let mut command = tokio::process::Command::new(&spec.program);
    command
        .args(&spec.args)
        .envs(spec.env.iter().map(|(key, value)| (key.as_str(), value.as_str())))
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    if let Some(dir) = &spec.current_dir {
        command.current_dir(dir);
    }
    // The child leads its own process group so a timeout reaches everything
    // it forked, not just the build tool.
    #[cfg(unix)]
    command.process_group(0);

    let spawn_error = |source| ProcessError::Spawn {
        command: spec.command_line(),
        source,
    };
    let child = command.spawn().map_err(spawn_error)?;
    let group = child.id();
    let pending = child.wait_with_output();
    let finished = match spec.timeout {
        Some(limit) => match tokio::time::timeout(limit, pending).await {
            Ok(finished) => finished,
            Err(_) => {
                terminate_group(group);
                return Err(ProcessError::TimedOut {
                    command: spec.command_line(),
                    limit,
                });
            }
        },
        None => pending.await,
    };
    let output = finished.map_err(spawn_error)?;

    Ok(ProcessOutput {
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

#[cfg(unix)]
fn terminate_group(group: Option<u32>) {
    let Some(pgid) = group.and_then(|id| libc::pid_t::try_from(id).ok()) else {
        return;
    };
    // SAFETY: killpg only sends a signal to the group created for this child.
    if unsafe { libc::killpg(pgid, libc::SIGKILL) } != 0 {
        debug!(pgid, error = %std::io::Error::last_os_error(), "process group already gone");
    }
}

#[cfg(not(unix))]
fn terminate_group(_group: Option<u32>) {}

/// In-memory runner answering every spec with a closure and recording the
/// specs it was asked to run.
pub struct ScriptedRunner<F> {
    respond: F,
    calls: RefCell<Vec<ProcessSpec>>,
}

impl<F> ScriptedRunner<F>
where
    F: Fn(&ProcessSpec) -> Result<ProcessOutput, ProcessError>,
{
    pub fn new(respond: F) -> Self {
        Self {
            respond,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Specs received so far, in call order.
    pub fn calls(&self) -> Vec<ProcessSpec> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl<F> CommandRunner for ScriptedRunner<F>
where
    F: Fn(&ProcessSpec) -> Result<ProcessOutput, ProcessError>,
{
    fn run(&self, spec: &ProcessSpec) -> Result<ProcessOutput, ProcessError> {
        self.calls.borrow_mut().push(spec.clone());
        (self.respond)(spec)
    }
}

impl<F> fmt::Debug for ScriptedRunner<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptedRunner")
            .field("calls", &self.calls.borrow().len())
            .finish()
    }
}
