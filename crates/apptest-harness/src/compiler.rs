//! ---
//! apptest_section: "02-harness"
//! apptest_subsection: "module"
//! apptest_type: "source"
//! apptest_scope: "code"
//! apptest_description: "Compiler driver building one application with one toolchain."
//! apptest_version: "v0.1.0"
//! apptest_owner: "tbd"
//! ---
use apptest_logging::{at_error, log_step_event, LogContext, StepOutcome};

use crate::application::CompileStatus;
use crate::process::{CommandRunner, ProcessSpec};
use crate::settings::BuildSettings;
use crate::toolchain::Toolchain;

/// One `make app` invocation.
#[derive(Debug, Clone, Copy)]
pub struct CompileRequest<'a> {
    pub app: &'a str,
    pub toolchain: &'a Toolchain,
    pub linker: &'a str,
    pub extra_args: &'a [String],
}

/// What happened when an application was compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileOutcome {
    /// Nothing was executed; `command` is what would have run.
    DryRun { command: String },
    Succeeded,
    /// The build tool exited non-zero or could not be started.
    Failed { diagnostics: String },
}

impl CompileOutcome {
    pub fn status(&self) -> CompileStatus {
        match self {
            CompileOutcome::DryRun { .. } | CompileOutcome::Succeeded => CompileStatus::Succeeded,
            CompileOutcome::Failed { .. } => CompileStatus::Failed,
        }
    }

    pub fn succeeded(&self) -> bool {
        self.status() == CompileStatus::Succeeded
    }
}

/// Build the `make app PROJECT=<name> ...` spec for `request`.
pub fn compile_spec(settings: &BuildSettings, request: &CompileRequest<'_>) -> ProcessSpec {
    let toolchain = request.toolchain;
    let mut spec = settings
        .build_command()
        .arg("app")
        .arg(format!("PROJECT={}", request.app));
    if let Some(path) = toolchain.path.as_deref() {
        spec = spec.env(&settings.toolchain_env, path);
    }
    if !toolchain.prefix.is_empty() {
        spec = spec.arg(format!("COMPILER_PREFIX={}", toolchain.prefix));
    }
    if !toolchain.compiler.is_empty() {
        spec = spec.arg(format!("COMPILER={}", toolchain.compiler));
    }
    if !request.linker.is_empty() {
        spec = spec.arg(format!("LINKER={}", request.linker));
    }
    spec.args(request.extra_args.iter().filter(|arg| !arg.is_empty()).cloned())
}

/// Compile one application. Blocks until the build tool exits; no timeout.
pub fn compile<R>(runner: &R, settings: &BuildSettings, request: &CompileRequest<'_>) -> CompileOutcome
where
    R: CommandRunner + ?Sized,
{
    let spec = compile_spec(settings, request);
    let ctx = LogContext::new()
        .with_app(request.app)
        .with_compiler(&request.toolchain.compiler);

    if settings.dry_run {
        return CompileOutcome::DryRun {
            command: spec.to_string(),
        };
    }

    let outcome = match runner.run(&spec) {
        Ok(output) if output.success() => CompileOutcome::Succeeded,
        Ok(output) => CompileOutcome::Failed {
            diagnostics: output.stderr,
        },
        Err(err) => {
            at_error!(context = ctx, "unable to start the build tool: {}", err);
            CompileOutcome::Failed {
                diagnostics: err.to_string(),
            }
        }
    };

    match &outcome {
        CompileOutcome::Failed { .. } => log_step_event(
            Some(&ctx),
            "compile",
            &format!("`{}` failed", spec.command_line()),
            StepOutcome::Failure,
        ),
        _ => log_step_event(Some(&ctx), "compile", "compiled", StepOutcome::Success),
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::{ProcessError, ProcessOutput, ScriptedRunner};

    fn gcc() -> Toolchain {
        Toolchain {
            compiler: "gcc".to_owned(),
            path: Some("/opt/riscv".to_owned()),
            prefix: "riscv32-unknown-".to_owned(),
        }
    }

    fn request<'a>(toolchain: &'a Toolchain, extra: &'a [String]) -> CompileRequest<'a> {
        CompileRequest {
            app: "hello_world",
            toolchain,
            linker: "on_chip",
            extra_args: extra,
        }
    }

    #[test]
    fn spec_carries_all_make_variables() {
        let toolchain = gcc();
        let extra = vec!["ARCH=rv32imc".to_owned()];
        let spec = compile_spec(&BuildSettings::default(), &request(&toolchain, &extra));
        assert_eq!(
            spec.command_line(),
            "make app PROJECT=hello_world COMPILER_PREFIX=riscv32-unknown- COMPILER=gcc LINKER=on_chip ARCH=rv32imc"
        );
        assert_eq!(
            spec.env,
            vec![("RISCV_XHEEP".to_owned(), "/opt/riscv".to_owned())]
        );
    }

    #[test]
    fn empty_parts_are_omitted() {
        let toolchain = Toolchain {
            compiler: "clang".to_owned(),
            path: None,
            prefix: String::new(),
        };
        let req = CompileRequest {
            linker: "",
            ..request(&toolchain, &[])
        };
        let spec = compile_spec(&BuildSettings::default(), &req);
        assert_eq!(spec.to_string(), "make app PROJECT=hello_world COMPILER=clang");
    }

    #[test]
    fn dry_run_never_invokes_runner() {
        let runner = ScriptedRunner::new(|_: &ProcessSpec| -> Result<ProcessOutput, ProcessError> {
            panic!("dry run must not execute")
        });
        let settings = BuildSettings {
            dry_run: true,
            ..BuildSettings::default()
        };
        let toolchain = gcc();
        let outcome = compile(&runner, &settings, &request(&toolchain, &[]));
        assert!(outcome.succeeded());
        match outcome {
            CompileOutcome::DryRun { command } => {
                assert!(command.starts_with("RISCV_XHEEP=/opt/riscv make app PROJECT=hello_world"))
            }
            other => panic!("unexpected outcome {other:?}"),
        }
        assert_eq!(runner.call_count(), 0);
    }

    #[test]
    fn nonzero_exit_is_failure_with_stderr() {
        let runner = ScriptedRunner::new(|_: &ProcessSpec| {
            Ok(ProcessOutput::exited(2, "", "undefined reference to `main'"))
        });
        let toolchain = gcc();
        let outcome = compile(&runner, &BuildSettings::default(), &request(&toolchain, &[]));
        assert_eq!(outcome.status(), CompileStatus::Failed);
        assert_eq!(
            outcome,
            CompileOutcome::Failed {
                diagnostics: "undefined reference to `main'".to_owned()
            }
        );
    }

    #[test]
    fn zero_exit_is_success_even_with_stderr_noise() {
        let runner =
            ScriptedRunner::new(|_: &ProcessSpec| Ok(ProcessOutput::exited(0, "", "warning: unused")));
        let toolchain = gcc();
        let outcome = compile(&runner, &BuildSettings::default(), &request(&toolchain, &[]));
        assert_eq!(outcome, CompileOutcome::Succeeded);
    }

    #[test]
    fn spawn_error_is_failure() {
        let runner = ScriptedRunner::new(|spec: &ProcessSpec| {
            Err(ProcessError::Spawn {
                command: spec.command_line(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
            })
        });
        let toolchain = gcc();
        let outcome = compile(&runner, &BuildSettings::default(), &request(&toolchain, &[]));
        assert!(!outcome.succeeded());
    }
}
