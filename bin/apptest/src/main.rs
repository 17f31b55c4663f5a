//! ---
//! apptest_section: "04-command-line"
//! apptest_subsection: "binary"
//! apptest_type: "source"
//! apptest_scope: "code"
//! apptest_description: "Command-line entrypoint compiling and simulating every application."
//! apptest_version: "v0.1.0"
//! apptest_owner: "tbd"
//! ---
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use apptest_common::{init_tracing, HarnessConfig, LogFormat};
use apptest_harness::{
    discover_applications, reporter_for, resolve_toolchains, BuildSettings, Harness, Palette,
    ReportMode, RunOptions, Simulator, SystemRunner, ToolchainOverrides,
};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Compile every application with each toolchain and run it on the simulators",
    long_about = None
)]
struct Cli {
    #[arg(long, help = "Only compile the applications, skip model generation and simulation")]
    compile_only: bool,

    #[arg(long, help = "Print the commands that would run without executing anything")]
    dry_run: bool,

    #[arg(long, help = "Report results as a table instead of a running log")]
    table: bool,

    #[arg(
        long,
        value_name = "LIST",
        help = "Comma-separated compilers to test, replacing the configured list"
    )]
    compilers: Option<String>,

    #[arg(
        long,
        value_name = "LIST",
        help = "Toolchain root shared by every compiler, or one comma-separated entry per compiler"
    )]
    compiler_paths: Option<String>,

    #[arg(
        long,
        value_name = "LIST",
        help = "Compiler prefix shared by every compiler, or one comma-separated entry per compiler"
    )]
    compiler_prefixes: Option<String>,

    #[arg(long, value_name = "FILE", env = "APPTEST_CONFIG", help = "Path to configuration file")]
    config: Option<PathBuf>,

    #[arg(
        long,
        value_name = "SECS",
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Wall-clock limit for each simulation"
    )]
    timeout: Option<u64>,

    #[arg(
        long,
        value_name = "DIR",
        help = "Project root holding the build files and the applications directory"
    )]
    project_root: Option<PathBuf>,

    #[arg(long, value_enum, help = "Override the log output format")]
    log_format: Option<CliLogFormat>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLogFormat {
    Pretty,
    Compact,
    Json,
}

impl From<CliLogFormat> for LogFormat {
    fn from(value: CliLogFormat) -> Self {
        match value {
            CliLogFormat::Pretty => LogFormat::Pretty,
            CliLogFormat::Compact => LogFormat::Compact,
            CliLogFormat::Json => LogFormat::StructuredJson,
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let project_root = match &cli.project_root {
        Some(root) => root.clone(),
        None => std::env::current_dir().context("unable to determine the working directory")?,
    };
    let loaded = HarnessConfig::load_with_source(cli.config.as_deref(), &project_root)?;
    let mut config = loaded.config;
    if let Some(format) = cli.log_format {
        config.logging.format = format.into();
    }
    if let Some(secs) = cli.timeout {
        config.simulation_timeout = Duration::from_secs(secs);
    }
    init_tracing("apptest", &config.logging)?;
    match &loaded.source {
        Some(path) => debug!(config = %path.display(), "configuration loaded"),
        None => debug!("running with built-in configuration"),
    }

    // Malformed overrides must fail before anything is built.
    let overrides = ToolchainOverrides {
        compilers: cli.compilers.as_deref(),
        paths: cli.compiler_paths.as_deref(),
        prefixes: cli.compiler_prefixes.as_deref(),
    };
    let ambient_path = std::env::var(&config.toolchain_env).ok();
    let toolchains = resolve_toolchains(&config, ambient_path, &overrides)?;
    let simulators = Simulator::all_from_config(&config)?;

    let applications_dir = project_root.join(&config.applications_dir);
    let mut apps = discover_applications(&applications_dir, &config.whitelist)?;
    info!(
        count = apps.len(),
        dir = %applications_dir.display(),
        "discovered applications"
    );

    let runner = SystemRunner::new().context("unable to start the process runtime")?;
    let settings = BuildSettings::from_config(&config, Some(project_root), cli.dry_run);
    let options = RunOptions {
        compile_only: cli.compile_only,
        simulation_timeout: config.simulation_timeout,
    };
    let mode = if cli.table {
        ReportMode::Table
    } else {
        ReportMode::Stream
    };
    let mut reporter = reporter_for(mode, std::io::stdout(), Palette::detect());

    let harness = Harness::new(&runner, &config, settings, toolchains, simulators, options);
    let counts = harness.run(&mut apps, reporter.as_mut())?;
    Ok(ExitCode::from(counts.exit_code()))
}
