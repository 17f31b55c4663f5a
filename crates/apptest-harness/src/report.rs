//! ---
//! apptest_section: "02-harness"
//! apptest_subsection: "module"
//! apptest_type: "source"
//! apptest_scope: "code"
//! apptest_description: "Console reporting: streaming log and fixed-width table."
//! apptest_version: "v0.1.0"
//! apptest_owner: "tbd"
//! ---
//! Both report modes consume the same events and the same
//! [`ResultBuckets`]; they differ only in rendering. Colour is applied by a
//! [`Palette`] so it can be switched off for pipes and tests.

use std::io::{self, IsTerminal, Write};

use crossterm::style::Stylize;

use crate::application::{Application, CompileStatus, SimResult};
use crate::compiler::CompileOutcome;
use crate::results::ResultBuckets;
use crate::simulator::{BuildOutcome, RunOutcome, Simulator};
use crate::toolchain::Toolchain;

const RULE: &str = "=================================";
const APPLICATION_HEADER: &str = "Application";
const MIN_COLUMN_WIDTH: usize = 10;

/// Semantic colour of a piece of console output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Command,
    Success,
    Warning,
    Failure,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn plain() -> Self {
        Self { enabled: false }
    }

    pub fn colored() -> Self {
        Self { enabled: true }
    }

    /// Colour only when stdout is a terminal and `NO_COLOR` is unset.
    pub fn detect() -> Self {
        Self {
            enabled: io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
        }
    }

    pub fn paint(&self, tone: Tone, text: &str) -> String {
        if !self.enabled {
            return text.to_owned();
        }
        match tone {
            Tone::Info => text.blue().to_string(),
            Tone::Command => text.cyan().to_string(),
            Tone::Success => text.green().to_string(),
            Tone::Warning => text.yellow().to_string(),
            Tone::Failure => text.red().to_string(),
            Tone::Bold => text.bold().to_string(),
        }
    }
}

/// Everything a reporter needs to know before the first application runs.
#[derive(Debug, Clone, Copy)]
pub struct RunPlan<'a> {
    pub apps: &'a [Application],
    pub blacklist: &'a [String],
    pub toolchains: &'a [Toolchain],
    pub simulators: &'a [Simulator],
    pub compile_only: bool,
    pub dry_run: bool,
}

/// Receives harness events in order. Every method defaults to a no-op.
pub trait Reporter {
    fn run_started(&mut self, _plan: &RunPlan<'_>) -> io::Result<()> {
        Ok(())
    }

    fn model_build_started(&mut self, _simulator: &str) -> io::Result<()> {
        Ok(())
    }

    fn model_build_finished(&mut self, _simulator: &str, _outcome: &BuildOutcome) -> io::Result<()> {
        Ok(())
    }

    fn app_skipped(&mut self, _app: &str) -> io::Result<()> {
        Ok(())
    }

    fn compile_started(&mut self, _app: &str, _toolchain: &Toolchain, _linker: &str) -> io::Result<()> {
        Ok(())
    }

    fn compile_skipped(&mut self, _app: &str, _compiler: &str) -> io::Result<()> {
        Ok(())
    }

    fn compile_finished(
        &mut self,
        _app: &str,
        _toolchain: &Toolchain,
        _linker: &str,
        _outcome: &CompileOutcome,
    ) -> io::Result<()> {
        Ok(())
    }

    fn simulation_started(&mut self, _app: &str, _simulator: &str) -> io::Result<()> {
        Ok(())
    }

    fn simulation_skipped(&mut self, _app: &str, _simulator: &str) -> io::Result<()> {
        Ok(())
    }

    fn simulation_finished(&mut self, _app: &str, _simulator: &str, _outcome: &RunOutcome) -> io::Result<()> {
        Ok(())
    }

    fn app_finished(&mut self, _app: &Application) -> io::Result<()> {
        Ok(())
    }

    fn run_finished(&mut self, _buckets: &ResultBuckets<'_>) -> io::Result<()> {
        Ok(())
    }
}

/// Selects between the two console renderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportMode {
    #[default]
    Stream,
    Table,
}

/// Boxed reporter for `mode` writing to `out`.
pub fn reporter_for<W>(mode: ReportMode, out: W, palette: Palette) -> Box<dyn Reporter>
where
    W: Write + 'static,
{
    match mode {
        ReportMode::Stream => Box::new(StreamReporter::new(out, palette)),
        ReportMode::Table => Box::new(TableReporter::new(out, palette)),
    }
}

fn compile_description(app: &str, toolchain: &Toolchain, linker: &str) -> String {
    format!(
        "{} with {} ({}) and linker {}",
        app, toolchain.compiler, toolchain.prefix, linker
    )
}

// Failure diagnostics are printed as they happen in both modes.
fn write_compile_failure<W: Write>(
    out: &mut W,
    palette: Palette,
    description: &str,
    diagnostics: &str,
) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        palette.paint(Tone::Failure, &format!("Error compiling {}.", description))
    )?;
    writeln!(out, "{}", diagnostics)?;
    out.flush()
}

fn write_simulation_problem<W: Write>(
    out: &mut W,
    palette: Palette,
    app: &str,
    simulator: &str,
    outcome: &RunOutcome,
) -> io::Result<()> {
    match outcome {
        RunOutcome::TimedOut => writeln!(
            out,
            "{}",
            palette.paint(
                Tone::Failure,
                &format!("Simulation of {} with {} timed out.", app, simulator)
            )
        )?,
        RunOutcome::Failed { output } => {
            writeln!(
                out,
                "{}",
                palette.paint(
                    Tone::Failure,
                    &format!("Simulation of {} with {} failed.", app, simulator)
                )
            )?;
            writeln!(out, "{}", palette.paint(Tone::Failure, output))?;
        }
        RunOutcome::DryRun { .. } | RunOutcome::Passed => {}
    }
    out.flush()
}

/// Human-readable progress log followed by a results block.
#[derive(Debug)]
pub struct StreamReporter<W> {
    out: W,
    palette: Palette,
}

impl<W: Write> StreamReporter<W> {
    pub fn new(out: W, palette: Palette) -> Self {
        Self { out, palette }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, tone: Tone, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", self.palette.paint(tone, text))?;
        self.out.flush()
    }

    fn dry_run(&mut self, command: &str) -> io::Result<()> {
        self.line(Tone::Command, &format!("[DRY RUN] {}", command))
    }
}

impl<W: Write> Reporter for StreamReporter<W> {
    fn model_build_started(&mut self, simulator: &str) -> io::Result<()> {
        self.line(Tone::Info, &format!("Generating {} model...", simulator))
    }

    fn model_build_finished(&mut self, simulator: &str, outcome: &BuildOutcome) -> io::Result<()> {
        match outcome {
            BuildOutcome::DryRun { command } => self.dry_run(command),
            BuildOutcome::Built => self.line(
                Tone::Success,
                &format!("Generated {} model successfully.", simulator),
            ),
        }
    }

    fn app_skipped(&mut self, app: &str) -> io::Result<()> {
        self.line(Tone::Warning, &format!("Skipping {}...", app))
    }

    fn compile_started(&mut self, app: &str, toolchain: &Toolchain, linker: &str) -> io::Result<()> {
        let description = compile_description(app, toolchain, linker);
        self.line(Tone::Info, &format!("Compiling {}.", description))
    }

    fn compile_skipped(&mut self, app: &str, compiler: &str) -> io::Result<()> {
        self.line(
            Tone::Warning,
            &format!("Skipping compiling {} with {}...", app, compiler),
        )
    }

    fn compile_finished(
        &mut self,
        app: &str,
        toolchain: &Toolchain,
        linker: &str,
        outcome: &CompileOutcome,
    ) -> io::Result<()> {
        let description = compile_description(app, toolchain, linker);
        match outcome {
            CompileOutcome::DryRun { command } => self.dry_run(command),
            CompileOutcome::Succeeded => {
                self.line(Tone::Success, &format!("Compiled {} successfully.", description))
            }
            CompileOutcome::Failed { diagnostics } => {
                write_compile_failure(&mut self.out, self.palette, &description, diagnostics)
            }
        }
    }

    fn simulation_started(&mut self, app: &str, simulator: &str) -> io::Result<()> {
        self.line(Tone::Info, &format!("Running {} with {}...", app, simulator))
    }

    fn simulation_skipped(&mut self, app: &str, simulator: &str) -> io::Result<()> {
        self.line(
            Tone::Warning,
            &format!("Skipping running {} with {}...", app, simulator),
        )
    }

    fn simulation_finished(&mut self, app: &str, simulator: &str, outcome: &RunOutcome) -> io::Result<()> {
        match outcome {
            RunOutcome::DryRun { command } => self.dry_run(command),
            RunOutcome::Passed => self.line(
                Tone::Success,
                &format!("Ran {} with {} successfully.", app, simulator),
            ),
            RunOutcome::Failed { .. } | RunOutcome::TimedOut => {
                write_simulation_problem(&mut self.out, self.palette, app, simulator, outcome)
            }
        }
    }

    fn run_finished(&mut self, buckets: &ResultBuckets<'_>) -> io::Result<()> {
        self.line(Tone::Bold, RULE)?;
        self.line(Tone::Bold, "Results:")?;
        self.line(Tone::Bold, RULE)?;
        self.line(
            Tone::Success,
            &format!(
                "{} out of {} apps finished successfully.",
                buckets.ok.len(),
                buckets.total
            ),
        )?;

        if !buckets.skipped.is_empty() {
            self.line(
                Tone::Warning,
                &format!("{} apps were skipped.", buckets.skipped.len()),
            )?;
            for app in &buckets.skipped {
                self.line(Tone::Warning, &format!("    - {}", app.name))?;
            }
        }

        if !buckets.compile_failed.is_empty() {
            self.line(
                Tone::Failure,
                &format!("{} apps failed to compile.", buckets.compile_failed.len()),
            )?;
            for app in &buckets.compile_failed {
                self.line(Tone::Failure, &format!("    - {}", app.name))?;
            }
        }

        if !buckets.sim_failed.is_empty() {
            self.line(
                Tone::Failure,
                &format!("{} apps failed to run.", buckets.sim_failed.len()),
            )?;
            for app in &buckets.sim_failed {
                for simulator in app.simulators_with(SimResult::Failed) {
                    self.line(
                        Tone::Failure,
                        &format!("    - {} with {} failed", app.name, simulator),
                    )?;
                }
            }
        }

        if !buckets.sim_timed_out.is_empty() {
            self.line(
                Tone::Failure,
                &format!("{} apps timed out.", buckets.sim_timed_out.len()),
            )?;
            for app in &buckets.sim_timed_out {
                for simulator in app.simulators_with(SimResult::TimedOut) {
                    self.line(
                        Tone::Failure,
                        &format!("    - {} with {} timed out", app.name, simulator),
                    )?;
                }
            }
        }

        self.line(Tone::Bold, RULE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Column {
    Compiler(String),
    Simulator(String),
}

/// Column widths and order for the table report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    name_width: usize,
    column_width: usize,
    columns: Vec<(Column, String)>,
    dry_run: bool,
}

impl TableLayout {
    pub fn new(plan: &RunPlan<'_>) -> Self {
        let name_width = plan
            .apps
            .iter()
            .filter(|app| !crate::results::in_list(&app.name, plan.blacklist))
            .map(|app| app.name.chars().count())
            .chain(std::iter::once(APPLICATION_HEADER.len()))
            .max()
            .unwrap_or(APPLICATION_HEADER.len());

        let mut columns: Vec<(Column, String)> = plan
            .toolchains
            .iter()
            .map(|toolchain| (Column::Compiler(toolchain.compiler.clone()), toolchain.label()))
            .collect();
        let column_width = columns
            .iter()
            .map(|(_, label)| label.chars().count())
            .fold(MIN_COLUMN_WIDTH, usize::max);
        if !plan.compile_only {
            columns.extend(plan.simulators.iter().map(|simulator| {
                (
                    Column::Simulator(simulator.name().to_owned()),
                    simulator.name().to_owned(),
                )
            }));
        }

        Self {
            name_width,
            column_width,
            columns,
            dry_run: plan.dry_run,
        }
    }

    pub fn name_width(&self) -> usize {
        self.name_width
    }

    pub fn column_width(&self) -> usize {
        self.column_width
    }

    pub fn header(&self) -> String {
        let mut header = format!("{:<width$}", APPLICATION_HEADER, width = self.name_width);
        for (_, label) in &self.columns {
            header.push_str(&format!(" | {:>width$}", label, width = self.column_width));
        }
        header
    }

    /// Status text and tone of each result cell for `app`.
    pub fn cells(&self, app: &Application) -> Vec<(Tone, &'static str)> {
        self.columns
            .iter()
            .map(|(column, _)| match column {
                Column::Compiler(compiler) => match app.compilation_status(compiler) {
                    None | Some(CompileStatus::Skipped) => (Tone::Warning, "SKIPPED"),
                    Some(_) if self.dry_run => (Tone::Command, "DRY RUN"),
                    Some(CompileStatus::Succeeded) => (Tone::Success, "OK"),
                    Some(CompileStatus::Failed) => (Tone::Failure, "FAIL"),
                },
                Column::Simulator(simulator) => match app.simulation_result(simulator) {
                    None | Some(SimResult::Skipped) => (Tone::Warning, "SKIPPED"),
                    Some(_) if self.dry_run => (Tone::Command, "DRY RUN"),
                    Some(SimResult::Passed) => (Tone::Success, "OK"),
                    Some(SimResult::TimedOut) => (Tone::Failure, "TIMEOUT"),
                    Some(SimResult::Failed) => (Tone::Failure, "FAIL"),
                },
            })
            .collect()
    }

    pub fn row(&self, app: &Application, palette: Palette) -> String {
        let mut row = format!("{:<width$}", app.name, width = self.name_width);
        for (tone, status) in self.cells(app) {
            let cell = format!("{:>width$}", status, width = self.column_width);
            row.push_str(" | ");
            row.push_str(&palette.paint(tone, &cell));
        }
        row
    }
}

/// One row per application plus a short summary.
#[derive(Debug)]
pub struct TableReporter<W> {
    out: W,
    palette: Palette,
    layout: Option<TableLayout>,
}

impl<W: Write> TableReporter<W> {
    pub fn new(out: W, palette: Palette) -> Self {
        Self {
            out,
            palette,
            layout: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, tone: Tone, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", self.palette.paint(tone, text))
    }
}

impl<W: Write> Reporter for TableReporter<W> {
    fn run_started(&mut self, plan: &RunPlan<'_>) -> io::Result<()> {
        let layout = TableLayout::new(plan);
        let header = layout.header();
        self.line(Tone::Bold, &header)?;
        self.line(Tone::Bold, &"-".repeat(header.chars().count()))?;
        self.layout = Some(layout);
        self.out.flush()
    }

    fn compile_finished(
        &mut self,
        app: &str,
        toolchain: &Toolchain,
        linker: &str,
        outcome: &CompileOutcome,
    ) -> io::Result<()> {
        match outcome {
            CompileOutcome::Failed { diagnostics } => write_compile_failure(
                &mut self.out,
                self.palette,
                &compile_description(app, toolchain, linker),
                diagnostics,
            ),
            _ => Ok(()),
        }
    }

    fn simulation_finished(&mut self, app: &str, simulator: &str, outcome: &RunOutcome) -> io::Result<()> {
        write_simulation_problem(&mut self.out, self.palette, app, simulator, outcome)
    }

    fn app_finished(&mut self, app: &Application) -> io::Result<()> {
        if let Some(layout) = &self.layout {
            let row = layout.row(app, self.palette);
            writeln!(self.out, "{}", row)?;
        }
        self.out.flush()
    }

    fn run_finished(&mut self, buckets: &ResultBuckets<'_>) -> io::Result<()> {
        writeln!(self.out)?;
        self.line(
            Tone::Bold,
            &format!("Summary: {}/{} apps succeeded", buckets.ok.len(), buckets.total),
        )?;
        if !buckets.skipped.is_empty() {
            self.line(Tone::Warning, &format!("Skipped: {}", buckets.skipped.len()))?;
        }
        if !buckets.compile_failed.is_empty() {
            self.line(
                Tone::Failure,
                &format!("Compilation failed: {}", buckets.compile_failed.len()),
            )?;
        }
        if !buckets.sim_failed.is_empty() {
            self.line(
                Tone::Failure,
                &format!("Simulation failed: {}", buckets.sim_failed.len()),
            )?;
        }
        if !buckets.sim_timed_out.is_empty() {
            self.line(
                Tone::Failure,
                &format!("Timed out: {}", buckets.sim_timed_out.len()),
            )?;
        }
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::filter_results;

    fn toolchains() -> Vec<Toolchain> {
        ["gcc", "clang"]
            .iter()
            .map(|compiler| Toolchain {
                compiler: (*compiler).to_owned(),
                path: None,
                prefix: "riscv32-unknown-".to_owned(),
            })
            .collect()
    }

    fn simulators() -> Vec<Simulator> {
        vec![Simulator::new("verilator", r"Program Finished with value (\d+)").unwrap()]
    }

    fn output(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn palette_plain_is_identity() {
        assert_eq!(Palette::plain().paint(Tone::Failure, "FAIL"), "FAIL");
        let colored = Palette::colored().paint(Tone::Failure, "FAIL");
        assert!(colored.contains("FAIL"));
        assert!(colored.starts_with('\u{1b}'));
    }

    #[test]
    fn layout_widths_follow_names_and_labels() {
        let apps = vec![
            Application::new("hello_world"),
            Application::new("example_matmul_quadrilatero_long_name"),
            Application::new("gpio_cnt"),
        ];
        let blacklist = vec!["quadrilatero".to_owned()];
        let toolchains = toolchains();
        let simulators = simulators();
        let plan = RunPlan {
            apps: &apps,
            blacklist: &blacklist,
            toolchains: &toolchains,
            simulators: &simulators,
            compile_only: false,
            dry_run: false,
        };
        let layout = TableLayout::new(&plan);
        assert_eq!(layout.name_width(), "Application".len());
        assert_eq!(layout.column_width(), "clang(riscv32-unknown-)".len());
        assert_eq!(
            layout.header(),
            "Application |   gcc(riscv32-unknown-) | clang(riscv32-unknown-) |               verilator"
        );
    }

    #[test]
    fn compile_only_drops_simulator_columns() {
        let apps = vec![Application::new("hello_world")];
        let toolchains = toolchains();
        let simulators = simulators();
        let plan = RunPlan {
            apps: &apps,
            blacklist: &[],
            toolchains: &toolchains,
            simulators: &simulators,
            compile_only: true,
            dry_run: false,
        };
        assert!(!TableLayout::new(&plan).header().contains("verilator"));
    }

    #[test]
    fn cells_map_every_status() {
        let mut app = Application::new("hello_world");
        app.set_compilation_status("gcc", CompileStatus::Succeeded);
        app.set_compilation_status("clang", CompileStatus::Skipped);
        app.add_simulation_result("verilator", SimResult::TimedOut);
        let apps = vec![app.clone()];
        let toolchains = toolchains();
        let simulators = simulators();
        let mut plan = RunPlan {
            apps: &apps,
            blacklist: &[],
            toolchains: &toolchains,
            simulators: &simulators,
            compile_only: false,
            dry_run: false,
        };
        let statuses: Vec<_> = TableLayout::new(&plan)
            .cells(&app)
            .into_iter()
            .map(|(_, status)| status)
            .collect();
        assert_eq!(statuses, vec!["OK", "SKIPPED", "TIMEOUT"]);

        plan.dry_run = true;
        let statuses: Vec<_> = TableLayout::new(&plan)
            .cells(&app)
            .into_iter()
            .map(|(_, status)| status)
            .collect();
        assert_eq!(statuses, vec!["DRY RUN", "SKIPPED", "DRY RUN"]);

        let untouched = Application::new("never_ran");
        let statuses: Vec<_> = TableLayout::new(&plan)
            .cells(&untouched)
            .into_iter()
            .map(|(_, status)| status)
            .collect();
        assert_eq!(statuses, vec!["SKIPPED", "SKIPPED", "SKIPPED"]);
    }

    #[test]
    fn table_reporter_renders_rows_and_summary() {
        let mut ok = Application::new("hello_world");
        ok.set_compilation_status("gcc", CompileStatus::Succeeded);
        ok.set_compilation_status("clang", CompileStatus::Succeeded);
        ok.add_simulation_result("verilator", SimResult::Passed);
        let mut broken = Application::new("bar");
        broken.set_compilation_status("gcc", CompileStatus::Failed);
        broken.set_compilation_status("clang", CompileStatus::Succeeded);
        let apps = vec![ok, broken];
        let toolchains = toolchains();
        let simulators = simulators();
        let plan = RunPlan {
            apps: &apps,
            blacklist: &[],
            toolchains: &toolchains,
            simulators: &simulators,
            compile_only: false,
            dry_run: false,
        };

        let mut reporter = TableReporter::new(Vec::new(), Palette::plain());
        reporter.run_started(&plan).unwrap();
        for app in &apps {
            reporter.app_finished(app).unwrap();
        }
        reporter.run_finished(&filter_results(&apps, &[])).unwrap();
        let text = output(reporter.into_inner());

        let lines: Vec<_> = text.lines().collect();
        assert!(lines[0].starts_with("Application |"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].starts_with("hello_world |"));
        assert!(lines[2].ends_with("OK"));
        assert!(lines[3].contains("FAIL"));
        assert!(lines[3].ends_with("SKIPPED"));
        assert!(text.contains("Summary: 1/2 apps succeeded"));
        assert!(text.contains("Compilation failed: 1"));
        assert!(!text.contains("Timed out:"));
    }

    #[test]
    fn stream_reporter_prints_progress_and_results() {
        let toolchain = &toolchains()[0];
        let mut app = Application::new("foo");
        app.set_compilation_status("gcc", CompileStatus::Succeeded);
        app.add_simulation_result("verilator", SimResult::Failed);
        let apps = vec![app, Application::new("example_spi_read")];
        let blacklist = vec!["example_spi_read".to_owned()];

        let mut reporter = StreamReporter::new(Vec::new(), Palette::plain());
        reporter.compile_started("foo", toolchain, "on_chip").unwrap();
        reporter
            .compile_finished("foo", toolchain, "on_chip", &CompileOutcome::Succeeded)
            .unwrap();
        reporter.simulation_started("foo", "verilator").unwrap();
        reporter
            .simulation_finished(
                "foo",
                "verilator",
                &RunOutcome::Failed {
                    output: "Program Finished with value 3".to_owned(),
                },
            )
            .unwrap();
        reporter.app_skipped("example_spi_read").unwrap();
        reporter
            .run_finished(&filter_results(&apps, &blacklist))
            .unwrap();
        let text = output(reporter.into_inner());

        assert!(text.contains(
            "Compiling foo with gcc (riscv32-unknown-) and linker on_chip.\n"
        ));
        assert!(text.contains(
            "Compiled foo with gcc (riscv32-unknown-) and linker on_chip successfully.\n"
        ));
        assert!(text.contains("Simulation of foo with verilator failed.\nProgram Finished with value 3\n"));
        assert!(text.contains("Skipping example_spi_read...\n"));
        assert!(text.contains("0 out of 2 apps finished successfully."));
        assert!(text.contains("1 apps were skipped.\n    - example_spi_read\n"));
        assert!(text.contains("1 apps failed to run.\n    - foo with verilator failed\n"));
    }

    #[test]
    fn stream_reporter_echoes_dry_run_commands() {
        let mut reporter = StreamReporter::new(Vec::new(), Palette::plain());
        reporter
            .model_build_finished(
                "verilator",
                &BuildOutcome::DryRun {
                    command: "make verilator-build".to_owned(),
                },
            )
            .unwrap();
        assert_eq!(
            output(reporter.into_inner()),
            "[DRY RUN] make verilator-build\n"
        );
    }
}
