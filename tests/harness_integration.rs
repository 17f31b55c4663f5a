//! ---
//! apptest_section: "05-testing"
//! apptest_subsection: "integration-tests"
//! apptest_type: "source"
//! apptest_scope: "code"
//! apptest_description: "Harness runs through real processes against a scripted build tool."
//! apptest_version: "v0.1.0"
//! apptest_owner: "tbd"
//! ---
#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::time::Duration;

use apptest_common::HarnessConfig;
use apptest_harness::{
    discover_applications, resolve_toolchains, BuildSettings, CompileStatus, Harness, Palette,
    RunOptions, SimResult, Simulator, SystemRunner, TableReporter, ToolchainOverrides,
};

/// `make app` succeeds unless the application is `broken`; the simulator
/// prints the return value stored in `<root>/retval`.
const SCRIPT: &str = r#"#!/bin/sh
case "$*" in
  *PROJECT=broken*) exit 1 ;;
  *-run*) echo "Program Finished with value ($(cat retval))" ;;
esac
exit 0
"#;

fn project(apps: &[&str], retval: &str) -> (tempfile::TempDir, HarnessConfig) {
    let dir = tempfile::tempdir().unwrap();
    for app in apps {
        fs::create_dir_all(dir.path().join("sw/applications").join(app)).unwrap();
    }
    let script = dir.path().join("make.sh");
    fs::write(&script, SCRIPT).unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    fs::write(dir.path().join("retval"), retval).unwrap();

    let config: HarnessConfig = format!(
        "build_tool = \"{}\"\ncompilers = [\"gcc\", \"clang\"]\nblacklist = [\"skip_me\"]\n",
        script.display()
    )
    .parse()
    .unwrap();
    (dir, config)
}

fn run_table(root: &Path, config: &HarnessConfig) -> (Vec<apptest_harness::Application>, u8, String) {
    let mut apps =
        discover_applications(&root.join(&config.applications_dir), &config.whitelist).unwrap();
    let runner = SystemRunner::new().unwrap();
    let harness = Harness::new(
        &runner,
        config,
        BuildSettings::from_config(config, Some(root.to_path_buf()), false),
        resolve_toolchains(config, None, &ToolchainOverrides::default()).unwrap(),
        Simulator::all_from_config(config).unwrap(),
        RunOptions {
            compile_only: false,
            simulation_timeout: Duration::from_secs(10),
        },
    );
    let mut reporter = TableReporter::new(Vec::new(), Palette::plain());
    let counts = harness.run(&mut apps, &mut reporter).unwrap();
    let table = String::from_utf8(reporter.into_inner()).unwrap();
    (apps, counts.exit_code(), table)
}

#[test]
fn full_run_partitions_applications() {
    let (dir, config) = project(&["broken", "hello_world", "skip_me"], "0");
    let (apps, exit_code, table) = run_table(dir.path(), &config);

    assert_eq!(exit_code, 1);
    let broken = apps.iter().find(|app| app.name == "broken").unwrap();
    assert_eq!(broken.compilation_status("gcc"), Some(CompileStatus::Failed));
    assert_eq!(broken.simulation_result("verilator"), None);
    let hello = apps.iter().find(|app| app.name == "hello_world").unwrap();
    assert_eq!(hello.simulation_result("verilator"), Some(SimResult::Passed));
    let skipped = apps.iter().find(|app| app.name == "skip_me").unwrap();
    assert!(skipped.compilation_statuses().next().is_none());

    assert!(!table.lines().any(|line| line.starts_with("skip_me")));
    assert!(table.contains("Summary: 1/3 apps succeeded"));
    assert!(table.contains("Skipped: 1"));
    assert!(table.contains("Compilation failed: 1"));
}

#[test]
fn nonzero_return_value_fails_the_run() {
    let (dir, config) = project(&["hello_world"], "1");
    let (apps, exit_code, table) = run_table(dir.path(), &config);
    assert_eq!(exit_code, 1);
    assert_eq!(apps[0].simulation_result("verilator"), Some(SimResult::Failed));
    assert!(table.contains("Simulation of hello_world with verilator failed."));
    assert!(table.contains("Simulation failed: 1"));
}
