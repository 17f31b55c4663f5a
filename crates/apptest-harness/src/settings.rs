//! ---
//! apptest_section: "02-harness"
//! apptest_subsection: "module"
//! apptest_type: "source"
//! apptest_scope: "code"
//! apptest_description: "Build front-end settings shared by the compiler and simulator drivers."
//! apptest_version: "v0.1.0"
//! apptest_owner: "tbd"
//! ---
use std::path::PathBuf;

use apptest_common::HarnessConfig;

use crate::process::ProcessSpec;

/// How the build front-end is invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSettings {
    pub build_tool: String,
    pub toolchain_env: String,
    /// Working directory of every invocation; inherits the harness cwd when unset.
    pub project_root: Option<PathBuf>,
    /// Print commands instead of running them.
    pub dry_run: bool,
}

impl BuildSettings {
    pub fn from_config(config: &HarnessConfig, project_root: Option<PathBuf>, dry_run: bool) -> Self {
        Self {
            build_tool: config.build_tool.clone(),
            toolchain_env: config.toolchain_env.clone(),
            project_root,
            dry_run,
        }
    }

    /// Spec for the build tool rooted at the project directory.
    pub fn build_command(&self) -> ProcessSpec {
        ProcessSpec::new(&self.build_tool).current_dir(self.project_root.clone())
    }
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self::from_config(&HarnessConfig::default(), None, false)
    }
}
