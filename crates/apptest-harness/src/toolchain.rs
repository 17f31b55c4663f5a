//! ---
//! apptest_section: "02-harness"
//! apptest_subsection: "module"
//! apptest_type: "source"
//! apptest_scope: "code"
//! apptest_description: "Compiler toolchain list resolution from defaults and overrides."
//! apptest_version: "v0.1.0"
//! apptest_owner: "tbd"
//! ---
use apptest_common::HarnessConfig;

use crate::error::{HarnessError, Result};

/// A compiler together with the toolchain it is taken from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    pub compiler: String,
    /// Toolchain root exported to the build tool; inherited from the
    /// environment when `None`.
    pub path: Option<String>,
    pub prefix: String,
}

impl Toolchain {
    /// Column label used by the table report, e.g. `gcc(riscv32-unknown-)`.
    pub fn label(&self) -> String {
        format!("{}({})", self.compiler, self.prefix)
    }
}

/// Command-line overrides, each a comma-separated list as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct ToolchainOverrides<'a> {
    pub compilers: Option<&'a str>,
    pub paths: Option<&'a str>,
    pub prefixes: Option<&'a str>,
}

/// Combine configuration defaults, the ambient toolchain path and overrides.
///
/// `paths` and `prefixes` accept either a single value shared by every
/// compiler or exactly one value per compiler.
pub fn resolve_toolchains(
    config: &HarnessConfig,
    ambient_path: Option<String>,
    overrides: &ToolchainOverrides<'_>,
) -> Result<Vec<Toolchain>> {
    let compilers: Vec<String> = match overrides.compilers {
        Some(list) => split_list(list),
        None => config.compilers.clone(),
    };
    let ambient_path = ambient_path.filter(|path| !path.is_empty());

    let paths: Vec<Option<String>> = match overrides.paths {
        Some(list) => broadcast("paths", split_list(list), &compilers)?
            .into_iter()
            .map(|path| Some(path).filter(|p| !p.is_empty()))
            .collect(),
        None => vec![ambient_path; compilers.len()],
    };
    let prefixes = match overrides.prefixes {
        Some(list) => broadcast("prefixes", split_list(list), &compilers)?,
        None => vec![config.default_prefix.clone(); compilers.len()],
    };

    Ok(compilers
        .into_iter()
        .zip(paths)
        .zip(prefixes)
        .map(|((compiler, path), prefix)| Toolchain {
            compiler,
            path,
            prefix,
        })
        .collect())
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',').map(|item| item.trim().to_owned()).collect()
}

fn broadcast(kind: &'static str, values: Vec<String>, compilers: &[String]) -> Result<Vec<String>> {
    match values.len() {
        1 => Ok(vec![values[0].clone(); compilers.len()]),
        n if n == compilers.len() => Ok(values),
        given => Err(HarnessError::ToolchainCount {
            kind,
            given,
            expected: compilers.len(),
            compilers: compilers.to_vec(),
        }),
    }
}
