//! ---
//! apptest_section: "01-core-functionality"
//! apptest_subsection: "module"
//! apptest_type: "source"
//! apptest_scope: "code"
//! apptest_description: "Harness configuration model and loading."
//! apptest_version: "v0.1.0"
//! apptest_owner: "tbd"
//! ---
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DurationSeconds};
use tracing::debug;

use crate::logging::LogFormat;

/// File name probed in the project root when no explicit configuration is given.
pub const DEFAULT_CONFIG_FILE: &str = "apptest.toml";

fn default_build_tool() -> String {
    "make".to_owned()
}

fn default_applications_dir() -> PathBuf {
    PathBuf::from("sw/applications")
}

fn default_linker() -> String {
    "on_chip".to_owned()
}

fn default_toolchain_env() -> String {
    "RISCV_XHEEP".to_owned()
}

fn default_compilers() -> Vec<String> {
    vec!["gcc".to_owned(), "clang".to_owned()]
}

fn default_prefix() -> String {
    "riscv32-unknown-".to_owned()
}

fn default_simulators() -> Vec<String> {
    vec!["verilator".to_owned()]
}

fn default_error_patterns() -> IndexMap<String, String> {
    let mut patterns = IndexMap::new();
    patterns.insert(
        "verilator".to_owned(),
        r"Program Finished with value \(?(\d+)\)?".to_owned(),
    );
    patterns
}

fn default_simulation_timeout() -> Duration {
    Duration::from_secs(180)
}

fn default_blacklist() -> Vec<String> {
    [
        "example_spi_read",
        "example_spidma_powergate",
        "example_spi_write",
        "example_dma_subaddressing",
        "example_pdm2pcm",
        "example_dma_slow_mem",
        "example_matmul_quadrilatero",
        "example_w25q128jw_write",
    ]
    .iter()
    .map(|name| (*name).to_owned())
    .collect()
}

fn default_compiler_exclusions() -> IndexMap<String, Vec<String>> {
    let mut exclusions = IndexMap::new();
    exclusions.insert("clang".to_owned(), Vec::new());
    exclusions
}

fn default_simulator_exclusions() -> IndexMap<String, Vec<String>> {
    let mut exclusions = IndexMap::new();
    exclusions.insert("verilator".to_owned(), Vec::new());
    exclusions
}

fn default_log_filter() -> String {
    "warn".to_owned()
}

/// Primary configuration object for a harness run.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Build front-end invoked for compiling and for simulator targets.
    #[serde(default = "default_build_tool")]
    pub build_tool: String,
    /// Directory, relative to the project root, holding one folder per application.
    #[serde(default = "default_applications_dir")]
    pub applications_dir: PathBuf,
    #[serde(default = "default_linker")]
    pub linker: String,
    /// Environment variable that carries the toolchain root into `make app`.
    #[serde(default = "default_toolchain_env")]
    pub toolchain_env: String,
    #[serde(default = "default_compilers")]
    pub compilers: Vec<String>,
    #[serde(default = "default_prefix")]
    pub default_prefix: String,
    #[serde(default = "default_simulators")]
    pub simulators: Vec<String>,
    #[serde(default = "default_error_patterns")]
    pub error_patterns: IndexMap<String, String>,
    #[serde(default = "default_simulation_timeout")]
    #[serde_as(as = "DurationSeconds<u64>")]
    pub simulation_timeout: Duration,
    /// When non-empty, only these applications are tested and none of them is skipped.
    #[serde(default)]
    pub whitelist: Vec<String>,
    #[serde(default = "default_blacklist")]
    pub blacklist: Vec<String>,
    #[serde(default = "default_compiler_exclusions")]
    pub compiler_exclusions: IndexMap<String, Vec<String>>,
    #[serde(default = "default_simulator_exclusions")]
    pub simulator_exclusions: IndexMap<String, Vec<String>>,
    #[serde(default)]
    pub extra_make_args: Vec<String>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Configuration together with the file it came from, if any.
#[derive(Debug, Clone)]
pub struct LoadedHarnessConfig {
    pub config: HarnessConfig,
    pub source: Option<PathBuf>,
}

impl HarnessConfig {
    pub const ENV_CONFIG_PATH: &str = "APPTEST_CONFIG";

    /// Load configuration, preferring `explicit`, then `APPTEST_CONFIG`, then
    /// `apptest.toml` under `project_root`. Falls back to built-in defaults.
    pub fn load_with_source(
        explicit: Option<&Path>,
        project_root: &Path,
    ) -> Result<LoadedHarnessConfig> {
        if let Some(path) = explicit {
            return Self::loaded_from(path.to_path_buf());
        }

        if let Ok(env_path) = std::env::var(Self::ENV_CONFIG_PATH) {
            if !env_path.trim().is_empty() {
                return Self::loaded_from(PathBuf::from(env_path));
            }
        }

        let candidate = project_root.join(DEFAULT_CONFIG_FILE);
        if candidate.exists() {
            return Self::loaded_from(candidate);
        }

        debug!("no configuration file found, using built-in defaults");
        Ok(LoadedHarnessConfig {
            config: Self::default(),
            source: None,
        })
    }

    fn loaded_from(path: PathBuf) -> Result<LoadedHarnessConfig> {
        let config = Self::from_path(&path)?;
        Ok(LoadedHarnessConfig {
            config,
            source: Some(path),
        })
    }

    fn from_path(path: &Path) -> Result<Self> {
        debug!(config_path = %path.display(), "loading configuration");
        let contents = fs::read_to_string(path)
            .with_context(|| format!("unable to read config file {}", path.display()))?;
        contents
            .parse::<HarnessConfig>()
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Error pattern registered for `simulator`, if any.
    pub fn error_pattern(&self, simulator: &str) -> Option<&str> {
        self.error_patterns.get(simulator).map(String::as_str)
    }

    /// Applications that must not be built with `compiler`.
    pub fn compiler_exclusions(&self, compiler: &str) -> &[String] {
        self.compiler_exclusions
            .get(compiler)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Applications that must not be run on `simulator`.
    pub fn simulator_exclusions(&self, simulator: &str) -> &[String] {
        self.simulator_exclusions
            .get(simulator)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Blacklist in effect for the run. A whitelist takes priority, so it
    /// disables the blacklist entirely.
    pub fn effective_blacklist(&self) -> &[String] {
        if self.whitelist.is_empty() {
            &self.blacklist
        } else {
            &[]
        }
    }

    /// Validate structural invariants.
    pub fn validate(&self) -> Result<()> {
        if self.build_tool.trim().is_empty() {
            return Err(anyhow!("build_tool cannot be empty"));
        }
        if self.compilers.is_empty() {
            return Err(anyhow!("configuration must list at least one compiler"));
        }
        if let Some(empty) = self.compilers.iter().position(|c| c.trim().is_empty()) {
            return Err(anyhow!("compiler entry {} is empty", empty));
        }
        if self.simulation_timeout.is_zero() {
            return Err(anyhow!("simulation_timeout must be greater than zero"));
        }
        Ok(())
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            build_tool: default_build_tool(),
            applications_dir: default_applications_dir(),
            linker: default_linker(),
            toolchain_env: default_toolchain_env(),
            compilers: default_compilers(),
            default_prefix: default_prefix(),
            simulators: default_simulators(),
            error_patterns: default_error_patterns(),
            simulation_timeout: default_simulation_timeout(),
            whitelist: Vec::new(),
            blacklist: default_blacklist(),
            compiler_exclusions: default_compiler_exclusions(),
            simulator_exclusions: default_simulator_exclusions(),
            extra_make_args: Vec::new(),
            logging: LoggingConfig::default(),
        }
    }
}

impl std::str::FromStr for HarnessConfig {
    type Err = anyhow::Error;

    fn from_str(content: &str) -> std::result::Result<Self, Self::Err> {
        let config: HarnessConfig =
            toml::from_str(content).with_context(|| "failed to parse configuration")?;
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
    /// Filter directive used when neither `APPTEST_LOG` nor `RUST_LOG` is set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Directory for a daily rolling JSON log. Disabled when unset.
    #[serde(default)]
    pub directory: Option<PathBuf>,
    #[serde(default)]
    pub file_prefix: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            filter: default_log_filter(),
            directory: None,
            file_prefix: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_setup() {
        let config = HarnessConfig::default();
        assert_eq!(config.build_tool, "make");
        assert_eq!(config.compilers, vec!["gcc", "clang"]);
        assert_eq!(config.simulators, vec!["verilator"]);
        assert_eq!(config.simulation_timeout, Duration::from_secs(180));
        assert_eq!(
            config.error_pattern("verilator"),
            Some(r"Program Finished with value \(?(\d+)\)?")
        );
        assert!(config.blacklist.iter().any(|b| b == "example_pdm2pcm"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: HarnessConfig = r#"
            build_tool = "gmake"
            simulation_timeout = 30
            blacklist = []

            [compiler_exclusions]
            clang = ["example_asm"]
        "#
        .parse()
        .unwrap();
        assert_eq!(config.build_tool, "gmake");
        assert_eq!(config.simulation_timeout, Duration::from_secs(30));
        assert!(config.blacklist.is_empty());
        assert_eq!(config.compiler_exclusions("clang"), ["example_asm"]);
        assert!(config.compiler_exclusions("gcc").is_empty());
        assert_eq!(config.linker, "on_chip");
    }

    #[test]
    fn validation_rejects_zero_timeout() {
        let err = "simulation_timeout = 0"
            .parse::<HarnessConfig>()
            .unwrap_err();
        assert!(format!("{err:#}").contains("simulation_timeout"));
    }

    #[test]
    fn validation_rejects_empty_compiler_list() {
        let err = "compilers = []".parse::<HarnessConfig>().unwrap_err();
        assert!(format!("{err:#}").contains("at least one compiler"));
    }

    #[test]
    fn whitelist_disables_blacklist() {
        let mut config = HarnessConfig::default();
        assert!(!config.effective_blacklist().is_empty());
        config.whitelist = vec!["hello_world".to_owned()];
        assert!(config.effective_blacklist().is_empty());
    }

    #[test]
    fn explicit_path_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "linker = \"flash_load\"\n").unwrap();
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "linker = \"other\"\n").unwrap();

        let loaded = HarnessConfig::load_with_source(Some(&path), dir.path()).unwrap();
        assert_eq!(loaded.config.linker, "flash_load");
        assert_eq!(loaded.source.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(HarnessConfig::load_with_source(Some(&path), dir.path()).is_err());
    }
}
