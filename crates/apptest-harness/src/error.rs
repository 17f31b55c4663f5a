//! ---
//! apptest_section: "02-harness"
//! apptest_subsection: "module"
//! apptest_type: "source"
//! apptest_scope: "code"
//! apptest_description: "Fatal error conditions raised by the harness."
//! apptest_version: "v0.1.0"
//! apptest_owner: "tbd"
//! ---
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HarnessError>;

/// Conditions that abort the whole run. Compile and simulation failures are
/// recorded per application instead.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("error building {simulator} model: {details}")]
    ModelBuild { simulator: String, details: String },
    #[error("no error pattern defined for simulator {0}")]
    MissingErrorPattern(String),
    #[error("invalid error pattern for simulator {simulator}: {reason}")]
    InvalidErrorPattern { simulator: String, reason: String },
    #[error(
        "the number of compiler {kind} ({given}) does not match the number of compilers: {compilers:?} ({expected})"
    )]
    ToolchainCount {
        kind: &'static str,
        given: usize,
        expected: usize,
        compilers: Vec<String>,
    },
    #[error("unable to list applications in {}: {source}", .path.display())]
    Discovery {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
