//! Replay configuration via `casechain.toml`
//!
//! Configuration only affects diagnostics: it never changes which steps a
//! replay applies or in what order. Registries created with
//! [`CaseRegistry::from_env`](crate::CaseRegistry::from_env) read the TOML
//! file named by the `CASECHAIN_CONFIG` environment variable, so per-step
//! tracing can be switched on without touching test code. Registries from
//! `CaseRegistry::new()` always use defaults.

use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::Path;

use crate::error::{CaseError, CaseResult};

/// Environment variable holding the path of a config file.
pub const CONFIG_ENV_VAR: &str = "CASECHAIN_CONFIG";

/// Config file name looked up by [`ReplayConfig::from_dir`].
pub const CONFIG_FILE_NAME: &str = "casechain.toml";

/// Configuration for a [`CaseRegistry`](crate::CaseRegistry).
///
/// # Example
///
/// ```toml
/// # Label attached to every replay span
/// suite = "controller"
///
/// # Emit a trace event for every applied setup step
/// trace_steps = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayConfig {
    /// Label attached to replay spans.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suite: Option<String>,
    /// Emit a `trace!` event for each applied setup step.
    #[serde(default)]
    pub trace_steps: bool,
}

impl ReplayConfig {
    /// Set the suite label
    pub fn with_suite(mut self, suite: impl Into<String>) -> Self {
        self.suite = Some(suite.into());
        self
    }

    /// Enable or disable per-step trace events
    pub fn with_trace_steps(mut self, enabled: bool) -> Self {
        self.trace_steps = enabled;
        self
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# casechain replay configuration
#
# Label attached to every replay span (optional).
# suite = "my-suite"

# Emit a trace event for every applied setup step (default: false).
trace_steps = false
"#
    }

    /// Parse config from TOML text.
    pub fn from_toml_str(content: &str) -> CaseResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> CaseResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CaseError::ConfigRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            CaseError::ConfigParse(msg) => {
                CaseError::ConfigParse(format!("'{}': {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Load `casechain.toml` from `dir`.
    ///
    /// Returns defaults when the file does not exist.
    pub fn from_dir(dir: &Path) -> CaseResult<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::from_file(&path)
    }

    /// Load config from the file named by `CASECHAIN_CONFIG`.
    ///
    /// Falls back to defaults when the variable is unset or empty.
    pub fn from_env() -> CaseResult<Self> {
        Self::from_env_value(std::env::var_os(CONFIG_ENV_VAR))
    }

    fn from_env_value(value: Option<OsString>) -> CaseResult<Self> {
        match value {
            Some(path) if !path.is_empty() => Self::from_file(Path::new(&path)),
            _ => Ok(Self::default()),
        }
    }
}
