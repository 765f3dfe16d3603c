//! Error types for casechain
//!
//! Replay itself never fails: panics raised by setup steps unwind through
//! `build` untouched. The errors here cover positional lookups and loading
//! configuration. We use `thiserror` for automatic `Display` and `Error`
//! trait implementations.

use thiserror::Error;

/// Result type alias for casechain operations
pub type CaseResult<T> = std::result::Result<T, CaseError>;

/// Error types for casechain
#[derive(Debug, Error)]
pub enum CaseError {
    /// Positional lookup past the end of the registry
    #[error("Unknown case: index {index} out of range for registry of {len} cases")]
    UnknownCase {
        /// Requested position
        index: usize,
        /// Number of registered cases
        len: usize,
    },

    /// Config file could not be read
    #[error("Failed to read config file '{path}': {message}")]
    ConfigRead {
        /// Path that was read
        path: String,
        /// Underlying I/O error message
        message: String,
    },

    /// Config content could not be parsed
    #[error("Config parse error: {0}")]
    ConfigParse(String),
}

impl From<toml::de::Error> for CaseError {
    fn from(e: toml::de::Error) -> Self {
        CaseError::ConfigParse(e.to_string())
    }
}
