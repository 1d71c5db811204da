use std::io;

use thiserror::Error;

/// Library-wide error type for termprompt operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Explicitly requested config file does not exist.
    #[error("Config file not found: {0}")]
    ConfigFileMissing(String),

    /// The match expression is not a valid regular expression.
    #[error("Invalid match pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The execution environment failed to run, attach, mount, or read back.
    #[error("Execution environment error during {operation}: {details}")]
    Environment { operation: String, details: String },

    /// Session script template failed to render.
    #[error("Failed to render session script: {0}")]
    Template(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn environment<O: Into<String>, D: Into<String>>(operation: O, details: D) -> Self {
        AppError::Environment { operation: operation.into(), details: details.into() }
    }
}
