//! Error types with actionable diagnostics.
//!
//! Every CLI-facing error names the offending input and suggests the next step,
//! so a failed calculation can be fixed without consulting external documentation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for ecoscore CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by ecoscore CLI tools.
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration file not found at expected path.
    #[error(
        "Configuration file not found: {path}\n  \
         → Create the file or pass a different path with --config"
    )]
    ConfigNotFound { path: PathBuf },

    /// Configuration file has invalid syntax.
    #[error(
        "Invalid configuration syntax in {path}:\n  {message}\n  \
         → Check YAML syntax at the indicated line"
    )]
    ConfigParsing { path: PathBuf, message: String },

    /// Configuration value is invalid.
    #[error("Invalid configuration value for '{field}': {message}\n  → {suggestion}")]
    ConfigValue { field: String, message: String, suggestion: String },

    /// Model, GPU or region id not present in the reference tables.
    #[error("Unknown {table} id: {id}\n  → Run `ecoscore reference {table}s` to list known ids")]
    UnknownReference { table: String, id: String },

    /// Calculation input rejected before reaching the engine.
    #[error("Invalid input: {message}\n  → {suggestion}")]
    InvalidInput { message: String, suggestion: String },

    /// IO error with context.
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Serialization/deserialization error.
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Generic error for unexpected conditions.
    #[error(
        "Internal error: {message}\n  \
         → Please report this bug with the command that triggered it"
    )]
    Internal { message: String },
}

impl CliError {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { context: context.into(), source }
    }

    /// Create an input error with a suggestion.
    pub fn invalid_input(message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self::InvalidInput { message: message.into(), suggestion: suggestion.into() }
    }

    /// Check if this error is user-recoverable.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound { .. }
                | Self::ConfigParsing { .. }
                | Self::ConfigValue { .. }
                | Self::UnknownReference { .. }
                | Self::InvalidInput { .. }
        )
    }

    /// Get the error code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigNotFound { .. } => "E001",
            Self::ConfigParsing { .. } => "E002",
            Self::ConfigValue { .. } => "E003",
            Self::UnknownReference { .. } => "E010",
            Self::InvalidInput { .. } => "E020",
            Self::Io { .. } => "E050",
            Self::Serialization { .. } => "E051",
            Self::Internal { .. } => "E999",
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization { message: err.to_string() }
    }
}

impl From<serde_yaml::Error> for CliError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization { message: err.to_string() }
    }
}
