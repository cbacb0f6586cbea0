//! Error types for the CLI.

use thiserror::Error;

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in the CLI.
#[derive(Error, Debug)]
pub enum CliError {
    /// File could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file was invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Analyzer construction failed.
    #[error(transparent)]
    Analyzer(#[from] clausewise_analyzer::AnalyzerError),

    /// Output serialization failed.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
