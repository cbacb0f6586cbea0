//! Error types for the analyzer

use thiserror::Error;

/// Errors that can occur when building an analyzer
///
/// A running analysis has no fatal error path: capability failures degrade
/// per clause instead of propagating. The only way to fail is to construct
/// an analyzer from an invalid configuration.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
