//! Clausewise CLI library.
//!
//! This library provides the functionality for the clausewise command-line
//! interface: argument parsing, error handling, and output formatting for
//! the analysis results.

pub mod cli;
pub mod error;
pub mod output;

pub use cli::{Cli, OutputFormat};
pub use error::{CliError, Result};
pub use output::Formatter;
