//! Command-line argument definitions.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Contract clause extraction and risk highlighting.
#[derive(Debug, Parser)]
#[command(name = "clausewise", version, about)]
pub struct Cli {
    /// Plain-text contract file to analyze
    pub input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Analyzer configuration file (TOML); defaults are used when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// NLP inference server endpoint
    #[arg(
        short,
        long,
        env = "CLAUSEWISE_ENDPOINT",
        default_value = clausewise_nlp::inference::DEFAULT_ENDPOINT
    )]
    pub endpoint: String,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored summary table, sorted by descending risk score
    Table,
    /// JSON array of flat clause records
    Json,
    /// CSV, one row per clause in source order
    Csv,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["clausewise", "contract.txt"]);
        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.output.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.no_color);
    }

    #[test]
    fn test_format_flag() {
        let cli = Cli::parse_from(["clausewise", "contract.txt", "--format", "csv"]);
        assert_eq!(cli.format, OutputFormat::Csv);
    }
}
