//! Clausewise CLI - contract clause extraction and risk highlighting.

use clap::Parser;
use clausewise_analyzer::{AnalysisRequest, Analyzer, AnalyzerConfig};
use clausewise_cli::{Cli, CliError, Formatter, OutputFormat};
use clausewise_nlp::LocalInferenceProvider;
use tracing::info;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let text = std::fs::read_to_string(&cli.input)?;

    let config = match &cli.config {
        Some(path) => {
            let toml_str = std::fs::read_to_string(path)?;
            AnalyzerConfig::from_toml(&toml_str).map_err(CliError::Config)?
        }
        None => AnalyzerConfig::default(),
    };

    let recognizer = LocalInferenceProvider::new(&cli.endpoint);
    let classifier = LocalInferenceProvider::new(&cli.endpoint);
    let analyzer = Analyzer::new(recognizer, classifier, config)?;

    let source_id = cli
        .input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());

    info!("Analyzing '{}'", source_id);
    let result = analyzer.analyze(AnalysisRequest { text, source_id }).await;

    let color_enabled = !cli.no_color && cli.output.is_none();
    let formatter = Formatter::new(cli.format, color_enabled);
    let rendered = formatter.format_result(&result)?;

    match &cli.output {
        Some(path) => std::fs::write(path, rendered)?,
        None => {
            if cli.format == OutputFormat::Table {
                println!(
                    "Found {} clauses/segments in {} ms",
                    result.metadata.clause_count, result.metadata.processing_time_ms
                );
            }
            println!("{}", rendered);
        }
    }

    Ok(())
}
