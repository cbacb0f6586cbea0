//! Clausewise Analyzer
//!
//! Turns an unstructured contract text blob into an ordered sequence of
//! scored, reasoned clause records.
//!
//! # Overview
//!
//! The analyzer is the core of Clausewise: it segments raw text into
//! clauses, assigns each clause a semantic category (keyword-first with a
//! zero-shot fallback), reduces recognized entities to risk signals, and
//! computes a transparent additive risk score with one human-readable
//! reason per fired rule.
//!
//! # Architecture
//!
//! ```text
//! Text → Segmenter → per clause: [Categorizer | Signal Extractor] → Risk Scorer → ClauseRecords
//! ```
//!
//! Document ingestion (PDF extraction, OCR) happens upstream; the analyzer
//! consumes plain text. The NER and zero-shot capabilities are injected
//! behind traits and any failure on one clause degrades that clause
//! locally.
//!
//! # Example Usage
//!
//! ```no_run
//! use clausewise_analyzer::{Analyzer, AnalyzerConfig, AnalysisRequest};
//! use clausewise_nlp::{MockClassifier, MockRecognizer};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let recognizer = MockRecognizer::default();
//! let classifier = MockClassifier::new("Other", 0.5);
//!
//! let analyzer = Analyzer::new(recognizer, classifier, AnalyzerConfig::default())?;
//!
//! let request = AnalysisRequest {
//!     text: "Either party may terminate this Agreement for breach.".to_string(),
//!     source_id: "vendor_contract.txt".to_string(),
//! };
//!
//! let result = analyzer.analyze(request).await;
//!
//! for record in &result.records {
//!     println!("#{} [{}] {}", record.id, record.risk.tier.as_str(), record.clause);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod categorize;
mod config;
mod entities;
mod error;
mod pipeline;
mod risk;
mod segmenter;
mod types;


pub use categorize::{CategoryMatcher, MatchOutcome};
pub use config::{AnalyzerConfig, CategoryKeywords};
pub use entities::SignalRules;
pub use error::AnalyzerError;
pub use pipeline::Analyzer;
pub use risk::RiskScorer;
pub use segmenter::Segmenter;
pub use types::{AnalysisMetadata, AnalysisRequest, AnalysisResult, FlatEntity, FlatRecord};
