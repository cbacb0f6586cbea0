//! Request and result types for analysis

use clausewise_domain::ClauseRecord;
use serde::Serialize;

/// Request to analyze one document
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// Plain text of the document (already extracted from its source
    /// format by an ingestion collaborator)
    pub text: String,

    /// Source identifier (file name or user-provided)
    pub source_id: String,
}

/// Result of one analysis run
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    /// One record per clause, in source order
    pub records: Vec<ClauseRecord>,

    /// Metadata about the run
    pub metadata: AnalysisMetadata,
}

/// Metadata about an analysis run
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisMetadata {
    /// Source identifier
    pub source_id: String,

    /// Unix timestamp when the analysis ran
    pub timestamp: u64,

    /// Number of clauses produced by segmentation
    pub clause_count: usize,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

/// One entity in a flat export record
#[derive(Debug, Clone, Serialize)]
pub struct FlatEntity {
    /// Surface text
    pub text: String,

    /// Recognized type label
    pub label: String,

    /// Recognizer confidence
    pub score: f64,
}

/// Flat, serializable representation of one clause record
///
/// This is the shape consumed by presentation layers (tables, CSV/JSON
/// export): every field is a scalar or a serializable list.
#[derive(Debug, Clone, Serialize)]
pub struct FlatRecord {
    /// 1-based sequence id
    pub id: usize,

    /// Clause text
    pub clause: String,

    /// Category name
    pub category: String,

    /// Category confidence, rounded to 3 decimals
    pub category_confidence: f64,

    /// Risk tier name
    pub risk_tier: String,

    /// Clamped risk score
    pub risk_score: u8,

    /// Reasons joined with "; "
    pub reasons: String,

    /// Recognized entities
    pub entities: Vec<FlatEntity>,
}

impl From<&ClauseRecord> for FlatRecord {
    fn from(record: &ClauseRecord) -> Self {
        Self {
            id: record.id,
            clause: record.clause.as_str().to_string(),
            category: record.category.category.as_str().to_string(),
            category_confidence: (record.category.confidence * 1000.0).round() / 1000.0,
            risk_tier: record.risk.tier.as_str().to_string(),
            risk_score: record.risk.score,
            reasons: record.risk.reasons.join("; "),
            entities: record
                .signals
                .entities
                .iter()
                .map(|e| FlatEntity {
                    text: e.text.clone(),
                    label: e.label.clone(),
                    score: e.score,
                })
                .collect(),
        }
    }
}
