//! Trait definitions for external NLP capabilities
//!
//! These traits define the boundaries between the analysis pipeline and the
//! model-backed infrastructure. Implementations live in other crates
//! (clausewise-nlp) and are dependency-injected into the pipeline, which
//! keeps them trivially mockable for testing.

use crate::signals::EntityRecord;

/// Trait for the entity-recognition capability
///
/// Maps a text span to an ordered list of entity records. Implementations
/// must tolerate being called once per clause (short strings).
pub trait EntityRecognizer {
    /// Error type for recognition operations
    type Error;

    /// Recognize entities in the given text
    fn recognize(&self, text: &str) -> Result<Vec<EntityRecord>, Self::Error>;
}

/// One candidate label with its model score
#[derive(Debug, Clone, PartialEq)]
pub struct LabelScore {
    /// Candidate label
    pub label: String,

    /// Model score in [0.0, 1.0]
    pub score: f64,
}

/// Trait for the semantic-classification capability
///
/// Maps (text, candidate labels) to a ranked list of label/score pairs,
/// best first. Only invoked when keyword matching yields no signal.
pub trait ZeroShotClassifier {
    /// Error type for classification operations
    type Error;

    /// Rank the candidate labels for the given text, best first
    fn classify(&self, text: &str, labels: &[&str]) -> Result<Vec<LabelScore>, Self::Error>;
}
