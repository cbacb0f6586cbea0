//! Clausewise NLP Capability Layer
//!
//! Pluggable implementations of the entity-recognition and zero-shot
//! classification capabilities consumed by the analysis pipeline.
//!
//! # Architecture
//!
//! This crate provides implementations of the `EntityRecognizer` and
//! `ZeroShotClassifier` traits from `clausewise-domain`. The pipeline never
//! depends on a concrete provider; it receives capability handles by
//! injection.
//!
//! # Providers
//!
//! - `MockRecognizer` / `MockClassifier`: deterministic mocks for testing
//! - `LocalInferenceProvider`: HTTP client for a local transformers-style
//!   inference server
//!
//! # Examples
//!
//! ```
//! use clausewise_nlp::MockClassifier;
//! use clausewise_domain::traits::ZeroShotClassifier;
//!
//! let classifier = MockClassifier::new("Liability", 0.8);
//! let ranked = classifier.classify("any text", &["Liability", "Other"]).unwrap();
//! assert_eq!(ranked[0].label, "Liability");
//! ```

#![warn(missing_docs)]

pub mod inference;

use clausewise_domain::traits::{
    EntityRecognizer as EntityRecognizerTrait, LabelScore,
    ZeroShotClassifier as ZeroShotClassifierTrait,
};
use clausewise_domain::EntityRecord;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use inference::LocalInferenceProvider;

/// Errors that can occur during NLP capability operations
#[derive(Error, Debug)]
pub enum NlpError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Response from the capability had an unexpected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Requested model or route not available on the server
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("NLP error: {0}")]
    Other(String),
}

/// Canned outcome for a mocked input
#[derive(Debug, Clone)]
enum MockOutcome<T> {
    Respond(T),
    Fail,
}

/// Mock entity recognizer for deterministic testing
///
/// Returns pre-configured entity lists without any model or network call.
///
/// # Examples
///
/// ```
/// use clausewise_nlp::MockRecognizer;
/// use clausewise_domain::traits::EntityRecognizer;
/// use clausewise_domain::EntityRecord;
///
/// let mut recognizer = MockRecognizer::default();
/// recognizer.add_response("pay £5,000", vec![EntityRecord {
///     text: "£5,000".to_string(),
///     label: "MONEY".to_string(),
///     score: 0.99,
/// }]);
/// assert_eq!(recognizer.recognize("pay £5,000").unwrap().len(), 1);
/// assert!(recognizer.recognize("unrelated").unwrap().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockRecognizer {
    default_response: Vec<EntityRecord>,
    responses: Arc<Mutex<HashMap<String, MockOutcome<Vec<EntityRecord>>>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockRecognizer {
    /// Create a recognizer that returns the same entities for every input
    pub fn new(entities: Vec<EntityRecord>) -> Self {
        Self {
            default_response: entities,
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Add a specific entity list for a given input text
    pub fn add_response(&mut self, text: impl Into<String>, entities: Vec<EntityRecord>) {
        self.responses
            .lock()
            .unwrap()
            .insert(text.into(), MockOutcome::Respond(entities));
    }

    /// Configure the recognizer to fail for a specific input text
    pub fn add_error(&mut self, text: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(text.into(), MockOutcome::Fail);
    }

    /// Get the number of times recognize was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl EntityRecognizerTrait for MockRecognizer {
    type Error = NlpError;

    fn recognize(&self, text: &str) -> Result<Vec<EntityRecord>, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        let responses = self.responses.lock().unwrap();
        match responses.get(text) {
            Some(MockOutcome::Respond(entities)) => Ok(entities.clone()),
            Some(MockOutcome::Fail) => Err(NlpError::Other("Mock recognizer error".to_string())),
            None => Ok(self.default_response.clone()),
        }
    }
}

/// Mock zero-shot classifier for deterministic testing
///
/// Ranks the requested labels with the configured winner first; the
/// remaining labels share the leftover probability mass equally. Specific
/// inputs can be given canned rankings or made to fail.
///
/// # Examples
///
/// ```
/// use clausewise_nlp::MockClassifier;
/// use clausewise_domain::traits::ZeroShotClassifier;
///
/// let classifier = MockClassifier::new("Termination", 0.7);
/// let ranked = classifier.classify("text", &["Payment", "Termination"]).unwrap();
/// assert_eq!(ranked[0].label, "Termination");
/// assert!((ranked[0].score - 0.7).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct MockClassifier {
    top_label: String,
    top_score: f64,
    responses: Arc<Mutex<HashMap<String, MockOutcome<Vec<LabelScore>>>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockClassifier {
    /// Create a classifier that ranks `top_label` first with `top_score`
    /// for every input
    pub fn new(top_label: impl Into<String>, top_score: f64) -> Self {
        Self {
            top_label: top_label.into(),
            top_score,
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Add a specific ranking for a given input text
    pub fn add_response(&mut self, text: impl Into<String>, ranking: Vec<LabelScore>) {
        self.responses
            .lock()
            .unwrap()
            .insert(text.into(), MockOutcome::Respond(ranking));
    }

    /// Configure the classifier to fail for a specific input text
    pub fn add_error(&mut self, text: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(text.into(), MockOutcome::Fail);
    }

    /// Get the number of times classify was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    fn rank(&self, labels: &[&str]) -> Vec<LabelScore> {
        let rest = labels.iter().filter(|l| **l != self.top_label).count();
        let rest_score = if rest > 0 {
            (1.0 - self.top_score) / rest as f64
        } else {
            0.0
        };

        let mut ranked = Vec::with_capacity(labels.len());
        if labels.contains(&self.top_label.as_str()) {
            ranked.push(LabelScore {
                label: self.top_label.clone(),
                score: self.top_score,
            });
        }
        for label in labels {
            if *label != self.top_label {
                ranked.push(LabelScore {
                    label: label.to_string(),
                    score: rest_score,
                });
            }
        }
        ranked
    }
}

impl Default for MockClassifier {
    fn default() -> Self {
        Self::new("Other", 0.5)
    }
}

impl ZeroShotClassifierTrait for MockClassifier {
    type Error = NlpError;

    fn classify(&self, text: &str, labels: &[&str]) -> Result<Vec<LabelScore>, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        let responses = self.responses.lock().unwrap();
        match responses.get(text) {
            Some(MockOutcome::Respond(ranking)) => Ok(ranking.clone()),
            Some(MockOutcome::Fail) => Err(NlpError::Other("Mock classifier error".to_string())),
            None => Ok(self.rank(labels)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn money_entity() -> EntityRecord {
        EntityRecord {
            text: "$10,000".to_string(),
            label: "MONEY".to_string(),
            score: 0.95,
        }
    }

    #[test]
    fn test_mock_recognizer_default() {
        let recognizer = MockRecognizer::new(vec![money_entity()]);
        let entities = recognizer.recognize("any text").unwrap();
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].label, "MONEY");
    }

    #[test]
    fn test_mock_recognizer_specific_responses() {
        let mut recognizer = MockRecognizer::default();
        recognizer.add_response("with money", vec![money_entity()]);

        assert_eq!(recognizer.recognize("with money").unwrap().len(), 1);
        assert!(recognizer.recognize("without").unwrap().is_empty());
    }

    #[test]
    fn test_mock_recognizer_error() {
        let mut recognizer = MockRecognizer::default();
        recognizer.add_error("bad input");

        let result = recognizer.recognize("bad input");
        assert!(matches!(result.unwrap_err(), NlpError::Other(_)));
    }

    #[test]
    fn test_mock_recognizer_call_count() {
        let recognizer = MockRecognizer::default();
        assert_eq!(recognizer.call_count(), 0);

        recognizer.recognize("one").unwrap();
        recognizer.recognize("two").unwrap();
        assert_eq!(recognizer.call_count(), 2);
    }

    #[test]
    fn test_mock_classifier_ranks_winner_first() {
        let classifier = MockClassifier::new("SLA", 0.6);
        let ranked = classifier
            .classify("text", &["Payment", "SLA", "Other"])
            .unwrap();

        assert_eq!(ranked[0].label, "SLA");
        assert!((ranked[0].score - 0.6).abs() < 1e-9);
        assert!((ranked[1].score - 0.2).abs() < 1e-9);
        assert_eq!(ranked.len(), 3);
    }

    #[test]
    fn test_mock_classifier_winner_absent_from_labels() {
        let classifier = MockClassifier::new("SLA", 0.6);
        let ranked = classifier.classify("text", &["Payment", "Other"]).unwrap();

        // Winner not among candidates: only the candidates are ranked.
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].label, "Payment");
    }

    #[test]
    fn test_mock_classifier_canned_response() {
        let mut classifier = MockClassifier::default();
        classifier.add_response(
            "special",
            vec![LabelScore {
                label: "Confidentiality".to_string(),
                score: 0.9,
            }],
        );

        let ranked = classifier.classify("special", &["ignored"]).unwrap();
        assert_eq!(ranked[0].label, "Confidentiality");
    }

    #[test]
    fn test_mock_classifier_error() {
        let mut classifier = MockClassifier::default();
        classifier.add_error("bad input");

        let result = classifier.classify("bad input", &["Other"]);
        assert!(matches!(result.unwrap_err(), NlpError::Other(_)));
    }

    #[test]
    fn test_mock_clone_shares_call_count() {
        let recognizer1 = MockRecognizer::default();
        let recognizer2 = recognizer1.clone();

        recognizer1.recognize("text").unwrap();

        assert_eq!(recognizer1.call_count(), 1);
        assert_eq!(recognizer2.call_count(), 1);
    }
}
