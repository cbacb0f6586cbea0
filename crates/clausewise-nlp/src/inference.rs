//! Local inference server provider
//!
//! Provides entity recognition and zero-shot classification backed by a
//! local transformers-style inference server (one route per pipeline task).
//! Running the models locally keeps contract text off third-party services.
//!
//! # Features
//!
//! - Async HTTP communication with the inference server
//! - Configurable endpoint
//! - Retry logic with exponential backoff
//! - Timeout handling
//!
//! # Examples
//!
//! ```no_run
//! use clausewise_nlp::LocalInferenceProvider;
//!
//! let provider = LocalInferenceProvider::new("http://localhost:8000");
//!
//! // The recognize/classify methods are async; the domain traits wrap them
//! // in a blocking call for use from synchronous pipeline code.
//! ```

use crate::NlpError;
use clausewise_domain::traits::{
    EntityRecognizer as EntityRecognizerTrait, LabelScore,
    ZeroShotClassifier as ZeroShotClassifierTrait,
};
use clausewise_domain::EntityRecord;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default inference server endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000";

/// Default timeout for inference requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of retry attempts
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// HTTP provider for a local NLP inference server
///
/// The server is expected to expose a token-classification route (`/ner`)
/// and a zero-shot classification route (`/zero-shot`) speaking the
/// transformers pipeline wire format.
pub struct LocalInferenceProvider {
    endpoint: String,
    client: reqwest::Client,
    max_retries: u32,
}

/// Request body for both inference routes
#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parameters: Option<ZeroShotParameters<'a>>,
}

/// Candidate labels for the zero-shot route
#[derive(Serialize)]
struct ZeroShotParameters<'a> {
    candidate_labels: &'a [&'a str],
}

/// One entity from the token-classification route
#[derive(Deserialize)]
struct NerEntity {
    entity_group: String,
    score: f64,
    word: String,
}

/// Response from the zero-shot route
#[derive(Deserialize)]
struct ZeroShotResponse {
    labels: Vec<String>,
    scores: Vec<f64>,
}

impl LocalInferenceProvider {
    /// Create a new provider
    ///
    /// # Parameters
    ///
    /// - `endpoint`: inference server base URL (e.g. "http://localhost:8000")
    pub fn new(endpoint: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap();

        Self {
            endpoint: endpoint.into(),
            client,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Create a provider against the default local endpoint
    pub fn default_endpoint() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }

    /// Set the maximum number of retry attempts
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Recognize entities in a text span
    ///
    /// # Errors
    ///
    /// Returns error if the server is unreachable, the route is missing,
    /// or the response shape is invalid.
    pub async fn recognize(&self, text: &str) -> Result<Vec<EntityRecord>, NlpError> {
        let body = InferenceRequest {
            inputs: text,
            parameters: None,
        };

        let response = self.post_with_retry("ner", &body).await?;

        let entities: Vec<NerEntity> = response
            .json()
            .await
            .map_err(|e| NlpError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        Ok(entities
            .into_iter()
            .map(|e| EntityRecord {
                text: e.word,
                label: e.entity_group,
                score: e.score,
            })
            .collect())
    }

    /// Rank candidate labels for a text span, best first
    ///
    /// # Errors
    ///
    /// Returns error if the server is unreachable, the route is missing,
    /// or the response shape is invalid (including mismatched label/score
    /// list lengths).
    pub async fn classify(
        &self,
        text: &str,
        labels: &[&str],
    ) -> Result<Vec<LabelScore>, NlpError> {
        let body = InferenceRequest {
            inputs: text,
            parameters: Some(ZeroShotParameters {
                candidate_labels: labels,
            }),
        };

        let response = self.post_with_retry("zero-shot", &body).await?;

        let parsed: ZeroShotResponse = response
            .json()
            .await
            .map_err(|e| NlpError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        if parsed.labels.len() != parsed.scores.len() {
            return Err(NlpError::InvalidResponse(format!(
                "{} labels but {} scores",
                parsed.labels.len(),
                parsed.scores.len()
            )));
        }

        Ok(parsed
            .labels
            .into_iter()
            .zip(parsed.scores)
            .map(|(label, score)| LabelScore { label, score })
            .collect())
    }

    /// POST a request body to a route, retrying with exponential backoff
    async fn post_with_retry<T: Serialize>(
        &self,
        route: &str,
        body: &T,
    ) -> Result<reqwest::Response, NlpError> {
        let url = format!("{}/{}", self.endpoint, route);

        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self.client.post(&url).json(body).send().await {
                Ok(response) => {
                    if response.status().is_success() {
                        return Ok(response);
                    } else if response.status() == reqwest::StatusCode::NOT_FOUND {
                        return Err(NlpError::ModelNotAvailable(route.to_string()));
                    } else {
                        let status = response.status();
                        let error_text = response
                            .text()
                            .await
                            .unwrap_or_else(|_| "Unknown error".to_string());
                        last_error = Some(NlpError::Communication(format!(
                            "HTTP {}: {}",
                            status, error_text
                        )));
                    }
                }
                Err(e) => {
                    last_error = Some(NlpError::Communication(format!("Request failed: {}", e)));
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                // Exponential backoff: 1s, 2s, 4s, etc.
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| NlpError::Communication("Max retries exceeded".to_string())))
    }
}

impl EntityRecognizerTrait for LocalInferenceProvider {
    type Error = NlpError;

    fn recognize(&self, text: &str) -> Result<Vec<EntityRecord>, Self::Error> {
        // Blocking wrapper for async function
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(async { self.recognize(text).await })
    }
}

impl ZeroShotClassifierTrait for LocalInferenceProvider {
    type Error = NlpError;

    fn classify(&self, text: &str, labels: &[&str]) -> Result<Vec<LabelScore>, Self::Error> {
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(async { self.classify(text, labels).await })
    }
}
