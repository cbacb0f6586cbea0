//! Core analysis pipeline implementation

use crate::categorize::{resolve_fallback, CategoryMatcher, MatchOutcome};
use crate::config::AnalyzerConfig;
use crate::entities::SignalRules;
use crate::error::AnalyzerError;
use crate::risk::RiskScorer;
use crate::segmenter::Segmenter;
use crate::types::{AnalysisMetadata, AnalysisRequest, AnalysisResult};
use clausewise_domain::traits::{EntityRecognizer, ZeroShotClassifier};
use clausewise_domain::{CategoryAssignment, Clause, ClauseRecord, EntitySignals};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// The Analyzer runs the clause pipeline over a document
///
/// Capability handles are injected explicitly; the analyzer holds no global
/// state, so the run is deterministic given the same text and the same
/// capability responses. A capability failure or timeout on one clause
/// degrades that clause locally and never affects any other clause.
pub struct Analyzer<R, C>
where
    R: EntityRecognizer,
    C: ZeroShotClassifier,
{
    recognizer: Arc<R>,
    classifier: Arc<C>,
    segmenter: Segmenter,
    matcher: CategoryMatcher,
    signal_rules: SignalRules,
    scorer: RiskScorer,
    capability_timeout: Duration,
}

impl<R, C> Analyzer<R, C>
where
    R: EntityRecognizer + Send + Sync + 'static,
    C: ZeroShotClassifier + Send + Sync + 'static,
    R::Error: std::fmt::Display,
    C::Error: std::fmt::Display,
{
    /// Create a new Analyzer from capability handles and configuration
    pub fn new(recognizer: R, classifier: C, config: AnalyzerConfig) -> Result<Self, AnalyzerError> {
        config.validate().map_err(AnalyzerError::Config)?;

        Ok(Self {
            recognizer: Arc::new(recognizer),
            classifier: Arc::new(classifier),
            segmenter: Segmenter::new(config.dedup_min_len),
            matcher: CategoryMatcher::from_config(&config)?,
            signal_rules: SignalRules::from_config(&config),
            scorer: RiskScorer::from_config(&config),
            capability_timeout: config.capability_timeout(),
        })
    }

    /// Analyze a document
    ///
    /// Segments once, then for each clause in order assigns a category,
    /// extracts entity signals, and scores risk. There is no fatal error
    /// path: the worst case for any clause is the maximally degraded
    /// category and zeroed signals, from which a score is still computed.
    pub async fn analyze(&self, request: AnalysisRequest) -> AnalysisResult {
        let start_time = SystemTime::now();

        info!(
            "Starting analysis for source '{}', text length {}",
            request.source_id,
            request.text.len()
        );

        let clauses = self.segmenter.segment(&request.text);
        info!("Segmented into {} clauses", clauses.len());

        let mut records = Vec::with_capacity(clauses.len());
        for (idx, clause) in clauses.into_iter().enumerate() {
            let id = idx + 1;
            debug!("Processing clause {} ({} chars)", id, clause.char_count());

            let category = self.assign_category(&clause).await;
            let signals = self.extract_signals(&clause).await;
            let risk = self.scorer.score(&clause, category.category, &signals);

            records.push(ClauseRecord {
                id,
                clause,
                category,
                signals,
                risk,
            });
        }

        let processing_time_ms = start_time
            .elapsed()
            .unwrap_or(Duration::from_secs(0))
            .as_millis() as u64;

        let metadata = AnalysisMetadata {
            source_id: request.source_id,
            timestamp: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_secs(),
            clause_count: records.len(),
            processing_time_ms,
        };

        info!(
            "Analysis complete: {} clauses in {} ms",
            metadata.clause_count, metadata.processing_time_ms
        );

        AnalysisResult { records, metadata }
    }

    /// Assign a category: keyword match first, semantic fallback second
    async fn assign_category(&self, clause: &Clause) -> CategoryAssignment {
        match self.matcher.evaluate(clause) {
            MatchOutcome::KeywordMatch {
                category,
                confidence,
                evidence,
            } => CategoryAssignment::keyword_match(category, confidence, evidence),
            MatchOutcome::SemanticFallback => self.classify_fallback(clause).await,
        }
    }

    /// Invoke the semantic-classification capability, degrading on failure
    async fn classify_fallback(&self, clause: &Clause) -> CategoryAssignment {
        let classifier = Arc::clone(&self.classifier);
        let labels = self.matcher.candidate_labels();
        let text = clause.as_str().to_string();

        let call = tokio::task::spawn_blocking(move || {
            classifier
                .classify(&text, &labels)
                .map_err(|e| e.to_string())
        });

        match timeout(self.capability_timeout, call).await {
            Ok(Ok(Ok(ranking))) => resolve_fallback(&ranking),
            Ok(Ok(Err(e))) => {
                warn!("Semantic classification failed: {}", e);
                CategoryAssignment::degraded()
            }
            Ok(Err(e)) => {
                warn!("Semantic classification task failed: {}", e);
                CategoryAssignment::degraded()
            }
            Err(_) => {
                warn!("Semantic classification timed out");
                CategoryAssignment::degraded()
            }
        }
    }

    /// Invoke the entity-recognition capability, degrading on failure
    async fn extract_signals(&self, clause: &Clause) -> EntitySignals {
        let recognizer = Arc::clone(&self.recognizer);
        let text = clause.as_str().to_string();

        let call =
            tokio::task::spawn_blocking(move || {
                recognizer.recognize(&text).map_err(|e| e.to_string())
            });

        match timeout(self.capability_timeout, call).await {
            Ok(Ok(Ok(entities))) => self.signal_rules.reduce(entities),
            Ok(Ok(Err(e))) => {
                warn!("Entity recognition failed: {}", e);
                EntitySignals::empty()
            }
            Ok(Err(e)) => {
                warn!("Entity recognition task failed: {}", e);
                EntitySignals::empty()
            }
            Err(_) => {
                warn!("Entity recognition timed out");
                EntitySignals::empty()
            }
        }
    }
}
