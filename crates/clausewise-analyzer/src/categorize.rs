//! Keyword-first clause categorization

use crate::config::AnalyzerConfig;
use crate::error::AnalyzerError;
use clausewise_domain::traits::LabelScore;
use clausewise_domain::{Category, CategoryAssignment, Clause};

/// Outcome of the keyword-matching pass over one clause
///
/// Categorization is a tagged dispatch between two strategies, not a
/// polymorphic classifier hierarchy: either the keyword table produced a
/// winner, or the clause must go to the semantic fallback.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    /// At least one category received a keyword hit
    KeywordMatch {
        /// Category with the maximum hit count (ties broken by declaration
        /// order)
        category: Category,
        /// winning hits / (total hits + 1)
        confidence: f64,
        /// All categories that received any hit, in declaration order
        evidence: Vec<Category>,
    },

    /// No category received any hit; the semantic capability decides
    SemanticFallback,
}

/// Keyword matcher over the configured category seed table
pub struct CategoryMatcher {
    table: Vec<(Category, Vec<String>)>,
}

impl CategoryMatcher {
    /// Build a matcher from a validated configuration
    pub fn from_config(config: &AnalyzerConfig) -> Result<Self, AnalyzerError> {
        let mut table = Vec::with_capacity(config.categories.len());
        for entry in &config.categories {
            let category = Category::parse(&entry.category).ok_or_else(|| {
                AnalyzerError::Config(format!("unknown category: {}", entry.category))
            })?;
            let keywords = entry.keywords.iter().map(|k| k.to_lowercase()).collect();
            table.push((category, keywords));
        }
        Ok(Self { table })
    }

    /// Count keyword hits and pick a winner, or defer to the fallback
    pub fn evaluate(&self, clause: &Clause) -> MatchOutcome {
        let lower = clause.to_lowercase();

        let mut hits: Vec<(Category, usize)> = Vec::new();
        for (category, keywords) in &self.table {
            let count = keywords
                .iter()
                .filter(|kw| lower.contains(kw.as_str()))
                .count();
            if count > 0 {
                hits.push((*category, count));
            }
        }

        if hits.is_empty() {
            return MatchOutcome::SemanticFallback;
        }

        let total: usize = hits.iter().map(|(_, count)| count).sum();
        // Strictly-greater comparison keeps the first-declared category on
        // ties.
        let (mut winner, mut wins) = hits[0];
        for &(category, count) in &hits[1..] {
            if count > wins {
                winner = category;
                wins = count;
            }
        }

        MatchOutcome::KeywordMatch {
            category: winner,
            confidence: wins as f64 / (total as f64 + 1.0),
            evidence: hits.into_iter().map(|(category, _)| category).collect(),
        }
    }

    /// Candidate labels for the semantic fallback: every configured
    /// category plus the `Other` sentinel.
    pub fn candidate_labels(&self) -> Vec<&'static str> {
        let mut labels: Vec<&'static str> =
            self.table.iter().map(|(category, _)| category.as_str()).collect();
        labels.push(Category::Other.as_str());
        labels
    }
}

/// Resolve a fallback ranking into an assignment.
///
/// The top-ranked label becomes the category; an empty ranking or a label
/// outside the known set is treated as a malformed capability response and
/// yields the degraded assignment.
pub fn resolve_fallback(ranking: &[LabelScore]) -> CategoryAssignment {
    match ranking.first() {
        Some(top) => match Category::parse(&top.label) {
            Some(category) => {
                CategoryAssignment::fallback(category, top.score.clamp(0.0, 1.0))
            }
            None => CategoryAssignment::degraded(),
        },
        None => CategoryAssignment::degraded(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> CategoryMatcher {
        CategoryMatcher::from_config(&AnalyzerConfig::default()).unwrap()
    }

    fn clause(text: &str) -> Clause {
        Clause::new(text).unwrap()
    }

    #[test]
    fn test_single_category_hit() {
        let outcome = matcher().evaluate(&clause("The invoice is payable on receipt."));
        match outcome {
            MatchOutcome::KeywordMatch {
                category,
                confidence,
                evidence,
            } => {
                assert_eq!(category, Category::Payment);
                // 2 Payment hits ("invoice", "payable"), total 2: 2 / 3.
                assert!((confidence - 2.0 / 3.0).abs() < 1e-9);
                assert_eq!(evidence, vec![Category::Payment]);
            }
            other => panic!("expected keyword match, got {:?}", other),
        }
    }

    #[test]
    fn test_max_hits_wins() {
        // "late fee" and "interest" hit Penalty twice; "payment" hits
        // Payment once.
        let outcome = matcher().evaluate(&clause(
            "A late fee and interest accrue on any overdue payment.",
        ));
        match outcome {
            MatchOutcome::KeywordMatch {
                category, evidence, ..
            } => {
                assert_eq!(category, Category::Penalty);
                assert_eq!(evidence, vec![Category::Payment, Category::Penalty]);
            }
            other => panic!("expected keyword match, got {:?}", other),
        }
    }

    #[test]
    fn test_tie_broken_by_declaration_order() {
        // "invoice" (Payment) and "fine" (Penalty): one hit each. Payment is
        // declared first and must win, deterministically.
        for _ in 0..10 {
            let outcome = matcher().evaluate(&clause("The fine is listed on the invoice."));
            match outcome {
                MatchOutcome::KeywordMatch { category, .. } => {
                    assert_eq!(category, Category::Payment);
                }
                other => panic!("expected keyword match, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let outcome = matcher().evaluate(&clause("ALL INFORMATION IS CONFIDENTIAL."));
        match outcome {
            MatchOutcome::KeywordMatch { category, .. } => {
                assert_eq!(category, Category::Confidentiality);
            }
            other => panic!("expected keyword match, got {:?}", other),
        }
    }

    #[test]
    fn test_no_hits_defers_to_fallback() {
        let outcome = matcher().evaluate(&clause("The sky was grey over the harbour."));
        assert_eq!(outcome, MatchOutcome::SemanticFallback);
    }

    #[test]
    fn test_candidate_labels_include_other() {
        let labels = matcher().candidate_labels();
        assert_eq!(labels.len(), 7);
        assert_eq!(labels[0], "Payment");
        assert_eq!(*labels.last().unwrap(), "Other");
    }

    #[test]
    fn test_resolve_fallback_top_label() {
        let ranking = vec![
            LabelScore {
                label: "Termination".to_string(),
                score: 0.81,
            },
            LabelScore {
                label: "Other".to_string(),
                score: 0.19,
            },
        ];
        let assignment = resolve_fallback(&ranking);
        assert_eq!(assignment.category, Category::Termination);
        assert!((assignment.confidence - 0.81).abs() < 1e-9);
        assert!(assignment.evidence.is_empty());
    }

    #[test]
    fn test_resolve_fallback_empty_ranking_degrades() {
        let assignment = resolve_fallback(&[]);
        assert_eq!(assignment, CategoryAssignment::degraded());
    }

    #[test]
    fn test_resolve_fallback_unknown_label_degrades() {
        let ranking = vec![LabelScore {
            label: "Gibberish".to_string(),
            score: 0.99,
        }];
        assert_eq!(resolve_fallback(&ranking), CategoryAssignment::degraded());
    }

    #[test]
    fn test_resolve_fallback_clamps_score() {
        let ranking = vec![LabelScore {
            label: "SLA".to_string(),
            score: 1.7,
        }];
        let assignment = resolve_fallback(&ranking);
        assert_eq!(assignment.confidence, 1.0);
    }
}
