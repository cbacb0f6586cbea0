//! Additive rule-based risk scoring

use crate::config::AnalyzerConfig;
use clausewise_domain::{Category, Clause, EntitySignals, RiskResult};

/// One keyword rule in the ordered rule list
struct KeywordRule {
    /// Lowercased keyword, matched as a case-insensitive substring
    keyword: String,
    weight: u32,
    /// "high-risk", "medium-risk", or "low-risk" (used in the reason text)
    level: &'static str,
}

/// Scores a clause from its text, assigned category, and entity signals
///
/// Scoring is strictly additive from 0 over an explicit ordered rule list:
/// high-risk keywords, then medium, then low (each keyword fires at most
/// once per clause), then the elevated-category boost, then the monetary
/// and date signals. The sum is clamped to [0, 100] and every fired rule
/// contributes exactly one reason, in evaluation order.
pub struct RiskScorer {
    keyword_rules: Vec<KeywordRule>,
    category_weight: u32,
    monetary_weight: u32,
    date_weight: u32,
}

impl RiskScorer {
    /// Build a scorer from configuration
    pub fn from_config(config: &AnalyzerConfig) -> Self {
        let mut keyword_rules = Vec::new();
        let groups = [
            (&config.high_risk_keywords, config.high_risk_weight, "high-risk"),
            (
                &config.medium_risk_keywords,
                config.medium_risk_weight,
                "medium-risk",
            ),
            (&config.low_risk_keywords, config.low_risk_weight, "low-risk"),
        ];
        for (keywords, weight, level) in groups {
            for keyword in keywords {
                keyword_rules.push(KeywordRule {
                    keyword: keyword.to_lowercase(),
                    weight,
                    level,
                });
            }
        }

        Self {
            keyword_rules,
            category_weight: config.category_weight,
            monetary_weight: config.monetary_weight,
            date_weight: config.date_weight,
        }
    }

    /// Score one clause
    pub fn score(
        &self,
        clause: &Clause,
        category: Category,
        signals: &EntitySignals,
    ) -> RiskResult {
        let lower = clause.to_lowercase();

        let mut raw: i64 = 0;
        let mut reasons = Vec::new();

        for rule in &self.keyword_rules {
            if lower.contains(rule.keyword.as_str()) {
                raw += i64::from(rule.weight);
                reasons.push(format!(
                    "Contains {} keyword: \"{}\"",
                    rule.level, rule.keyword
                ));
            }
        }

        if category.elevates_risk() {
            raw += i64::from(self.category_weight);
            reasons.push(format!(
                "Clause category \"{}\" raises baseline risk",
                category.as_str()
            ));
        }

        if signals.monetary_count > 0 {
            raw += i64::from(self.monetary_weight);
            reasons.push("Monetary amounts detected".to_string());
        }

        if signals.date_count > 0 {
            raw += i64::from(self.date_weight);
            reasons.push("Dates detected (deadlines, terms)".to_string());
        }

        RiskResult::from_raw_score(raw, reasons)
    }
}
