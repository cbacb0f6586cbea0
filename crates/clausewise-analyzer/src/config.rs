//! Configuration for the analyzer

use clausewise_domain::Category;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Seed keywords for one clause category
///
/// The position of an entry in [`AnalyzerConfig::categories`] is its
/// declaration order, which breaks ties when two categories receive the
/// same keyword hit count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryKeywords {
    /// Category name (must parse to a classifiable [`Category`])
    pub category: String,

    /// Case-insensitive substring seeds for this category
    pub keywords: Vec<String>,
}

impl CategoryKeywords {
    fn new(category: Category, keywords: &[&str]) -> Self {
        Self {
            category: category.as_str().to_string(),
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Configuration for the analyzer
///
/// The defaults reproduce the seed keyword tables and rule weights of the
/// reference rule set; everything is reconfigurable and validated at
/// analyzer construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Seed keyword table per category, in tie-break order
    pub categories: Vec<CategoryKeywords>,

    /// Keywords adding `high_risk_weight` each
    pub high_risk_keywords: Vec<String>,

    /// Keywords adding `medium_risk_weight` each
    pub medium_risk_keywords: Vec<String>,

    /// Keywords adding `low_risk_weight` each
    pub low_risk_keywords: Vec<String>,

    /// Score added per high-risk keyword found
    pub high_risk_weight: u32,

    /// Score added per medium-risk keyword found
    pub medium_risk_weight: u32,

    /// Score added per low-risk keyword found
    pub low_risk_weight: u32,

    /// Score added when the assigned category raises baseline risk
    pub category_weight: u32,

    /// Score added when monetary mentions are present
    pub monetary_weight: u32,

    /// Score added when date mentions are present
    pub date_weight: u32,

    /// Entity labels counted as monetary mentions (MISC is included because
    /// general-purpose recognizers frequently mis-tag currency amounts)
    pub monetary_labels: Vec<String>,

    /// Entity labels counted as date mentions
    pub date_labels: Vec<String>,

    /// Currency symbols that mark an entity as monetary regardless of label
    pub currency_symbols: Vec<String>,

    /// Minimum fragment length (characters) for segmentation deduplication;
    /// fragments at or below this length are always kept
    pub dedup_min_len: usize,

    /// Maximum time for a single external-capability call (seconds)
    pub capability_timeout_secs: u64,
}

impl AnalyzerConfig {
    /// Get the capability timeout as a Duration
    pub fn capability_timeout(&self) -> Duration {
        Duration::from_secs(self.capability_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.categories.is_empty() {
            return Err("categories must not be empty".to_string());
        }
        let mut seen = Vec::new();
        for entry in &self.categories {
            let category = Category::parse(&entry.category)
                .ok_or_else(|| format!("unknown category: {}", entry.category))?;
            if category == Category::Other {
                return Err("'Other' is reserved for the fallback path".to_string());
            }
            if seen.contains(&category) {
                return Err(format!("duplicate category: {}", entry.category));
            }
            if entry.keywords.is_empty() {
                return Err(format!("category {} has no keywords", entry.category));
            }
            seen.push(category);
        }
        if self.high_risk_keywords.is_empty()
            || self.medium_risk_keywords.is_empty()
            || self.low_risk_keywords.is_empty()
        {
            return Err("risk keyword lists must not be empty".to_string());
        }
        if self.high_risk_weight == 0 || self.medium_risk_weight == 0 || self.low_risk_weight == 0
        {
            return Err("risk keyword weights must be greater than 0".to_string());
        }
        if self.monetary_labels.is_empty() || self.date_labels.is_empty() {
            return Err("entity label sets must not be empty".to_string());
        }
        if self.capability_timeout_secs == 0 {
            return Err("capability_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            categories: vec![
                CategoryKeywords::new(
                    Category::Payment,
                    &[
                        "payment",
                        "payable",
                        "invoice",
                        "due within",
                        "net",
                        "currency",
                        "bank transfer",
                        "remit",
                    ],
                ),
                CategoryKeywords::new(
                    Category::Penalty,
                    &[
                        "penalty",
                        "liquidated damages",
                        "fine",
                        "late fee",
                        "late payment",
                        "interest",
                    ],
                ),
                CategoryKeywords::new(
                    Category::Sla,
                    &[
                        "service level",
                        "uptime",
                        "downtime",
                        "response time",
                        "availability",
                        "sla",
                    ],
                ),
                CategoryKeywords::new(
                    Category::Liability,
                    &[
                        "liability",
                        "indemnif",
                        "indemnify",
                        "hold harmless",
                        "loss",
                        "damages",
                    ],
                ),
                CategoryKeywords::new(
                    Category::Confidentiality,
                    &[
                        "confidential",
                        "non-disclosure",
                        "nda",
                        "proprietary",
                        "privacy",
                    ],
                ),
                CategoryKeywords::new(
                    Category::Termination,
                    &[
                        "terminate",
                        "termination",
                        "breach",
                        "cause",
                        "without cause",
                        "with cause",
                    ],
                ),
            ],
            high_risk_keywords: [
                "termination",
                "liquidated damages",
                "unilateral",
                "breach",
                "indemnify",
                "hold harmless",
                "penalty",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            medium_risk_keywords: [
                "late fee",
                "interest",
                "delay penalties",
                "service level",
                "uptime",
                "availability",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            low_risk_keywords: ["payment within", "invoice", "net", "currency"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            high_risk_weight: 40,
            medium_risk_weight: 20,
            low_risk_weight: 5,
            category_weight: 20,
            monetary_weight: 15,
            date_weight: 5,
            monetary_labels: vec!["MONEY".to_string(), "MISC".to_string()],
            date_labels: vec!["DATE".to_string()],
            currency_symbols: vec!["£".to_string(), "$".to_string(), "€".to_string()],
            dedup_min_len: 20,
            capability_timeout_secs: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AnalyzerConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_categories_in_declaration_order() {
        let config = AnalyzerConfig::default();
        let names: Vec<&str> = config
            .categories
            .iter()
            .map(|c| c.category.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "Payment",
                "Penalty",
                "SLA",
                "Liability",
                "Confidentiality",
                "Termination"
            ]
        );
    }

    #[test]
    fn test_invalid_zero_weight() {
        let mut config = AnalyzerConfig::default();
        config.high_risk_weight = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_unknown_category() {
        let mut config = AnalyzerConfig::default();
        config.categories[0].category = "Arbitration".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_other_in_table() {
        let mut config = AnalyzerConfig::default();
        config.categories[0].category = "Other".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_duplicate_category() {
        let mut config = AnalyzerConfig::default();
        let dup = config.categories[0].clone();
        config.categories.push(dup);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_empty_keyword_list() {
        let mut config = AnalyzerConfig::default();
        config.low_risk_keywords.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_zero_timeout() {
        let mut config = AnalyzerConfig::default();
        config.capability_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AnalyzerConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = AnalyzerConfig::from_toml(&toml_str).unwrap();

        assert_eq!(config.categories.len(), parsed.categories.len());
        assert_eq!(config.high_risk_keywords, parsed.high_risk_keywords);
        assert_eq!(config.dedup_min_len, parsed.dedup_min_len);
        assert_eq!(
            config.capability_timeout_secs,
            parsed.capability_timeout_secs
        );
    }
}
