//! Entity signal reduction

use crate::config::AnalyzerConfig;
use clausewise_domain::{EntityRecord, EntitySignals};

/// Rules for reducing recognized entities to risk signals
///
/// An entity counts as monetary when its label is in the configured
/// monetary set OR its surface text contains a configured currency symbol;
/// the symbol check exists because general-purpose recognizers frequently
/// mis-tag currency amounts as a miscellaneous category. An entity counts
/// as a date when its label is in the configured date set.
pub struct SignalRules {
    monetary_labels: Vec<String>,
    date_labels: Vec<String>,
    currency_symbols: Vec<String>,
}

impl SignalRules {
    /// Build signal rules from configuration
    pub fn from_config(config: &AnalyzerConfig) -> Self {
        Self {
            monetary_labels: config
                .monetary_labels
                .iter()
                .map(|l| l.to_uppercase())
                .collect(),
            date_labels: config.date_labels.iter().map(|l| l.to_uppercase()).collect(),
            currency_symbols: config.currency_symbols.clone(),
        }
    }

    /// Reduce a recognized entity list to signals
    pub fn reduce(&self, entities: Vec<EntityRecord>) -> EntitySignals {
        let monetary_count = entities
            .iter()
            .filter(|e| self.is_monetary(e))
            .count();
        let date_count = entities
            .iter()
            .filter(|e| self.date_labels.contains(&e.label.to_uppercase()))
            .count();

        EntitySignals {
            entity_count: entities.len(),
            monetary_count,
            date_count,
            entities,
        }
    }

    fn is_monetary(&self, entity: &EntityRecord) -> bool {
        self.monetary_labels.contains(&entity.label.to_uppercase())
            || self
                .currency_symbols
                .iter()
                .any(|symbol| entity.text.contains(symbol.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> SignalRules {
        SignalRules::from_config(&AnalyzerConfig::default())
    }

    fn entity(text: &str, label: &str) -> EntityRecord {
        EntityRecord {
            text: text.to_string(),
            label: label.to_string(),
            score: 0.9,
        }
    }

    #[test]
    fn test_monetary_by_label() {
        let signals = rules().reduce(vec![entity("5,000 dollars", "MONEY")]);
        assert_eq!(signals.monetary_count, 1);
        assert_eq!(signals.date_count, 0);
        assert_eq!(signals.entity_count, 1);
    }

    #[test]
    fn test_monetary_by_currency_symbol() {
        // Recognizer mis-tags the amount as an organization; the symbol
        // check still counts it.
        let signals = rules().reduce(vec![entity("£5,000", "ORG")]);
        assert_eq!(signals.monetary_count, 1);
    }

    #[test]
    fn test_misc_label_counts_as_monetary() {
        let signals = rules().reduce(vec![entity("5,000", "MISC")]);
        assert_eq!(signals.monetary_count, 1);
    }

    #[test]
    fn test_date_by_label() {
        let signals = rules().reduce(vec![entity("1 March 2026", "DATE")]);
        assert_eq!(signals.date_count, 1);
        assert_eq!(signals.monetary_count, 0);
    }

    #[test]
    fn test_label_matching_is_case_insensitive() {
        let signals = rules().reduce(vec![entity("tomorrow", "date")]);
        assert_eq!(signals.date_count, 1);
    }

    #[test]
    fn test_unrelated_entities_only_counted_in_total() {
        let signals = rules().reduce(vec![
            entity("Acme Ltd", "ORG"),
            entity("London", "LOC"),
        ]);
        assert_eq!(signals.entity_count, 2);
        assert_eq!(signals.monetary_count, 0);
        assert_eq!(signals.date_count, 0);
    }

    #[test]
    fn test_raw_entities_passed_through() {
        let input = vec![entity("$250", "MONEY"), entity("Friday", "DATE")];
        let signals = rules().reduce(input.clone());
        assert_eq!(signals.entities, input);
    }

    #[test]
    fn test_empty_input() {
        let signals = rules().reduce(Vec::new());
        assert_eq!(signals, EntitySignals::empty());
    }
}
