//! Entity signals module - counts reduced from recognized entities

/// A single entity recognized in a clause by the external capability
///
/// Passed through unmodified for optional user inspection; the pipeline
/// itself only consumes the reduced counts in [`EntitySignals`].
#[derive(Debug, Clone, PartialEq)]
pub struct EntityRecord {
    /// Surface text the recognizer matched (e.g. "£5,000")
    pub text: String,

    /// Recognized type label as reported by the capability (e.g. "MONEY")
    pub label: String,

    /// Recognizer confidence in [0.0, 1.0]
    pub score: f64,
}

/// Risk signals reduced from the entities recognized in one clause
#[derive(Debug, Clone, PartialEq)]
pub struct EntitySignals {
    /// Total number of recognized entities
    pub entity_count: usize,

    /// Entities counted as monetary mentions
    pub monetary_count: usize,

    /// Entities counted as date mentions
    pub date_count: usize,

    /// Raw entity records from the capability, for inspection
    pub entities: Vec<EntityRecord>,
}

impl EntitySignals {
    /// Zeroed signals, used when the recognition capability fails or the
    /// clause yields no entities.
    pub fn empty() -> Self {
        Self {
            entity_count: 0,
            monetary_count: 0,
            date_count: 0,
            entities: Vec::new(),
        }
    }
}

impl Default for EntitySignals {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_signals() {
        let signals = EntitySignals::empty();
        assert_eq!(signals.entity_count, 0);
        assert_eq!(signals.monetary_count, 0);
        assert_eq!(signals.date_count, 0);
        assert!(signals.entities.is_empty());
    }
}
