//! Category module - clause topics and category assignments

/// Semantic category of a contract clause
///
/// The set is closed and extensible only by reconfiguration of the keyword
/// tables. `Other` is a sentinel reserved for the semantic-fallback path and
/// never participates in keyword matching.
///
/// The declaration order of the classifiable variants is significant: it is
/// the tie-break order when two categories receive the same keyword hit
/// count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Payment terms, invoicing, currency
    Payment,

    /// Penalties, liquidated damages, fines
    Penalty,

    /// Service levels, uptime, availability
    Sla,

    /// Liability, indemnification, hold harmless
    Liability,

    /// Confidentiality and non-disclosure
    Confidentiality,

    /// Termination and breach
    Termination,

    /// Sentinel for clauses no category claims (fallback path only)
    Other,
}

impl Category {
    /// The classifiable categories in fixed declaration order.
    ///
    /// This order drives keyword-table iteration and tie-breaking; `Other`
    /// is deliberately excluded.
    pub const CLASSIFIABLE: [Category; 6] = [
        Category::Payment,
        Category::Penalty,
        Category::Sla,
        Category::Liability,
        Category::Confidentiality,
        Category::Termination,
    ];

    /// Get the category name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Payment => "Payment",
            Category::Penalty => "Penalty",
            Category::Sla => "SLA",
            Category::Liability => "Liability",
            Category::Confidentiality => "Confidentiality",
            Category::Termination => "Termination",
            Category::Other => "Other",
        }
    }

    /// Parse a category from a string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "payment" => Some(Category::Payment),
            "penalty" => Some(Category::Penalty),
            "sla" => Some(Category::Sla),
            "liability" => Some(Category::Liability),
            "confidentiality" => Some(Category::Confidentiality),
            "termination" => Some(Category::Termination),
            "other" => Some(Category::Other),
            _ => None,
        }
    }

    /// Whether this category raises baseline risk when assigned to a clause.
    ///
    /// Liability, Termination, and Penalty clauses carry elevated legal and
    /// financial exposure regardless of their keyword content.
    pub fn elevates_risk(&self) -> bool {
        matches!(
            self,
            Category::Liability | Category::Termination | Category::Penalty
        )
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid category: {}", s))
    }
}

/// The category assigned to a single clause, with confidence and evidence
///
/// Confidence on the keyword path is a hit-count ratio; on the fallback path
/// it is the model's score for the winning label. The two are NOT on a
/// comparable scale and no calibration between them is attempted.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryAssignment {
    /// The winning category
    pub category: Category,

    /// Confidence in [0.0, 1.0] (scale depends on the assignment path)
    pub confidence: f64,

    /// Categories that received at least one keyword hit, in declaration
    /// order. Empty when the semantic fallback was used.
    pub evidence: Vec<Category>,
}

impl CategoryAssignment {
    /// Assignment produced by the keyword-matching path
    pub fn keyword_match(category: Category, confidence: f64, evidence: Vec<Category>) -> Self {
        Self {
            category,
            confidence,
            evidence,
        }
    }

    /// Assignment produced by the semantic-fallback path (no evidence)
    pub fn fallback(category: Category, confidence: f64) -> Self {
        Self {
            category,
            confidence,
            evidence: Vec::new(),
        }
    }

    /// Maximally degraded assignment, used when the fallback capability
    /// itself fails: `Other` with zero confidence and no evidence.
    pub fn degraded() -> Self {
        Self::fallback(Category::Other, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifiable_order_is_stable() {
        let names: Vec<&str> = Category::CLASSIFIABLE.iter().map(|c| c.as_str()).collect();
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
    fn test_other_not_classifiable() {
        assert!(!Category::CLASSIFIABLE.contains(&Category::Other));
    }

    #[test]
    fn test_parse_round_trip() {
        for cat in Category::CLASSIFIABLE {
            assert_eq!(Category::parse(cat.as_str()), Some(cat));
        }
        assert_eq!(Category::parse("other"), Some(Category::Other));
        assert_eq!(Category::parse("unknown"), None);
    }

    #[test]
    fn test_elevated_categories() {
        assert!(Category::Liability.elevates_risk());
        assert!(Category::Termination.elevates_risk());
        assert!(Category::Penalty.elevates_risk());
        assert!(!Category::Payment.elevates_risk());
        assert!(!Category::Sla.elevates_risk());
        assert!(!Category::Confidentiality.elevates_risk());
        assert!(!Category::Other.elevates_risk());
    }

    #[test]
    fn test_degraded_assignment() {
        let assignment = CategoryAssignment::degraded();
        assert_eq!(assignment.category, Category::Other);
        assert_eq!(assignment.confidence, 0.0);
        assert!(assignment.evidence.is_empty());
    }
}
