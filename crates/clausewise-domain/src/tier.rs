//! Risk tier module - discrete risk buckets

/// Discrete risk tier derived from a numeric risk score
///
/// Tier assignment is a pure function of the clamped score with fixed,
/// inclusive lower bounds:
/// - score >= 60: High
/// - 30 <= score < 60: Medium
/// - score < 30: Low
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskTier {
    /// Elevated legal/financial exposure; review first
    High,

    /// Noteworthy exposure; review after High
    Medium,

    /// Routine language
    Low,
}

/// Inclusive lower bound of the High tier.
pub const HIGH_THRESHOLD: u8 = 60;

/// Inclusive lower bound of the Medium tier.
pub const MEDIUM_THRESHOLD: u8 = 30;

impl RiskTier {
    /// Derive the tier from a clamped [0, 100] score
    pub fn from_score(score: u8) -> Self {
        if score >= HIGH_THRESHOLD {
            RiskTier::High
        } else if score >= MEDIUM_THRESHOLD {
            RiskTier::Medium
        } else {
            RiskTier::Low
        }
    }

    /// Get the tier name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::High => "High",
            RiskTier::Medium => "Medium",
            RiskTier::Low => "Low",
        }
    }

    /// Parse a tier from a string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "high" => Some(RiskTier::High),
            "medium" => Some(RiskTier::Medium),
            "low" => Some(RiskTier::Low),
            _ => None,
        }
    }
}

impl std::str::FromStr for RiskTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid risk tier: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(RiskTier::from_score(59), RiskTier::Medium);
        assert_eq!(RiskTier::from_score(60), RiskTier::High);
        assert_eq!(RiskTier::from_score(29), RiskTier::Low);
        assert_eq!(RiskTier::from_score(30), RiskTier::Medium);
    }

    #[test]
    fn test_tier_extremes() {
        assert_eq!(RiskTier::from_score(0), RiskTier::Low);
        assert_eq!(RiskTier::from_score(100), RiskTier::High);
    }

    #[test]
    fn test_parse_round_trip() {
        for tier in [RiskTier::High, RiskTier::Medium, RiskTier::Low] {
            assert_eq!(RiskTier::parse(tier.as_str()), Some(tier));
        }
        assert_eq!(RiskTier::parse("severe"), None);
    }

    proptest! {
        #[test]
        fn test_every_score_maps_to_consistent_tier(score in 0u8..=100) {
            let tier = RiskTier::from_score(score);
            match tier {
                RiskTier::High => prop_assert!(score >= HIGH_THRESHOLD),
                RiskTier::Medium => {
                    prop_assert!(score >= MEDIUM_THRESHOLD && score < HIGH_THRESHOLD)
                }
                RiskTier::Low => prop_assert!(score < MEDIUM_THRESHOLD),
            }
        }
    }
}
