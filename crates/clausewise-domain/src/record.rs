//! Clause record module - the unit of pipeline output

use crate::category::CategoryAssignment;
use crate::clause::Clause;
use crate::risk::RiskResult;
use crate::signals::EntitySignals;

/// One clause joined with everything the pipeline derived for it
///
/// Records are created fresh per analysis run and are immutable once
/// produced. `id` is a stable 1-based sequence number reflecting the
/// clause's position in the segmenter's output (source order).
#[derive(Debug, Clone, PartialEq)]
pub struct ClauseRecord {
    /// 1-based position in source order
    pub id: usize,

    /// The clause text
    pub clause: Clause,

    /// Assigned category with confidence and evidence
    pub category: CategoryAssignment,

    /// Entity-derived risk signals
    pub signals: EntitySignals,

    /// Scored risk with reasons
    pub risk: RiskResult,
}
