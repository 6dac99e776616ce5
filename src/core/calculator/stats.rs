use crate::core::calculator::gaps::{GapInfo, analyze_gaps};
use crate::models::FeedSession;

/// Aggregate statistics over the full log.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FeedStats {
    pub total_sessions: usize,
    pub breast_feeds: usize,
    pub formula_feeds: usize,
    pub vomits: usize,
    pub missed_burps: usize,
    pub gaps: GapInfo,
}

impl FeedStats {
    pub fn average_gap_seconds(&self) -> i64 {
        self.gaps.average_seconds()
    }
}

pub fn compute_stats(sessions: &[FeedSession]) -> FeedStats {
    let mut stats = FeedStats {
        total_sessions: sessions.len(),
        gaps: analyze_gaps(sessions),
        ..Default::default()
    };

    for s in sessions {
        if s.feed_type.is_breast() {
            stats.breast_feeds += 1;
        }
        if s.feed_type.is_formula() {
            stats.formula_feeds += 1;
        }
        if s.vomit {
            stats.vomits += 1;
        }
        if s.missed_burp() {
            stats.missed_burps += 1;
        }
    }

    stats
}
