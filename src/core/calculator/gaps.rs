//! Inter-feed gaps over the whole log, in chronological order.

use crate::models::FeedSession;
use crate::utils::time::gap_seconds;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GapInfo {
    pub total_gap_seconds: i64,
    /// Number of non-negative gaps that went into the total.
    pub gap_count: i64,
}

impl GapInfo {
    /// Average gap in whole seconds, 0 when no gap was valid.
    pub fn average_seconds(&self) -> i64 {
        if self.gap_count > 0 {
            self.total_gap_seconds / self.gap_count
        } else {
            0
        }
    }
}

/// Sort by start time, then accumulate `current.start - previous.end` for
/// each adjacent pair. Overlapping or out-of-order pairs are skipped.
pub fn analyze_gaps(sessions: &[FeedSession]) -> GapInfo {
    let mut sorted: Vec<&FeedSession> = sessions.iter().collect();
    sorted.sort_by_key(|s| s.start_time);

    let mut info = GapInfo::default();
    for w in sorted.windows(2) {
        if let Some(gap) = gap_seconds(w[0].end_time, w[1].start_time) {
            info.total_gap_seconds += gap;
            info.gap_count += 1;
        }
    }

    info
}
