//! Day-by-day browsing of the log: calendar-date buckets, the older/newer
//! pager and the gap shown before each session.

use crate::models::FeedSession;
use crate::utils::date::{date_key, day_label};
use crate::utils::time::gap_seconds;
use chrono::{NaiveDate, TimeZone};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayBucket {
    pub date: NaiveDate,
    /// e.g. `Monday, January 6`
    pub label: String,
    /// Sessions started that day, in collection order.
    pub sessions: Vec<FeedSession>,
}

impl DayBucket {
    pub fn key(&self) -> String {
        date_key(&self.date)
    }
}

/// Partition sessions by the local calendar date of `start_time`.
/// Buckets come out newest date first.
pub fn group_by_calendar_date<Tz: TimeZone>(sessions: &[FeedSession], tz: &Tz) -> Vec<DayBucket> {
    let mut by_date: BTreeMap<NaiveDate, Vec<FeedSession>> = BTreeMap::new();

    for s in sessions {
        by_date
            .entry(s.start_date_in(tz))
            .or_default()
            .push(s.clone());
    }

    by_date
        .into_iter()
        .rev()
        .map(|(date, sessions)| DayBucket {
            label: day_label(&date),
            date,
            sessions,
        })
        .collect()
}

/// Seconds between the previous session's end (next one in collection
/// order) and this session's start. `None` when there is no previous
/// session, the session is not in the collection, or the gap is negative.
pub fn gap_before(session: &FeedSession, sessions: &[FeedSession]) -> Option<i64> {
    let idx = sessions.iter().position(|s| s.id == session.id)?;
    let previous = sessions.get(idx + 1)?;
    gap_seconds(previous.end_time, session.start_time)
}

/// Older/newer navigation over date buckets. Index 0 is the newest day.
#[derive(Debug, Clone, Default)]
pub struct DayPager {
    index: usize,
    day_count: usize,
    seen_len: usize,
}

impl DayPager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refresh against the current log. Jumps back to the newest day
    /// whenever the number of stored sessions changed.
    pub fn sync(&mut self, day_count: usize, log_len: usize) {
        if log_len != self.seen_len {
            self.index = 0;
            self.seen_len = log_len;
        }
        self.day_count = day_count;
        if self.index >= day_count {
            self.index = day_count.saturating_sub(1);
        }
    }

    /// Move to an older day. No-op at the oldest day.
    pub fn older(&mut self) -> bool {
        if self.index + 1 < self.day_count {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Move to a newer day. No-op at the newest day.
    pub fn newer(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn has_older(&self) -> bool {
        self.index + 1 < self.day_count
    }

    pub fn has_newer(&self) -> bool {
        self.index > 0
    }
}
