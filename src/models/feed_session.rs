use super::feed_type::FeedType;
use crate::utils::time::seconds_between;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A completed, annotated feeding session as stored under `feedLogs`.
///
/// Field names follow the stored JSON shape (`startTime`, `feedType`, ...).
/// `burp` and `vomit` default to `false` when absent in older records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedSession {
    pub id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Whole seconds between `start_time` and `end_time`.
    pub duration: i64,
    pub feed_type: FeedType,
    #[serde(default)]
    pub burp: bool,
    #[serde(default)]
    pub vomit: bool,
}

impl FeedSession {
    /// Calendar date of the session start in the given timezone.
    pub fn start_date_in<Tz: TimeZone>(&self, tz: &Tz) -> NaiveDate {
        self.start_time.with_timezone(tz).date_naive()
    }

    /// True when the baby did not burp (absent counts as missed).
    pub fn missed_burp(&self) -> bool {
        !self.burp
    }
}

/// A stopped session still waiting for its feed type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSession {
    pub id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub duration: i64,
}

impl PendingSession {
    pub fn new(id: i64, start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        Self {
            id,
            start_time,
            end_time,
            duration: seconds_between(start_time, end_time),
        }
    }

    /// Promote the draft to a stored session.
    pub fn into_session(self, feed_type: FeedType, burp: bool, vomit: bool) -> FeedSession {
        FeedSession {
            id: self.id,
            start_time: self.start_time,
            end_time: self.end_time,
            duration: self.duration,
            feed_type,
            burp,
            vomit,
        }
    }
}
