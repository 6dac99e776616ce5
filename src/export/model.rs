use crate::models::FeedSession;
use crate::utils::formatting::secs2clock;
use chrono::Local;
use serde::Serialize;

/// Flat row used by the CSV and JSON exports.
#[derive(Serialize, Clone, Debug)]
pub struct SessionExport {
    pub id: i64,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub duration_seconds: i64,
    pub duration: String,
    pub feed_type: String,
    pub burp: bool,
    pub vomit: bool,
    pub gap_before_seconds: Option<i64>,
}

impl SessionExport {
    pub fn from_session(s: &FeedSession, gap_before: Option<i64>) -> Self {
        Self {
            id: s.id,
            date: s.start_date_in(&Local).format("%Y-%m-%d").to_string(),
            start_time: s.start_time.to_rfc3339(),
            end_time: s.end_time.to_rfc3339(),
            duration_seconds: s.duration,
            duration: secs2clock(s.duration),
            feed_type: s.feed_type.ft_as_str().to_string(),
            burp: s.burp,
            vomit: s.vomit,
            gap_before_seconds: gap_before,
        }
    }
}
