//! Time utilities: whole-second differences, gap computation, clock patterns.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};

/// Whole seconds from `start` to `end`, rounded down.
pub fn seconds_between(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    (end - start).num_milliseconds().div_euclid(1000)
}

/// Gap between the end of one session and the start of the next.
/// Returns `None` when the sessions overlap or are out of order.
pub fn gap_seconds(previous_end: DateTime<Utc>, next_start: DateTime<Utc>) -> Option<i64> {
    let millis = (next_start - previous_end).num_milliseconds();
    if millis < 0 { None } else { Some(millis / 1000) }
}

/// strftime pattern for a configured clock style ("12h" or "24h").
pub fn clock_pattern(time_format: &str) -> AppResult<&'static str> {
    match time_format.trim().to_lowercase().as_str() {
        "12h" => Ok("%-I:%M %p"),
        "24h" => Ok("%H:%M"),
        other => Err(AppError::InvalidTimeFormat(other.to_string())),
    }
}
