//! Plain-text feeding report over the full log.

use crate::core::calculator::stats::{FeedStats, compute_stats};
use crate::models::{FeedSession, UserProfile};
use crate::utils::formatting::secs2readable;

const PLACEHOLDER: &str = "N/A";
const DEFAULT_CHILD: &str = "Baby";

/// Build the report for `sessions` (any order) and an optional profile.
pub fn build_report(sessions: &[FeedSession], profile: Option<&UserProfile>) -> String {
    render_report(&compute_stats(sessions), profile)
}

pub fn render_report(stats: &FeedStats, profile: Option<&UserProfile>) -> String {
    let mother = profile.and_then(|p| p.mother()).unwrap_or(PLACEHOLDER);
    let child = profile.and_then(|p| p.child());
    let age = profile.and_then(|p| p.age()).unwrap_or(PLACEHOLDER);

    let mut lines = vec![
        "Feeding Report Summary".to_string(),
        "--------------------------".to_string(),
        format!("Mother: {}", mother),
        format!("Child: {}", child.unwrap_or(PLACEHOLDER)),
        format!("Child Age: {}", age),
        format!("Total Sessions Logged: {}", stats.total_sessions),
        String::new(),
        "Feed Type Summary:".to_string(),
        format!("- Breast Milk Feeds: {}", stats.breast_feeds),
        format!("- Formula Feeds: {}", stats.formula_feeds),
        String::new(),
        "Analytics:".to_string(),
        format!(
            "- Average Gap Between Feeds: {}",
            secs2readable(stats.average_gap_seconds())
        ),
        format!("- Total Vomits: {} time(s)", stats.vomits),
        format!("- Sessions without Burp: {} time(s)", stats.missed_burps),
    ];

    if stats.missed_burps > 0 {
        lines.push(String::new());
        lines.push(String::new());
        lines.push(format!(
            "Note: {} did not burp after {} feeding session(s).",
            child.unwrap_or(DEFAULT_CHILD),
            stats.missed_burps
        ));
    }

    lines.join("\n")
}
