/// ANSI color helper utilities for terminal output.
use crate::models::FeedType;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Breast → magenta, formula → cyan.
pub fn color_for_feed_type(ft: FeedType) -> &'static str {
    match ft {
        FeedType::Breast => MAGENTA,
        FeedType::Formula => CYAN,
    }
}

pub fn colorize_feed_type(ft: FeedType) -> String {
    format!("{}{}{}", color_for_feed_type(ft), ft.label(), RESET)
}

/// Grey for placeholder values (`--`, `00:00:00`, empty).
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "--" || v == "00:00:00" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
