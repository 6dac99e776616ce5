//! Rendering of tracker state and history days, shared by `list` and the shell.

use crate::config::Config;
use crate::core::history::{DayBucket, gap_before};
use crate::core::session::TrackerView;
use crate::models::FeedSession;
use crate::ui::messages::header;
use crate::utils::colors::{GREEN, GREY, RESET, YELLOW, colorize_feed_type, colorize_optional};
use crate::utils::formatting::{bold, pad_right, secs2clock};
use chrono::Local;

fn clock_time(ts: &chrono::DateTime<chrono::Utc>, pattern: &str) -> String {
    ts.with_timezone(&Local).format(pattern).to_string()
}

/// One session row plus, when enabled, the gap before it.
pub fn session_lines(s: &FeedSession, all: &[FeedSession], cfg: &Config) -> Vec<String> {
    let pattern = cfg.clock_pattern();

    let mut markers = vec![colorize_feed_type(s.feed_type)];
    if s.burp {
        markers.push(format!("{GREEN}Burp{RESET}"));
    }
    if s.vomit {
        markers.push(format!("{YELLOW}Vomit{RESET}"));
    }

    let mut lines = vec![format!(
        "  {} → {} | {} | {}",
        pad_right(&clock_time(&s.start_time, pattern), 8),
        pad_right(&clock_time(&s.end_time, pattern), 8),
        secs2clock(s.duration),
        markers.join(" · ")
    )];

    if cfg.show_gaps
        && let Some(gap) = gap_before(s, all)
    {
        lines.push(format!("      {GREY}⏳ Gap since last:{RESET} {}", secs2clock(gap)));
    }

    lines
}

pub fn print_day(bucket: &DayBucket, all: &[FeedSession], cfg: &Config) {
    header(&bucket.label);
    for s in &bucket.sessions {
        for line in session_lines(s, all, cfg) {
            println!("{}", line);
        }
    }
}

/// The ticking counter line, if the tracker currently has one.
pub fn live_line(view: &TrackerView, has_history: bool) -> Option<String> {
    if view.is_feeding {
        Some(format!(
            "🍼 {} {}",
            bold("Feeding Time"),
            secs2clock(view.elapsed_seconds)
        ))
    } else if view.draft.is_none() && has_history {
        Some(format!(
            "🕒 {} {}",
            bold("Time Since Last Feed"),
            secs2clock(view.since_last_feed_seconds)
        ))
    } else {
        None
    }
}

pub fn print_status(view: &TrackerView, has_history: bool) {
    if let Some(line) = live_line(view, has_history) {
        println!("{}", line);
        return;
    }

    if let Some(draft) = &view.draft {
        println!(
            "✔️  {} {}",
            bold("Session Complete"),
            secs2clock(draft.pending.duration)
        );
        let ft = match draft.feed_type {
            Some(ft) => colorize_feed_type(ft),
            None => format!("{YELLOW}not selected (required){RESET}"),
        };
        println!("   Feed type: {}", ft);
        println!("   Burp:      {}", yes_no(draft.burp));
        println!("   Vomit:     {}", yes_no(draft.vomit));
        return;
    }

    println!(
        "🕒 {} {}",
        bold("Time Since Last Feed"),
        colorize_optional("00:00:00")
    );
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
