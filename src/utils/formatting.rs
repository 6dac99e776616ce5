//! Formatting utilities used for shell, list and report outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// Timer style `HH:MM:SS`. Negative values render as `00:00:00`.
pub fn secs2clock(total_seconds: i64) -> String {
    if total_seconds < 0 {
        return "00:00:00".to_string();
    }
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Report style `{H}h {M}m`, seconds dropped.
pub fn secs2readable(total_seconds: i64) -> String {
    let secs = total_seconds.max(0);
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;

    format!("{}h {}m", hours, minutes)
}
