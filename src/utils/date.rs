use chrono::NaiveDate;

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Bucket key `YYYY-MM-DD`.
pub fn date_key(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Human readable day label, e.g. `Monday, January 6`.
pub fn day_label(d: &NaiveDate) -> String {
    d.format("%A, %B %-d").to_string()
}
