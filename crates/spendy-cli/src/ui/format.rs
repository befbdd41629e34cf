//! String formatting utilities for UI rendering.

use chrono::{DateTime, TimeZone, Utc};

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// Format an amount with a currency symbol and two decimals.
pub fn format_money(amount: f64, currency: &str) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", currency, -amount)
    } else {
        format!("{}{:.2}", currency, amount)
    }
}

/// Format a share as a percentage with one decimal.
pub fn format_percent(percent: f64) -> String {
    format!("{:.1}%", percent)
}

/// Human label for when an expense happened, relative to `now`.
///
/// Calendar days are counted in `now`'s time zone: "Today", "Yesterday",
/// "N days ago" up to six days back, then "Mon D".
pub fn relative_day<Tz: TimeZone>(date: &DateTime<Utc>, now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let local = date.with_timezone(&now.timezone());
    let days = now
        .date_naive()
        .signed_duration_since(local.date_naive())
        .num_days();

    match days {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=6 => format!("{} days ago", days),
        _ => local.format("%b %-d").to_string(),
    }
}

/// The stored instant as RFC 3339 UTC with milliseconds, as persisted.
pub fn format_instant(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

/// Flatten a note onto one tab-free line so plain rows keep their columns.
pub fn single_line(s: &str) -> String {
    s.replace('\r', "").replace(['\n', '\t'], " ")
}
