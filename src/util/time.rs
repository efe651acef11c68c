//! Clock access and timestamp labels.
//!
//! Browser builds render local time; native builds (SSR, tests) render UTC.
//! Backend timestamps without an offset are UTC.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

use chrono::{DateTime, NaiveDateTime, Utc};

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Current time in milliseconds since the Unix epoch.
#[allow(clippy::cast_precision_loss)]
pub fn now_ms() -> f64 {
    Utc::now().timestamp_millis() as f64
}

/// `"HH:MM"` label for a transcript bubble.
#[allow(clippy::cast_possible_truncation)]
pub fn format_clock(timestamp_ms: f64) -> String {
    DateTime::from_timestamp_millis(timestamp_ms as i64)
        .map(|ts| display_time(ts).format("%H:%M").to_string())
        .unwrap_or_default()
}

/// Parse an RFC 3339 timestamp, or a naive ISO-8601 one taken as UTC.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    let offset = DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%:z"));
    if let Ok(ts) = offset {
        return Some(ts.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

fn display_time(ts: DateTime<Utc>) -> NaiveDateTime {
    #[cfg(feature = "hydrate")]
    {
        ts.with_timezone(&chrono::Local).naive_local()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ts.naive_utc()
    }
}

fn format_timestamp(raw: &str, fmt: &str) -> String {
    match parse_timestamp(raw) {
        Some(ts) => display_time(ts).format(fmt).to_string(),
        None => raw.to_owned(),
    }
}

/// `"Mon D, HH:MM"` label for a history row; the raw text if unparseable.
pub fn format_history_timestamp(raw: &str) -> String {
    format_timestamp(raw, "%b %-d, %H:%M")
}

/// `"Mon D, YYYY HH:MM"` label for the history detail view.
pub fn format_detail_timestamp(raw: &str) -> String {
    format_timestamp(raw, "%b %-d, %Y %H:%M")
}
