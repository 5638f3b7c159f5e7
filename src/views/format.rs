//! Date Formatting
//!
//! Renders backend timestamps as `dd MMM yyyy`.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Display format, e.g. `22 Oct 2024`.
pub const DISPLAY_DATE_FORMAT: &str = "%d %b %Y";

/// Formats a backend date for display.
///
/// Accepts local ISO-8601 datetimes (`2024-10-22T05:33:19`), RFC 3339
/// timestamps and plain dates. Anything else is returned unchanged.
pub fn format_display_date(raw: &str) -> String {
    let raw = raw.trim();

    let date = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|dt| dt.date())
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

    match date {
        Ok(date) => date.format(DISPLAY_DATE_FORMAT).to_string(),
        Err(_) => raw.to_string(),
    }
}
