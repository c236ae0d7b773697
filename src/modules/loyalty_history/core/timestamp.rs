// Timestamps as the record store keeps them.
//
// Stored dates are text in `YYYY-MM-DD HH:MM:SS.sss` (UTC). That shape sorts
// lexicographically in the same order as chronologically, which the range
// queries rely on.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

pub const STORED_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(STORED_FORMAT).to_string()
}

/// Parse a stored date leniently. Returns `None` for anything unreadable;
/// callers decide what an unreadable date means.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.naive_utc());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|day| day.and_hms_opt(0, 0, 0))
        })
}
