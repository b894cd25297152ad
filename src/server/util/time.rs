//! Timestamp helpers for log lines.

use chrono::{DateTime, SecondsFormat, Utc};

/// Formats `now` as an RFC 3339 UTC timestamp with microsecond precision.
///
/// # Example
/// ```ignore
/// let now = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
/// assert_eq!(format_timestamp(now), "2024-01-15T10:00:00.000000Z");
/// ```
pub fn format_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Current UTC timestamp for the `timestamp` field of audit log lines.
pub fn utc_timestamp() -> String {
    format_timestamp(Utc::now())
}
