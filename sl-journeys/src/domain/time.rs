//! Timestamp handling for journey-planner data.
//!
//! The journey planner reports every departure and arrival as an RFC 3339
//! string (usually in UTC). Everything downstream works in local time, so
//! timestamps are converted exactly once when upstream data enters the
//! domain.

use chrono::{DateTime, Duration, Local, Timelike};

/// A point in time on a journey, in the local time zone.
pub type TripTime = DateTime<Local>;

/// Placeholder rendered for an unknown time.
pub const UNKNOWN_TIME: &str = "--:--";

/// Error returned when parsing an invalid timestamp.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp {input:?}: {reason}")]
pub struct TimeError {
    input: String,
    reason: String,
}

/// Parse an RFC 3339 timestamp into local time.
///
/// # Examples
///
/// ```
/// use sl_journeys::domain::parse_trip_time;
///
/// assert!(parse_trip_time("2024-03-15T07:05:00Z").is_ok());
/// assert!(parse_trip_time("2024-03-15T08:05:00+01:00").is_ok());
///
/// assert!(parse_trip_time("").is_err());
/// assert!(parse_trip_time("08:05").is_err());
/// ```
pub fn parse_trip_time(s: &str) -> Result<TripTime, TimeError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(TimeError {
            input: s.to_string(),
            reason: "empty".to_string(),
        });
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|t| t.with_timezone(&Local))
        .map_err(|e| TimeError {
            input: s.to_string(),
            reason: e.to_string(),
        })
}

/// Format a time as `HH:MM`, or `--:--` when unknown.
pub fn format_hhmm(time: Option<TripTime>) -> String {
    match time {
        Some(t) => t.format("%H:%M").to_string(),
        None => UNKNOWN_TIME.to_string(),
    }
}

/// Drop seconds and sub-second precision.
pub fn floor_to_minute(time: TripTime) -> TripTime {
    time.with_nanosecond(0)
        .and_then(|t| t.with_second(0))
        .unwrap_or(time)
}

/// Format a journey duration as `45m`, `2h` or `1h5m`.
///
/// The duration is rounded to the nearest minute (half a minute rounds up).
/// Non-positive durations are reported as unknown.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.num_seconds();
    if secs <= 0 {
        return "unknown duration".to_string();
    }

    let mins = (secs + 30) / 60;
    let (h, m) = (mins / 60, mins % 60);
    match (h, m) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h{m}m"),
    }
}
