//! Time and timestamp helpers.

use chrono::{DateTime, SecondsFormat, Utc};

/// UTC timestamp used for the moment a location was recorded.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Render a timestamp as ISO-8601 with microseconds and an explicit offset,
/// e.g. `2024-05-01T08:30:00.123000+00:00`.
#[must_use]
pub fn to_iso8601(timestamp: Timestamp) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, false)
}
