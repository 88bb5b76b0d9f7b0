//! Julian Day ↔ calendar instant conversion.
//!
//! The Julian Day is a continuous day count used as the internal time
//! reference for every astronomical formula in the engine. Conversion goes
//! through milliseconds since the Unix epoch, so the mapping is exact for
//! any `chrono` instant.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::TimeError;

/// Julian Day of the J2000.0 epoch (2000-01-01T12:00:00 TT, used here as UTC).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Day of the Unix epoch (1970-01-01T00:00:00Z).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Milliseconds per day.
pub const MS_PER_DAY: f64 = 86_400_000.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Convert a calendar instant to a Julian Day.
pub fn julian_day(instant: DateTime<Utc>) -> f64 {
    instant.timestamp_millis() as f64 / MS_PER_DAY + UNIX_EPOCH_JD
}

/// Julian centuries since J2000.0 for a given Julian Day.
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Convert a Julian Day back to a calendar instant (millisecond precision).
pub fn jd_to_datetime(jd: f64) -> Result<DateTime<Utc>, TimeError> {
    let millis = (jd - UNIX_EPOCH_JD) * MS_PER_DAY;
    if !millis.is_finite() || millis.abs() > i64::MAX as f64 {
        return Err(TimeError::JdOutOfRange { jd });
    }
    DateTime::<Utc>::from_timestamp_millis(millis.round() as i64)
        .ok_or(TimeError::JdOutOfRange { jd })
}

/// Parse a date-time string into a UTC instant.
///
/// Accepts RFC 3339 (`1990-01-15T10:30:00Z`, with offset) or a bare
/// `YYYY-MM-DDTHH:MM:SS` treated as UTC. Anything else is rejected
/// before any computation begins.
pub fn parse_datetime(input: &str) -> Result<DateTime<Utc>, TimeError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|_| TimeError::UnparseableDateTime {
            input: input.to_owned(),
        })
}
