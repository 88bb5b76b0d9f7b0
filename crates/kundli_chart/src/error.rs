//! Error types for chart computation.

use kundli_time::TimeError;

/// Error type for all fallible operations in the kundli_chart crate.
///
/// Inputs are rejected before any computation begins; given valid inputs
/// the downstream math is total and produces no errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Returned when latitude is outside [-90, 90] or non-finite.
    #[error("latitude must be within [-90, 90] degrees, got {latitude}")]
    LatitudeOutOfRange {
        /// The rejected latitude.
        latitude: f64,
    },

    /// Returned when longitude is outside [-180, 180] or non-finite.
    #[error("longitude must be within [-180, 180] degrees, got {longitude}")]
    LongitudeOutOfRange {
        /// The rejected longitude.
        longitude: f64,
    },

    /// Error from Julian Day or date-time conversion.
    #[error("time conversion failed: {0}")]
    Time(#[from] TimeError),
}
