//! Greenwich Mean Sidereal Time and Local Sidereal Time.
//!
//! GMST is evaluated from the standard polynomial in Julian centuries
//! since J2000.0 (Meeus, "Astronomical Algorithms", Eq. 12.4), expressed
//! in hours. LST adds the observer's east longitude at 15° per hour.

use crate::julian::{J2000_JD, julian_centuries};

/// Hours in a day, for sidereal-time normalization.
const HOURS_PER_DAY: f64 = 24.0;

/// Normalize an hour angle to [0, 24).
///
/// `rem_euclid` on a tiny negative input can round up to exactly 24.0;
/// the boundary is folded back to 0.0 to keep the half-open range.
fn normalize_hours(h: f64) -> f64 {
    let r = h.rem_euclid(HOURS_PER_DAY);
    if r >= HOURS_PER_DAY { 0.0 } else { r }
}

/// Greenwich Mean Sidereal Time in hours for a Julian Day (UT).
///
/// GMST° = 280.46061837 + 360.98564736629·(JD − 2451545)
///         + 0.000387933·T² − T³/38 710 000
///
/// Returns hours in [0, 24).
pub fn gmst_hours(jd: f64) -> f64 {
    let d = jd - J2000_JD;
    let t = julian_centuries(jd);
    let deg = 280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    normalize_hours(deg.rem_euclid(360.0) / 15.0)
}

/// Local Sidereal Time in hours from GMST and east longitude in degrees.
///
/// Returns hours in [0, 24).
pub fn local_sidereal_hours(gmst_hours: f64, longitude_deg: f64) -> f64 {
    normalize_hours(gmst_hours + longitude_deg / 15.0)
}
