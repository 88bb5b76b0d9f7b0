//! Ascendant (lagna) computation.
//!
//! The ascendant is the ecliptic degree rising on the eastern horizon. It is
//! derived from Local Sidereal Time, the observer's latitude, and the
//! obliquity of the ecliptic, then shifted into the sidereal zodiac by
//! subtracting the ayanamsa.

use crate::ayanamsa::{Ayanamsa, ayanamsa_deg};
use crate::util::normalize_360;

/// Mean obliquity of the ecliptic in degrees, from a polynomial in Julian
/// centuries since J2000 (IAU 1980 series, truncated).
pub fn obliquity_deg(t: f64) -> f64 {
    23.439_291_1 - 0.013_004_2 * t - 1.64e-7 * t * t + 5.036e-7 * t * t * t
}

/// Tropical ascendant in degrees from LST (hours), latitude, and obliquity.
///
/// `Asc = atan2(−cos(LST°), tan(ε)·tan(φ) + sin(LST°))`, normalized to
/// [0, 360). The formula is part of the output contract and must not be
/// swapped for another ascendant variant.
pub fn tropical_ascendant_deg(lst_hours: f64, latitude_deg: f64, obliquity_deg: f64) -> f64 {
    let lst = (lst_hours * 15.0).to_radians();
    let eps = obliquity_deg.to_radians();
    let phi = latitude_deg.to_radians();

    let asc = f64::atan2(-lst.cos(), eps.tan() * phi.tan() + lst.sin());
    normalize_360(asc.to_degrees())
}

/// Sidereal lagna in degrees for an instant already reduced to LST hours.
pub fn sidereal_lagna_deg(lst_hours: f64, latitude_deg: f64, jd: f64, scheme: Ayanamsa) -> f64 {
    let t = kundli_time::julian_centuries(jd);
    let asc = tropical_ascendant_deg(lst_hours, latitude_deg, obliquity_deg(t));
    normalize_360(asc - ayanamsa_deg(scheme, jd))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn obliquity_at_j2000() {
        let eps = obliquity_deg(0.0);
        assert!((eps - 23.439_291_1).abs() < 1e-12);
    }

    #[test]
    fn obliquity_slowly_decreasing() {
        assert!(obliquity_deg(1.0) < obliquity_deg(0.0));
        assert!((obliquity_deg(1.0) - obliquity_deg(0.0)).abs() < 0.02);
    }

    #[test]
    fn ascendant_in_range_over_full_day() {
        for i in 0..96 {
            let lst = 24.0 * f64::from(i) / 96.0;
            let asc = tropical_ascendant_deg(lst, 19.0760, 23.44);
            assert!((0.0..360.0).contains(&asc), "LST {lst}: asc {asc}");
        }
    }

    #[test]
    fn ascendant_sweeps_full_circle() {
        let mut min = f64::MAX;
        let mut max = f64::MIN;
        for i in 0..720 {
            let lst = 24.0 * f64::from(i) / 720.0;
            let asc = tropical_ascendant_deg(lst, 28.6, 23.44);
            min = min.min(asc);
            max = max.max(asc);
        }
        assert!(min < 2.0, "min asc {min}");
        assert!(max > 358.0, "max asc {max}");
    }

    #[test]
    fn ascendant_at_lst_six_wraps_to_zero() {
        // At LST 6h the atan2 argument is a tiny negative angle; the
        // result must fold to 0.0, never 360.0.
        let asc = tropical_ascendant_deg(6.0, 19.0760, 23.44);
        assert!(asc < 360.0, "asc = {asc}");
        assert!(asc.abs() < 1e-9, "asc = {asc}");
    }

    #[test]
    fn ascendant_at_equator_lst_zero() {
        // atan2(-1, 0) = -90° → 270° after normalization.
        let asc = tropical_ascendant_deg(0.0, 0.0, 23.44);
        assert!((asc - 270.0).abs() < 1e-9, "asc = {asc}");
    }

    #[test]
    fn sidereal_lagna_shifted_by_ayanamsa() {
        let jd = 2_447_906.937_5;
        let t = kundli_time::julian_centuries(jd);
        let tropical = tropical_ascendant_deg(23.0, 19.0760, obliquity_deg(t));
        let sidereal = sidereal_lagna_deg(23.0, 19.0760, jd, Ayanamsa::Lahiri);
        let delta = normalize_360(tropical - sidereal);
        assert!((delta - ayanamsa_deg(Ayanamsa::Lahiri, jd)).abs() < 1e-9);
    }
}
