//! Equal-house cusp computation.
//!
//! The 12 houses are equal 30° arcs anchored at the lagna:
//! `cusp[i] = (lagna + 30·i) mod 360`. Each house is the half-open window
//! `[cusp, cusp + 30)`, wrapping at 360°, so every longitude belongs to
//! exactly one house. Upstream documentation sometimes labels this output
//! "Placidus"; the behavior is and must remain equal-house.

use serde::{Deserialize, Serialize};

use crate::planet::Planet;
use crate::sign::{Sign, sign_from_longitude};
use crate::util::normalize_360;

/// One house cusp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseCusp {
    /// House number, 1-12.
    pub house: u8,
    /// Cusp longitude in [0, 360).
    pub cusp_deg: f64,
    /// Sign containing the cusp.
    pub sign: Sign,
    /// Lord of that sign.
    pub lord: Planet,
    /// Start of the house window (equals `cusp_deg`).
    pub start_deg: f64,
    /// End of the half-open window, `(cusp + 30) mod 360`.
    pub end_deg: f64,
}

/// The 12 equal-house cusps for a sidereal lagna.
pub fn equal_house_cusps(lagna_deg: f64) -> [HouseCusp; 12] {
    let mut cusps = [HouseCusp {
        house: 0,
        cusp_deg: 0.0,
        sign: Sign::Aries,
        lord: Planet::Mars,
        start_deg: 0.0,
        end_deg: 0.0,
    }; 12];
    for (i, cusp) in cusps.iter_mut().enumerate() {
        let deg = normalize_360(lagna_deg + 30.0 * i as f64);
        let info = sign_from_longitude(deg);
        *cusp = HouseCusp {
            house: i as u8 + 1,
            cusp_deg: deg,
            sign: info.sign,
            lord: info.sign.lord(),
            start_deg: deg,
            end_deg: normalize_360(deg + 30.0),
        };
    }
    cusps
}

/// House number (1-12) containing a longitude, for houses anchored at the
/// given lagna.
///
/// Computed as `floor((lon − lagna) mod 360 / 30)`, which tiles the circle
/// with no gap or overlap; the clamp absorbs the floating-point edge at a
/// full turn.
pub fn house_of(lagna_deg: f64, lon_deg: f64) -> u8 {
    let offset = normalize_360(lon_deg - lagna_deg);
    ((offset / 30.0).floor() as u8).min(11) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_cusps_30_apart() {
        let cusps = equal_house_cusps(123.456);
        assert_eq!(cusps.len(), 12);
        for i in 0..12 {
            let expected = normalize_360(123.456 + 30.0 * i as f64);
            assert!((cusps[i].cusp_deg - expected).abs() < 1e-10);
            assert_eq!(cusps[i].house, i as u8 + 1);
        }
    }

    #[test]
    fn cusp_windows_tile_the_circle() {
        let cusps = equal_house_cusps(351.2);
        for i in 0..12 {
            let next = &cusps[(i + 1) % 12];
            assert!(
                (cusps[i].end_deg - next.start_deg).abs() < 1e-10,
                "gap after house {}",
                i + 1
            );
        }
    }

    #[test]
    fn cusp_sign_and_lord_consistent() {
        for cusp in equal_house_cusps(200.0) {
            let info = sign_from_longitude(cusp.cusp_deg);
            assert_eq!(cusp.sign, info.sign);
            assert_eq!(cusp.lord, info.sign.lord());
        }
    }

    #[test]
    fn house_of_lagna_is_first() {
        assert_eq!(house_of(100.0, 100.0), 1);
        assert_eq!(house_of(100.0, 129.999), 1);
    }

    #[test]
    fn house_of_boundary_starts_next_house() {
        // Half-open windows: exactly on a cusp belongs to the starting house.
        assert_eq!(house_of(100.0, 130.0), 2);
        assert_eq!(house_of(100.0, 99.999_999), 12);
    }

    #[test]
    fn house_of_wraps() {
        assert_eq!(house_of(350.0, 10.0), 1);
        assert_eq!(house_of(350.0, 25.0), 2);
        assert_eq!(house_of(10.0, 5.0), 12);
    }

    #[test]
    fn every_longitude_in_exactly_one_house() {
        let lagna = 287.3;
        let cusps = equal_house_cusps(lagna);
        let mut lon = 0.0;
        while lon < 360.0 {
            let h = house_of(lagna, lon);
            assert!((1..=12).contains(&h));
            // The assigned house's window must contain the longitude.
            let cusp = &cusps[(h - 1) as usize];
            let offset = normalize_360(lon - cusp.start_deg);
            assert!(offset < 30.0 + 1e-9, "lon {lon} house {h}");
            lon += 0.73;
        }
    }
}
