//! Mean-element tropical longitudes for the 9 grahas.
//!
//! Each body's tropical longitude is a truncated mean-motion polynomial
//! `base + rate·T + quad·T²` in Julian centuries since J2000. This is an
//! intentional accuracy ceiling: no perturbation series, no latitude,
//! distance, or velocity. Rahu is the retrograde mean lunar node and Ketu
//! is always its exact antipode.

use kundli_time::julian_centuries;

use crate::ayanamsa::{Ayanamsa, ayanamsa_deg};
use crate::planet::{ALL_PLANETS, Planet};
use crate::util::normalize_360;

/// Mean-longitude polynomial coefficients for one body (degrees,
/// degrees/century, degrees/century²).
struct MeanElement {
    planet: Planet,
    base: f64,
    rate: f64,
    quad: f64,
}

/// Mean elements at J2000.0 (Meeus, "Astronomical Algorithms", truncated).
/// Rahu's rate is negative: the mean node regresses along the ecliptic.
const MEAN_ELEMENTS: [MeanElement; 8] = [
    MeanElement {
        planet: Planet::Sun,
        base: 280.466_46,
        rate: 36_000.769_83,
        quad: 0.000_303_2,
    },
    MeanElement {
        planet: Planet::Moon,
        base: 218.316_447_7,
        rate: 481_267.881_234_21,
        quad: -0.001_578_6,
    },
    MeanElement {
        planet: Planet::Mars,
        base: 355.433_275,
        rate: 19_140.299_331_3,
        quad: 0.000_002_61,
    },
    MeanElement {
        planet: Planet::Mercury,
        base: 252.250_906,
        rate: 149_472.674_635_8,
        quad: -0.000_005_35,
    },
    MeanElement {
        planet: Planet::Jupiter,
        base: 34.351_484,
        rate: 3_034.905_674_6,
        quad: -0.000_085_01,
    },
    MeanElement {
        planet: Planet::Venus,
        base: 181.979_801,
        rate: 58_517.815_676_0,
        quad: 0.000_001_65,
    },
    MeanElement {
        planet: Planet::Saturn,
        base: 50.077_471,
        rate: 1_222.113_794_3,
        quad: 0.000_210_04,
    },
    MeanElement {
        planet: Planet::Rahu,
        base: 125.044_547_9,
        rate: -1_934.136_289_1,
        quad: 0.002_075_4,
    },
];

/// Tropical mean longitude of a body at a Julian Day, in [0, 360).
///
/// Ketu is derived as exactly Rahu + 180° (mod 360).
pub fn tropical_longitude(planet: Planet, jd: f64) -> f64 {
    if planet == Planet::Ketu {
        return normalize_360(tropical_longitude(Planet::Rahu, jd) + 180.0);
    }
    let t = julian_centuries(jd);
    // The table is laid out in ALL_PLANETS order, Ketu handled above.
    let e = &MEAN_ELEMENTS[planet.index() as usize];
    normalize_360(e.base + e.rate * t + e.quad * t * t)
}

/// Sidereal longitude from a tropical longitude and ayanamsa, in [0, 360).
pub fn sidereal_longitude(tropical_deg: f64, ayanamsa_deg: f64) -> f64 {
    normalize_360(tropical_deg - ayanamsa_deg)
}

/// Sidereal longitudes for all 9 planets at a Julian Day.
///
/// Ketu is recomputed from the sidereal Rahu so the antipode invariant
/// holds exactly after normalization.
pub fn sidereal_longitudes(jd: f64, scheme: Ayanamsa) -> [(Planet, f64); 9] {
    let aya = ayanamsa_deg(scheme, jd);
    let mut out = [(Planet::Sun, 0.0); 9];
    let mut rahu_sidereal = 0.0;
    for (slot, &planet) in out.iter_mut().zip(ALL_PLANETS.iter()) {
        let lon = match planet {
            Planet::Ketu => normalize_360(rahu_sidereal + 180.0),
            _ => {
                let sid = sidereal_longitude(tropical_longitude(planet, jd), aya);
                if planet == Planet::Rahu {
                    rahu_sidereal = sid;
                }
                sid
            }
        };
        *slot = (planet, lon);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundli_time::J2000_JD;

    #[test]
    fn mean_element_table_in_planet_order() {
        // tropical_longitude indexes the table by Planet::index().
        for (i, e) in MEAN_ELEMENTS.iter().enumerate() {
            assert_eq!(e.planet, ALL_PLANETS[i], "slot {i}");
        }
    }

    #[test]
    fn sun_at_j2000() {
        let lon = tropical_longitude(Planet::Sun, J2000_JD);
        assert!((lon - 280.466_46).abs() < 1e-9);
    }

    #[test]
    fn moon_at_j2000() {
        let lon = tropical_longitude(Planet::Moon, J2000_JD);
        assert!((lon - 218.316_447_7).abs() < 1e-9);
    }

    #[test]
    fn sun_advances_one_degree_per_day() {
        let l1 = tropical_longitude(Planet::Sun, J2000_JD);
        let l2 = tropical_longitude(Planet::Sun, J2000_JD + 1.0);
        let delta = normalize_360(l2 - l1);
        assert!((delta - 0.9856).abs() < 0.001, "daily solar motion {delta}");
    }

    #[test]
    fn moon_advances_about_13_degrees_per_day() {
        let l1 = tropical_longitude(Planet::Moon, J2000_JD);
        let l2 = tropical_longitude(Planet::Moon, J2000_JD + 1.0);
        let delta = normalize_360(l2 - l1);
        assert!((delta - 13.176).abs() < 0.01, "daily lunar motion {delta}");
    }

    #[test]
    fn rahu_regresses() {
        let l1 = tropical_longitude(Planet::Rahu, J2000_JD);
        let l2 = tropical_longitude(Planet::Rahu, J2000_JD + 10.0);
        // ~0.053°/day backwards.
        let delta = normalize_360(l1 - l2);
        assert!((delta - 0.53).abs() < 0.01, "nodal regression {delta}");
    }

    #[test]
    fn ketu_is_rahu_antipode_tropical() {
        for &jd in &[J2000_JD, 2_447_906.937_5, 2_460_000.25] {
            let rahu = tropical_longitude(Planet::Rahu, jd);
            let ketu = tropical_longitude(Planet::Ketu, jd);
            let diff = normalize_360(ketu - rahu);
            assert!((diff - 180.0).abs() < 1e-9, "at jd {jd}: diff {diff}");
        }
    }

    #[test]
    fn ketu_is_rahu_antipode_sidereal() {
        let positions = sidereal_longitudes(2_447_906.937_5, Ayanamsa::Lahiri);
        let rahu = positions[Planet::Rahu.index() as usize].1;
        let ketu = positions[Planet::Ketu.index() as usize].1;
        assert!((ketu - normalize_360(rahu + 180.0)).abs() < 1e-12);
    }

    #[test]
    fn all_longitudes_normalized() {
        for &jd in &[2_415_020.5, 2_447_906.937_5, J2000_JD, 2_469_807.125] {
            for (planet, lon) in sidereal_longitudes(jd, Ayanamsa::Lahiri) {
                assert!(
                    (0.0..360.0).contains(&lon),
                    "{} at jd {jd}: {lon}",
                    planet.name()
                );
            }
        }
    }

    #[test]
    fn sidereal_subtracts_ayanamsa() {
        let sid = sidereal_longitude(10.0, 24.0);
        assert!((sid - 346.0).abs() < 1e-12);
    }

    #[test]
    fn positions_ordered_like_all_planets() {
        let positions = sidereal_longitudes(J2000_JD, Ayanamsa::Lahiri);
        for (i, (planet, _)) in positions.iter().enumerate() {
            assert_eq!(planet.index() as usize, i);
        }
    }
}
