//! Ayanamsa (precession offset) for the supported sidereal schemes.
//!
//! The ayanamsa is the angular offset between the tropical zodiac (anchored
//! to the equinox) and a sidereal zodiac (anchored to the fixed stars).
//! Subtracting it from a tropical longitude yields the sidereal longitude.
//!
//! Each scheme reduces to a reference value at J2000.0 plus a shared
//! precession polynomial in Julian centuries. The reference values are
//! part of the output contract, not observatory ephemerides; this is an
//! intentionally truncated mean model.

use serde::{Deserialize, Serialize};

use kundli_time::julian_centuries;

/// Linear precession term, degrees per Julian century.
const PRECESSION_RATE_DEG: f64 = 1.396_971;

/// Quadratic precession term, degrees per Julian century squared.
const PRECESSION_QUAD_DEG: f64 = 0.000_308;

/// Sidereal reference schemes.
///
/// Scheme ids follow the upstream request contract: 1 = Lahiri (default),
/// 2 = Raman, 3 = KP. Unknown ids fall back to Lahiri.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ayanamsa {
    /// Lahiri (Chitrapaksha), the Indian government standard.
    Lahiri,
    /// B.V. Raman, from "Hindu Predictive Astrology".
    Raman,
    /// Krishnamurti Paddhati, a minimal offset from Lahiri.
    Kp,
}

impl Ayanamsa {
    /// Resolve a scheme from its request id. Unknown ids map to Lahiri,
    /// the documented default.
    pub const fn from_id(id: u8) -> Self {
        match id {
            2 => Self::Raman,
            3 => Self::Kp,
            _ => Self::Lahiri,
        }
    }

    /// Request id of the scheme.
    pub const fn id(self) -> u8 {
        match self {
            Self::Lahiri => 1,
            Self::Raman => 2,
            Self::Kp => 3,
        }
    }

    /// Display name of the scheme.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lahiri => "Lahiri",
            Self::Raman => "Raman",
            Self::Kp => "KP",
        }
    }

    /// Reference ayanamsa at J2000.0 in degrees.
    pub const fn reference_j2000_deg(self) -> f64 {
        match self {
            Self::Lahiri => 23.989,
            Self::Raman => 22.506,
            Self::Kp => 23.986,
        }
    }
}

/// Ayanamsa in degrees for a scheme at a Julian Day.
///
/// `reference + rate·T + quad·T²` with T in Julian centuries since J2000.
pub fn ayanamsa_deg(scheme: Ayanamsa, jd: f64) -> f64 {
    let t = julian_centuries(jd);
    scheme.reference_j2000_deg() + PRECESSION_RATE_DEG * t + PRECESSION_QUAD_DEG * t * t
}
