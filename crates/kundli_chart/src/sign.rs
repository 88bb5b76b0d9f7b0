//! Zodiac signs and sign lordship.
//!
//! The ecliptic is divided into 12 equal signs of 30° each, starting from
//! Aries at 0° sidereal. Each sign has a planetary lord per the classical
//! rulership scheme.

use serde::{Deserialize, Serialize};

use crate::planet::Planet;
use crate::util::normalize_360;

/// The 12 zodiac signs, Aries first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in zodiacal order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

impl Sign {
    /// Display name of the sign.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }

    /// Planetary lord of the sign (classical rulership).
    pub const fn lord(self) -> Planet {
        match self {
            Self::Aries | Self::Scorpio => Planet::Mars,
            Self::Taurus | Self::Libra => Planet::Venus,
            Self::Gemini | Self::Virgo => Planet::Mercury,
            Self::Cancer => Planet::Moon,
            Self::Leo => Planet::Sun,
            Self::Sagittarius | Self::Pisces => Planet::Jupiter,
            Self::Capricorn | Self::Aquarius => Planet::Saturn,
        }
    }
}

/// Sign lookup result for a longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignInfo {
    /// The sign.
    pub sign: Sign,
    /// 0-based sign index (0 = Aries).
    pub sign_index: u8,
    /// Decimal degrees within the sign [0, 30).
    pub degrees_in_sign: f64,
}

/// Determine the sign containing a sidereal longitude.
///
/// Each sign spans exactly 30°: Aries = [0, 30), Taurus = [30, 60), etc.
pub fn sign_from_longitude(sidereal_lon_deg: f64) -> SignInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let idx = (lon / 30.0).floor() as u8;
    // Clamp absorbs the floating-point edge at exactly 360.0.
    let idx = idx.min(11);
    SignInfo {
        sign: ALL_SIGNS[idx as usize],
        sign_index: idx,
        degrees_in_sign: lon - f64::from(idx) * 30.0,
    }
}
