//! Nakshatra (lunar mansion) lookup.
//!
//! The ecliptic is divided into 27 equal nakshatras of 13°20′ each, each
//! subdivided into 4 padas of 3°20′. Each nakshatra carries a ruling lord
//! drawn cyclically from the 9 Vimshottari dasha lords, which is what seeds
//! the dasha timeline.

use serde::{Deserialize, Serialize};

use crate::dasha::sequence::VIMSHOTTARI_LORDS;
use crate::planet::Planet;
use crate::util::normalize_360;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// Span of one pada: a quarter nakshatra, 3.3333... degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN / 4.0;

/// A fixed nakshatra segment: name plus ruling dasha lord.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nakshatra {
    /// Traditional name of the segment.
    pub name: &'static str,
    /// Ruling lord, cycling through the 9 Vimshottari lords.
    pub lord: Planet,
}

/// Lord of the nakshatra at a 0-based index: the Vimshottari sequence
/// repeated three times across the 27 segments.
const fn lord_at(index: usize) -> Planet {
    VIMSHOTTARI_LORDS[index % 9]
}

/// The 27 nakshatras in order, Ashwini to Revati.
pub const NAKSHATRAS: [Nakshatra; 27] = {
    const NAMES: [&str; 27] = [
        "Ashwini",
        "Bharani",
        "Krittika",
        "Rohini",
        "Mrigashira",
        "Ardra",
        "Punarvasu",
        "Pushya",
        "Ashlesha",
        "Magha",
        "Purva Phalguni",
        "Uttara Phalguni",
        "Hasta",
        "Chitra",
        "Swati",
        "Vishakha",
        "Anuradha",
        "Jyeshtha",
        "Mula",
        "Purva Ashadha",
        "Uttara Ashadha",
        "Shravana",
        "Dhanishtha",
        "Shatabhisha",
        "Purva Bhadrapada",
        "Uttara Bhadrapada",
        "Revati",
    ];
    let mut table = [Nakshatra {
        name: "",
        lord: Planet::Ketu,
    }; 27];
    let mut i = 0;
    while i < 27 {
        table[i] = Nakshatra {
            name: NAMES[i],
            lord: lord_at(i),
        };
        i += 1;
    }
    table
};

/// Result of a nakshatra lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NakshatraInfo {
    /// 0-based index (0 = Ashwini .. 26 = Revati).
    pub index: u8,
    /// Name of the nakshatra.
    pub name: &'static str,
    /// Ruling Vimshottari lord.
    pub lord: Planet,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Decimal degrees within the nakshatra [0, 13.333...).
    pub degrees_in_nakshatra: f64,
}

/// Determine the nakshatra and pada containing a sidereal longitude.
///
/// Pada = `floor(degrees_in_nakshatra / PADA_SPAN) + 1`, clamped to 4 to
/// absorb floating-point edges at the 360°/0° wrap.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let idx = ((lon / NAKSHATRA_SPAN).floor() as u8).min(26);
    let degrees_in = lon - f64::from(idx) * NAKSHATRA_SPAN;
    let pada = ((degrees_in / PADA_SPAN).floor() as u8).min(3) + 1;
    let entry = NAKSHATRAS[idx as usize];
    NakshatraInfo {
        index: idx,
        name: entry.name,
        lord: entry.lord,
        pada,
        degrees_in_nakshatra: degrees_in,
    }
}
