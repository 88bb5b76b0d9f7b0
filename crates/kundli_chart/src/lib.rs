//! Sidereal birth-chart and planetary-period calculations.
//!
//! This crate is the deterministic core of a kundli (birth chart) backend:
//! - Ayanamsa (precession offset) for the supported sidereal schemes
//! - Mean-element tropical longitudes for the 9 grahas, converted to sidereal
//! - Ascendant (lagna) and 12 equal-house cusps
//! - Nakshatra (lunar mansion) and pada lookup
//! - Tithi / yoga / karana labels
//! - The 120-year Vimshottari dasha timeline (4 levels, queryable)
//!
//! Everything is a pure function of its inputs: no I/O, no shared mutable
//! state. The only shared data are the read-only lookup tables.

pub mod ascendant;
pub mod ayanamsa;
pub mod chart;
pub mod dasha;
pub mod error;
pub mod houses;
pub mod nakshatra;
pub mod panchanga;
pub mod planet;
pub mod position;
pub mod sign;
pub mod util;

pub use ascendant::{obliquity_deg, sidereal_lagna_deg, tropical_ascendant_deg};
pub use ayanamsa::{Ayanamsa, ayanamsa_deg};
pub use chart::{BirthMoment, Chart, Lagna, NakshatraSummary, PlanetPosition, compute_chart};
pub use error::ChartError;
pub use houses::{HouseCusp, equal_house_cusps, house_of};
pub use nakshatra::{
    NAKSHATRA_SPAN, NAKSHATRAS, Nakshatra, NakshatraInfo, PADA_SPAN, nakshatra_from_longitude,
};
pub use panchanga::{Panchanga, karana_label, panchanga_from_longitudes, tithi_label, yoga_label};
pub use planet::{ALL_PLANETS, Planet};
pub use position::{sidereal_longitude, sidereal_longitudes, tropical_longitude};
pub use sign::{ALL_SIGNS, Sign, SignInfo, sign_from_longitude};
pub use util::normalize_360;
