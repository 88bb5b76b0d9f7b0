//! Tithi, yoga, and karana labels from the Sun and Moon longitudes.
//!
//! - Tithi: 12° steps of the Moon−Sun elongation (30 per synodic month).
//! - Yoga: 13°20′ steps of the Moon+Sun sum (27 total).
//! - Karana: half-tithi 6° steps, mapped onto the classical 11 names
//!   (Kimstughna first, seven movable names cycling, three fixed at the end).

use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// The 14 paksha tithi base names (Purnima/Amavasya handled separately).
const TITHI_NAMES: [&str; 14] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
];

/// The 27 yoga names in order.
const YOGA_NAMES: [&str; 27] = [
    "Vishkambha",
    "Priti",
    "Ayushman",
    "Saubhagya",
    "Shobhana",
    "Atiganda",
    "Sukarma",
    "Dhriti",
    "Shula",
    "Ganda",
    "Vriddhi",
    "Dhruva",
    "Vyaghata",
    "Harshana",
    "Vajra",
    "Siddhi",
    "Vyatipata",
    "Variyana",
    "Parigha",
    "Shiva",
    "Siddha",
    "Sadhya",
    "Shubha",
    "Shukla",
    "Brahma",
    "Indra",
    "Vaidhriti",
];

/// The 7 movable karana names, cycling through slots 1..=56.
const MOVABLE_KARANAS: [&str; 7] = [
    "Bava", "Balava", "Kaulava", "Taitila", "Gara", "Vanija", "Vishti",
];

/// Tithi/yoga/karana labels for one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panchanga {
    /// Tithi label, e.g. "Shukla Tritiya" or "Purnima".
    pub tithi: String,
    /// Yoga label, one of the 27 names.
    pub yoga: String,
    /// Karana label, one of the classical 11 names.
    pub karana: String,
}

/// Tithi label from a 0-based tithi index (0..29).
pub fn tithi_label(index: u8) -> String {
    match index {
        14 => "Purnima".to_owned(),
        29 => "Amavasya".to_owned(),
        i if i < 14 => format!("Shukla {}", TITHI_NAMES[i as usize]),
        i => format!("Krishna {}", TITHI_NAMES[(i as usize - 15).min(13)]),
    }
}

/// Yoga label from a 0-based yoga index (0..26).
pub fn yoga_label(index: u8) -> String {
    YOGA_NAMES[(index as usize).min(26)].to_owned()
}

/// Karana label from a 0-based half-tithi slot (0..59).
pub fn karana_label(slot: u8) -> String {
    match slot {
        0 => "Kimstughna".to_owned(),
        57 => "Shakuni".to_owned(),
        58 => "Chatushpada".to_owned(),
        59 => "Naga".to_owned(),
        s => MOVABLE_KARANAS[((s as usize - 1) % 7).min(6)].to_owned(),
    }
}

/// Compute the panchanga labels from sidereal Sun and Moon longitudes.
pub fn panchanga_from_longitudes(sun_deg: f64, moon_deg: f64) -> Panchanga {
    let elongation = normalize_360(moon_deg - sun_deg);
    let sum = normalize_360(moon_deg + sun_deg);

    let tithi_index = ((elongation / 12.0).floor() as u8).min(29);
    let yoga_index = ((sum / (360.0 / 27.0)).floor() as u8).min(26);
    let karana_slot = ((elongation / 6.0).floor() as u8).min(59);

    Panchanga {
        tithi: tithi_label(tithi_index),
        yoga: yoga_label(yoga_index),
        karana: karana_label(karana_slot),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tithi_new_moon_start() {
        let p = panchanga_from_longitudes(10.0, 10.5);
        assert_eq!(p.tithi, "Shukla Pratipada");
    }

    #[test]
    fn tithi_full_moon() {
        // Elongation just under 180° is the 15th tithi, Purnima.
        let p = panchanga_from_longitudes(0.0, 175.0);
        assert_eq!(p.tithi, "Purnima");
    }

    #[test]
    fn tithi_amavasya() {
        let p = panchanga_from_longitudes(0.0, 355.0);
        assert_eq!(p.tithi, "Amavasya");
    }

    #[test]
    fn tithi_krishna_paksha() {
        // Elongation 190° → index 15 → Krishna Pratipada.
        let p = panchanga_from_longitudes(0.0, 190.0);
        assert_eq!(p.tithi, "Krishna Pratipada");
    }

    #[test]
    fn yoga_first_and_last() {
        assert_eq!(panchanga_from_longitudes(0.0, 1.0).yoga, "Vishkambha");
        let p = panchanga_from_longitudes(179.0, 180.5);
        assert_eq!(p.yoga, "Vaidhriti"); // sum 359.5 → index 26
    }

    #[test]
    fn karana_fixed_slots() {
        assert_eq!(karana_label(0), "Kimstughna");
        assert_eq!(karana_label(57), "Shakuni");
        assert_eq!(karana_label(58), "Chatushpada");
        assert_eq!(karana_label(59), "Naga");
    }

    #[test]
    fn karana_movable_cycle() {
        assert_eq!(karana_label(1), "Bava");
        assert_eq!(karana_label(7), "Vishti");
        assert_eq!(karana_label(8), "Bava");
        assert_eq!(karana_label(56), "Vishti");
    }

    #[test]
    fn labels_total_and_deterministic() {
        let mut lon = 0.0;
        while lon < 360.0 {
            let a = panchanga_from_longitudes(lon, lon * 1.7);
            let b = panchanga_from_longitudes(lon, lon * 1.7);
            assert_eq!(a, b);
            assert!(!a.tithi.is_empty() && !a.yoga.is_empty() && !a.karana.is_empty());
            lon += 11.3;
        }
    }
}
