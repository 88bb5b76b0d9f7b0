//! The fixed Vimshottari lord sequence and year allocations.

use crate::planet::Planet;

/// The 9 Vimshottari lords in cycle order, starting at Ketu (Ashwini's lord).
pub const VIMSHOTTARI_LORDS: [Planet; 9] = [
    Planet::Ketu,
    Planet::Venus,
    Planet::Sun,
    Planet::Moon,
    Planet::Mars,
    Planet::Rahu,
    Planet::Jupiter,
    Planet::Saturn,
    Planet::Mercury,
];

/// Years allotted to each lord, in sequence order. Sums to exactly 120.
pub const VIMSHOTTARI_YEARS: [f64; 9] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

/// Total cycle length in years.
pub const TOTAL_CYCLE_YEARS: f64 = 120.0;

/// Position of a lord in the Vimshottari sequence.
pub const fn lord_position(lord: Planet) -> usize {
    match lord {
        Planet::Ketu => 0,
        Planet::Venus => 1,
        Planet::Sun => 2,
        Planet::Moon => 3,
        Planet::Mars => 4,
        Planet::Rahu => 5,
        Planet::Jupiter => 6,
        Planet::Saturn => 7,
        Planet::Mercury => 8,
    }
}

/// Full-cycle years allotted to a lord.
pub const fn lord_years(lord: Planet) -> f64 {
    VIMSHOTTARI_YEARS[lord_position(lord)]
}

/// Starting mahadasha lord for a birth nakshatra (0-based index, 0=Ashwini).
///
/// The 27 nakshatras map onto the 9-lord cycle three times over.
pub const fn starting_lord(nakshatra_index: u8) -> Planet {
    VIMSHOTTARI_LORDS[(nakshatra_index as usize) % 9]
}
