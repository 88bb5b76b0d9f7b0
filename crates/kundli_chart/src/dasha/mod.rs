//! Vimshottari dasha (planetary period) timeline.
//!
//! A 120-year cycle of 9 planetary periods, seeded by the Moon's nakshatra
//! lord at birth and recursively subdivided through 4 levels (Mahadasha,
//! Antardasha, Pratyantardasha, Sukshmadasha). Two query strategies are
//! provided: an eager bounded tree and a sibling-free analytic drill-down;
//! both honor the half-open period convention.

pub mod engine;
pub mod query;
pub mod sequence;
pub mod subperiod;
pub mod types;

pub use engine::{build_tree, mahadashas, snapshot, starting_lord_from_name, timeline_for_chart};
pub use query::{find_active_period, snapshot_from_tree};
pub use sequence::{
    TOTAL_CYCLE_YEARS, VIMSHOTTARI_LORDS, VIMSHOTTARI_YEARS, lord_position, lord_years,
    starting_lord,
};
pub use subperiod::{cyclic_sequence_from, proportional_children, snap_last_child_end};
pub use types::{
    DAYS_PER_YEAR, DashaLevel, DashaPeriod, DashaSnapshot, DashaTree, MAX_DASHA_LEVEL,
};
