//! Core types for the dasha timeline.

use serde::{Deserialize, Serialize};

use crate::planet::Planet;

/// Fixed year length for dasha arithmetic: the Julian year.
///
/// Period boundaries are defined by this constant, not by calendar date
/// arithmetic, so they are reproducible bit-for-bit.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Deepest supported level (0 = Mahadasha .. 3 = Sukshmadasha).
pub const MAX_DASHA_LEVEL: u8 = 3;

/// The 4 hierarchical dasha levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum DashaLevel {
    Mahadasha = 0,
    Antardasha = 1,
    Pratyantardasha = 2,
    Sukshmadasha = 3,
}

impl DashaLevel {
    /// Create from a raw depth value.
    pub const fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Mahadasha),
            1 => Some(Self::Antardasha),
            2 => Some(Self::Pratyantardasha),
            3 => Some(Self::Sukshmadasha),
            _ => None,
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
            Self::Pratyantardasha => "Pratyantardasha",
            Self::Sukshmadasha => "Sukshmadasha",
        }
    }

    /// Next deeper level, if any.
    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Mahadasha => Some(Self::Antardasha),
            Self::Antardasha => Some(Self::Pratyantardasha),
            Self::Pratyantardasha => Some(Self::Sukshmadasha),
            Self::Sukshmadasha => None,
        }
    }
}

/// A single dasha period. Intervals are half-open: `[start_jd, end_jd)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashaPeriod {
    /// The planet ruling this period.
    pub lord: Planet,
    /// Hierarchical level.
    pub level: DashaLevel,
    /// Start, JD UTC, inclusive.
    pub start_jd: f64,
    /// End, JD UTC, exclusive.
    pub end_jd: f64,
    /// 1-indexed position among siblings.
    pub order: u16,
}

impl DashaPeriod {
    /// Duration in days.
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    /// Duration in fixed 365.25-day years.
    pub fn duration_years(&self) -> f64 {
        self.duration_days() / DAYS_PER_YEAR
    }

    /// Half-open containment test.
    pub fn contains(&self, jd: f64) -> bool {
        self.start_jd <= jd && jd < self.end_jd
    }
}

/// An eagerly generated dasha hierarchy, read-only after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashaTree {
    /// Birth instant, JD UTC.
    pub birth_jd: f64,
    /// `levels[0]` = mahadashas, `levels[1]` = antardashas, etc.
    pub levels: Vec<Vec<DashaPeriod>>,
}

/// The chain of active periods at one queried instant, outermost first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashaSnapshot {
    /// The queried instant, JD UTC.
    pub query_jd: f64,
    /// Active periods: `periods[0]` = mahadasha, `[1]` = antardasha, etc.
    pub periods: Vec<DashaPeriod>,
}
