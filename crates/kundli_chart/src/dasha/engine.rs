//! Dasha timeline construction and queries.
//!
//! The mahadasha sequence starts at the birth nakshatra's lord and runs one
//! full 120-year cycle from the birth instant. The first mahadasha carries
//! its full nominal duration; the classical birth-balance shortening is
//! not applied (see DESIGN.md).

use tracing::{debug, warn};

use super::query::find_active_period;
use super::sequence::{lord_years, starting_lord};
use super::subperiod::{cyclic_sequence_from, proportional_children};
use super::types::{
    DAYS_PER_YEAR, DashaLevel, DashaPeriod, DashaSnapshot, DashaTree, MAX_DASHA_LEVEL,
};
use crate::chart::Chart;
use crate::planet::Planet;

/// Generate the 9 mahadashas of one full cycle from the birth instant.
pub fn mahadashas(birth_jd: f64, first_lord: Planet) -> Vec<DashaPeriod> {
    let seq = cyclic_sequence_from(first_lord);
    let mut periods = Vec::with_capacity(9);
    let mut cursor = birth_jd;

    for (order_0, lord) in seq.into_iter().enumerate() {
        let end = cursor + lord_years(lord) * DAYS_PER_YEAR;
        periods.push(DashaPeriod {
            lord,
            level: DashaLevel::Mahadasha,
            start_jd: cursor,
            end_jd: end,
            order: order_0 as u16 + 1,
        });
        cursor = end;
    }

    periods
}

/// Eagerly build the hierarchy down to `max_level` (clamped to 3).
///
/// Level sizes are 9, 81, 729, 6561: bounded and cheap enough to
/// materialize outright.
pub fn build_tree(birth_jd: f64, first_lord: Planet, max_level: u8) -> DashaTree {
    let max_level = max_level.min(MAX_DASHA_LEVEL);
    let mut levels: Vec<Vec<DashaPeriod>> = vec![mahadashas(birth_jd, first_lord)];

    for depth in 1..=max_level {
        let parents = &levels[(depth - 1) as usize];
        let mut children = Vec::with_capacity(parents.len() * 9);
        for parent in parents {
            children.extend(proportional_children(parent));
        }
        levels.push(children);
    }

    DashaTree { birth_jd, levels }
}

/// Active chain at `query_jd` without materializing sibling subtrees.
///
/// Drills down one parent per level; each level's children exactly tile the
/// parent, so the instant resolves to exactly one child wherever it falls
/// inside the 120-year horizon.
pub fn snapshot(birth_jd: f64, first_lord: Planet, query_jd: f64, max_level: u8) -> DashaSnapshot {
    let max_level = max_level.min(MAX_DASHA_LEVEL);
    let level0 = mahadashas(birth_jd, first_lord);
    let mut periods = Vec::with_capacity(max_level as usize + 1);

    let Some(idx) = find_active_period(&level0, query_jd) else {
        return DashaSnapshot {
            query_jd,
            periods,
        };
    };
    periods.push(level0[idx]);

    let mut current = level0[idx];
    for _ in 1..=max_level {
        let children = proportional_children(&current);
        match find_active_period(&children, query_jd) {
            Some(i) => {
                periods.push(children[i]);
                current = children[i];
            }
            None => break,
        }
    }

    DashaSnapshot { query_jd, periods }
}

/// Resolve a stored lord name, falling back to the Moon's sign lord.
///
/// Charts persisted by older deployments carry the nakshatra lord as a
/// string; an unrecognized name must not abort timeline construction, so it
/// falls back to the supplied Moon sign lord and says so in the log.
pub fn starting_lord_from_name(name: &str, moon_sign_lord: Planet) -> Planet {
    match Planet::from_name(name) {
        Some(lord) => lord,
        None => {
            warn!(
                lord = name,
                fallback = moon_sign_lord.name(),
                "unrecognized nakshatra lord, falling back to moon sign lord"
            );
            moon_sign_lord
        }
    }
}

/// Build the full 4-level timeline for a computed chart.
pub fn timeline_for_chart(chart: &Chart, max_level: u8) -> DashaTree {
    debug!(
        lord = chart.nakshatra.lord.name(),
        birth_jd = chart.birth_jd,
        "building dasha timeline"
    );
    build_tree(chart.birth_jd, chart.nakshatra.lord, max_level)
}

/// Starting lord straight from a birth nakshatra index.
pub fn first_lord_for_nakshatra(nakshatra_index: u8) -> Planet {
    starting_lord(nakshatra_index)
}
