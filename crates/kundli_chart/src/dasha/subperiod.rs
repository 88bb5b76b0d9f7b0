//! Proportional sub-period generation.
//!
//! Every parent period of duration D splits into 9 children cycling the
//! full lord sequence starting at the parent's own lord, each child taking
//! `D · years[child]/120`. The children tile the parent exactly.

use super::sequence::{TOTAL_CYCLE_YEARS, VIMSHOTTARI_LORDS, lord_position, lord_years};
use super::types::{DashaLevel, DashaPeriod};
use crate::planet::Planet;

/// Snap the last child's end to the parent's end to absorb floating-point
/// drift from the cursor accumulation.
pub fn snap_last_child_end(children: &mut [DashaPeriod], parent_end_jd: f64) {
    if let Some(last) = children.last_mut() {
        last.end_jd = parent_end_jd;
    }
}

/// The 9-lord cycle rotated to start at the given lord.
pub fn cyclic_sequence_from(lord: Planet) -> [Planet; 9] {
    let start = lord_position(lord);
    let mut seq = [Planet::Ketu; 9];
    for (i, slot) in seq.iter_mut().enumerate() {
        *slot = VIMSHOTTARI_LORDS[(start + i) % 9];
    }
    seq
}

/// Generate the 9 children of a parent period.
///
/// Returns an empty vector if the parent is already at the deepest level.
pub fn proportional_children(parent: &DashaPeriod) -> Vec<DashaPeriod> {
    let child_level = match parent.level.child_level() {
        Some(l) => l,
        None => return Vec::new(),
    };
    generate_children(parent, child_level)
}

fn generate_children(parent: &DashaPeriod, child_level: DashaLevel) -> Vec<DashaPeriod> {
    let parent_duration = parent.end_jd - parent.start_jd;
    let mut children = Vec::with_capacity(9);
    let mut cursor = parent.start_jd;

    for (order_0, lord) in cyclic_sequence_from(parent.lord).into_iter().enumerate() {
        let duration = parent_duration * lord_years(lord) / TOTAL_CYCLE_YEARS;
        let end = cursor + duration;
        children.push(DashaPeriod {
            lord,
            level: child_level,
            start_jd: cursor,
            end_jd: end,
            order: order_0 as u16 + 1,
        });
        cursor = end;
    }

    snap_last_child_end(&mut children, parent.end_jd);
    children
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dasha::types::DAYS_PER_YEAR;

    fn parent(lord: Planet, years: f64) -> DashaPeriod {
        DashaPeriod {
            lord,
            level: DashaLevel::Mahadasha,
            start_jd: 2_451_545.0,
            end_jd: 2_451_545.0 + years * DAYS_PER_YEAR,
            order: 1,
        }
    }

    #[test]
    fn cyclic_sequence_starts_at_parent_lord() {
        let seq = cyclic_sequence_from(Planet::Moon);
        assert_eq!(seq[0], Planet::Moon);
        assert_eq!(seq[1], Planet::Mars);
        assert_eq!(seq[8], Planet::Sun);
    }

    #[test]
    fn children_count_and_first_lord() {
        let children = proportional_children(&parent(Planet::Jupiter, 16.0));
        assert_eq!(children.len(), 9);
        assert_eq!(children[0].lord, Planet::Jupiter);
        assert_eq!(children[0].level, DashaLevel::Antardasha);
    }

    #[test]
    fn children_tile_parent_exactly() {
        let p = parent(Planet::Venus, 20.0);
        let children = proportional_children(&p);
        assert_eq!(children[0].start_jd, p.start_jd);
        assert_eq!(children[8].end_jd, p.end_jd);
        for i in 0..8 {
            assert_eq!(
                children[i].end_jd, children[i + 1].start_jd,
                "gap after child {i}"
            );
        }
    }

    #[test]
    fn children_sum_to_parent_duration() {
        let p = parent(Planet::Saturn, 19.0);
        let total: f64 = proportional_children(&p)
            .iter()
            .map(DashaPeriod::duration_days)
            .sum();
        assert!((total - p.duration_days()).abs() < 1e-9);
    }

    #[test]
    fn jupiter_saturn_antardasha_share() {
        // Saturn antardasha inside a 16-year Jupiter mahadasha: 16·19/120 years.
        let children = proportional_children(&parent(Planet::Jupiter, 16.0));
        let saturn = children
            .iter()
            .find(|c| c.lord == Planet::Saturn)
            .expect("saturn antardasha");
        let expected = 16.0 * 19.0 / 120.0;
        assert!((saturn.duration_years() - expected).abs() < 1e-9);
    }

    #[test]
    fn deepest_level_has_no_children() {
        let p = DashaPeriod {
            lord: Planet::Sun,
            level: DashaLevel::Sukshmadasha,
            start_jd: 0.0,
            end_jd: 10.0,
            order: 1,
        };
        assert!(proportional_children(&p).is_empty());
    }

    #[test]
    fn orders_are_one_indexed() {
        let children = proportional_children(&parent(Planet::Ketu, 7.0));
        for (i, c) in children.iter().enumerate() {
            assert_eq!(c.order as usize, i + 1);
        }
    }
}
