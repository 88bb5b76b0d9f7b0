//! Active-period queries over generated levels.

use super::types::{DashaPeriod, DashaSnapshot, DashaTree};

/// Index of the period containing `query_jd`, half-open (`start ≤ t < end`).
///
/// An instant on a shared boundary always resolves to the period that
/// starts there, never the one that ends there.
pub fn find_active_period(periods: &[DashaPeriod], query_jd: f64) -> Option<usize> {
    periods.iter().position(|p| p.contains(query_jd))
}

/// Active chain at `query_jd` from an eagerly built tree.
///
/// Scans each level for the period containing the instant; stops at the
/// first level with no hit (instant outside the generated horizon).
pub fn snapshot_from_tree(tree: &DashaTree, query_jd: f64) -> DashaSnapshot {
    let mut periods = Vec::with_capacity(tree.levels.len());
    for level in &tree.levels {
        match find_active_period(level, query_jd) {
            Some(idx) => periods.push(level[idx]),
            None => break,
        }
    }
    DashaSnapshot { query_jd, periods }
}
