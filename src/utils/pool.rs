use std::collections::BTreeSet;

use log::debug;

/// The integers `1..=bound` that are not excluded, ascending
pub fn build_pool(bound: i64, excluded: &BTreeSet<i64>) -> Vec<i64> {
    let pool: Vec<i64> = (1..=bound).filter(|n| !excluded.contains(n)).collect();
    debug!(
        "Built pool of {} integers from bound {} ({} excluded)",
        pool.len(),
        bound,
        excluded.len()
    );
    pool
}

/// Union of two ascending, duplicate-free integer lists
pub fn merge_distinct(left: &[i64], right: &[i64]) -> Vec<i64> {
    let mut merged: Vec<i64> = left.iter().chain(right).copied().collect();
    merged.sort_unstable();
    merged.dedup();
    merged
}
