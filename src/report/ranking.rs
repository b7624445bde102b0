use std::collections::HashMap;

use super::PivotMatrix;

/// Points charged when a store has no rank assignment for a month.
pub(crate) const MISSING_MONTH_PENALTY: i64 = 999;

/// One store's row of the ranking table, in final-standing order.
#[derive(Debug, Clone)]
pub(crate) struct StoreRanking {
    pub(crate) store: String,
    /// Rank per month column, `None` where the store was never ranked.
    pub(crate) monthly_ranks: Vec<Option<usize>>,
    /// Running points total after each month.
    pub(crate) cumulative: Vec<i64>,
    pub(crate) total: i64,
}

/// Rank stores month by month from the Store × Month matrix.
///
/// Every month each matrix row competes: more units means a better (lower)
/// rank, absent cells score zero, equal scores rank alphabetically. Ranks
/// accumulate as points across all month columns; a store outside a month's
/// assignment is charged [`MISSING_MONTH_PENALTY`] instead. The lowest
/// total wins the final standing, ties again alphabetical.
pub(crate) fn rank_stores(store_month: &PivotMatrix, stores: &[String]) -> Vec<StoreRanking> {
    let monthly = month_rank_assignments(store_month);

    let mut rankings: Vec<StoreRanking> = stores
        .iter()
        .map(|store| {
            let mut monthly_ranks = Vec::with_capacity(monthly.len());
            let mut cumulative = Vec::with_capacity(monthly.len());
            let mut total = 0i64;
            for ranks in &monthly {
                let rank = ranks.get(store.as_str()).copied();
                total += rank.map_or(MISSING_MONTH_PENALTY, |r| r as i64);
                monthly_ranks.push(rank);
                cumulative.push(total);
            }
            StoreRanking {
                store: store.clone(),
                monthly_ranks,
                cumulative,
                total,
            }
        })
        .collect();

    rankings.sort_by(|a, b| a.total.cmp(&b.total).then_with(|| a.store.cmp(&b.store)));
    rankings
}

/// Rank assignment for each month column, over the matrix rows.
fn month_rank_assignments(store_month: &PivotMatrix) -> Vec<HashMap<String, usize>> {
    store_month
        .cols
        .iter()
        .map(|month| {
            let mut scores: Vec<(&String, i64)> = store_month
                .rows
                .iter()
                .map(|store| (store, store_month.get(store, month).unwrap_or(0)))
                .collect();
            scores.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
            scores
                .into_iter()
                .enumerate()
                .map(|(index, (store, _))| (store.clone(), index + 1))
                .collect()
        })
        .collect()
}

#[cfg(test)]
#[path = "ranking_tests.rs"]
mod tests;
