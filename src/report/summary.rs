use std::collections::{BTreeMap, HashMap};

use crate::models::{SaleRecord, Source};

use super::month_index;

/// How many categories the mix keeps.
const MIX_TOP_N: usize = 6;

/// Aggregate figures over the whole consolidated set, unfiltered.
#[derive(Debug, Clone, Default)]
pub(crate) struct SummaryReport {
    pub(crate) total_quantity: i64,
    pub(crate) total_revenue: f64,
    pub(crate) top_store: Option<(String, i64)>,
    pub(crate) top_product: Option<(String, i64)>,
    pub(crate) monthly_trend: Vec<MonthTrend>,
    /// Top categories by units, descending.
    pub(crate) category_mix: Vec<(String, i64)>,
}

/// Units per calendar month, split by campaign year. A record counts toward
/// a series when its source or its date year matches, so a mislabeled row
/// can contribute to both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MonthTrend {
    /// 1-based month number.
    pub(crate) month: u32,
    pub(crate) qty_2025: i64,
    pub(crate) qty_2026: i64,
}

pub(crate) fn summarize(records: &[SaleRecord]) -> SummaryReport {
    let total_quantity = records.iter().map(|r| r.quantity).sum();
    let total_revenue = records.iter().map(|r| r.revenue).sum();

    let top_store = top_entry(&tally(records, |r| &r.store));
    let top_product = top_entry(&tally(records, |r| &r.product));

    let mut trend: BTreeMap<u32, (i64, i64)> = BTreeMap::new();
    for record in records {
        let Some(month) = month_index(&record.date) else {
            continue;
        };
        let bucket = trend.entry(month + 1).or_insert((0, 0));
        if record.source == Source::History2025 || record.date.starts_with("2025") {
            bucket.0 += record.quantity;
        }
        if record.source == Source::Report2026 || record.date.starts_with("2026") {
            bucket.1 += record.quantity;
        }
    }
    let monthly_trend = trend
        .into_iter()
        .map(|(month, (qty_2025, qty_2026))| MonthTrend {
            month,
            qty_2025,
            qty_2026,
        })
        .collect();

    let mut category_mix = tally(records, |r| &r.category);
    category_mix.sort_by(|a, b| b.1.cmp(&a.1));
    category_mix.truncate(MIX_TOP_N);

    SummaryReport {
        total_quantity,
        total_revenue,
        top_store,
        top_product,
        monthly_trend,
        category_mix,
    }
}

/// Quantity totals keyed by a record field, in first-seen order.
fn tally<'a, F>(records: &'a [SaleRecord], key: F) -> Vec<(String, i64)>
where
    F: Fn(&'a SaleRecord) -> &'a str,
{
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut out: Vec<(String, i64)> = Vec::new();
    for record in records {
        let k = key(record);
        match index.get(k) {
            Some(&i) => out[i].1 += record.quantity,
            None => {
                index.insert(k, out.len());
                out.push((k.to_string(), record.quantity));
            }
        }
    }
    out
}

/// Highest-quantity entry; the earliest one wins ties.
fn top_entry(entries: &[(String, i64)]) -> Option<(String, i64)> {
    let mut best: Option<&(String, i64)> = None;
    for entry in entries {
        if best.map_or(true, |b| entry.1 > b.1) {
            best = Some(entry);
        }
    }
    best.cloned()
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
