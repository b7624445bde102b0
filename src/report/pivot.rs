use std::collections::{BTreeSet, HashMap, HashSet};

use crate::models::SaleRecord;

use super::{month_index, MONTH_NAMES};

/// Record-level filters applied before the matrices are built. Empty
/// collections and `None` mean unrestricted.
#[derive(Debug, Clone, Default)]
pub(crate) struct ReportFilter {
    /// Kept when the date starts with this year.
    pub(crate) year: Option<String>,
    pub(crate) categories: BTreeSet<String>,
    /// Zero-based month indices.
    pub(crate) months: BTreeSet<u32>,
    pub(crate) store: Option<String>,
}

impl ReportFilter {
    pub(crate) fn matches(&self, record: &SaleRecord) -> bool {
        if let Some(year) = &self.year {
            if !record.date.starts_with(year.as_str()) {
                return false;
            }
        }
        if !self.categories.is_empty() && !self.categories.contains(&record.category) {
            return false;
        }
        if !self.months.is_empty() {
            match month_index(&record.date) {
                Some(month) if self.months.contains(&month) => {}
                _ => return false,
            }
        }
        if let Some(store) = &self.store {
            if record.store != *store {
                return false;
            }
        }
        true
    }
}

/// A quantity pivot. `rows` and `cols` carry the presentation order;
/// `cells` only holds pairs that actually occurred, so absence stays
/// distinguishable from an accumulated zero.
#[derive(Debug, Clone, Default)]
pub(crate) struct PivotMatrix {
    pub(crate) rows: Vec<String>,
    pub(crate) cols: Vec<String>,
    cells: HashMap<String, HashMap<String, i64>>,
}

impl PivotMatrix {
    fn add(&mut self, row: &str, col: &str, quantity: i64) {
        *self
            .cells
            .entry(row.to_string())
            .or_default()
            .entry(col.to_string())
            .or_insert(0) += quantity;
    }

    pub(crate) fn get(&self, row: &str, col: &str) -> Option<i64> {
        self.cells.get(row).and_then(|cols| cols.get(col)).copied()
    }

    pub(crate) fn row_total(&self, row: &str) -> i64 {
        self.cells
            .get(row)
            .map(|cols| cols.values().sum())
            .unwrap_or(0)
    }

    pub(crate) fn col_total(&self, col: &str) -> i64 {
        self.rows.iter().filter_map(|row| self.get(row, col)).sum()
    }

    pub(crate) fn grand_total(&self) -> i64 {
        self.rows.iter().map(|row| self.row_total(row)).sum()
    }
}

/// The four standard views over one filtered pass of the records.
#[derive(Debug, Clone)]
pub(crate) struct SalesPivots {
    pub(crate) store_category: PivotMatrix,
    pub(crate) store_month: PivotMatrix,
    pub(crate) product_month: PivotMatrix,
    pub(crate) product_store: PivotMatrix,
}

/// Build all four pivots in one pass.
///
/// Records with an empty store or an underivable month are left out of every
/// matrix. Stores and categories order alphabetically; when the filter names
/// categories, those become the columns even if some saw no data. Products
/// order by total units, first-seen on ties. Month columns are always the
/// full twelve.
pub(crate) fn build_pivots(records: &[SaleRecord], filter: &ReportFilter) -> SalesPivots {
    let mut stores = BTreeSet::new();
    let mut categories = BTreeSet::new();
    let mut products: Vec<String> = Vec::new();
    let mut seen_products = HashSet::new();

    let mut store_category = PivotMatrix::default();
    let mut store_month = PivotMatrix::default();
    let mut product_month = PivotMatrix::default();
    let mut product_store = PivotMatrix::default();

    for record in records.iter().filter(|r| filter.matches(r)) {
        if record.store.is_empty() {
            continue;
        }
        let Some(month) = month_index(&record.date) else {
            continue;
        };
        let month_name = MONTH_NAMES[month as usize];

        stores.insert(record.store.clone());
        categories.insert(record.category.clone());
        if seen_products.insert(record.product.clone()) {
            products.push(record.product.clone());
        }

        store_category.add(&record.store, &record.category, record.quantity);
        store_month.add(&record.store, month_name, record.quantity);
        product_month.add(&record.product, month_name, record.quantity);
        product_store.add(&record.product, &record.store, record.quantity);
    }

    let stores: Vec<String> = stores.into_iter().collect();
    let category_cols: Vec<String> = if filter.categories.is_empty() {
        categories.into_iter().collect()
    } else {
        filter.categories.iter().cloned().collect()
    };
    let month_cols: Vec<String> = MONTH_NAMES.iter().map(|m| (*m).to_string()).collect();

    products.sort_by_key(|p| std::cmp::Reverse(product_month.row_total(p)));

    store_category.rows = stores.clone();
    store_category.cols = category_cols;
    store_month.rows = stores.clone();
    store_month.cols = month_cols.clone();
    product_month.rows = products.clone();
    product_month.cols = month_cols;
    product_store.rows = products;
    product_store.cols = stores;

    SalesPivots {
        store_category,
        store_month,
        product_month,
        product_store,
    }
}

#[cfg(test)]
#[path = "pivot_tests.rs"]
mod tests;
