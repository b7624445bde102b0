use crate::models::SkuEntry;
use crate::workbook::Cell;

use super::{cell_at, col_contains, lower_headers};

/// Parse a SKU master catalog: the sku, its description and the commercial
/// group used to categorize 2026 rows. Rows whose sku cell reads empty are
/// dropped; descriptions and groups may be empty.
pub(crate) fn parse_sku_master(rows: &[Vec<Cell>]) -> Vec<SkuEntry> {
    let Some(header_idx) = rows.iter().position(|row| {
        row.iter().any(|cell| {
            let s = cell.text().to_lowercase();
            s.contains("sku") || s.contains("item")
        })
    }) else {
        return Vec::new();
    };

    let headers = lower_headers(&rows[header_idx]);
    let idx_sku = col_contains(&headers, &["sku", "item", "codigo"]);
    let idx_desc = col_contains(&headers, &["descripcion"]);
    let idx_group = col_contains(&headers, &["grupo", "categoria"]);

    let mut entries = Vec::new();
    for row in &rows[header_idx + 1..] {
        let sku = cell_at(row, idx_sku).text();
        if sku.is_empty() {
            continue;
        }
        entries.push(SkuEntry {
            sku,
            description: cell_at(row, idx_desc).text(),
            group: cell_at(row, idx_group).text(),
        });
    }
    entries
}

#[cfg(test)]
#[path = "sku_master_tests.rs"]
mod tests;
