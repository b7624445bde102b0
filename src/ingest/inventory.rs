use crate::models::InventoryRecord;
use crate::workbook::Cell;

use super::normalize::{cell_to_int, clean_store_name, normalize_date};
use super::{cell_at, col_contains, lower_headers};

/// Parse an inventory snapshot. Same header conventions as the SKU master;
/// rows without a sku are dropped but still consume a row index.
pub(crate) fn parse_inventory(rows: &[Vec<Cell>], file_id: i64) -> Vec<InventoryRecord> {
    let Some(header_idx) = rows.iter().position(|row| {
        row.iter().any(|cell| {
            let s = cell.text().to_lowercase();
            s.contains("sku") || s.contains("codigo")
        })
    }) else {
        return Vec::new();
    };

    let headers = lower_headers(&rows[header_idx]);
    let idx_sku = col_contains(&headers, &["sku", "codigo", "item"]);
    let idx_desc = col_contains(&headers, &["descripcion"]);
    let idx_qty = col_contains(&headers, &["cantidad", "stock", "existencia"]);
    let idx_store = col_contains(&headers, &["tienda", "bodega"]);
    let idx_date = col_contains(&headers, &["fecha"]);

    let mut records = Vec::new();
    for (index, row) in rows[header_idx + 1..].iter().enumerate() {
        let sku = cell_at(row, idx_sku).text();
        if sku.is_empty() {
            continue;
        }
        records.push(InventoryRecord {
            id: format!("{file_id}-{index}"),
            file_id,
            sku,
            description: cell_at(row, idx_desc).text(),
            quantity: cell_to_int(cell_at(row, idx_qty)),
            store: clean_store_name(cell_at(row, idx_store)),
            date: normalize_date(cell_at(row, idx_date)),
        });
    }
    records
}

#[cfg(test)]
#[path = "inventory_tests.rs"]
mod tests;
