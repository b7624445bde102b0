use crate::models::{SaleRecord, Source};
use crate::workbook::Cell;

use super::normalize::{cell_to_int, clean_store_name, normalize_date};
use super::{cell_at, col_contains, col_exact, lower_headers, text_or};

const DEFAULT_CATEGORY: &str = "Sin Categoría";
const DEFAULT_PRODUCT: &str = "Producto Desconocido";

/// Parse the 2025 history layout.
///
/// The header row is the first row with a cell containing "fecha"; columns
/// are then resolved by exact header name (the quantity column by a
/// "cantidad"/"cant" substring). Rows with a blank date cell are skipped but
/// still consume a row index, so record ids stay stable for a given sheet.
/// History rows carry no revenue and no SKU.
pub(crate) fn parse_history(rows: &[Vec<Cell>], file_id: i64) -> Vec<SaleRecord> {
    let Some(header_idx) = rows
        .iter()
        .position(|row| row.iter().any(|c| c.text().to_lowercase().contains("fecha")))
    else {
        return Vec::new();
    };

    let headers = lower_headers(&rows[header_idx]);
    let idx_date = col_exact(&headers, "fecha");
    let idx_store = col_exact(&headers, "tienda");
    let idx_group = col_exact(&headers, "grupo");
    let idx_desc = col_exact(&headers, "descripcion");
    let idx_qty = col_contains(&headers, &["cantidad", "cant"]);

    let mut records = Vec::new();
    for (index, row) in rows[header_idx + 1..].iter().enumerate() {
        let date_cell = cell_at(row, idx_date);
        if date_cell.is_blank() {
            continue;
        }
        records.push(SaleRecord {
            id: format!("{file_id}-{index}"),
            file_id,
            date: normalize_date(date_cell),
            store: clean_store_name(cell_at(row, idx_store)),
            category: text_or(cell_at(row, idx_group), DEFAULT_CATEGORY),
            product: text_or(cell_at(row, idx_desc), DEFAULT_PRODUCT),
            quantity: cell_to_int(cell_at(row, idx_qty)),
            revenue: 0.0,
            sku: None,
            source: Source::History2025,
        });
    }
    records
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
