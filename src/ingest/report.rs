use crate::models::{SaleRecord, Source, CATEGORY_PENDING};
use crate::workbook::Cell;

use super::normalize::{cell_to_int, cell_to_revenue, clean_store_name, normalize_date};
use super::{cell_at, col_contains, lower_headers, text_or};

const DEFAULT_PRODUCT: &str = "Desconocido";

/// The 2026 export keeps the store in a fixed column regardless of headers.
const STORE_COL: usize = 1;

/// "descripción" alone only marks a header on rows wider than this; narrow
/// cover sheets mention the word too.
const NARROW_ROW_WIDTH: usize = 5;

fn is_header(row: &[Cell]) -> bool {
    row.iter().any(|cell| {
        let s = cell.text().to_lowercase();
        s.contains("fecha final")
            || s.contains("ean")
            || (s.contains("descripción") && row.len() > NARROW_ROW_WIDTH)
    })
}

/// Parse the 2026 report layout.
///
/// Columns are resolved by header substring. A row is dropped only when both
/// its date and SKU cells are blank; rows with either one present are kept,
/// including partial entries. Every record starts in the [`CATEGORY_PENDING`]
/// category until the SKU join assigns a real one.
pub(crate) fn parse_report(rows: &[Vec<Cell>], file_id: i64) -> Vec<SaleRecord> {
    let Some(header_idx) = rows.iter().position(|row| is_header(row)) else {
        return Vec::new();
    };

    let headers = lower_headers(&rows[header_idx]);
    let idx_date = col_contains(&headers, &["fecha final", "fecha"]);
    let idx_product = col_contains(
        &headers,
        &["descripción del ítem", "descripcion del item", "artículo"],
    );
    let idx_qty = col_contains(&headers, &["cantidad vendida", "unidades"]);
    let idx_sku = col_contains(&headers, &["código de ítem", "sku", "comprador"]);
    let idx_revenue = col_contains(&headers, &["precio neto", "venta neta", "revenue"]);

    let mut records = Vec::new();
    for (index, row) in rows[header_idx + 1..].iter().enumerate() {
        let date_cell = cell_at(row, idx_date);
        let sku_cell = cell_at(row, idx_sku);
        if date_cell.is_blank() && sku_cell.is_blank() {
            continue;
        }
        let sku = sku_cell.text();
        records.push(SaleRecord {
            id: format!("{file_id}-{index}"),
            file_id,
            date: normalize_date(date_cell),
            store: clean_store_name(cell_at(row, Some(STORE_COL))),
            category: CATEGORY_PENDING.to_string(),
            product: text_or(cell_at(row, idx_product), DEFAULT_PRODUCT),
            quantity: cell_to_int(cell_at(row, idx_qty)),
            revenue: cell_to_revenue(cell_at(row, idx_revenue)),
            sku: if sku.is_empty() { None } else { Some(sku) },
            source: Source::Report2026,
        });
    }
    records
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
