mod history;
mod inventory;
pub(crate) mod normalize;
mod report;
mod sku_master;

pub(crate) use history::parse_history;
pub(crate) use inventory::parse_inventory;
pub(crate) use report::parse_report;
pub(crate) use sku_master::parse_sku_master;

use crate::workbook::Cell;

const EMPTY_CELL: Cell = Cell::Empty;

/// Lowercased, trimmed header texts for a candidate header row.
fn lower_headers(row: &[Cell]) -> Vec<String> {
    row.iter().map(|c| c.text().to_lowercase()).collect()
}

/// First column whose header contains any of the needles.
fn col_contains(headers: &[String], needles: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|h| needles.iter().any(|n| h.contains(n)))
}

/// Column whose header matches a name exactly.
fn col_exact(headers: &[String], name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

/// Cell at an optional column index; unresolved columns read as empty, so a
/// layout missing a column degrades to defaults instead of failing.
fn cell_at<'a>(row: &'a [Cell], idx: Option<usize>) -> &'a Cell {
    idx.and_then(|i| row.get(i)).unwrap_or(&EMPTY_CELL)
}

/// Cell text, or a default when the text form is empty.
fn text_or(cell: &Cell, default: &str) -> String {
    let text = cell.text();
    if text.is_empty() {
        default.to_string()
    } else {
        text
    }
}
