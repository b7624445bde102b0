use std::sync::OnceLock;

use regex::Regex;

use crate::workbook::Cell;

/// Days between the Excel serial epoch (1899-12-30) and the Unix epoch.
const EXCEL_UNIX_OFFSET_DAYS: f64 = 25569.0;
const MS_PER_DAY: f64 = 86_400_000.0;

/// Fallback store label when the cell is empty.
pub(crate) const UNKNOWN_STORE: &str = "Desconocida";

// The pattern is a literal; compilation cannot fail.
#[allow(clippy::unwrap_used)]
fn vendor_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^sodimac\s*-\s*").unwrap())
}

/// Normalize a date cell to `YYYY-MM-DD`.
///
/// Numeric cells are Excel serial dates: converted to UTC milliseconds and
/// formatted as a calendar date. Text in `D/M/Y` form is rearranged to
/// `Y-M-D` with the parts kept verbatim. Anything else passes through, so a
/// matrix built later simply skips rows whose month cannot be derived.
pub(crate) fn normalize_date(cell: &Cell) -> String {
    if cell.is_blank() {
        return String::new();
    }
    match cell {
        Cell::Number(n) => {
            if n.is_finite() {
                let millis = ((n - EXCEL_UNIX_OFFSET_DAYS) * MS_PER_DAY).round() as i64;
                if let Some(date) = chrono::DateTime::from_timestamp_millis(millis) {
                    return date.format("%Y-%m-%d").to_string();
                }
            }
            cell.text()
        }
        _ => {
            let text = cell.text();
            let parts: Vec<&str> = text.split('/').collect();
            if parts.len() == 3 {
                return format!("{}-{}-{}", parts[2], parts[1], parts[0]);
            }
            text
        }
    }
}

/// Canonicalize a store name: empty cells become [`UNKNOWN_STORE`], the
/// vendor prefix ("SODIMAC - ", any casing) is stripped, and the rest is
/// title-cased word by word.
///
/// A cell holding only the prefix strips down to the empty string and stays
/// empty; those rows are later excluded from the matrices.
pub(crate) fn clean_store_name(cell: &Cell) -> String {
    let raw = cell.text();
    if raw.is_empty() {
        return UNKNOWN_STORE.to_string();
    }
    let stripped = vendor_prefix().replace(&raw, "");
    stripped
        .to_lowercase()
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Coerce a quantity cell to an integer. Text keeps its leading integer
/// ("10 un" is 10), numbers truncate toward zero, everything else is 0.
pub(crate) fn cell_to_int(cell: &Cell) -> i64 {
    match cell {
        Cell::Number(n) if n.is_finite() => n.trunc() as i64,
        Cell::Number(_) => 0,
        Cell::Text(s) => leading_int(s.trim()),
        Cell::Empty => 0,
    }
}

fn leading_int(s: &str) -> i64 {
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    s[..end].parse().unwrap_or(0)
}

/// Coerce a revenue cell to a float. Currency text is accepted with `$` and
/// thousands separators stripped; unparseable cells read as 0.
pub(crate) fn cell_to_revenue(cell: &Cell) -> f64 {
    match cell {
        Cell::Number(n) => *n,
        Cell::Text(s) => {
            let cleaned: String = s.chars().filter(|c| *c != '$' && *c != ',').collect();
            cleaned.trim().parse().unwrap_or(0.0)
        }
        Cell::Empty => 0.0,
    }
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
