use std::path::Path;

use anyhow::{anyhow, Context, Result};
use calamine::{open_workbook_auto, Data, Reader};

/// A spreadsheet cell reduced to the three shapes the parsers care about.
/// Formatting, formulas and error values are resolved away at read time.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Cell {
    Number(f64),
    Text(String),
    Empty,
}

impl Cell {
    pub(crate) fn from_data(data: &Data) -> Self {
        match data {
            Data::Int(i) => Self::Number(*i as f64),
            Data::Float(f) => Self::Number(*f),
            Data::DateTime(dt) => Self::Number(dt.as_f64()),
            Data::String(s) => Self::Text(s.clone()),
            Data::DateTimeIso(s) | Data::DurationIso(s) => Self::Text(s.clone()),
            Data::Bool(b) => Self::Text(if *b { "true" } else { "false" }.to_string()),
            Data::Error(_) | Data::Empty => Self::Empty,
        }
    }

    /// True for cells the row filters treat as missing: empty cells,
    /// whitespace-only text and the number zero.
    pub(crate) fn is_blank(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(s) => s.trim().is_empty(),
            Self::Number(n) => *n == 0.0,
        }
    }

    /// Trimmed text form. Integral numbers print without a decimal point,
    /// so a SKU column read as `1234.0` still yields `"1234"`.
    pub(crate) fn text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(s) => s.trim().to_string(),
            Self::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{n:.0}")
                } else {
                    n.to_string()
                }
            }
        }
    }
}

/// Read the first sheet of a workbook into rows of [`Cell`]s.
///
/// Rows are re-padded to absolute column positions (calamine ranges start at
/// the first used cell, but the report layout addresses columns by absolute
/// index), then trailing empties are trimmed so row width reflects content.
pub(crate) fn read_rows(path: &Path) -> Result<Vec<Vec<Cell>>> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open workbook: {}", path.display()))?;

    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| anyhow!("Workbook has no sheets: {}", path.display()))?;

    let range = workbook
        .worksheet_range(&sheet)
        .with_context(|| format!("Failed to read sheet '{sheet}'"))?;

    let start_col = range.start().map(|(_, col)| col as usize).unwrap_or(0);

    let mut rows = Vec::with_capacity(range.height());
    for row in range.rows() {
        let mut cells = Vec::with_capacity(start_col + row.len());
        cells.resize(start_col, Cell::Empty);
        cells.extend(row.iter().map(Cell::from_data));
        while matches!(cells.last(), Some(Cell::Empty)) {
            cells.pop();
        }
        rows.push(cells);
    }
    Ok(rows)
}
