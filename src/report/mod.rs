mod pivot;
mod ranking;
mod summary;

pub(crate) use pivot::{build_pivots, PivotMatrix, ReportFilter, SalesPivots};
pub(crate) use ranking::{rank_stores, StoreRanking};
pub(crate) use summary::{summarize, SummaryReport};

use chrono::Datelike;

/// Month names used as pivot columns, always all twelve in calendar order.
pub(crate) const MONTH_NAMES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// Short month labels for the ranking table header.
pub(crate) const MONTH_ABBREV: [&str; 12] = [
    "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
];

/// Zero-based month of a normalized `YYYY-MM-DD` date, `None` when the text
/// does not parse as a date. Records without a derivable month stay out of
/// every matrix.
pub(crate) fn month_index(date: &str) -> Option<u32> {
    chrono::NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .ok()
        .map(|d| d.month0())
}
