#![allow(clippy::unwrap_used)]

use super::*;
use crate::models::Source;
use crate::workbook::Cell;

fn t(s: &str) -> Cell {
    Cell::Text(s.into())
}

fn n(v: f64) -> Cell {
    Cell::Number(v)
}

fn header() -> Vec<Cell> {
    vec![
        t("Fecha Final"),
        t("Local"),
        t("Descripción del Ítem"),
        t("Cantidad Vendida"),
        t("Código de Ítem"),
        t("Precio Neto"),
    ]
}

#[test]
fn test_parses_sample_sheet() {
    let rows = vec![
        vec![t("Informe mensual")],
        header(),
        vec![
            t("05/02/2026"),
            t("SODIMAC - Antofagasta"),
            t("Sierra circular"),
            t("3"),
            t("SKU-9"),
            t("$1,234.50"),
        ],
    ];
    let records = parse_report(&rows, 4);
    assert_eq!(records.len(), 1);

    let rec = &records[0];
    assert_eq!(rec.id, "4-0");
    assert_eq!(rec.date, "2026-02-05");
    assert_eq!(rec.store, "Antofagasta");
    assert_eq!(rec.product, "Sierra circular");
    assert_eq!(rec.quantity, 3);
    assert_eq!(rec.sku, Some("SKU-9".to_string()));
    assert_eq!(rec.revenue, 1234.50);
    assert_eq!(rec.category, "Pendiente");
    assert_eq!(rec.source, Source::Report2026);
}

#[test]
fn test_store_always_from_second_column() {
    // Header names play no part in store resolution
    let rows = vec![
        header(),
        vec![t("01/01/2026"), t("sodimac - la serena"), t("Prod"), t("1"), t("S1"), n(10.0)],
    ];
    let records = parse_report(&rows, 1);
    assert_eq!(records[0].store, "La Serena");
}

#[test]
fn test_drops_row_only_when_date_and_sku_both_blank() {
    let rows = vec![
        header(),
        vec![Cell::Empty, t("X"), t("A"), t("1"), Cell::Empty, n(1.0)],
        vec![Cell::Empty, t("X"), t("B"), t("2"), t("S2"), n(2.0)],
        vec![t("02/01/2026"), t("X"), t("C"), t("3"), Cell::Empty, n(3.0)],
    ];
    let records = parse_report(&rows, 1);
    assert_eq!(records.len(), 2);

    // Blank date survives thanks to the sku
    assert_eq!(records[0].id, "1-1");
    assert_eq!(records[0].date, "");
    assert_eq!(records[0].sku, Some("S2".to_string()));

    // Blank sku survives thanks to the date and stays None
    assert_eq!(records[1].id, "1-2");
    assert_eq!(records[1].sku, None);
}

#[test]
fn test_numeric_cells_coerce() {
    let rows = vec![
        header(),
        vec![n(46054.0), t("Sur"), Cell::Empty, n(4.0), n(778899.0), n(200.0)],
    ];
    let records = parse_report(&rows, 2);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].sku, Some("778899".to_string()));
    assert_eq!(records[0].quantity, 4);
    assert_eq!(records[0].revenue, 200.0);
    assert_eq!(records[0].product, "Desconocido");
}

#[test]
fn test_header_via_ean() {
    let rows = vec![
        vec![t("EAN"), t("Local"), t("Artículo"), t("Unidades"), t("Fecha"), t("Revenue")],
        vec![t("7801234"), t("Centro"), t("Lija"), t("6"), t("01/02/2026"), t("12.5")],
    ];
    let records = parse_report(&rows, 1);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].date, "2026-02-01");
    assert_eq!(records[0].store, "Centro");
    assert_eq!(records[0].product, "Lija");
    assert_eq!(records[0].quantity, 6);
    assert_eq!(records[0].revenue, 12.5);
    // No sku-like header resolved, so the sku stays unset
    assert_eq!(records[0].sku, None);
}

#[test]
fn test_descripcion_alone_needs_a_wide_row() {
    // A narrow cover row mentioning "descripción" must not be taken as the
    // header; the real six-column header follows
    let rows = vec![
        vec![t("Descripción general del informe")],
        header(),
        vec![t("03/03/2026"), t("Norte"), t("Clavo"), t("8"), t("S3"), t("1")],
    ];
    let records = parse_report(&rows, 1);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].product, "Clavo");
}

#[test]
fn test_no_header_yields_nothing() {
    let rows = vec![
        vec![t("resumen"), t("sin encabezados")],
        vec![t("01/01/2026"), t("X"), t("Y"), t("1"), t("S"), t("2")],
    ];
    assert!(parse_report(&rows, 1).is_empty());
}
