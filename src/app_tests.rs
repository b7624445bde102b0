#![allow(clippy::unwrap_used)]

use super::*;
use crate::models::{Source, CATEGORY_PENDING, CATEGORY_UNMAPPED};

fn make_app() -> App {
    App::new(Database::open_in_memory().unwrap())
}

fn txt(s: &str) -> Cell {
    Cell::Text(s.into())
}

fn num(n: f64) -> Cell {
    Cell::Number(n)
}

fn history_rows() -> Vec<Vec<Cell>> {
    vec![
        vec![
            txt("Fecha"),
            txt("Tienda"),
            txt("Grupo"),
            txt("Descripcion"),
            txt("Cantidad"),
        ],
        vec![
            txt("2025-03-10"),
            txt("SODIMAC - Maipu"),
            txt("Jardin"),
            txt("Pala"),
            num(5.0),
        ],
    ]
}

fn report_rows() -> Vec<Vec<Cell>> {
    vec![
        vec![
            txt("Fecha Final"),
            txt("Tienda"),
            txt("Descripción del Ítem"),
            txt("Cantidad Vendida"),
            txt("Código de Ítem"),
            txt("Precio Neto"),
        ],
        vec![
            txt("2026-02-01"),
            txt("Centro"),
            txt("Sierra"),
            num(3.0),
            txt("SKU-1"),
            txt("$1,500.00"),
        ],
    ]
}

fn master_rows() -> Vec<Vec<Cell>> {
    vec![
        vec![txt("SKU"), txt("Descripcion"), txt("Grupo")],
        vec![txt("SKU-1"), txt("Sierra circular"), txt("Herramientas")],
    ]
}

#[test]
fn test_history_upload_persists_and_reloads() {
    let mut app = make_app();
    let (file, state) = app
        .ingest_rows(&history_rows(), "historia.xlsx", FileKind::History2025)
        .unwrap();

    assert_eq!(file.id, 1);
    assert_eq!(file.name, "historia.xlsx");
    assert_eq!(file.row_count, 1);
    assert_eq!(state.files.len(), 1);
    assert_eq!(state.unified.len(), 1);

    let record = &state.unified[0];
    assert_eq!(record.store, "Maipu");
    assert_eq!(record.category, "Jardin");
    assert_eq!(record.quantity, 5);
    assert_eq!(record.source, Source::History2025);
}

#[test]
fn test_file_ids_count_up_across_uploads() {
    let mut app = make_app();
    let (first, _) = app
        .ingest_rows(&history_rows(), "a.xlsx", FileKind::History2025)
        .unwrap();
    let (second, state) = app
        .ingest_rows(&report_rows(), "b.xlsx", FileKind::Report2026)
        .unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(state.files.len(), 2);
    assert_eq!(state.unified.len(), 2);
}

#[test]
fn test_report_stays_unmapped_until_master_arrives() {
    let mut app = make_app();
    let (_, state) = app
        .ingest_rows(&report_rows(), "reporte.xlsx", FileKind::Report2026)
        .unwrap();
    assert_eq!(state.unified[0].category, CATEGORY_UNMAPPED);

    let (master, state) = app
        .ingest_rows(&master_rows(), "maestro.xlsx", FileKind::SkuMaster)
        .unwrap();
    assert_eq!(master.row_count, 1);
    assert_eq!(state.unified[0].category, "Herramientas");
}

#[test]
fn test_deleting_master_reverts_enrichment() {
    let mut app = make_app();
    app.ingest_rows(&report_rows(), "reporte.xlsx", FileKind::Report2026)
        .unwrap();
    let (master, _) = app
        .ingest_rows(&master_rows(), "maestro.xlsx", FileKind::SkuMaster)
        .unwrap();

    let state = app.delete_file(master.id).unwrap();
    assert_eq!(state.files.len(), 1);
    assert_eq!(state.unified[0].category, CATEGORY_UNMAPPED);
}

#[test]
fn test_skuless_report_row_stays_pending() {
    let rows = vec![
        report_rows()[0].clone(),
        vec![
            txt("2026-02-02"),
            txt("Centro"),
            txt("Clavo"),
            num(2.0),
            Cell::Empty,
            num(990.0),
        ],
    ];
    let mut app = make_app();
    app.ingest_rows(&rows, "reporte.xlsx", FileKind::Report2026)
        .unwrap();
    app.ingest_rows(&master_rows(), "maestro.xlsx", FileKind::SkuMaster)
        .unwrap();

    let state = app.load().unwrap();
    assert_eq!(state.unified[0].category, CATEGORY_PENDING);
}

#[test]
fn test_inventory_upload_counts_rows() {
    let rows = vec![
        vec![
            txt("SKU"),
            txt("Descripcion"),
            txt("Cantidad"),
            txt("Tienda"),
            txt("Fecha"),
        ],
        vec![
            txt("SKU-9"),
            txt("Taladro"),
            num(12.0),
            txt("Bodega Norte"),
            txt("2026-01-15"),
        ],
    ];
    let mut app = make_app();
    let (file, state) = app
        .ingest_rows(&rows, "inventario.xlsx", FileKind::Inventory)
        .unwrap();

    assert_eq!(file.row_count, 1);
    // Inventory rows never enter the consolidated sales set
    assert!(state.unified.is_empty());

    let items = app.inventory().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].sku, "SKU-9");
    assert_eq!(items[0].store, "Bodega Norte");
}

#[test]
fn test_delete_unknown_id_errors() {
    let mut app = make_app();
    assert!(app.delete_file(42).is_err());
}

#[test]
fn test_export_csv_writes_header_and_rows() {
    let mut app = make_app();
    app.ingest_rows(&history_rows(), "historia.xlsx", FileKind::History2025)
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let count = app.export_csv(path.to_str().unwrap()).unwrap();

    assert_eq!(count, 1);
    let contents = std::fs::read_to_string(&path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(
        lines.next().unwrap(),
        "id,file_id,date,store,category,product,quantity,revenue,sku,source"
    );
    let row = lines.next().unwrap();
    assert!(row.contains("Maipu"));
    assert!(row.contains("2025"));
    assert!(lines.next().is_none());
}

#[test]
fn test_upload_missing_file_errors() {
    let mut app = make_app();
    let result = app.upload(Path::new("/no/such/file.xlsx"), FileKind::History2025);
    assert!(result.is_err());
}
