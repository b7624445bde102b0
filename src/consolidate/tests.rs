#![allow(clippy::unwrap_used)]

use super::*;
use crate::models::CATEGORY_PENDING;

fn report_record(id: &str, sku: Option<&str>) -> SaleRecord {
    SaleRecord {
        id: id.into(),
        file_id: 1,
        date: "2026-02-05".into(),
        store: "Antofagasta".into(),
        category: CATEGORY_PENDING.into(),
        product: "Sierra".into(),
        quantity: 3,
        revenue: 100.0,
        sku: sku.map(String::from),
        source: Source::Report2026,
    }
}

fn history_record(id: &str) -> SaleRecord {
    SaleRecord {
        id: id.into(),
        file_id: 2,
        date: "2025-03-01".into(),
        store: "Maipu".into(),
        category: "Herramientas".into(),
        product: "Taladro".into(),
        quantity: 5,
        revenue: 0.0,
        sku: None,
        source: Source::History2025,
    }
}

fn catalog(entries: &[(&str, &str)]) -> HashMap<String, String> {
    let skus: Vec<SkuEntry> = entries
        .iter()
        .map(|(sku, group)| SkuEntry {
            sku: (*sku).into(),
            description: String::new(),
            group: (*group).into(),
        })
        .collect();
    sku_group_map(&skus)
}

#[test]
fn test_mapped_sku_gets_group() {
    let map = catalog(&[("A-1", "Herramientas")]);
    let out = consolidate(vec![report_record("1-0", Some("A-1"))], &map);
    assert_eq!(out[0].category, "Herramientas");
}

#[test]
fn test_unknown_sku_marked_unmapped() {
    let map = catalog(&[("A-1", "Herramientas")]);
    let out = consolidate(vec![report_record("1-0", Some("Z-9"))], &map);
    assert_eq!(out[0].category, "Sin Asignar (Falta Master)");
}

#[test]
fn test_empty_catalog_marks_all_skus_unmapped() {
    let map = catalog(&[]);
    let out = consolidate(vec![report_record("1-0", Some("A-1"))], &map);
    assert_eq!(out[0].category, CATEGORY_UNMAPPED);
}

#[test]
fn test_skuless_report_row_keeps_pending() {
    let map = catalog(&[("A-1", "Herramientas")]);
    let out = consolidate(vec![report_record("1-0", None)], &map);
    assert_eq!(out[0].category, CATEGORY_PENDING);
}

#[test]
fn test_history_rows_untouched() {
    let map = catalog(&[("A-1", "Herramientas")]);
    let mut record = history_record("2-0");
    record.sku = Some("A-1".into());
    record.category = "Jardin".into();
    let out = consolidate(vec![record], &map);
    // A 2025 row is never joined, even with a sku present
    assert_eq!(out[0].category, "Jardin");
}

#[test]
fn test_join_is_idempotent() {
    let map = catalog(&[("A-1", "Herramientas")]);
    let records = vec![
        report_record("1-0", Some("A-1")),
        report_record("1-1", Some("Z-9")),
        history_record("2-0"),
    ];
    let once = consolidate(records, &map);
    let twice = consolidate(once.clone(), &map);
    let cats_once: Vec<&str> = once.iter().map(|r| r.category.as_str()).collect();
    let cats_twice: Vec<&str> = twice.iter().map(|r| r.category.as_str()).collect();
    assert_eq!(cats_once, cats_twice);
}

#[test]
fn test_map_later_entries_win() {
    let map = catalog(&[("A-1", "Herramientas"), ("A-1", "Pinturas")]);
    assert_eq!(map.get("A-1"), Some(&"Pinturas".to_string()));
}

#[test]
fn test_order_and_fields_preserved() {
    let map = catalog(&[("A-1", "Herramientas")]);
    let out = consolidate(
        vec![history_record("2-0"), report_record("1-0", Some("A-1"))],
        &map,
    );
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].id, "2-0");
    assert_eq!(out[1].id, "1-0");
    assert_eq!(out[1].revenue, 100.0);
    assert_eq!(out[1].sku, Some("A-1".to_string()));
}
