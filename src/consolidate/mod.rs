use std::collections::HashMap;

use crate::models::{SaleRecord, SkuEntry, Source, CATEGORY_UNMAPPED};

/// Index the SKU catalog by code for the join. Entries later in the slice
/// win on duplicate codes, matching the upsert order in storage.
pub(crate) fn sku_group_map(skus: &[SkuEntry]) -> HashMap<String, String> {
    let mut map = HashMap::with_capacity(skus.len());
    for entry in skus {
        map.insert(entry.sku.clone(), entry.group.clone());
    }
    map
}

/// Assign categories to 2026 rows from the SKU catalog.
///
/// Only 2026-sourced records with a SKU are touched: a catalog hit replaces
/// the category with the SKU's group, a miss marks it [`CATEGORY_UNMAPPED`].
/// History rows and skuless report rows pass through unchanged. The join is
/// pure and re-derived on every load; the enriched category is never written
/// back, so the output is the same no matter how often it runs.
pub(crate) fn consolidate(
    records: Vec<SaleRecord>,
    sku_groups: &HashMap<String, String>,
) -> Vec<SaleRecord> {
    records
        .into_iter()
        .map(|mut record| {
            if record.source == Source::Report2026 {
                if let Some(sku) = &record.sku {
                    record.category = sku_groups
                        .get(sku)
                        .cloned()
                        .unwrap_or_else(|| CATEGORY_UNMAPPED.to_string());
                }
            }
            record
        })
        .collect()
}

#[cfg(test)]
mod tests;
