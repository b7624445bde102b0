/// One row of the SKU master catalog. The table is keyed by `sku`; uploading
/// a new master upserts over whatever is already there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkuEntry {
    pub sku: String,
    pub description: String,
    pub group: String,
}
