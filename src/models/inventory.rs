/// One stock snapshot row from an inventory upload.
#[derive(Debug, Clone)]
pub struct InventoryRecord {
    /// `"{file_id}-{row_index}"`, same scheme as sale records.
    pub id: String,
    pub file_id: i64,
    pub sku: String,
    pub description: String,
    pub quantity: i64,
    pub store: String,
    pub date: String,
}
