mod file;
mod inventory;
mod record;
mod sku;
mod stats;

pub use file::{FileKind, StoredFile};
pub use inventory::InventoryRecord;
pub use record::{SaleRecord, Source, CATEGORY_PENDING, CATEGORY_UNMAPPED};
pub use sku::SkuEntry;
pub use stats::IngestStats;
