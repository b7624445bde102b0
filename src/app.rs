use std::path::Path;

use anyhow::{Context, Result};

use crate::consolidate::{consolidate, sku_group_map};
use crate::db::Database;
use crate::ingest;
use crate::models::{FileKind, InventoryRecord, SaleRecord, StoredFile};
use crate::workbook::{self, Cell};

/// Snapshot handed to the views, rebuilt after every mutation.
#[derive(Debug, Clone, Default)]
pub(crate) struct AppState {
    pub(crate) files: Vec<StoredFile>,
    /// All stored sale records with the current SKU master applied.
    pub(crate) unified: Vec<SaleRecord>,
}

/// Ties the store to the pipeline: uploads go through the parsers into the
/// database, reads come back out through the consolidation join.
pub(crate) struct App {
    db: Database,
}

impl App {
    pub(crate) fn new(db: Database) -> Self {
        Self { db }
    }

    /// Fetch everything and re-run the SKU join. Enrichment is derived here
    /// every time rather than persisted, so the snapshot always reflects the
    /// newest master.
    pub(crate) fn load(&self) -> Result<AppState> {
        let files = self.db.get_files()?;
        let groups = sku_group_map(&self.db.get_skus()?);
        let unified = consolidate(self.db.get_records()?, &groups);
        Ok(AppState { files, unified })
    }

    pub(crate) fn file_by_id(&self, id: i64) -> Result<Option<StoredFile>> {
        self.db.get_file_by_id(id)
    }

    /// Stored stock rows. Inventory sits outside the consolidated sales set,
    /// so it is read on demand rather than carried in the snapshot.
    pub(crate) fn inventory(&self) -> Result<Vec<InventoryRecord>> {
        self.db.get_inventory()
    }

    /// Read a workbook's first sheet and ingest it as `kind`.
    pub(crate) fn upload(&mut self, path: &Path, kind: FileKind) -> Result<(StoredFile, AppState)> {
        let rows = workbook::read_rows(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.ingest_rows(&rows, &name, kind)
    }

    /// Parse already-read rows, persist the upload in one transaction, then
    /// reload the snapshot.
    pub(crate) fn ingest_rows(
        &mut self,
        rows: &[Vec<Cell>],
        name: &str,
        kind: FileKind,
    ) -> Result<(StoredFile, AppState)> {
        let file_id = self.db.next_file_id()?;

        let mut records = Vec::new();
        let mut skus = Vec::new();
        let mut inventory = Vec::new();
        match kind {
            FileKind::History2025 => records = ingest::parse_history(rows, file_id),
            FileKind::Report2026 => records = ingest::parse_report(rows, file_id),
            FileKind::SkuMaster => skus = ingest::parse_sku_master(rows),
            FileKind::Inventory => inventory = ingest::parse_inventory(rows, file_id),
        }
        let row_count = (records.len() + skus.len() + inventory.len()) as i64;

        let file = StoredFile::new(file_id, name.to_string(), kind, row_count);
        self.db.save_upload(&file, &records, &skus, &inventory)?;

        let state = self.load()?;
        Ok((file, state))
    }

    /// Delete a stored file and its rows. Confirmation is the caller's job.
    pub(crate) fn delete_file(&mut self, id: i64) -> Result<AppState> {
        self.db.delete_file(id)?;
        self.load()
    }

    /// Write the consolidated set to `path` as CSV. Returns the record count.
    pub(crate) fn export_csv(&self, path: &str) -> Result<usize> {
        let state = self.load()?;

        let mut writer =
            csv::Writer::from_path(path).with_context(|| format!("Failed to create {path}"))?;
        writer.write_record([
            "id", "file_id", "date", "store", "category", "product", "quantity", "revenue",
            "sku", "source",
        ])?;
        for record in &state.unified {
            writer.write_record(&[
                record.id.clone(),
                record.file_id.to_string(),
                record.date.clone(),
                record.store.clone(),
                record.category.clone(),
                record.product.clone(),
                record.quantity.to_string(),
                record.revenue.to_string(),
                record.sku.clone().unwrap_or_default(),
                record.source.as_str().to_string(),
            ])?;
        }
        writer
            .flush()
            .with_context(|| format!("Failed to write {path}"))?;

        Ok(state.unified.len())
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
