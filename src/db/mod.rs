mod schema;

use anyhow::{bail, Context, Result};
use rusqlite::{params, Connection};
use std::path::Path;

use crate::models::*;

pub(crate) struct Database {
    conn: Connection,
}

impl Database {
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")
            .context("Failed to set database pragmas")?;
        let mut db = Self { conn };
        db.migrate().context("Database migration failed")?;
        Ok(db)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        let mut db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&mut self) -> Result<()> {
        // Check if schema_version table exists
        let has_version_table: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
            [],
            |row| row.get(0),
        )?;

        if !has_version_table {
            // Fresh database - apply full schema
            self.conn.execute_batch(schema::SCHEMA_V1)?;
            self.conn.execute(
                "INSERT INTO schema_version (version) VALUES (?1)",
                params![schema::CURRENT_VERSION],
            )?;
            return Ok(());
        }

        // Existing database - check version and apply migrations
        let current: i32 = self
            .conn
            .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                row.get(0)
            })
            .unwrap_or(0);

        for &(from_version, sql) in schema::MIGRATIONS {
            if current <= from_version {
                self.conn.execute_batch(sql)?;
            }
        }

        if current < schema::CURRENT_VERSION {
            self.conn.execute(
                "UPDATE schema_version SET version = ?1",
                params![schema::CURRENT_VERSION],
            )?;
        }

        Ok(())
    }

    // ── Files ─────────────────────────────────────────────────

    /// Next file id. Derived from the current maximum, so ids can be reused
    /// after the newest file is deleted.
    pub(crate) fn next_file_id(&self) -> Result<i64> {
        let id: i64 =
            self.conn
                .query_row("SELECT COALESCE(MAX(id), 0) + 1 FROM files", [], |row| {
                    row.get(0)
                })?;
        Ok(id)
    }

    pub(crate) fn get_files(&self) -> Result<Vec<StoredFile>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, kind, uploaded_at, row_count FROM files ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(StoredFile {
                id: row.get(0)?,
                name: row.get(1)?,
                kind: parse_kind(&row.get::<_, String>(2)?),
                uploaded_at: row.get(3)?,
                row_count: row.get(4)?,
            })
        })?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    pub(crate) fn get_file_by_id(&self, id: i64) -> Result<Option<StoredFile>> {
        let result = self.conn.query_row(
            "SELECT id, name, kind, uploaded_at, row_count FROM files WHERE id = ?1",
            params![id],
            |row| {
                Ok(StoredFile {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    kind: parse_kind(&row.get::<_, String>(2)?),
                    uploaded_at: row.get(3)?,
                    row_count: row.get(4)?,
                })
            },
        );
        match result {
            Ok(file) => Ok(Some(file)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    // ── Uploads ───────────────────────────────────────────────

    /// Persist one upload atomically: the file row plus whatever the parse
    /// produced. SKU entries upsert by code, so the latest master wins.
    pub(crate) fn save_upload(
        &mut self,
        file: &StoredFile,
        records: &[SaleRecord],
        skus: &[SkuEntry],
        inventory: &[InventoryRecord],
    ) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO files (id, name, kind, uploaded_at, row_count)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                file.id,
                file.name,
                file.kind.as_str(),
                file.uploaded_at,
                file.row_count
            ],
        )?;

        {
            let mut stmt = tx.prepare(
                "INSERT INTO records (id, file_id, date, store, category, product, quantity, revenue, sku, source)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            )?;
            for record in records {
                stmt.execute(params![
                    record.id,
                    record.file_id,
                    record.date,
                    record.store,
                    record.category,
                    record.product,
                    record.quantity,
                    record.revenue,
                    record.sku,
                    record.source.as_str(),
                ])?;
            }
        }

        {
            let mut stmt = tx.prepare(
                "INSERT INTO skus (sku, description, group_name) VALUES (?1, ?2, ?3)
                 ON CONFLICT(sku) DO UPDATE SET description = ?2, group_name = ?3",
            )?;
            for entry in skus {
                stmt.execute(params![entry.sku, entry.description, entry.group])?;
            }
        }

        {
            let mut stmt = tx.prepare(
                "INSERT INTO inventory (id, file_id, sku, description, quantity, store, date)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for item in inventory {
                stmt.execute(params![
                    item.id,
                    item.file_id,
                    item.sku,
                    item.description,
                    item.quantity,
                    item.store,
                    item.date,
                ])?;
            }
        }

        tx.commit()?;
        Ok(())
    }

    // ── Records ───────────────────────────────────────────────

    /// All sale records in insertion order, which keeps first-seen
    /// tie-breaking downstream stable across reloads.
    pub(crate) fn get_records(&self) -> Result<Vec<SaleRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, file_id, date, store, category, product, quantity, revenue, sku, source
             FROM records ORDER BY rowid",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(SaleRecord {
                id: row.get(0)?,
                file_id: row.get(1)?,
                date: row.get(2)?,
                store: row.get(3)?,
                category: row.get(4)?,
                product: row.get(5)?,
                quantity: row.get(6)?,
                revenue: row.get(7)?,
                sku: row.get(8)?,
                source: Source::parse(&row.get::<_, String>(9)?),
            })
        })?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    // ── Skus ──────────────────────────────────────────────────

    pub(crate) fn get_skus(&self) -> Result<Vec<SkuEntry>> {
        let mut stmt = self
            .conn
            .prepare("SELECT sku, description, group_name FROM skus ORDER BY sku")?;
        let rows = stmt.query_map([], |row| {
            Ok(SkuEntry {
                sku: row.get(0)?,
                description: row.get(1)?,
                group: row.get(2)?,
            })
        })?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    /// Empty the SKU catalog. Runs inside the delete cascade whenever a
    /// master file goes away; sku rows carry no file provenance, so the
    /// clear is all-or-nothing.
    fn clear_skus(conn: &Connection) -> Result<()> {
        conn.execute("DELETE FROM skus", [])?;
        Ok(())
    }

    // ── Inventory ─────────────────────────────────────────────

    pub(crate) fn get_inventory(&self) -> Result<Vec<InventoryRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, file_id, sku, description, quantity, store, date
             FROM inventory ORDER BY rowid",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(InventoryRecord {
                id: row.get(0)?,
                file_id: row.get(1)?,
                sku: row.get(2)?,
                description: row.get(3)?,
                quantity: row.get(4)?,
                store: row.get(5)?,
                date: row.get(6)?,
            })
        })?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    // ── Deletion ──────────────────────────────────────────────

    /// Delete a stored file and everything it produced, in one transaction.
    /// Deleting a SKU master clears the entire catalog, including entries
    /// contributed by other master files.
    pub(crate) fn delete_file(&mut self, id: i64) -> Result<()> {
        let Some(file) = self.get_file_by_id(id)? else {
            bail!("File {id} not found");
        };

        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM records WHERE file_id = ?1", params![id])?;
        tx.execute("DELETE FROM inventory WHERE file_id = ?1", params![id])?;
        tx.execute("DELETE FROM files WHERE id = ?1", params![id])?;
        if file.kind == FileKind::SkuMaster {
            Self::clear_skus(&tx)?;
        }
        tx.commit()?;
        Ok(())
    }
}

/// Stored kinds always come from `FileKind::as_str`; anything unrecognized
/// reads as plain inventory data.
fn parse_kind(s: &str) -> FileKind {
    FileKind::parse(s).unwrap_or(FileKind::Inventory)
}
