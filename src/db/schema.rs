pub(crate) const SCHEMA_V1: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS files (
    id          INTEGER PRIMARY KEY,
    name        TEXT NOT NULL,
    kind        TEXT NOT NULL,
    uploaded_at INTEGER NOT NULL,
    row_count   INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS records (
    id        TEXT PRIMARY KEY,
    file_id   INTEGER NOT NULL REFERENCES files(id),
    date      TEXT NOT NULL DEFAULT '',
    store     TEXT NOT NULL DEFAULT '',
    category  TEXT NOT NULL DEFAULT '',
    product   TEXT NOT NULL DEFAULT '',
    quantity  INTEGER NOT NULL DEFAULT 0,
    revenue   REAL NOT NULL DEFAULT 0,
    sku       TEXT,
    source    TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_records_file ON records(file_id);
CREATE INDEX IF NOT EXISTS idx_records_date ON records(date);
CREATE INDEX IF NOT EXISTS idx_records_store ON records(store);

CREATE TABLE IF NOT EXISTS skus (
    sku         TEXT PRIMARY KEY,
    description TEXT NOT NULL DEFAULT '',
    group_name  TEXT NOT NULL DEFAULT ''
);

CREATE TABLE IF NOT EXISTS inventory (
    id          TEXT PRIMARY KEY,
    file_id     INTEGER NOT NULL REFERENCES files(id),
    sku         TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    quantity    INTEGER NOT NULL DEFAULT 0,
    store       TEXT NOT NULL DEFAULT '',
    date        TEXT NOT NULL DEFAULT ''
);

CREATE INDEX IF NOT EXISTS idx_inventory_file ON inventory(file_id);
CREATE INDEX IF NOT EXISTS idx_inventory_sku ON inventory(sku);

"#;

pub(crate) const CURRENT_VERSION: i32 = 1;

/// Migrations from version N to N+1.
/// Each entry is (from_version, sql).
pub(crate) const MIGRATIONS: &[(i32, &str)] = &[
    // Future migrations go here:
    // (1, "ALTER TABLE records ADD COLUMN currency TEXT NOT NULL DEFAULT 'CLP';"),
];
