#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileKind {
    History2025,
    Report2026,
    SkuMaster,
    Inventory,
}

impl FileKind {
    /// Storage form, kept stable because it is written to the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::History2025 => "history2025",
            Self::Report2026 => "report2026",
            Self::SkuMaster => "skuMaster",
            Self::Inventory => "inventory",
        }
    }

    /// Human label shown in file listings.
    pub fn label(&self) -> &'static str {
        match self {
            Self::History2025 => "Histórico 25",
            Self::Report2026 => "Reporte 26",
            Self::SkuMaster => "Maestro SKU",
            Self::Inventory => "Inventario",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "history2025" | "history" | "historico" | "histórico" => Some(Self::History2025),
            "report2026" | "report" | "reporte" => Some(Self::Report2026),
            "skumaster" | "sku-master" | "sku" | "maestro" => Some(Self::SkuMaster),
            "inventory" | "inventario" => Some(Self::Inventory),
            _ => None,
        }
    }

    pub fn all() -> &'static [FileKind] {
        &[
            Self::History2025,
            Self::Report2026,
            Self::SkuMaster,
            Self::Inventory,
        ]
    }
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Metadata for one uploaded workbook. The rows it produced live in the
/// records, skus or inventory tables depending on `kind`.
#[derive(Debug, Clone)]
pub struct StoredFile {
    pub id: i64,
    pub name: String,
    pub kind: FileKind,
    /// Unix timestamp in milliseconds.
    pub uploaded_at: i64,
    pub row_count: i64,
}

impl StoredFile {
    pub fn new(id: i64, name: String, kind: FileKind, row_count: i64) -> Self {
        Self {
            id,
            name,
            kind,
            uploaded_at: chrono::Utc::now().timestamp_millis(),
            row_count,
        }
    }
}
