/// Category assigned by the 2026 report parser until the SKU join resolves it.
pub const CATEGORY_PENDING: &str = "Pendiente";

/// Category assigned by the join when a 2026 SKU has no master entry.
pub const CATEGORY_UNMAPPED: &str = "Sin Asignar (Falta Master)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    History2025,
    Report2026,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::History2025 => "2025",
            Self::Report2026 => "2026",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "2026" => Self::Report2026,
            _ => Self::History2025,
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One normalized sales row. Both source formats collapse into this shape;
/// 2025 rows carry no revenue or SKU, 2026 rows get their category filled in
/// by the SKU join.
#[derive(Debug, Clone)]
pub struct SaleRecord {
    /// `"{file_id}-{row_index}"`, where the index counts data rows below the
    /// header including skipped ones.
    pub id: String,
    pub file_id: i64,
    /// Normalized `YYYY-MM-DD`, or the raw text when it does not parse.
    pub date: String,
    pub store: String,
    pub category: String,
    pub product: String,
    pub quantity: i64,
    pub revenue: f64,
    pub sku: Option<String>,
    pub source: Source,
}
