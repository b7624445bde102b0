/// Per-upload ingest counters. Declared alongside the other models so the
/// shape is settled, but no pipeline stage fills it in yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(dead_code)]
pub struct IngestStats {
    pub total_rows: usize,
    pub history_rows: usize,
    pub report_rows: usize,
    pub mapped_rows: usize,
    pub missing_skus: usize,
}
