use crate::ReportPath;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for the run summary receipt.
pub const SCHEMA_SUMMARY_V1: &str = "leakscan.summary.v1";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Per-report counters for a single scan.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSummary {
    pub path: ReportPath,
    /// Leak headers encountered in this file.
    pub blocks_seen: u32,
    /// Blocks written to the output (at least one project line).
    pub blocks_emitted: u32,
    /// Body lines kept across all emitted blocks.
    pub lines_retained: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryTotals {
    pub files_scanned: u32,
    pub blocks_seen: u32,
    pub blocks_emitted: u32,
    pub lines_retained: u32,
}

impl SummaryTotals {
    pub fn from_files(files: &[FileSummary]) -> Self {
        files.iter().fold(
            SummaryTotals {
                files_scanned: u32::try_from(files.len()).unwrap_or(u32::MAX),
                ..SummaryTotals::default()
            },
            |mut acc, f| {
                acc.blocks_seen = acc.blocks_seen.saturating_add(f.blocks_seen);
                acc.blocks_emitted = acc.blocks_emitted.saturating_add(f.blocks_emitted);
                acc.lines_retained = acc.lines_retained.saturating_add(f.lines_retained);
                acc
            },
        )
    }
}

/// Machine-readable receipt of one invocation.
///
/// Only describes the run that produced it; nothing is carried over between runs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub schema: String,
    pub tool: ToolMeta,
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub duration_ms: u64,
    /// Where the filtered text report was written.
    pub output: ReportPath,
    pub files: Vec<FileSummary>,
    pub totals: SummaryTotals,
}
