//! The optional run summary receipt.

use anyhow::Context;
use camino::Utf8Path;
use leakscan_types::{
    FileSummary, ReportPath, RunSummary, SummaryTotals, ToolMeta, SCHEMA_SUMMARY_V1,
};
use time::OffsetDateTime;

pub fn build_summary(
    started_at: OffsetDateTime,
    finished_at: OffsetDateTime,
    output: &Utf8Path,
    files: Vec<FileSummary>,
) -> RunSummary {
    let duration_ms = (finished_at - started_at).whole_milliseconds().max(0) as u64;
    let totals = SummaryTotals::from_files(&files);
    RunSummary {
        schema: SCHEMA_SUMMARY_V1.to_string(),
        tool: ToolMeta {
            name: "leakscan".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        duration_ms,
        output: ReportPath::from(output),
        files,
        totals,
    }
}

pub fn serialize_summary(summary: &RunSummary) -> anyhow::Result<Vec<u8>> {
    let mut data = serde_json::to_vec_pretty(summary).context("serialize run summary")?;
    data.push(b'\n');
    Ok(data)
}

pub fn write_summary(path: &Utf8Path, summary: &RunSummary) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    let data = serialize_summary(summary)?;
    std::fs::write(path, data).with_context(|| format!("write summary: {path}"))?;
    Ok(())
}
