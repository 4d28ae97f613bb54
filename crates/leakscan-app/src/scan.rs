//! The `scan` use case: filter every discovered report into one output file.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use leakscan_domain::{BlockCounts, LeakBlockFilter, LinePatterns, ScanConfig};
use leakscan_repo::ReportLines;
use leakscan_types::{FileSummary, ReportPath, RunSummary};
use log::{debug, info, warn};
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use time::OffsetDateTime;

use crate::summary::{build_summary, write_summary};

/// Output from the scan use case.
#[derive(Clone, Debug)]
pub struct ScanOutput {
    /// Where the filtered blocks were written.
    pub output_path: Utf8PathBuf,
    /// Counters for this run; written to disk only when a summary path is configured.
    pub summary: RunSummary,
}

/// Run the scan: discover reports, filter each in order, write the output (and summary).
///
/// The output file is truncated once up front. An I/O failure on any report aborts the run;
/// blocks already written for earlier reports stay in the output.
pub fn run_scan(cfg: &ScanConfig) -> anyhow::Result<ScanOutput> {
    let started_at = OffsetDateTime::now_utc();

    let patterns = LinePatterns::from_config(cfg).context("compile line patterns")?;

    if !cfg.input_dir.is_dir() {
        warn!("input directory {} does not exist; no reports to scan", cfg.input_dir);
    }
    let reports = leakscan_repo::discover_reports(&cfg.input_dir, &cfg.input_glob)
        .context("discover reports")?;
    info!(
        "found {} report(s) matching {} in {}",
        reports.len(),
        cfg.input_glob,
        cfg.input_dir
    );

    let mut out = create_output(&cfg.output_path)?;
    let mut files = Vec::with_capacity(reports.len());

    for report in &reports {
        let counts = filter_report(report, &patterns, &mut out)
            .with_context(|| format!("filter report: {report}"))?;
        debug!(
            "{report}: {} block(s) seen, {} emitted, {} line(s) kept",
            counts.blocks_seen, counts.blocks_emitted, counts.lines_retained
        );
        files.push(FileSummary {
            path: ReportPath::from(report.as_path()),
            blocks_seen: counts.blocks_seen,
            blocks_emitted: counts.blocks_emitted,
            lines_retained: counts.lines_retained,
        });
    }

    out.flush()
        .with_context(|| format!("flush output: {}", cfg.output_path))?;
    drop(out);

    let summary = build_summary(
        started_at,
        OffsetDateTime::now_utc(),
        &cfg.output_path,
        files,
    );
    info!(
        "wrote {} of {} leak block(s) to {}",
        summary.totals.blocks_emitted, summary.totals.blocks_seen, cfg.output_path
    );

    if let Some(summary_path) = &cfg.summary_path {
        write_summary(summary_path, &summary)?;
    }

    Ok(ScanOutput {
        output_path: cfg.output_path.clone(),
        summary,
    })
}

/// Filter one report file into `out`.
pub fn filter_report<W: Write>(
    path: &Utf8Path,
    patterns: &LinePatterns,
    out: &mut W,
) -> anyhow::Result<BlockCounts> {
    let lines = leakscan_repo::open_report(path)?;
    filter_lines(lines, patterns, out)
}

/// Filter an already-open report into `out`.
pub fn filter_into<R: BufRead, W: Write>(
    reader: R,
    patterns: &LinePatterns,
    out: &mut W,
) -> anyhow::Result<BlockCounts> {
    filter_lines(ReportLines::new(reader), patterns, out)
}

fn filter_lines<R: BufRead, W: Write>(
    lines: ReportLines<R>,
    patterns: &LinePatterns,
    out: &mut W,
) -> anyhow::Result<BlockCounts> {
    let mut filter = LeakBlockFilter::new(patterns);
    for line in lines {
        let line = line.context("read report line")?;
        if let Some(block) = filter.push_line(&line) {
            write!(out, "{block}").context("write leak block")?;
        }
    }
    if let Some(block) = filter.finish() {
        write!(out, "{block}").context("write leak block")?;
    }
    Ok(filter.counts())
}

fn create_output(path: &Utf8Path) -> anyhow::Result<BufWriter<File>> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    let file = File::create(path).with_context(|| format!("create output: {path}"))?;
    Ok(BufWriter::new(file))
}

/// The single line printed on success.
pub fn completion_message(output: &Utf8Path) -> String {
    format!("Filtered Direct leaks in src/ written to: {output}")
}
