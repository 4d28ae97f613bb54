use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use globset::{Glob, GlobMatcher};
use std::path::PathBuf;
use walkdir::WalkDir;

/// Find report files directly inside `input_dir` whose file name matches `glob`.
///
/// Behavior:
/// - non-recursive: only entries at depth 1 are considered
/// - every matching entry except real directories is returned; symlinks are not
///   resolved here, so a dangling one fails later when the report is opened
/// - errors while listing `input_dir` are returned, never skipped
/// - a missing `input_dir` yields an empty list, not an error
/// - results are sorted by file name so multi-report runs are deterministic
pub fn discover_reports(input_dir: &Utf8Path, glob: &str) -> anyhow::Result<Vec<Utf8PathBuf>> {
    let matcher = compile(glob)?;

    if !input_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut out: Vec<Utf8PathBuf> = Vec::new();
    for entry in WalkDir::new(input_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.with_context(|| format!("list reports in {input_dir}"))?;
        if entry.file_type().is_dir() {
            continue;
        }
        let matches = entry
            .file_name()
            .to_str()
            .is_some_and(|name| matcher.is_match(name));
        if !matches {
            continue;
        }
        if let Some(path) = pathbuf_to_utf8(entry.into_path()) {
            out.push(path);
        }
    }

    Ok(out)
}

/// Pure name matching used by discovery; returns the matching names in sorted order.
pub fn match_report_names(glob: &str, names: &[String]) -> anyhow::Result<Vec<String>> {
    let matcher = compile(glob)?;
    let mut out: Vec<String> = names
        .iter()
        .filter(|n| matcher.is_match(n.as_str()))
        .cloned()
        .collect();
    out.sort();
    Ok(out)
}

fn compile(glob: &str) -> anyhow::Result<GlobMatcher> {
    let g = Glob::new(glob).with_context(|| format!("compile report glob: {glob}"))?;
    Ok(g.compile_matcher())
}

fn pathbuf_to_utf8(path: PathBuf) -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path).ok()
}
