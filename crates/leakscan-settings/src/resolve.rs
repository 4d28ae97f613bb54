use crate::{model::LeakscanConfigV1, presets};
use anyhow::Context;
use camino::Utf8PathBuf;
use globset::Glob;
use leakscan_domain::{LeakKind, LinePatterns, ScanConfig};

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub leak_kind: Option<String>,
    pub input_dir: Option<String>,
    pub input_glob: Option<String>,
    pub path_marker: Option<String>,
    pub output: Option<String>,
    pub summary_out: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: ScanConfig,
}

pub fn resolve_config(
    cfg: LeakscanConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let kind = match overrides.leak_kind.as_deref().or(cfg.leak_kind.as_deref()) {
        Some(v) => parse_leak_kind(v)?,
        None => LeakKind::Direct,
    };

    let mut effective = presets::preset(kind);

    // An explicit header regex from the file only applies when the CLI did not pick a kind.
    if overrides.leak_kind.is_none()
        && let Some(header) = cfg.header_pattern
    {
        effective.header_pattern = header;
    }

    if let Some(dir) = overrides.input_dir.or(cfg.input_dir) {
        effective.input_dir = Utf8PathBuf::from(dir);
    }
    if let Some(glob) = overrides.input_glob.or(cfg.input_glob) {
        effective.input_glob = glob;
    }
    if let Some(marker) = overrides.path_marker.or(cfg.path_marker) {
        effective.path_marker = marker;
    }
    if let Some(out) = overrides.output.or(cfg.output) {
        effective.output_path = Utf8PathBuf::from(out);
    }
    if let Some(summary) = overrides.summary_out.or(cfg.summary_out) {
        effective.summary_path = Some(Utf8PathBuf::from(summary));
    }

    validate(&effective)?;

    Ok(ResolvedConfig { effective })
}

fn validate(cfg: &ScanConfig) -> anyhow::Result<()> {
    Glob::new(&cfg.input_glob).with_context(|| format!("invalid input glob: {}", cfg.input_glob))?;
    if cfg.path_marker.is_empty() {
        anyhow::bail!("path marker must not be empty");
    }
    LinePatterns::from_config(cfg).context("invalid header pattern or path marker")?;
    if cfg.output_path.as_str().is_empty() {
        anyhow::bail!("output path must not be empty");
    }
    Ok(())
}

fn parse_leak_kind(v: &str) -> anyhow::Result<LeakKind> {
    LeakKind::parse(v)
        .with_context(|| format!("unknown leak_kind: {v} (expected direct|indirect|all)"))
}
