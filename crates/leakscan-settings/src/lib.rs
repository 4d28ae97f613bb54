//! Config parsing and preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::LeakscanConfigV1;
pub use presets::{
    preset, DEFAULT_INPUT_DIR, DEFAULT_INPUT_GLOB, DEFAULT_OUTPUT, DEFAULT_PATH_MARKER,
};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `leakscan.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<LeakscanConfigV1> {
    let cfg: LeakscanConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective scan config (preset + file config + overrides), validating patterns.
pub fn resolve_config(
    cfg: LeakscanConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
