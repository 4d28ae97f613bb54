//! CLI entry point for leakscan.
//!
//! This module is intentionally thin: it handles argument parsing, logging setup and exit codes.
//! All scanning logic lives in the `leakscan-app` crate.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{ArgAction, Parser};
use leakscan_app::{completion_message, run_scan};
use leakscan_settings::{LeakscanConfigV1, Overrides};
use log::debug;

#[derive(Parser, Debug)]
#[command(
    name = "leakscan",
    version,
    about = "Extract project-owned direct leaks from AddressSanitizer reports"
)]
struct Cli {
    /// Path to leakscan config TOML (a missing file means defaults).
    #[arg(long, default_value = "leakscan.toml")]
    config: Utf8PathBuf,

    /// Directory holding the sanitizer reports (default: ../build).
    #[arg(long)]
    input_dir: Option<String>,

    /// File-name glob for reports inside the input directory (default: asan_report*).
    #[arg(long)]
    input_glob: Option<String>,

    /// Leak headers that open a block (direct|indirect|all).
    #[arg(long)]
    leak_kind: Option<String>,

    /// Regex marking stack lines from project sources (default: drengrfell-project/src).
    #[arg(long)]
    path_marker: Option<String>,

    /// Where to write the filtered report (default: asan_direct_leaks.txt).
    #[arg(long, short)]
    output: Option<String>,

    /// Also write a JSON summary of this run.
    #[arg(long)]
    summary_out: Option<String>,

    /// Log more on stderr (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(long, short, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("leakscan error: {err:#}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cfg = load_config(&cli.config)?;

    let overrides = Overrides {
        leak_kind: cli.leak_kind,
        input_dir: cli.input_dir,
        input_glob: cli.input_glob,
        path_marker: cli.path_marker,
        output: cli.output,
        summary_out: cli.summary_out,
    };

    let resolved =
        leakscan_settings::resolve_config(cfg, overrides).context("resolve config")?;
    debug!("effective config: {:?}", resolved.effective);

    let output = run_scan(&resolved.effective)?;

    println!("{}", completion_message(&output.output_path));
    Ok(())
}

/// Missing config file is allowed (defaults apply); any other read failure is not.
fn load_config(path: &camino::Utf8Path) -> anyhow::Result<LeakscanConfigV1> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            debug!("no config at {path}; using defaults");
            return Ok(LeakscanConfigV1::default());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("read config: {path}"));
        }
    };

    if text.trim().is_empty() {
        return Ok(LeakscanConfigV1::default());
    }
    leakscan_settings::parse_config_toml(&text).with_context(|| format!("parse config: {path}"))
}
