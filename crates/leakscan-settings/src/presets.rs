use camino::Utf8PathBuf;
use leakscan_domain::{LeakKind, ScanConfig};

pub const DEFAULT_INPUT_DIR: &str = "../build";
pub const DEFAULT_INPUT_GLOB: &str = "asan_report*";
pub const DEFAULT_PATH_MARKER: &str = "drengrfell-project/src";
pub const DEFAULT_OUTPUT: &str = "asan_direct_leaks.txt";

/// Baseline scan for a leak kind. Only the header pattern differs between kinds.
pub fn preset(kind: LeakKind) -> ScanConfig {
    ScanConfig {
        leak_kind: kind,
        input_dir: Utf8PathBuf::from(DEFAULT_INPUT_DIR),
        input_glob: DEFAULT_INPUT_GLOB.to_string(),
        header_pattern: kind.header_pattern().to_string(),
        path_marker: DEFAULT_PATH_MARKER.to_string(),
        output_path: Utf8PathBuf::from(DEFAULT_OUTPUT),
        summary_path: None,
    }
}
