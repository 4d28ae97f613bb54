use serde::{Deserialize, Serialize};

/// `leakscan.toml` schema v1.
///
/// Every field is optional; anything left out falls back to the leak-kind preset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeakscanConfigV1 {
    /// Optional schema string for tooling (`leakscan.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// `direct` (default), `indirect` or `all`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leak_kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_dir: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_glob: Option<String>,

    /// Raw header regex; wins over `leak_kind` when both are set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_pattern: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_marker: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_out: Option<String>,
}
