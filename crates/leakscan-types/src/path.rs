use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

/// Canonical path used in summaries and log lines.
///
/// Normalization rules are intentionally simple and deterministic:
/// - always forward slashes (`/`)
/// - no leading `./`
/// - `..` segments are kept as-is (inputs live in `../build` by default)
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportPath(String);

impl Default for ReportPath {
    fn default() -> Self {
        ReportPath::new(".")
    }
}

impl ReportPath {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        let mut v = s.as_ref().replace('\\', "/");
        while v.starts_with("./") {
            v = v.trim_start_matches("./").to_string();
        }
        if v.is_empty() {
            v = ".".to_string();
        }
        Self(v)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_utf8_pathbuf(&self) -> Utf8PathBuf {
        Utf8PathBuf::from(self.0.clone())
    }

    /// Final path component, or the whole path when there is none.
    pub fn file_name(&self) -> &str {
        Utf8Path::new(self.as_str())
            .file_name()
            .unwrap_or(self.as_str())
    }
}

impl std::fmt::Display for ReportPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&Utf8Path> for ReportPath {
    fn from(value: &Utf8Path) -> Self {
        ReportPath::new(value.as_str())
    }
}

impl From<Utf8PathBuf> for ReportPath {
    fn from(value: Utf8PathBuf) -> Self {
        ReportPath::new(value.as_str())
    }
}
