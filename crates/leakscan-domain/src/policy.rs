use camino::Utf8PathBuf;

/// Which sanitizer leak headers open a block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LeakKind {
    #[default]
    Direct,
    Indirect,
    All,
}

impl LeakKind {
    pub fn parse(v: &str) -> Option<Self> {
        match v {
            "direct" => Some(LeakKind::Direct),
            "indirect" => Some(LeakKind::Indirect),
            "all" => Some(LeakKind::All),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LeakKind::Direct => "direct",
            LeakKind::Indirect => "indirect",
            LeakKind::All => "all",
        }
    }

    /// Header regex for this kind. Matched at the start of the (right-trimmed) line.
    pub fn header_pattern(self) -> &'static str {
        match self {
            LeakKind::Direct => r"^Direct leak of",
            LeakKind::Indirect => r"^Indirect leak of",
            LeakKind::All => r"^(Direct|Indirect) leak of",
        }
    }
}

/// Everything a scan needs, resolved once at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanConfig {
    pub leak_kind: LeakKind,
    /// Directory searched (non-recursively) for reports.
    pub input_dir: Utf8PathBuf,
    /// File-name glob applied inside `input_dir`.
    pub input_glob: String,
    pub header_pattern: String,
    /// Regex identifying stack lines from the project's own sources.
    pub path_marker: String,
    pub output_path: Utf8PathBuf,
    pub summary_path: Option<Utf8PathBuf>,
}
