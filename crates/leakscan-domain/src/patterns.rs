use crate::policy::ScanConfig;
use regex::Regex;

/// Compiled line classifiers for one scan.
#[derive(Clone, Debug)]
pub struct LinePatterns {
    header: Regex,
    marker: Regex,
}

impl LinePatterns {
    pub fn new(header_pattern: &str, path_marker: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            header: Regex::new(header_pattern)?,
            marker: Regex::new(path_marker)?,
        })
    }

    pub fn from_config(cfg: &ScanConfig) -> Result<Self, regex::Error> {
        Self::new(&cfg.header_pattern, &cfg.path_marker)
    }

    /// A header must match at the very start of the line, anchored or not.
    pub fn is_header(&self, line: &str) -> bool {
        self.header.find(line).is_some_and(|m| m.start() == 0)
    }

    /// The marker may match anywhere in the line.
    pub fn is_project_line(&self, line: &str) -> bool {
        self.marker.is_match(line)
    }
}
