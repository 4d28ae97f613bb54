use std::fmt;

/// One leak report block: its header plus the body lines that were kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeakBlock {
    header: String,
    lines: Vec<String>,
}

impl LeakBlock {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            lines: Vec::new(),
        }
    }

    pub fn with_lines<I, S>(header: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: header.into(),
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Only blocks with at least one kept line are ever written out.
    pub fn has_retained(&self) -> bool {
        !self.lines.is_empty()
    }
}

/// Output format: header, kept lines, then a blank separator.
impl fmt::Display for LeakBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header)?;
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        writeln!(f)
    }
}
