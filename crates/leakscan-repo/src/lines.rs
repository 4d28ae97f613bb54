use anyhow::Context;
use camino::Utf8Path;
use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

/// Line iterator over a report.
///
/// Bytes are decoded lossily, so invalid UTF-8 shows up as U+FFFD instead of an error.
/// `\n`, `\r\n` and a bare `\r` all end a line; the terminator is removed.
#[derive(Debug)]
pub struct ReportLines<R> {
    reader: R,
    buf: Vec<u8>,
    pending: VecDeque<String>,
}

impl<R: BufRead> ReportLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            pending: VecDeque::new(),
        }
    }
}

impl<R: BufRead> Iterator for ReportLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(line) = self.pending.pop_front() {
            return Some(Ok(line));
        }

        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                }
                // Either the `\r` of `\r\n` or a bare `\r` ending the input.
                if self.buf.last() == Some(&b'\r') {
                    self.buf.pop();
                }
                self.pending.extend(
                    self.buf
                        .split(|&b| b == b'\r')
                        .map(|part| String::from_utf8_lossy(part).into_owned()),
                );
                self.pending.pop_front().map(Ok)
            }
            Err(err) => Some(Err(err)),
        }
    }
}

/// Open a report for reading.
pub fn open_report(path: &Utf8Path) -> anyhow::Result<ReportLines<BufReader<File>>> {
    let file = File::open(path).with_context(|| format!("open report: {path}"))?;
    Ok(ReportLines::new(BufReader::new(file)))
}
