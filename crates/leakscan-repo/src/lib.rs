//! Filesystem adapters: find report files and stream their lines.
//!
//! Nothing here interprets report content; that is the domain crate's job.

#![forbid(unsafe_code)]

mod discover;
mod lines;

pub use discover::{discover_reports, match_report_names};
pub use lines::{open_report, ReportLines};
