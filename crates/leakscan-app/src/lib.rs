//! Use case orchestration for leakscan.
//!
//! This crate provides the application layer: it wires discovery, the pure filter, and the
//! output writers together. The CLI crate depends on this; it only handles argument parsing,
//! logging setup and exit codes.

#![forbid(unsafe_code)]

mod scan;
mod summary;

pub use scan::{completion_message, filter_into, filter_report, run_scan, ScanOutput};
pub use summary::{build_summary, serialize_summary, write_summary};
