//! Stable DTOs shared across the leakscan workspace.
//!
//! This crate is intentionally boring:
//! - data types for the optional run summary receipt
//! - canonical, forward-slash report path handling

#![forbid(unsafe_code)]

pub mod path;
pub mod summary;

pub use path::ReportPath;
pub use summary::{FileSummary, RunSummary, SummaryTotals, ToolMeta, SCHEMA_SUMMARY_V1};
