//! Pure leak-block filtering (no IO).
//!
//! Input: report lines handed over one at a time by an adapter.
//! Output: the leak blocks that reference project sources, trimmed to the matching lines.

#![forbid(unsafe_code)]

pub mod model;
pub mod patterns;
pub mod policy;

mod filter;

#[cfg(test)]
mod proptests;

pub use filter::{filter_text, BlockCounts, LeakBlockFilter};
pub use model::LeakBlock;
pub use patterns::LinePatterns;
pub use policy::{LeakKind, ScanConfig};
