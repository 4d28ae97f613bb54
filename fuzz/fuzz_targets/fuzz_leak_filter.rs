//! Fuzz target for the leak-block filter.
//!
//! Goal: filtering **never panics**, and every emitted block satisfies the
//! output invariants (header first, at least one kept line, every kept line
//! matches the marker).
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_leak_filter
//! ```

#![no_main]

use leakscan_domain::{filter_text, LeakKind, LinePatterns};
use libfuzzer_sys::fuzz_target;

const MARKER: &str = "drengrfell-project/src";

fuzz_target!(|data: &[u8]| {
    // Limit input size to keep fuzzing fast
    if data.len() > 64 * 1024 {
        return;
    }
    let text = String::from_utf8_lossy(data);

    let Ok(patterns) = LinePatterns::new(LeakKind::All.header_pattern(), MARKER) else {
        return;
    };

    for block in filter_text(&patterns, &text) {
        assert!(patterns.is_header(block.header()));
        assert!(block.has_retained());
        for line in block.lines() {
            assert!(line.contains(MARKER));
            assert_eq!(line.trim_end(), line);
        }
    }
});
