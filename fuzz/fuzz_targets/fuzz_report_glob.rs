//! Fuzz target for report file-name globbing.
//!
//! Goal: glob compilation and matching **never panic** on any input.
//! Invalid patterns may return errors.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_report_glob
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct GlobInput {
    /// Glob pattern (e.g. "asan_report*")
    pattern: String,
    /// Candidate file names
    names: Vec<String>,
}

fuzz_target!(|input: GlobInput| {
    if input.pattern.len() > 256 || input.names.len() > 100 {
        return;
    }
    let names: Vec<String> = input.names.into_iter().filter(|n| n.len() <= 512).collect();

    // Should never panic - errors are fine
    let _ = leakscan_repo::match_report_names(&input.pattern, &names);
});
