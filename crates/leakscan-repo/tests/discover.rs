//! Integration tests for report discovery.
//!
//! These tests verify that discovery produces a stable, deterministic
//! ordering of reports regardless of filesystem traversal order.

use camino::Utf8PathBuf;
use leakscan_repo::{discover_reports, match_report_names, open_report};
use proptest::prelude::*;
use std::path::PathBuf;

/// Get the path to the test fixtures directory (repo root / tests / fixtures).
fn fixtures_dir() -> Utf8PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    // crates/leakscan-repo -> crates -> repo root
    let repo_root = manifest_dir
        .parent()
        .expect("leakscan-repo should have parent (crates)")
        .parent()
        .expect("crates should have parent (repo root)");
    Utf8PathBuf::from_path_buf(repo_root.join("tests").join("fixtures"))
        .expect("fixture path should be valid UTF-8")
}

#[test]
fn multi_report_fixture_is_discovered_in_name_order() {
    let build = fixtures_dir().join("multi_report").join("build");

    let reports = discover_reports(&build, "asan_report*").expect("discovery should succeed");
    let names: Vec<&str> = reports.iter().filter_map(|p| p.file_name()).collect();

    assert_eq!(names, vec!["asan_report.101", "asan_report.102"]);
}

#[test]
fn discovery_is_idempotent() {
    let build = fixtures_dir().join("multi_report").join("build");

    let run1 = discover_reports(&build, "asan_report*").expect("first discovery should succeed");
    let run2 = discover_reports(&build, "asan_report*").expect("second discovery should succeed");

    assert_eq!(run1, run2);
}

#[test]
fn custom_glob_selects_other_reports() {
    let build = fixtures_dir().join("multi_report").join("build");

    let reports = discover_reports(&build, "ubsan_*").expect("discovery should succeed");
    let names: Vec<&str> = reports.iter().filter_map(|p| p.file_name()).collect();

    assert_eq!(names, vec!["ubsan_report.103"]);
}

#[test]
fn fixture_reports_read_line_by_line() {
    let report = fixtures_dir()
        .join("eof_flush")
        .join("build")
        .join("asan_report.1");

    let lines = open_report(&report)
        .expect("open")
        .collect::<std::io::Result<Vec<_>>>()
        .expect("read");

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Direct leak of 12 byte(s)"));
    assert!(lines[2].ends_with("road.cpp:21"));
}

proptest! {
    #[test]
    fn matched_names_are_sorted_subset(names in prop::collection::vec("(asan_report|ubsan_report|notes)[.][0-9]{1,4}", 0..20)) {
        let matched = match_report_names("asan_report*", &names).expect("match");

        let mut sorted = matched.clone();
        sorted.sort();
        prop_assert_eq!(&matched, &sorted);

        for name in &matched {
            prop_assert!(name.starts_with("asan_report"));
            prop_assert!(names.contains(name));
        }
        let expected = names.iter().filter(|n| n.starts_with("asan_report")).count();
        prop_assert_eq!(matched.len(), expected);
    }
}
