// src/tests/summary_tests.rs

//! tests for `summary.rs`

#![allow(non_snake_case)]

use crate::common::FileProcessingResult;
use crate::readers::summary::Summary;

#[test]
fn test_Summary_new() {
    let summary = Summary::new();
    assert_eq!(summary.files(), 0);
    assert_eq!(summary.records, 0);
}

#[test]
fn test_Summary_update() {
    let mut summary = Summary::new();
    summary.update(&FileProcessingResult::Parsed(String::from("a.json"), 4));
    summary.update(&FileProcessingResult::Parsed(String::from("b.json"), 1));
    summary.update(&FileProcessingResult::SkippedBinary);
    summary.update(&FileProcessingResult::NoData);
    summary.update(&FileProcessingResult::Error(String::from("oops")));
    summary.update(&FileProcessingResult::Error(String::from("oops again")));

    assert_eq!(
        summary,
        Summary {
            files_parsed: 2,
            files_skipped: 1,
            files_empty: 1,
            files_error: 2,
            records: 5,
        }
    );
    assert_eq!(summary.files(), 6);
}

#[test]
fn test_Summary_display() {
    let mut summary = Summary::new();
    summary.update(&FileProcessingResult::Parsed(String::from("a.json"), 3));
    let s = summary.to_string();
    assert!(s.starts_with("Files processed : 1\n"), "{}", s);
    assert!(s.contains("  parsed        : 1\n"), "{}", s);
    assert!(s.ends_with("Records written : 3"), "{}", s);
}
