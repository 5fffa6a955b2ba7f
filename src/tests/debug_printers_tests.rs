// src/tests/debug_printers_tests.rs

//! tests for `debug/printers.rs` macros

use crate::debug::printers::{de_err, de_wrn, e_err, e_wrn};

use std::path::Path;

#[test]
fn test_printer_macros_format_args() {
    let path: &Path = Path::new("/etc/passwd");
    let count: usize = 3;
    e_err!("unable to read {:?}", path);
    e_wrn!("{} entries skipped", count);
    de_err!("{:?} returned error {}", path, "denied");
    de_wrn!("path disappeared {:?}", path);
}

#[test]
fn test_printer_macros_as_match_arms() {
    for ok in [true, false] {
        match ok {
            true => de_wrn!("ok"),
            false => e_wrn!("not ok"),
        }
    }
}
