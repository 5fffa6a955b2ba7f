// src/printer/mod.rs

//! The `printer` module is for user-facing output: per-file status lines
//! with colored symbols ([`printers`]) and JSON output files
//! ([`jsonwriter`]).
//!
//! [`printers`]: crate::printer::printers
//! [`jsonwriter`]: crate::printer::jsonwriter

pub mod jsonwriter;
pub mod printers;
