// src/lib.rs

//! _uacrunchlib_ classifies Unix account artifacts (`passwd`, `shadow`,
//! `group`, `sudoers`) and plain text logs by file name, extracts flat
//! [`Record`s] from them, and writes one JSON file per input file.
//!
//! The driver program is `uacrunch`; see [`run`].
//!
//! [`Record`s]: crate::data::record::Record
//! [`run`]: crate::readers::artifactprocessor::run

pub mod common;
pub mod data;
pub mod debug;
pub mod printer;
pub mod readers;
#[cfg(test)]
pub mod tests;
