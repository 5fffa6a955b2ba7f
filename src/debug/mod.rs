// src/debug/mod.rs

//! The `debug` module is printer macros for errors and warnings, and
//! helpers for test builds.

#[cfg(test)]
pub mod helpers;

pub mod printers;
