// src/tests/mod.rs

//! Tests for _uacrunchlib_.
//!
//! Tests are placed at `src/tests/`, inside the `uacrunchlib`. This allows
//! crate-internal visibility while keeping tests apart from the code under
//! test.
//!
//! Tests at top-level path `tests/` exercise only the public API.

pub mod debug_printers_tests;
pub mod summary_tests;
