// src/readers/summary.rs

//! Implements `Summary` statistics tracking struct.

use crate::common::{Count, FileProcessingResult};

use std::fmt;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Summary
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Tallies of one run over all files.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Summary {
    /// files that produced a JSON output file
    pub files_parsed: Count,
    /// files rejected by the text sampler
    pub files_skipped: Count,
    /// text files that produced no records
    pub files_empty: Count,
    /// files that failed with an error
    pub files_error: Count,
    /// total `Record`s written over all output files
    pub records: Count,
}

impl Summary {
    pub fn new() -> Summary {
        Summary::default()
    }

    /// Count one `FileProcessingResult`.
    pub fn update(
        &mut self,
        result: &FileProcessingResult,
    ) {
        match result {
            FileProcessingResult::Parsed(_, count) => {
                self.files_parsed += 1;
                self.records += count;
            }
            FileProcessingResult::SkippedBinary => self.files_skipped += 1,
            FileProcessingResult::NoData => self.files_empty += 1,
            FileProcessingResult::Error(_) => self.files_error += 1,
        }
        defñ!("{:?}", self);
    }

    /// Total files seen.
    pub fn files(&self) -> Count {
        self.files_parsed + self.files_skipped + self.files_empty + self.files_error
    }
}

impl fmt::Display for Summary {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Files processed : {}", self.files())?;
        writeln!(f, "  parsed        : {}", self.files_parsed)?;
        writeln!(f, "  skipped       : {}", self.files_skipped)?;
        writeln!(f, "  no data       : {}", self.files_empty)?;
        writeln!(f, "  errors        : {}", self.files_error)?;
        write!(f, "Records written : {}", self.records)
    }
}
