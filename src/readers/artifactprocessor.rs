// src/readers/artifactprocessor.rs

//! Drives processing of one user-passed path: enumerate files, then for
//! each file classify, sample, extract, and serialize.
//!
//! ## Per-file stages
//!
//! 1. Classify the [`ArtifactKind`] from the file name.
//! 2. Sample the first bytes; a binary-looking file is skipped.
//! 3. Extract [`Records`].
//! 4. Write the records to `<output_dir>/<name_with_underscores>.json`,
//!    or report "no data" if there were none.
//!
//! Every stage failure is captured as a [`FileProcessingResult::Error`] and
//! processing continues with the next file. A run is never aborted by a
//! single file.
//!
//! [`ArtifactKind`]: crate::common::ArtifactKind
//! [`Records`]: crate::data::record::Records
//! [`FileProcessingResult::Error`]: crate::common::FileProcessingResult

use crate::common::{
    ArtifactKind,
    Count,
    FPath,
    FileProcessingResult,
    SAMPLE_SZ,
    TEXT_THRESHOLD,
};
#[allow(unused_imports)]
use crate::debug::printers::{de_err, de_wrn};
use crate::data::record::Records;
use crate::printer::jsonwriter::save;
use crate::printer::printers::{PrinterStatus, WriteColor};
use crate::readers::filepreprocessor::{process_path, ProcessPathResult, ProcessPathResults};
use crate::readers::helpers::{fpath_to_path, output_path, path_to_fpath};
use crate::readers::recordreader::extract;
use crate::readers::summary::Summary;
use crate::readers::textsampler::is_text_threshold;

use std::path::{Path, PathBuf};

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Config
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Settings for one run. Created once before any file is processed and
/// only read afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// directory receiving the JSON output files
    pub output_dir: PathBuf,
    /// bytes sampled by the text sampler
    pub sample_sz: usize,
    /// minimum text-class fraction of the sample
    pub threshold: f64,
}

impl Config {
    /// A `Config` writing to `output_dir` with the default sampling
    /// settings.
    pub fn new(output_dir: PathBuf) -> Config {
        Config {
            output_dir,
            sample_sz: SAMPLE_SZ,
            threshold: TEXT_THRESHOLD,
        }
    }

    /// A `Config` writing to `output_dir`. A relative `output_dir` is
    /// resolved against the current working directory, e.g. the default
    /// `parsed_output`.
    pub fn from_current_dir(output_dir: &Path) -> std::io::Result<Config> {
        if output_dir.is_absolute() {
            return Ok(Config::new(output_dir.to_path_buf()));
        }
        let cwd: PathBuf = std::env::current_dir()?;

        Ok(Config::new(cwd.join(output_dir)))
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// per-file processing
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Extract then save. Returns `None` if no records were extracted.
fn extract_and_save(
    path: &Path,
    kind: ArtifactKind,
    config: &Config,
) -> std::io::Result<Option<(FPath, Count)>> {
    let records: Records = extract(path, kind)?;
    if records.is_empty() {
        return Ok(None);
    }
    let outfile: PathBuf = output_path(&config.output_dir, path);
    save(&records, &outfile)?;

    Ok(Some((path_to_fpath(&outfile), records.len() as Count)))
}

/// Process the single file at `path` of `kind`.
///
/// Never fails; failures are returned as `FileProcessingResult::Error`.
pub fn process_file(
    path: &Path,
    kind: ArtifactKind,
    config: &Config,
) -> FileProcessingResult {
    defn!("({:?}, {:?})", path, kind);
    if !is_text_threshold(path, config.sample_sz, config.threshold) {
        defx!("not text; return SkippedBinary");
        return FileProcessingResult::SkippedBinary;
    }
    let result = match extract_and_save(path, kind, config) {
        Ok(Some((outfile, count))) => FileProcessingResult::Parsed(outfile, count),
        Ok(None) => FileProcessingResult::NoData,
        Err(err) => FileProcessingResult::Error(err.to_string()),
    };
    defx!("return {:?}", result);

    result
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// run
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Outcome of a whole run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RunResult {
    /// The user-passed path does not exist. Nothing was done.
    PathNotExist,
    /// All files were attempted.
    Done(Summary),
}

/// Log a failed status print and carry on; a closed STDOUT must not stop
/// processing.
macro_rules! print_or_log {
    ($print:expr) => {
        if let Err(_err) = $print {
            de_err!("{} returned error {}", stringify!($print), _err);
        }
    };
}

/// Process every file at `input`, printing one status line per file and a
/// final line naming the output directory.
///
/// Returns `Err` only if the output directory cannot be created.
pub fn run<W: WriteColor>(
    input: &FPath,
    config: &Config,
    printer: &mut PrinterStatus<W>,
) -> std::io::Result<RunResult> {
    defn!("({:?}, {:?})", input, config);

    if !Path::new(input).exists() {
        print_or_log!(printer.print_path_not_exist());
        defx!("return PathNotExist");
        return Ok(RunResult::PathNotExist);
    }

    std::fs::create_dir_all(&config.output_dir)?;

    let mut summary: Summary = Summary::new();
    let paths: ProcessPathResults = process_path(input);
    for ppresult in paths.into_iter() {
        match ppresult {
            ProcessPathResult::FileValid(fpath, kind) => {
                let path: &Path = fpath_to_path(&fpath);
                let result: FileProcessingResult = process_file(path, kind, config);
                summary.update(&result);
                print_or_log!(printer.print_result(path, &result));
            }
            ProcessPathResult::FileErrNotAFile(_fpath) => {
                defo!("not a file {:?}", _fpath);
            }
            ProcessPathResult::FileErrNotExist(_fpath) => {
                de_wrn!("path disappeared {:?}", _fpath);
            }
        }
    }

    print_or_log!(printer.print_done(&config.output_dir));
    defx!("return Done({:?})", summary);

    Ok(RunResult::Done(summary))
}
