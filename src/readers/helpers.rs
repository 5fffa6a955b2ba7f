// src/readers/helpers.rs

//! Miscellaneous helper functions for _Readers_.

use std::path::{Path, PathBuf};

#[allow(unused_imports)]
use ::si_trace_print::{
    defn,
    defo,
    defx,
    defñ,
};

use crate::common::{
    FPath,
    OUTPUT_EXTENSION,
};

/// Return the basename of a `Path` as a `String`.
///
/// Returns an empty string for paths without a final component, e.g. `/`.
pub fn basename(path: &Path) -> FPath {
    match path.file_name() {
        Some(name) => name
            .to_string_lossy()
            .to_string(),
        None => FPath::new(),
    }
}

/// Helper function for a slightly annoying set of calls.
pub fn path_to_fpath(path: &Path) -> FPath {
    // `PathBuf` to `String` https://stackoverflow.com/q/37388107/471376
    (*(path.to_string_lossy())).to_string()
}

/// Helper function for completeness.
pub fn fpath_to_path(path: &FPath) -> &Path {
    Path::new(path)
}

/// Output file name for the input file at `path`.
///
/// Every `.` in the basename becomes `_`, then `.json` is appended,
/// e.g. `auth.log.1` becomes `auth_log_1.json`.
pub fn output_file_name(path: &Path) -> FPath {
    let name: FPath = basename(path).replace('.', "_");
    let mut out: FPath = FPath::with_capacity(name.len() + OUTPUT_EXTENSION.len() + 1);
    out.push_str(name.as_str());
    out.push('.');
    out.push_str(OUTPUT_EXTENSION);
    defñ!("({:?}) return {:?}", path, out);

    out
}

/// Full output path for the input file at `path` within `output_dir`.
pub fn output_path(
    output_dir: &Path,
    path: &Path,
) -> PathBuf {
    output_dir.join(output_file_name(path))
}
