// src/debug/helpers.rs

//! Miscellaneous helper functions for testing.

use crate::common::FPath;

use std::fs::{create_dir, File};
use std::io::ErrorKind;
use std::io::Write; // for `File.write_all`
use std::path::{Path, PathBuf};

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

#[doc(hidden)]
pub use ::tempfile::NamedTempFile;
#[doc(hidden)]
pub use ::tempfile::TempDir;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// temporary file helper functions
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// NamedTempFile instances default to this file name prefix.
///
/// See <https://github.com/Stebalien/tempfile/issues/183>.
pub const STR_TEMPFILE_PREFIX: &str = "tmp-uacrunch-test-";

/// Testing helper function to write `data` to a temporary file.
pub fn create_temp_file_bytes(data: &[u8]) -> NamedTempFile {
    let mut ntf = match ::tempfile::Builder::new()
        // use known prefix for easier cleanup
        .prefix(STR_TEMPFILE_PREFIX)
        .tempfile()
    {
        Ok(val) => val,
        Err(err) => {
            panic!("NamedTempFile::new() return Err {}", err);
        }
    };
    match ntf.write_all(data) {
        Ok(_) => {}
        Err(err) => {
            panic!("NamedTempFile::write_all() return Err {}", err);
        }
    }

    ntf
}

/// Create a temporary directory
pub fn create_temp_dir() -> TempDir {
    defñ!();
    ::tempfile::tempdir().unwrap()
}

/// Testing helper to create each directory component of `pathb` under
/// `tempdir`.
pub fn create_dir_in_tmpdir(
    pathb: &Path,
    tempdir: &TempDir,
) {
    let mut pathb_tmp: PathBuf = tempdir.path().to_path_buf();
    for c in pathb.components() {
        pathb_tmp = pathb_tmp.join(c.as_os_str());
        defñ!("create_dir({:?})", pathb_tmp);
        match create_dir(&pathb_tmp) {
            Ok(_) => {}
            Err(err) if err.kind() == ErrorKind::AlreadyExists => {}
            Err(err) => panic!("Error {:?}", err),
        }
    }
}

/// Testing helper function to write `data` to a file named `name` in a
/// temporary directory. Leading directories in `name` are created, e.g.
/// `name` value `etc/passwd` creates directory `etc` and file `passwd`.
///
/// Returns the full path of the new file.
pub fn create_file_bytes_name_in_tmpdir(
    data: &[u8],
    name: &str,
    tempdir: &TempDir,
) -> PathBuf {
    let pathb_name: PathBuf = PathBuf::from(name);
    if let Some(parent) = pathb_name.parent() {
        create_dir_in_tmpdir(parent, tempdir);
    }
    let path_file: PathBuf = tempdir.path().join(&pathb_name);
    defñ!("File::create({:?})", path_file);
    let mut file_ = match File::create(&path_file) {
        Ok(f) => f,
        Err(err) => panic!("Error {:?}", err),
    };
    file_.write_all(data).unwrap();

    path_file
}

/// Testing helper to create a `TempDir` holding files of `(name, data)`.
pub fn create_files_and_tmpdir(files: &[(&str, &[u8])]) -> (TempDir, Vec<PathBuf>) {
    let tmpdir = create_temp_dir();
    let paths: Vec<PathBuf> = files
        .iter()
        .map(|(name, data)| create_file_bytes_name_in_tmpdir(data, name, &tmpdir))
        .collect();

    (tmpdir, paths)
}

/// Testing helper to read a JSON output file.
pub fn read_json(path: &Path) -> serde_json::Value {
    let data: String = match std::fs::read_to_string(path) {
        Ok(val) => val,
        Err(err) => panic!("read_to_string({:?}) failed {}", path, err),
    };
    match serde_json::from_str(&data) {
        Ok(val) => val,
        Err(err) => panic!("serde_json::from_str({:?}) failed {}", path, err),
    }
}

/// Small helper function for copying a `Path` to a `FPath`.
pub fn pathb_fpath(path: &Path) -> FPath {
    FPath::from(path.to_str().unwrap())
}
