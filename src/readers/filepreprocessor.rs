// src/readers/filepreprocessor.rs

//! A collection of functions to classify artifact files by name and to
//! enumerate the files under a user-passed path.
//!
//! Classification looks only at the file name; the directory part of a
//! path is ignored.

use crate::common::{ArtifactKind, FPath};
#[allow(unused_imports)]
use crate::debug::printers::{de_err, de_wrn};
use crate::readers::helpers::{basename, path_to_fpath};

use std::path::Path;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// ArtifactKind classification
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// File name substrings and the `ArtifactKind` each implies, in priority
/// order. The first contained substring wins.
///
/// Matching is case-sensitive.
pub const KIND_PRIORITY: [(&str, ArtifactKind); 4] = [
    ("passwd", ArtifactKind::PasswordDatabase),
    ("shadow", ArtifactKind::ShadowDatabase),
    ("group", ArtifactKind::GroupDatabase),
    ("sudoers", ArtifactKind::SudoRules),
];

/// Map a file name to an `ArtifactKind`.
///
/// e.g. `passwd`, `passwd-` and `passwd_shadow` are all
/// `ArtifactKind::PasswordDatabase`; `messages` is `ArtifactKind::GenericLog`.
pub fn name_to_kind(name: &str) -> ArtifactKind {
    for (pattern, kind) in KIND_PRIORITY.iter() {
        if name.contains(pattern) {
            defñ!("({:?}) contains {:?}; return {:?}", name, pattern, kind);
            return *kind;
        }
    }
    defñ!("({:?}) return GenericLog", name);

    ArtifactKind::GenericLog
}

/// Map the file name of `path` to an `ArtifactKind`.
pub fn path_to_kind(path: &Path) -> ArtifactKind {
    name_to_kind(basename(path).as_str())
}

/// Wrapper function for `path_to_kind`
pub fn fpath_to_kind(path: &FPath) -> ArtifactKind {
    path_to_kind(Path::new(path))
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// path enumeration
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Initial path processing return type.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProcessPathResult {
    /// File that should be processed, with its `ArtifactKind`.
    FileValid(FPath, ArtifactKind),
    /// Path exists and is not a file (or a symlink to a file), e.g. a FIFO
    /// or a symlink to a directory.
    FileErrNotAFile(FPath),
    /// Path does not exist
    FileErrNotExist(FPath),
}

pub type ProcessPathResults = Vec<ProcessPathResult>;

/// Return every file found at `path`.
///
/// Given a plain file path, returns that path.<br/>
/// Given a directory, recurses the directory. Symlinked directories are
/// not descended. Symlinks to files, including dangling symlinks, are
/// returned as `FileValid`; later stages decide what to do with them.<br/>
/// Directory entries that cannot be read are skipped.
pub fn process_path(path: &FPath) -> ProcessPathResults {
    defn!("({:?})", path);

    let std_path: &Path = Path::new(path);
    if std_path.is_file() {
        let kind: ArtifactKind = fpath_to_kind(path);
        defx!("({:?}) is file; FileValid {:?}", path, kind);
        return vec![ProcessPathResult::FileValid(path.clone(), kind)];
    }

    if !std_path.exists() {
        defx!("({:?}) FileErrNotExist", path);
        return vec![ProcessPathResult::FileErrNotExist(path.clone())];
    }

    if !std_path.is_dir() {
        defx!("({:?}) FileErrNotAFile", path);
        return vec![ProcessPathResult::FileErrNotAFile(path.clone())];
    }

    let mut paths: ProcessPathResults = ProcessPathResults::new();

    defo!("WalkDir({:?})…", path);
    for entry in walkdir::WalkDir::new(std_path)
        .follow_links(false)
        .sort_by_file_name()
    {
        let path_entry: walkdir::DirEntry = match entry {
            Ok(val) => val,
            Err(_err) => {
                de_wrn!("WalkDir({:?}) entry error {}", path, _err);
                continue;
            }
        };
        let std_path_entry: &Path = path_entry.path();
        let fpath_entry: FPath = path_to_fpath(std_path_entry);
        let file_type = path_entry.file_type();
        if file_type.is_dir() {
            continue;
        }
        // a symlink is judged by its target; dangling symlinks are kept
        let is_file: bool = if file_type.is_symlink() {
            !std_path_entry.is_dir() && (std_path_entry.is_file() || !std_path_entry.exists())
        } else {
            file_type.is_file()
        };
        if !is_file {
            defo!("Path not a file {:?}", fpath_entry);
            paths.push(ProcessPathResult::FileErrNotAFile(fpath_entry));
            continue;
        }
        let kind: ArtifactKind = path_to_kind(std_path_entry);
        defo!("paths.push(FileValid({:?}, {:?}))", fpath_entry, kind);
        paths.push(ProcessPathResult::FileValid(fpath_entry, kind));
    }
    defx!("return {} results", paths.len());

    paths
}
