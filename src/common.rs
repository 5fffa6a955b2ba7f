// src/common.rs
//
// common type aliases and other globals (avoids circular imports)

//! Common type aliases, constants, and enums for _uacrunchlib_.

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// file-handling
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// `F`ake `Path` or `F`ile `Path`
pub type FPath = String;

/// General purpose counting type.
pub type Count = u64;

/// Name of the directory created under the current working directory that
/// receives all JSON output.
pub const OUTPUT_DIR_NAME: &str = "parsed_output";

/// File extension appended to every output file name.
pub const OUTPUT_EXTENSION: &str = "json";

/// Maximum number of bytes read from the start of a file to decide if it
/// is text.
pub const SAMPLE_SZ: usize = 1024;

/// Minimum fraction of text-class bytes in a sample for the file to be
/// accepted as text.
pub const TEXT_THRESHOLD: f64 = 0.90;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// ArtifactKind
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The kind of artifact, decided once from the file name.
///
/// See [`path_to_kind`].
///
/// [`path_to_kind`]: crate::readers::filepreprocessor::path_to_kind
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ArtifactKind {
    /// `/etc/passwd` style password database
    PasswordDatabase,
    /// `/etc/shadow` style shadow password database
    ShadowDatabase,
    /// `/etc/group` style group database
    GroupDatabase,
    /// `/etc/sudoers` style privilege-escalation rules
    SudoRules,
    /// anything else; every line is kept verbatim
    #[default]
    GenericLog,
}

impl ArtifactKind {
    /// Minimum number of `:` separated fields a line must have to produce a
    /// record. Lines with fewer fields are skipped.
    pub const fn min_fields(&self) -> usize {
        match self {
            ArtifactKind::PasswordDatabase => 7,
            ArtifactKind::ShadowDatabase => 2,
            ArtifactKind::GroupDatabase => 3,
            ArtifactKind::SudoRules | ArtifactKind::GenericLog => 0,
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// per-file outcome
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Outcome of processing one file. One of these is printed per file.
#[derive(Clone, Debug, PartialEq)]
pub enum FileProcessingResult {
    /// Records were written to the contained output path.
    /// Also holds the number of records written.
    Parsed(FPath, Count),
    /// The sample looked binary; nothing was read further.
    SkippedBinary,
    /// The file was read but produced no records; nothing was written.
    NoData,
    /// Reading or writing failed. Holds the error text.
    Error(String),
}

impl FileProcessingResult {
    #[inline(always)]
    pub const fn is_err(&self) -> bool {
        matches!(*self, FileProcessingResult::Error(_))
    }
}
