// src/data/record.rs

//! Implements the [`Record`] variants, one structured entry per qualifying
//! line of an artifact.
//!
//! Each variant serializes to a flat JSON object whose keys are in a fixed
//! order.

use serde::Serialize;

/// One entry of a password database, e.g. `/etc/passwd`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct PasswdEntry {
    pub user: String,
    pub uid: String,
    pub gid: String,
    pub desc: String,
    pub home: String,
    pub shell: String,
}

/// One entry of a shadow database, e.g. `/etc/shadow`.
///
/// The hash itself is never kept.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ShadowEntry {
    pub user: String,
    pub has_hash: bool,
}

/// One entry of a group database, e.g. `/etc/group`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct GroupEntry {
    pub group: String,
    pub gid: String,
    pub members: Vec<String>,
}

/// One line of a sudoers file, unparsed.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct SudoRule {
    pub rule: String,
}

/// One line of any other text file.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct LogLine {
    pub line: String,
}

/// A single extracted record. Serialized without a variant tag so the
/// JSON is the bare object of the wrapped entry.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Passwd(PasswdEntry),
    Shadow(ShadowEntry),
    Group(GroupEntry),
    Sudo(SudoRule),
    Line(LogLine),
}

/// All records extracted from one file, in line order.
///
/// An empty `Records` means "no data parsed", which is not an error.
pub type Records = Vec<Record>;
