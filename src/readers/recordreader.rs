// src/readers/recordreader.rs

//! Extract [`Records`] from an artifact file.
//!
//! The file is read whole and decoded as UTF-8 on a best-effort basis;
//! byte sequences that are not valid UTF-8 are dropped. The decoded text is
//! split into lines on `\n`, `\r\n`, or `\r`. Each line is trimmed of
//! surrounding whitespace and information separators (`0x1C..=0x1F`), and
//! blank lines are dropped.
//!
//! For account databases each line is split on `:` and projected into the
//! [`Record`] variant for the [`ArtifactKind`]. Lines with too few fields
//! are skipped. Sudoers and generic log lines are kept verbatim.
//!
//! [`Records`]: crate::data::record::Records
//! [`Record`]: crate::data::record::Record
//! [`ArtifactKind`]: crate::common::ArtifactKind

use crate::common::ArtifactKind;
use crate::data::record::{
    GroupEntry,
    LogLine,
    PasswdEntry,
    Record,
    Records,
    ShadowEntry,
    SudoRule,
};

use std::path::Path;

use ::bstr::ByteSlice;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Field separator of account database lines.
pub const FIELD_SEP: char = ':';

/// Separator of group members within the fourth group field.
pub const MEMBER_SEP: char = ',';

/// Shadow password field values meaning "no password hash".
pub const SHADOW_NO_HASH: [&str; 2] = ["*", "!"];

/// Decode `bytes` as UTF-8, dropping every invalid byte sequence.
pub fn decode_utf8_drop_invalid(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in ByteSlice::utf8_chunks(bytes) {
        text.push_str(chunk.valid());
    }

    text
}

/// Information separator control characters `FS`, `GS`, `RS`, `US`.
/// Trimmed from line ends along with Unicode whitespace.
pub const INFO_SEPARATORS: std::ops::RangeInclusive<char> = '\x1c'..='\x1f';

/// Is `c` trimmed from the ends of a line?
#[inline(always)]
pub fn is_trim_char(c: char) -> bool {
    c.is_whitespace() || INFO_SEPARATORS.contains(&c)
}

/// Non-empty, trimmed lines of `text`, in order.
///
/// See [`is_trim_char`].
pub fn trimmed_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c == '\n' || c == '\r')
        .map(|line| line.trim_matches(is_trim_char))
        .filter(|line| !line.is_empty())
}

/// Project one trimmed `line` into a `Record` for `kind`.
///
/// Returns `None` if the line has fewer fields than `kind` requires.
pub fn line_to_record(
    line: &str,
    kind: ArtifactKind,
) -> Option<Record> {
    match kind {
        ArtifactKind::GenericLog => {
            return Some(Record::Line(LogLine { line: line.to_string() }));
        }
        ArtifactKind::SudoRules => {
            return Some(Record::Sudo(SudoRule { rule: line.to_string() }));
        }
        _ => {}
    }

    let fields: Vec<&str> = line.split(FIELD_SEP).collect();
    if fields.len() < kind.min_fields() {
        defñ!("{} fields < {} for {:?}; skip {:?}", fields.len(), kind.min_fields(), kind, line);
        return None;
    }

    match kind {
        ArtifactKind::PasswordDatabase => Some(Record::Passwd(PasswdEntry {
            user: fields[0].to_string(),
            uid: fields[2].to_string(),
            gid: fields[3].to_string(),
            desc: fields[4].to_string(),
            home: fields[5].to_string(),
            shell: fields[6].to_string(),
        })),
        ArtifactKind::ShadowDatabase => Some(Record::Shadow(ShadowEntry {
            user: fields[0].to_string(),
            has_hash: !SHADOW_NO_HASH.contains(&fields[1]),
        })),
        ArtifactKind::GroupDatabase => Some(Record::Group(GroupEntry {
            group: fields[0].to_string(),
            gid: fields[2].to_string(),
            members: match fields.get(3) {
                Some(members) => members
                    .split(MEMBER_SEP)
                    .map(String::from)
                    .collect(),
                None => Vec::new(),
            },
        })),
        ArtifactKind::SudoRules | ArtifactKind::GenericLog => None,
    }
}

/// Extract `Records` from already-read `bytes`.
pub fn extract_bytes(
    bytes: &[u8],
    kind: ArtifactKind,
) -> Records {
    let text: String = decode_utf8_drop_invalid(bytes);

    trimmed_lines(text.as_str())
        .filter_map(|line| line_to_record(line, kind))
        .collect()
}

/// Read the file at `path` and extract `Records` according to `kind`.
///
/// Only I/O errors are returned; decoding never fails.
pub fn extract(
    path: &Path,
    kind: ArtifactKind,
) -> std::io::Result<Records> {
    defn!("({:?}, {:?})", path, kind);
    let bytes: Vec<u8> = std::fs::read(path)?;
    let records: Records = extract_bytes(&bytes, kind);
    defx!("return {} records", records.len());

    Ok(records)
}
