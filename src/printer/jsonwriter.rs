// src/printer/jsonwriter.rs

//! Write [`Records`] to a file as JSON indented by two spaces.
//!
//! The destination is overwritten unconditionally. Writes are not atomic; a
//! crash mid-write may leave a partial file.
//!
//! [`Records`]: crate::data::record::Records

use crate::data::record::Record;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Serialize `records` into `writer`.
pub fn write_records<W: Write>(
    records: &[Record],
    writer: W,
) -> std::io::Result<()> {
    serde_json::to_writer_pretty(writer, records)?;

    Ok(())
}

/// Serialize `records` to the file at `path`, creating or truncating it.
pub fn save(
    records: &[Record],
    path: &Path,
) -> std::io::Result<()> {
    defn!("({} records, {:?})", records.len(), path);
    let file: File = File::create(path)?;
    let mut writer: BufWriter<File> = BufWriter::new(file);
    write_records(records, &mut writer)?;
    writer.flush()?;
    defx!();

    Ok(())
}
