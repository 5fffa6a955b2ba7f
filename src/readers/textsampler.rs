// src/readers/textsampler.rs

//! Decide if a file is text or binary from a small sample of its leading
//! bytes.
//!
//! A byte is "text-class" if it is one of `BEL`, `BS`, `TAB`, `LF`, `FF`,
//! `CR`, `ESC`, or within `0x20..=0xFF`. Everything else (`NUL` and the
//! remaining C0 control bytes) is non-text.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use ::more_asserts::debug_assert_le;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

use crate::common::{SAMPLE_SZ, TEXT_THRESHOLD};

/// Control bytes that still count as text.
const TEXT_CONTROL_BYTES: [u8; 7] = [0x07, 0x08, 0x09, 0x0A, 0x0C, 0x0D, 0x1B];

/// Is `byte` within the text-class set?
#[inline(always)]
pub const fn is_text_byte(byte: u8) -> bool {
    if byte >= 0x20 {
        return true;
    }
    let mut i: usize = 0;
    while i < TEXT_CONTROL_BYTES.len() {
        if TEXT_CONTROL_BYTES[i] == byte {
            return true;
        }
        i += 1;
    }

    false
}

/// Decide if `sample` is text.
///
/// An empty sample is never text. Otherwise the fraction of non-text bytes
/// must be strictly less than `1 - threshold`.
pub fn sample_is_text(
    sample: &[u8],
    threshold: f64,
) -> bool {
    if sample.is_empty() {
        defñ!("empty sample; return false");
        return false;
    }
    let nontext: usize = sample
        .iter()
        .filter(|b| !is_text_byte(**b))
        .count();
    debug_assert_le!(nontext, sample.len());
    let ratio: f64 = nontext as f64 / sample.len() as f64;
    let is_text = ratio < (1.0 - threshold);
    defñ!("nontext {}/{} ratio {} threshold {}; return {}", nontext, sample.len(), ratio, threshold, is_text);

    is_text
}

/// Read at most `sample_sz` bytes from the start of the file at `path`.
///
/// Short files return a short sample.
pub fn read_sample(
    path: &Path,
    sample_sz: usize,
) -> std::io::Result<Vec<u8>> {
    let file: File = File::open(path)?;
    let mut buffer: Vec<u8> = Vec::with_capacity(sample_sz);
    file.take(sample_sz as u64).read_to_end(&mut buffer)?;
    debug_assert_le!(buffer.len(), sample_sz);

    Ok(buffer)
}

/// Is the file at `path` text, using `threshold`?
///
/// Fails closed; any I/O error (missing file, no permissions, a directory)
/// means "not text".
pub fn is_text_threshold(
    path: &Path,
    sample_sz: usize,
    threshold: f64,
) -> bool {
    defn!("({:?}, {}, {})", path, sample_sz, threshold);
    let sample: Vec<u8> = match read_sample(path, sample_sz) {
        Ok(val) => val,
        Err(_err) => {
            defx!("read_sample error {}; return false", _err);
            return false;
        }
    };
    let is_text = sample_is_text(&sample, threshold);
    defx!("return {}", is_text);

    is_text
}

/// Is the file at `path` text, using the default sample size and threshold?
pub fn is_text(path: &Path) -> bool {
    is_text_threshold(path, SAMPLE_SZ, TEXT_THRESHOLD)
}
