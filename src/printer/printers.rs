// src/printer/printers.rs

//! Specialized printer struct [`PrinterStatus`] and helper functions for
//! printing one status line per processed file.
//!
//! Each line begins with a symbol for the outcome; the symbol is colored
//! when the output stream allows it.

use crate::common::FileProcessingResult;
use crate::debug::printers::de_err;
use crate::readers::summary::Summary;

use std::io::{Result, Write};
use std::path::Path;

#[doc(hidden)]
pub use ::termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// globals and constants
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub const SYMBOL_SKIP: &str = "⚠️";
pub const SYMBOL_PARSED: &str = "✅";
pub const SYMBOL_NO_DATA: &str = "⚠️";
pub const SYMBOL_ERROR: &str = "❌";
pub const SYMBOL_DONE: &str = "📁";

/// [`Color`] for skip and no-data lines.
///
/// [`Color`]: https://docs.rs/termcolor/1.1.3/termcolor/enum.Color.html
pub const COLOR_WARNING: Color = Color::Yellow;

/// [`Color`] for success lines.
pub const COLOR_PARSED: Color = Color::Green;

/// [`Color`] for error lines.
pub const COLOR_ERROR: Color = Color::Red;

/// [`Color`] for the final line.
pub const COLOR_DONE: Color = Color::Cyan;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// PrinterStatus
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Prints per-file status lines and the final lines of a run to any
/// [`WriteColor`], e.g. a [`StandardStream`] for the console or a
/// [`termcolor::Buffer`] for testing.
///
/// [`WriteColor`]: https://docs.rs/termcolor/1.1.3/termcolor/trait.WriteColor.html
/// [`StandardStream`]: https://docs.rs/termcolor/1.1.3/termcolor/struct.StandardStream.html
/// [`termcolor::Buffer`]: https://docs.rs/termcolor/1.1.3/termcolor/struct.Buffer.html
pub struct PrinterStatus<W: WriteColor> {
    out: W,
}

impl PrinterStatus<StandardStream> {
    /// A `PrinterStatus` for STDOUT.
    pub fn stdout(color_choice: ColorChoice) -> PrinterStatus<StandardStream> {
        PrinterStatus::new(StandardStream::stdout(color_choice))
    }
}

impl<W: WriteColor> PrinterStatus<W> {
    pub fn new(out: W) -> PrinterStatus<W> {
        PrinterStatus { out }
    }

    /// Consume the `PrinterStatus` and return the underlying stream.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print a colored `symbol` then `message` as one line.
    fn print_line(
        &mut self,
        color: Color,
        symbol: &str,
        message: &str,
    ) -> Result<()> {
        print_colored(color, symbol.as_bytes(), &mut self.out)?;
        writeln!(self.out, " {}", message)?;
        self.out.flush()
    }

    /// Print the file at `path` was skipped as binary.
    pub fn print_skipped(
        &mut self,
        path: &Path,
    ) -> Result<()> {
        self.print_line(COLOR_WARNING, SYMBOL_SKIP, &format!("Skipped non-text file: {}", path.display()))
    }

    /// Print the file at `path` was written to `outfile`.
    pub fn print_parsed(
        &mut self,
        path: &Path,
        outfile: &str,
    ) -> Result<()> {
        self.print_line(COLOR_PARSED, SYMBOL_PARSED, &format!("Parsed: {} → {}", path.display(), outfile))
    }

    /// Print the file at `path` produced no records.
    pub fn print_no_data(
        &mut self,
        path: &Path,
    ) -> Result<()> {
        self.print_line(COLOR_WARNING, SYMBOL_NO_DATA, &format!("No data parsed: {}", path.display()))
    }

    /// Print processing the file at `path` failed with `error`.
    pub fn print_error(
        &mut self,
        path: &Path,
        error: &str,
    ) -> Result<()> {
        self.print_line(COLOR_ERROR, SYMBOL_ERROR, &format!("Error parsing {}: {}", path.display(), error))
    }

    /// Print the status line matching `result` for the file at `path`.
    pub fn print_result(
        &mut self,
        path: &Path,
        result: &FileProcessingResult,
    ) -> Result<()> {
        match result {
            FileProcessingResult::Parsed(outfile, _) => self.print_parsed(path, outfile),
            FileProcessingResult::SkippedBinary => self.print_skipped(path),
            FileProcessingResult::NoData => self.print_no_data(path),
            FileProcessingResult::Error(error) => self.print_error(path, error),
        }
    }

    /// Print the user-passed path does not exist.
    pub fn print_path_not_exist(&mut self) -> Result<()> {
        self.print_line(COLOR_ERROR, SYMBOL_ERROR, "Path does not exist.")
    }

    /// Print the final line naming the output directory, preceded by a
    /// blank line.
    pub fn print_done(
        &mut self,
        output_dir: &Path,
    ) -> Result<()> {
        writeln!(self.out)?;
        self.print_line(COLOR_DONE, SYMBOL_DONE, &format!("All parsed logs saved to: {}", output_dir.display()))
    }

    /// Print the run `Summary`, preceded by a blank line.
    pub fn print_summary(
        &mut self,
        summary: &Summary,
    ) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", summary)?;
        self.out.flush()
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// other printer functions (no use of PrinterStatus)
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Print colored output to `out` if possible, otherwise print plain output.
///
/// See an example <https://docs.rs/termcolor/1.1.2/termcolor/#detecting-presence-of-a-terminal>.
pub fn print_colored<W: WriteColor>(
    color: Color,
    value: &[u8],
    out: &mut W,
) -> Result<()> {
    match out.set_color(ColorSpec::new().set_fg(Some(color))) {
        Ok(_) => {}
        Err(err) => {
            de_err!("print_colored: set_color({:?}) returned error {}", color, err);
            return Err(err);
        }
    };
    match out.write_all(value) {
        Ok(_) => {}
        Err(err) => {
            de_err!("print_colored: write_all(…) returned error {}", err);
            return Err(err);
        }
    }
    match out.reset() {
        Ok(_) => {}
        Err(err) => {
            de_err!("print_colored: reset() returned error {}", err);
            return Err(err);
        }
    }

    Ok(())
}
