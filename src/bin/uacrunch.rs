// src/bin/uacrunch.rs

//! Driver program _uacrunch_ drives the [_uacrunchlib_].
//!
//! Processes user-passed command-line arguments, then processes the one
//! passed path. A directory is recursed; every file found is classified by
//! name, sampled, parsed into records, and written as JSON into the output
//! directory. One status line per file is printed to STDOUT.
//!
//! A failure processing one file never stops processing of other files.
//! The process exits non-zero only for command-line errors, a nonexistent
//! path, or an output directory that cannot be created.
//!
//! [_uacrunchlib_]: uacrunchlib

#![allow(non_camel_case_types)]

use std::path::Path;
use std::process::ExitCode;

use ::anyhow::Context;
use ::clap::{Parser, ValueEnum};
use ::const_format::concatcp;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ, stack::stack_offset_set};

use ::uacrunchlib::common::{FPath, OUTPUT_DIR_NAME};
#[allow(unused_imports)]
use ::uacrunchlib::debug::printers::{e_err, e_wrn};
use ::uacrunchlib::printer::printers::{ColorChoice, PrinterStatus, StandardStream};
use ::uacrunchlib::readers::artifactprocessor::{run, Config, RunResult};

const EXIT_ERR: i32 = 1;

// --------------------
// command-line parsing

const CLI_HELP_AFTER: &str = concatcp!(
    r#"
Files are classified by name. A file name containing "passwd", "shadow",
"group", or "sudoers" (checked in that order, case-sensitive) is parsed as
that account artifact. Any other file name is parsed as a plain log where
every non-blank line is kept.

Files that look binary (more than 10% of the first 1024 bytes are control
bytes) are skipped.

Output for input file "auth.log.1" is written to "<OUTPUT_DIR>/auth_log_1.json".
Input files sharing a file name overwrite each other's output.

---

Version: "#, env!("CARGO_PKG_VERSION"), r#"
MSRV: "#, env!("CARGO_PKG_RUST_VERSION"), r#"
License: "#, env!("CARGO_PKG_LICENSE"), r#"
"#,
);

/// CLI enum that maps to [`termcolor::ColorChoice`].
///
/// [`termcolor::ColorChoice`]: https://docs.rs/termcolor/1.1.3/termcolor/enum.ColorChoice.html
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    ValueEnum, // from `clap`
)]
enum CLI_Color_Choice {
    always,
    auto,
    never,
}

/// clap command-line arguments build-time definitions.
//
// Note:
// * the `about` is taken from `Cargo.toml:[package]:description`.
#[derive(Parser, Debug)]
#[clap(
    about = env!("CARGO_PKG_DESCRIPTION"),
    author = env!("CARGO_PKG_AUTHORS"),
    name = "uacrunch",
    version = env!("CARGO_PKG_VERSION"),
    after_help = CLI_HELP_AFTER,
    verbatim_doc_comment,
)]
struct CLI_Args {
    /// Path of a file or directory to parse.
    /// Directories will be recursed. Symlinked directories are not followed.
    #[clap(
        required = true,
        verbatim_doc_comment,
    )]
    path: FPath,

    /// Directory to write JSON output files.
    /// A relative path is relative to the current working directory.
    #[clap(
        short = 'o',
        long,
        verbatim_doc_comment,
        default_value_t = String::from(OUTPUT_DIR_NAME),
    )]
    output_dir: String,

    /// Choose to print status symbols in color.
    #[clap(
        required = false,
        short = 'c',
        long = "color",
        verbatim_doc_comment,
        value_enum,
        default_value_t = CLI_Color_Choice::auto,
    )]
    color_choice: CLI_Color_Choice,

    /// Print a summary of files processed after the final line.
    #[clap(
        short,
        long,
        verbatim_doc_comment,
    )]
    summary: bool,
}

/// Process user-passed CLI argument strings into expected types.
///
/// This function will [`std::process::exit`] if there is an [`Err`].
fn cli_process_args() -> (FPath, Config, ColorChoice, bool) {
    let args = CLI_Args::parse();

    defo!("args {:?}", args);

    let config: Config = match Config::from_current_dir(Path::new(&args.output_dir))
        .context("Unable to read the current working directory")
    {
        Ok(val) => val,
        Err(err) => {
            e_err!("{:#}", err);
            std::process::exit(EXIT_ERR);
        }
    };
    defo!("config {:?}", config);

    // map `CLI_Color_Choice` to `ColorChoice`
    let color_choice: ColorChoice = match args.color_choice {
        CLI_Color_Choice::always => ColorChoice::Always,
        CLI_Color_Choice::auto => ColorChoice::Auto,
        CLI_Color_Choice::never => ColorChoice::Never,
    };

    (args.path, config, color_choice, args.summary)
}

/// Process the user-passed command-line arguments.
/// Start function `run`.
/// Determine a process return code.
pub fn main() -> ExitCode {
    if cfg!(debug_assertions) {
        stack_offset_set(Some(0));
    }
    defn!();

    let (path, config, color_choice, cli_opt_summary) = cli_process_args();

    let mut printer: PrinterStatus<StandardStream> = PrinterStatus::stdout(color_choice);
    let exitcode: ExitCode = match run(&path, &config, &mut printer)
        .with_context(|| format!("Unable to create output directory {:?}", config.output_dir))
    {
        Ok(RunResult::Done(summary)) => {
            if cli_opt_summary {
                if let Err(err) = printer.print_summary(&summary) {
                    e_wrn!("printing summary failed: {}", err);
                }
            }
            ExitCode::SUCCESS
        }
        Ok(RunResult::PathNotExist) => ExitCode::FAILURE,
        Err(err) => {
            e_err!("{:#}", err);
            ExitCode::FAILURE
        }
    };
    defx!("exitcode {:?}", exitcode);

    exitcode
}
