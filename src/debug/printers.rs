// src/debug/printers.rs

//! Printer macros for user-facing errors and warnings, and for conditions
//! only reported in test and debug builds.

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Print `ERROR: ` and the formatted message to STDERR, in debug and test
/// builds only. Used for failures that are swallowed, e.g. a failed status
/// line print.
#[macro_export]
macro_rules! de_err {
    (
        $($args:tt)*
    ) => {
        {
            #[cfg(any(debug_assertions, test))]
            {
                eprintln!("ERROR: {}", format_args!($($args)*));
            }
        }
    }
}
pub use de_err;

/// Debug and test build counterpart of [`e_wrn!`]; compiles to nothing in
/// release builds. Reports skipped walk entries and vanished paths.
#[macro_export]
macro_rules! de_wrn {
    (
        $($args:tt)*
    ) => {
        {
            #[cfg(any(debug_assertions, test))]
            {
                eprintln!("WARNING: {}", format_args!($($args)*));
            }
        }
    }
}
pub use de_wrn;

/// Print `ERROR: ` and the formatted message to STDERR.
///
/// For fatal errors of the driver program, e.g. an output directory that
/// cannot be created.
#[macro_export]
macro_rules! e_err {
    (
        $($args:tt)*
    ) => {
        {
            eprintln!("ERROR: {}", format_args!($($args)*));
        }
    }
}
pub use e_err;

/// Print `WARNING: ` and the formatted message to STDERR.
#[macro_export]
macro_rules! e_wrn {
    (
        $($args:tt)*
    ) => {
        {
            eprintln!("WARNING: {}", format_args!($($args)*));
        }
    }
}
pub use e_wrn;
