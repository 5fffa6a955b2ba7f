// src/readers/mod.rs

//! "Readers" for _uacrunchlib_.
//!
//! ## Overview of readers
//!
//! * [`process_path`] enumerates the files under a user-passed path and
//!   assigns each an [`ArtifactKind`] from its file name.
//! * [`is_text`] samples the leading bytes of a file to reject binary
//!   files.
//! * [`extract`] reads a file and derives [`Record`s].
//! * [`run`] drives the above for every file, writes JSON, and prints
//!   status.
//!
//! _These are not rust "Readers"; these do not implement the trait
//! [`Read`]. These are "readers" in an informal sense._
//!
//! [`process_path`]: crate::readers::filepreprocessor::process_path
//! [`ArtifactKind`]: crate::common::ArtifactKind
//! [`is_text`]: crate::readers::textsampler::is_text
//! [`extract`]: crate::readers::recordreader::extract
//! [`Record`s]: crate::data::record::Record
//! [`run`]: crate::readers::artifactprocessor::run
//! [`Read`]: std::io::Read

pub mod artifactprocessor;
pub mod filepreprocessor;
pub mod helpers;
pub mod recordreader;
pub mod summary;
pub mod textsampler;
