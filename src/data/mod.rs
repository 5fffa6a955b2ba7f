// src/data/mod.rs

//! Data representations for _uacrunchlib_.
//!
//! A [`Record`] is one structured entry derived from one line of an
//! artifact file. Records exist only until they are serialized.
//!
//! [`Record`]: crate::data::record::Record

pub mod record;
