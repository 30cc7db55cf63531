//! A command line interface library for the survey grouping engine: reads addresses from files,
//! groups them village by village and writes grouping results in various formats.
//!
//! All file I/O happens here, the core crate never touches files.

#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod helpers;

pub use survey_core as core;

pub mod extensions;
