//! Module provides various helper functionality.

pub mod export;
pub mod import;
