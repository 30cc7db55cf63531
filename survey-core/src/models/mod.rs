//! A collection of models to represent addresses, grouping configuration and grouping results.

mod address;
pub use self::address::*;

mod config;
pub use self::config::*;

mod error;
pub use self::error::*;

mod group;
pub use self::group::*;

mod result;
pub use self::result::*;
