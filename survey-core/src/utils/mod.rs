//! This module contains helper functionality.

mod comparison;
pub use self::comparison::*;

mod environment;
pub use self::environment::*;

mod error;
pub use self::error::*;

mod parallel;
pub use self::parallel::*;

/// Alias to a scalar floating type.
///
/// NOTE: coordinates are WGS84 degrees and distances are meters, so `f64` precision is required.
pub type Float = f64;
