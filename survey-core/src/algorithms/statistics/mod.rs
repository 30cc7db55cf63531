//! Contains basic statistics functions.

mod basics;
pub use self::basics::*;
