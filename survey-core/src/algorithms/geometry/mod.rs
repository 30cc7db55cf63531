//! Contains geometry primitives: planar points, WGS84 coordinates and space-filling ordering.

mod coordinate;
pub use self::coordinate::*;

mod curve;
pub use self::curve::*;

mod point;
pub use self::point::Point;
