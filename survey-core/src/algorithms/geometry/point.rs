#[cfg(test)]
#[path = "../../../tests/unit/algorithms/geometry/point_test.rs"]
mod point_test;

use crate::utils::Float;

/// Represents a point in 2D space. Used for projected coordinates expressed in meters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Point {
    /// X value.
    pub x: Float,
    /// Y value.
    pub y: Float,
}

impl Point {
    /// Creates a new instance of `Point`.
    pub fn new(x: Float, y: Float) -> Self {
        Self { x, y }
    }

    /// Computes distance from given point to `other`
    pub fn distance_to_point(&self, other: &Point) -> Float {
        self.squared_distance_to_point(other).sqrt()
    }

    /// Computes squared distance from given point to `other`.
    pub fn squared_distance_to_point(&self, other: &Point) -> Float {
        let delta_x = self.x - other.x;
        let delta_y = self.y - other.y;

        delta_x * delta_x + delta_y * delta_y
    }

    /// Computes an arithmetic mean of points. Returns `None` if there are no points.
    pub fn centroid<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<Point> {
        let (count, sum_x, sum_y) =
            points.into_iter().fold((0_usize, 0., 0.), |(count, x, y), point| (count + 1, x + point.x, y + point.y));

        if count == 0 { None } else { Some(Point::new(sum_x / count as Float, sum_y / count as Float)) }
    }
}
