#[cfg(test)]
#[path = "../../tests/unit/routing/distance_test.rs"]
mod distance_test;

use crate::algorithms::geometry::{Coordinate, haversine_distance};
use crate::utils::Float;

/// A symmetric matrix of great-circle distances between route stops, in meters.
#[derive(Clone, Debug)]
pub struct DistanceMatrix {
    size: usize,
    values: Vec<Float>,
}

impl DistanceMatrix {
    /// Creates a new distance matrix for given coordinates.
    pub fn new(coordinates: &[Coordinate]) -> Self {
        let size = coordinates.len();
        let mut values = vec![0.; size * size];

        for from in 0..size {
            for to in (from + 1)..size {
                let distance = haversine_distance(&coordinates[from], &coordinates[to]);
                values[from * size + to] = distance;
                values[to * size + from] = distance;
            }
        }

        Self { size, values }
    }

    /// Returns amount of stops.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns distance between two stops.
    pub fn distance(&self, from: usize, to: usize) -> Float {
        self.values[from * self.size + to]
    }

    /// Returns total distance of an open path visiting stops in given order.
    pub fn route_distance(&self, route: &[usize]) -> Float {
        route.windows(2).map(|leg| self.distance(leg[0], leg[1])).sum()
    }
}
