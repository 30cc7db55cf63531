#[cfg(test)]
#[path = "../../tests/unit/routing/optimizer_test.rs"]
mod optimizer_test;

use super::{DistanceMatrix, improve_with_two_opt};
use crate::algorithms::geometry::{Coordinate, centroid, haversine_distance};
use crate::models::AddressId;
use crate::utils::{Float, compare_floats};
use std::cmp::Ordering;

/// Represents a stop to be ordered within a route.
#[derive(Clone, Debug)]
pub struct RouteStop {
    /// Address id used to break ties.
    pub id: AddressId,
    /// Stop location, if known.
    pub coordinate: Option<Coordinate>,
}

/// Orders stops using a nearest neighbor heuristic followed by bounded 2-opt improvement.
#[derive(Clone, Debug)]
pub struct RouteOptimizer {
    improvement_cap: usize,
}

impl RouteOptimizer {
    /// Creates a new instance of `RouteOptimizer` with the maximum amount of 2-opt passes.
    pub fn new(improvement_cap: usize) -> Self {
        Self { improvement_cap }
    }

    /// Returns visiting order as indices of the given stops. Stops without coordinate are
    /// appended at the end in input order.
    pub fn optimize(&self, stops: &[RouteStop]) -> Vec<usize> {
        let (located, unlocated): (Vec<_>, Vec<_>) = (0..stops.len()).partition(|&idx| stops[idx].coordinate.is_some());

        let coordinates = located.iter().filter_map(|&idx| stops[idx].coordinate).collect::<Vec<_>>();
        let ids = located.iter().map(|&idx| stops[idx].id).collect::<Vec<_>>();

        let matrix = DistanceMatrix::new(coordinates.as_slice());

        let mut route = match find_start(coordinates.as_slice(), ids.as_slice()) {
            Some(start) => create_nearest_neighbor_route(&matrix, ids.as_slice(), start),
            None => Vec::default(),
        };

        improve_with_two_opt(route.as_mut_slice(), &matrix, self.improvement_cap);

        route.into_iter().map(|local_idx| located[local_idx]).chain(unlocated).collect()
    }
}

/// Builds a route visiting the nearest unvisited stop each time, starting from `start`.
/// Ties are broken by the lowest id.
pub fn create_nearest_neighbor_route(matrix: &DistanceMatrix, ids: &[AddressId], start: usize) -> Vec<usize> {
    let size = matrix.size();
    let mut visited = vec![false; size];
    let mut route = Vec::with_capacity(size);

    let mut current = start;
    visited[current] = true;
    route.push(current);

    while route.len() < size {
        let next = (0..size)
            .filter(|&idx| !visited[idx])
            .min_by(|&a, &b| {
                compare_by_distance_then_id(matrix.distance(current, a), ids[a], matrix.distance(current, b), ids[b])
            });

        let Some(next) = next else { break };

        visited[next] = true;
        route.push(next);
        current = next;
    }

    route
}

/// Finds the stop closest to the centroid of all stops.
fn find_start(coordinates: &[Coordinate], ids: &[AddressId]) -> Option<usize> {
    let center = centroid(coordinates)?;

    (0..coordinates.len()).min_by(|&a, &b| {
        compare_by_distance_then_id(
            haversine_distance(&center, &coordinates[a]),
            ids[a],
            haversine_distance(&center, &coordinates[b]),
            ids[b],
        )
    })
}

fn compare_by_distance_then_id(
    left_distance: Float,
    left_id: AddressId,
    right_distance: Float,
    right_id: AddressId,
) -> Ordering {
    compare_floats(left_distance, right_distance).then_with(|| left_id.cmp(&right_id))
}
