#[cfg(test)]
#[path = "../../tests/unit/routing/metrics_test.rs"]
mod metrics_test;

use crate::algorithms::geometry::{Coordinate, haversine_distance};
use crate::models::GroupingConfig;
use crate::utils::Float;
use serde::Serialize;

/// Estimated metrics of a walking route.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMetrics {
    /// Sum of great-circle distances between consecutive located stops, in meters.
    pub total_distance: Float,
    /// Walking time plus stop time, in whole minutes.
    pub estimated_time: usize,
    /// Average distance between consecutive located stops, in meters.
    pub avg_leg_distance: Float,
    /// Longest distance between consecutive located stops, in meters.
    pub max_leg_distance: Float,
}

impl RouteMetrics {
    /// Estimates metrics for stops visited in given order. Every member counts as a stop,
    /// including ones without a coordinate.
    pub fn new(coordinates: &[Coordinate], stop_count: usize, config: &GroupingConfig) -> Self {
        let legs = coordinates.windows(2).map(|leg| haversine_distance(&leg[0], &leg[1])).collect::<Vec<_>>();

        let total_distance: Float = legs.iter().sum();
        let avg_leg_distance = if legs.is_empty() { 0. } else { total_distance / legs.len() as Float };
        let max_leg_distance = legs.iter().copied().fold(0., Float::max);

        let walking_time = total_distance / 1000. / config.walking_speed_kmh * 60.;
        let stop_time = (stop_count * config.stop_duration_minutes) as Float;

        Self {
            total_distance,
            estimated_time: (walking_time + stop_time).trunc() as usize,
            avg_leg_distance,
            max_leg_distance,
        }
    }
}
