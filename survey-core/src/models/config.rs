#[cfg(test)]
#[path = "../../tests/unit/models/config_test.rs"]
mod config_test;

use super::GroupingError;
use crate::utils::Float;
use serde::{Deserialize, Serialize};

/// Specifies the algorithm used to create initial clusters. All strategies share the same contract:
/// every address with a valid coordinate is assigned to exactly one cluster.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClusteringStrategy {
    /// Deterministic k-means with `k = round(N / target_size)`.
    #[default]
    Centroid,
    /// Density based clustering (DBSCAN) within `density_radius`, noise points form own clusters.
    Density,
    /// Splits addresses evenly keeping input order, ignores geography.
    Sequential,
    /// Keeps each neighborhood in one cluster when it fits target size, bigger neighborhoods are
    /// clustered by k-means on their own.
    Neighborhood,
}

impl std::str::FromStr for ClusteringStrategy {
    type Err = GroupingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "centroid" => Ok(Self::Centroid),
            "density" => Ok(Self::Density),
            "sequential" => Ok(Self::Sequential),
            "neighborhood" => Ok(Self::Neighborhood),
            _ => Err(GroupingError::Configuration(format!("unknown clustering strategy: '{value}'"))),
        }
    }
}

/// A grouping configuration passed explicitly to every engine invocation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GroupingConfig {
    /// Desired amount of addresses per group.
    pub target_size: usize,
    /// Minimum acceptable group size.
    pub min_size: usize,
    /// Maximum acceptable group size.
    pub max_size: usize,
    /// Fixed amount of initial clusters for centroid and sequential strategies. Overrides
    /// `round(N / target_size)` when set, size bounds still apply while rebalancing.
    pub target_groups: Option<usize>,
    /// Maximum amount of clustering iterations.
    pub clustering_iteration_cap: usize,
    /// Clustering stops when no centroid moves further than this distance, in meters.
    pub clustering_convergence_epsilon: Float,
    /// Maximum amount of local improvement passes applied to each route.
    pub route_local_improvement_cap: usize,
    /// Clustering strategy.
    pub strategy: ClusteringStrategy,
    /// Neighborhood radius of the density strategy, in meters.
    pub density_radius: Float,
    /// Walking speed used to estimate route time, in km/h.
    pub walking_speed_kmh: Float,
    /// Time spent at each address, in minutes.
    pub stop_duration_minutes: usize,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            target_size: 35,
            min_size: 25,
            max_size: 45,
            target_groups: None,
            clustering_iteration_cap: 100,
            clustering_convergence_epsilon: 0.5,
            route_local_improvement_cap: 100,
            strategy: ClusteringStrategy::default(),
            density_radius: 200.,
            walking_speed_kmh: 5.,
            stop_duration_minutes: 3,
        }
    }
}

impl GroupingConfig {
    /// Sets target, min and max group sizes.
    pub fn with_sizes(mut self, target_size: usize, min_size: usize, max_size: usize) -> Self {
        self.target_size = target_size;
        self.min_size = min_size;
        self.max_size = max_size;
        self
    }

    /// Sets a fixed amount of initial clusters.
    pub fn with_target_groups(mut self, target_groups: usize) -> Self {
        self.target_groups = Some(target_groups);
        self
    }

    /// Sets clustering strategy.
    pub fn with_strategy(mut self, strategy: ClusteringStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets clustering iteration cap and convergence threshold.
    pub fn with_clustering_limits(mut self, iteration_cap: usize, convergence_epsilon: Float) -> Self {
        self.clustering_iteration_cap = iteration_cap;
        self.clustering_convergence_epsilon = convergence_epsilon;
        self
    }

    /// Sets route local improvement cap.
    pub fn with_route_improvement_cap(mut self, improvement_cap: usize) -> Self {
        self.route_local_improvement_cap = improvement_cap;
        self
    }

    /// Sets density strategy radius.
    pub fn with_density_radius(mut self, density_radius: Float) -> Self {
        self.density_radius = density_radius;
        self
    }

    /// Checks configuration consistency.
    pub fn validate(&self) -> Result<(), GroupingError> {
        let fail = |msg: String| Err(GroupingError::Configuration(msg));

        if self.target_size == 0 {
            return fail("target size must be positive".to_string());
        }

        if self.min_size == 0 {
            return fail("min size must be positive".to_string());
        }

        if !(self.min_size <= self.target_size && self.target_size <= self.max_size) {
            return fail(format!(
                "expected min size <= target size <= max size, got {} <= {} <= {}",
                self.min_size, self.target_size, self.max_size
            ));
        }

        if self.target_groups == Some(0) {
            return fail("target groups must be positive".to_string());
        }

        if self.clustering_iteration_cap == 0 {
            return fail("clustering iteration cap must be positive".to_string());
        }

        if !self.clustering_convergence_epsilon.is_finite() || self.clustering_convergence_epsilon < 0. {
            return fail(format!(
                "clustering convergence epsilon must be non-negative, got {}",
                self.clustering_convergence_epsilon
            ));
        }

        if !self.density_radius.is_finite() || self.density_radius <= 0. {
            return fail(format!("density radius must be positive, got {}", self.density_radius));
        }

        if !self.walking_speed_kmh.is_finite() || self.walking_speed_kmh <= 0. {
            return fail(format!("walking speed must be positive, got {}", self.walking_speed_kmh));
        }

        Ok(())
    }
}
