//! This module contains a deterministic K-Means algorithm implementation.
//!
//! Initial centroids are not random: points are ordered along a Hilbert curve, the order is cut into
//! `k` contiguous chunks and the mean of each chunk becomes a seed. Same input always produces same clusters.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/clustering/kmeans_test.rs"]
mod kmeans_test;

use crate::algorithms::geometry::{Point, hilbert_order};
use crate::utils::{Float, compare_floats};

/// Specifies K-Means parameters.
#[derive(Clone, Debug)]
pub struct KMeansParams {
    /// Desired amount of clusters.
    pub k: usize,
    /// Maximum amount of assign/update iterations.
    pub max_iterations: usize,
    /// Iterations stop once no centroid moves further than this threshold.
    pub epsilon: Float,
}

/// Creates clusters of points using the K-Means algorithm. Returns clusters as sorted lists of point indices.
/// Empty clusters are not returned, so the result may have less than `k` clusters.
pub fn create_kmeans(points: &[Point], params: &KMeansParams) -> Vec<Vec<usize>> {
    if points.is_empty() {
        return Vec::default();
    }

    let k = params.k.clamp(1, points.len());

    KMeans { k, max_iterations: params.max_iterations.max(1), epsilon: params.epsilon }.calculate(points)
}

struct KMeans {
    k: usize,
    max_iterations: usize,
    epsilon: Float,
}

impl KMeans {
    fn initialize_centroids(&self, points: &[Point]) -> Vec<Point> {
        let order = hilbert_order(points);
        let size = order.len();

        (0..self.k)
            .filter_map(|idx| {
                let (start, end) = (idx * size / self.k, (idx + 1) * size / self.k);
                Point::centroid(order[start..end].iter().map(|&point_idx| &points[point_idx]))
            })
            .collect()
    }

    fn assign_points(&self, points: &[Point], centroids: &[Point]) -> Vec<usize> {
        points
            .iter()
            .map(|point| {
                centroids
                    .iter()
                    .enumerate()
                    .min_by(|(_, a), (_, b)| {
                        compare_floats(point.squared_distance_to_point(a), point.squared_distance_to_point(b))
                    })
                    .map(|(idx, _)| idx)
                    .unwrap_or_default()
            })
            .collect()
    }

    fn update_centroids(&self, points: &[Point], labels: &[usize], centroids: &[Point]) -> Vec<Point> {
        centroids
            .iter()
            .enumerate()
            .map(|(cluster_idx, old)| {
                let members = labels.iter().zip(points.iter()).filter(|(label, _)| **label == cluster_idx);
                // NOTE empty cluster keeps its previous centroid
                Point::centroid(members.map(|(_, point)| point)).unwrap_or_else(|| old.clone())
            })
            .collect()
    }

    fn calculate(&self, points: &[Point]) -> Vec<Vec<usize>> {
        let mut centroids = self.initialize_centroids(points);

        for _ in 0..self.max_iterations {
            let labels = self.assign_points(points, &centroids);
            let new_centroids = self.update_centroids(points, &labels, &centroids);

            let movement = centroids
                .iter()
                .zip(new_centroids.iter())
                .map(|(old, new)| old.distance_to_point(new))
                .fold(0., Float::max);

            centroids = new_centroids;

            if movement <= self.epsilon {
                break;
            }
        }

        let labels = self.assign_points(points, &centroids);

        let mut clusters = vec![Vec::new(); centroids.len()];
        labels.into_iter().enumerate().for_each(|(point_idx, label)| clusters[label].push(point_idx));
        clusters.retain(|cluster| !cluster.is_empty());

        clusters
    }
}
