//! This module contains an implementation of Density-Based Spatial Clustering of Applications with
//! Noise (DBSCAN) over point indices.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/clustering/dbscan_test.rs"]
mod dbscan_test;

use std::collections::VecDeque;

/// Creates clusters of `size` points identified by their indices.
/// `min_points`: The minimum number of neighbors required for a point to expand a cluster.
/// `neighborhood_fn`: Returns indices of neighbors of the given point, including the point itself.
///
/// Returns clusters as sorted index lists in discovery order and noise points (points which are not
/// reachable from any dense point) in index order.
pub fn create_clusters<'a, FN>(size: usize, min_points: usize, neighborhood_fn: FN) -> (Vec<Vec<usize>>, Vec<usize>)
where
    FN: Fn(usize) -> &'a [usize],
{
    let mut labels = vec![Label::Unvisited; size];
    let mut clusters = Vec::new();

    for point in 0..size {
        if labels[point] != Label::Unvisited {
            continue;
        }

        let neighbors = neighborhood_fn(point);
        if neighbors.len() < min_points {
            labels[point] = Label::Noise;
            continue;
        }

        labels[point] = Label::Clustered;
        let mut cluster = vec![point];
        let mut pending = neighbors.iter().copied().collect::<VecDeque<_>>();

        while let Some(other) = pending.pop_front() {
            let label = labels[other];
            if label == Label::Clustered {
                continue;
            }

            labels[other] = Label::Clustered;
            cluster.push(other);

            // NOTE border points, previously marked as noise, join the cluster but do not expand it
            if label == Label::Unvisited {
                let other_neighbors = neighborhood_fn(other);
                if other_neighbors.len() >= min_points {
                    pending.extend(other_neighbors.iter().copied().filter(|&idx| labels[idx] != Label::Clustered));
                }
            }
        }

        cluster.sort_unstable();
        clusters.push(cluster);
    }

    let noise = (0..size).filter(|&point| labels[point] == Label::Noise).collect();

    (clusters, noise)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Label {
    Unvisited,
    Noise,
    Clustered,
}
