//! Rebalances initial clusters against size bounds using greedy merges, splits and boundary moves.
//!
//! Merges are applied first: the smallest cluster below min size joins the nearest cluster (by centroid
//! distance). A neighbor which stays within max size is preferred only when it is at most twice as far
//! as the nearest one. Then each cluster of at least twice the min size is bisected until it fits max size.
//!
//! Clusters which are still above max size cannot be bisected without producing halves below min size.
//! Their boundary members are moved to the nearest cluster with free capacity. When no cluster has
//! capacity left, an oversized cluster is joined with its nearest neighbor and the union is cut into
//! more pieces along the space filling curve. Only when nothing else helps, an oversized cluster is split
//! in two if that reduces the deviation from target size.
//!
//! Merges strictly reduce cluster count, bisections strictly increase it, and each move or regroup strictly
//! reduces the total amount of members above max size, so every phase terminates.

#[cfg(test)]
#[path = "../../tests/unit/construction/rebalance_test.rs"]
mod rebalance_test;

use super::clustering::{Site, create_centroid_clusters};
use crate::algorithms::geometry::{Point, hilbert_order};
use crate::models::GroupingConfig;
use crate::utils::{Float, compare_floats};
use std::collections::VecDeque;

/// A non exceeding merge target is preferred while it is not farther than this factor times the
/// distance to the nearest cluster.
const MERGE_DISTANCE_FACTOR: Float = 2.;

/// Keeps rebalanced clusters and amount of applied operations.
#[derive(Clone, Debug, Default)]
pub struct RebalanceResult {
    /// Clusters as sorted lists of site indices.
    pub clusters: Vec<Vec<usize>>,
    /// Amount of merges.
    pub merge_count: usize,
    /// Amount of splits.
    pub split_count: usize,
    /// Amount of members moved from oversized clusters to their neighbors.
    pub move_count: usize,
}

/// Rebalances clusters so that their sizes fit into `[min_size, max_size]` whenever total size allows it.
/// Clusters which cannot be fixed are kept as close to the target size as possible.
pub fn rebalance_clusters(sites: &[Site], clusters: Vec<Vec<usize>>, config: &GroupingConfig) -> RebalanceResult {
    let (clusters, merge_count) = merge_small_clusters(sites, clusters, config);
    let (clusters, bisect_count) = split_large_clusters(sites, clusters, config);
    let (clusters, move_count, regroup_count) = level_large_clusters(sites, clusters, config);
    let (clusters, remaining_count) = split_remaining_clusters(sites, clusters, config);

    RebalanceResult { clusters, merge_count, split_count: bisect_count + regroup_count + remaining_count, move_count }
}

fn merge_small_clusters(
    sites: &[Site],
    mut clusters: Vec<Vec<usize>>,
    config: &GroupingConfig,
) -> (Vec<Vec<usize>>, usize) {
    let mut merge_count = 0;

    while clusters.len() > 1 {
        let smallest = clusters
            .iter()
            .enumerate()
            .filter(|(_, cluster)| cluster.len() < config.min_size)
            .min_by_key(|(idx, cluster)| (cluster.len(), *idx))
            .map(|(idx, _)| idx);

        let Some(source_idx) = smallest else { break };

        let centroids = get_centroids(sites, clusters.as_slice());
        let neighbors = get_neighbors(centroids.as_slice(), source_idx);
        let Some(&(nearest_idx, nearest_distance)) = neighbors.first() else { break };

        let source_size = clusters[source_idx].len();
        let target_idx = neighbors
            .iter()
            .take_while(|(_, distance)| *distance <= nearest_distance * MERGE_DISTANCE_FACTOR)
            .find(|(idx, _)| source_size + clusters[*idx].len() <= config.max_size)
            .map_or(nearest_idx, |(idx, _)| *idx);

        let source = clusters.remove(source_idx);
        let target_idx = if target_idx > source_idx { target_idx - 1 } else { target_idx };

        clusters[target_idx].extend(source);
        clusters[target_idx].sort_unstable();
        merge_count += 1;
    }

    (clusters, merge_count)
}

/// Bisects clusters above max size which are big enough to give two halves of at least min size.
fn split_large_clusters(
    sites: &[Site],
    clusters: Vec<Vec<usize>>,
    config: &GroupingConfig,
) -> (Vec<Vec<usize>>, usize) {
    let mut pending = VecDeque::from(clusters);
    let mut result = Vec::with_capacity(pending.len());
    let mut split_count = 0;

    while let Some(cluster) = pending.pop_front() {
        if cluster.len() <= config.max_size || cluster.len() < 2 * config.min_size {
            result.push(cluster);
            continue;
        }

        let (first, second) = bisect(sites, cluster.as_slice(), config);
        let (small, big) = if first.len() <= second.len() { (first, second) } else { (second, first) };
        let required = config.min_size.saturating_sub(small.len());
        let (big, small) = move_closest(sites, big, small, required);

        pending.push_front(big);
        pending.push_front(small);
        split_count += 1;
    }

    (result, split_count)
}

/// Fixes clusters above max size using their neighbors. Returns clusters, amount of moved members and
/// amount of extra clusters created by regrouping.
fn level_large_clusters(
    sites: &[Site],
    mut clusters: Vec<Vec<usize>>,
    config: &GroupingConfig,
) -> (Vec<Vec<usize>>, usize, usize) {
    let (mut move_count, mut regroup_count) = (0, 0);

    loop {
        let largest = clusters
            .iter()
            .enumerate()
            .filter(|(_, cluster)| cluster.len() > config.max_size)
            .max_by(|(a_idx, a), (b_idx, b)| a.len().cmp(&b.len()).then_with(|| b_idx.cmp(a_idx)))
            .map(|(idx, _)| idx);

        let Some(source_idx) = largest else { break };

        let centroids = get_centroids(sites, clusters.as_slice());
        let neighbors = get_neighbors(centroids.as_slice(), source_idx);

        if let Some(&(target_idx, _)) = neighbors.iter().find(|(idx, _)| clusters[*idx].len() < config.max_size) {
            let source = std::mem::take(&mut clusters[source_idx]);
            let target = std::mem::take(&mut clusters[target_idx]);
            let count = (source.len() - config.max_size).min(config.max_size - target.len());

            let (source, target) = move_closest(sites, source, target, count);
            clusters[source_idx] = source;
            clusters[target_idx] = target;
            move_count += count;

            continue;
        }

        let Some(&(target_idx, _)) = neighbors.first() else { break };

        let mut union = clusters[source_idx].iter().chain(clusters[target_idx].iter()).copied().collect::<Vec<_>>();
        union.sort_unstable();

        let Some(parts) = get_feasible_parts(union.len(), config) else { break };
        let mut pieces = split_along_curve(sites, union.as_slice(), parts).into_iter();

        let (Some(first), Some(second)) = (pieces.next(), pieces.next()) else { break };
        clusters[source_idx] = first;
        clusters[target_idx] = second;
        clusters.extend(pieces);
        regroup_count += parts - 2;
    }

    (clusters, move_count, regroup_count)
}

/// Splits clusters still above max size in two halves when that reduces the total deviation from target size.
fn split_remaining_clusters(
    sites: &[Site],
    clusters: Vec<Vec<usize>>,
    config: &GroupingConfig,
) -> (Vec<Vec<usize>>, usize) {
    let deviation = |size: usize| size.abs_diff(config.target_size);
    let mut split_count = 0;

    let clusters: Vec<Vec<usize>> = clusters
        .into_iter()
        .flat_map(|cluster| {
            if cluster.len() > config.max_size && cluster.len() > 1 {
                let (first, second) = bisect(sites, cluster.as_slice(), config);

                if deviation(first.len()) + deviation(second.len()) < deviation(cluster.len()) {
                    split_count += 1;
                    return vec![first, second];
                }
            }

            vec![cluster]
        })
        .collect();

    (clusters, split_count)
}

/// Re-clusters members with k=2. Falls back to halving the space filling curve order when all members
/// end up in one cluster, e.g. when they share a location.
fn bisect(sites: &[Site], cluster: &[usize], config: &GroupingConfig) -> (Vec<usize>, Vec<usize>) {
    let subset = cluster.iter().map(|&idx| sites[idx].clone()).collect::<Vec<_>>();
    let halves = create_centroid_clusters(subset.as_slice(), 2, config);

    let to_sites = |local: &[usize]| {
        let mut indices = local.iter().map(|&local_idx| cluster[local_idx]).collect::<Vec<_>>();
        indices.sort_unstable();
        indices
    };

    match halves.as_slice() {
        [first, second] => (to_sites(first), to_sites(second)),
        _ => match split_along_curve(sites, cluster, 2).as_slice() {
            [first, second] => (first.clone(), second.clone()),
            _ => (cluster.to_vec(), Vec::new()),
        },
    }
}

/// Cuts members into `parts` contiguous pieces of the space filling curve order with sizes differing by one at most.
fn split_along_curve(sites: &[Site], cluster: &[usize], parts: usize) -> Vec<Vec<usize>> {
    let points = cluster.iter().map(|&idx| sites[idx].point.clone()).collect::<Vec<_>>();
    let order = hilbert_order(points.as_slice());
    let size = order.len();

    (0..parts)
        .map(|part| {
            let mut piece =
                order[part * size / parts..(part + 1) * size / parts].iter().map(|&local| cluster[local]).collect::<Vec<_>>();
            piece.sort_unstable();
            piece
        })
        .collect()
}

/// Returns amount of pieces closest to target size which keeps every piece within size bounds.
fn get_feasible_parts(size: usize, config: &GroupingConfig) -> Option<usize> {
    let lower = size.div_ceil(config.max_size).max(1);
    let upper = size / config.min_size.max(1);

    if lower > upper {
        return None;
    }

    let parts = (size as Float / config.target_size as Float).round() as usize;

    Some(parts.clamp(lower, upper))
}

/// Moves `count` members from `source` to `target`. Members closest to the target relative to their own
/// cluster are moved first, ties are resolved by index.
fn move_closest(
    sites: &[Site],
    mut source: Vec<usize>,
    mut target: Vec<usize>,
    count: usize,
) -> (Vec<usize>, Vec<usize>) {
    if count == 0 {
        return (source, target);
    }

    let source_center = get_centroid(sites, source.as_slice());
    let target_center = get_centroid(sites, target.as_slice());

    let mut candidates = source
        .iter()
        .map(|&idx| {
            let point = &sites[idx].point;
            (point.distance_to_point(&target_center) - point.distance_to_point(&source_center), idx)
        })
        .collect::<Vec<_>>();
    candidates.sort_by(|(a_delta, a_idx), (b_delta, b_idx)| {
        compare_floats(*a_delta, *b_delta).then_with(|| a_idx.cmp(b_idx))
    });

    let moved = candidates.into_iter().take(count).map(|(_, idx)| idx).collect::<Vec<_>>();

    source.retain(|idx| !moved.contains(idx));
    target.extend(moved);
    target.sort_unstable();

    (source, target)
}

/// Returns other clusters ordered by centroid distance to the given one, ties are resolved by index.
fn get_neighbors(centroids: &[Point], cluster_idx: usize) -> Vec<(usize, Float)> {
    let mut neighbors = centroids
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != cluster_idx)
        .map(|(idx, centroid)| (idx, centroids[cluster_idx].distance_to_point(centroid)))
        .collect::<Vec<_>>();

    neighbors.sort_by(|(a_idx, a_distance), (b_idx, b_distance)| {
        compare_floats(*a_distance, *b_distance).then_with(|| a_idx.cmp(b_idx))
    });

    neighbors
}

fn get_centroids(sites: &[Site], clusters: &[Vec<usize>]) -> Vec<Point> {
    clusters.iter().map(|cluster| get_centroid(sites, cluster)).collect()
}

fn get_centroid(sites: &[Site], cluster: &[usize]) -> Point {
    Point::centroid(cluster.iter().map(|&idx| &sites[idx].point)).unwrap_or_default()
}
