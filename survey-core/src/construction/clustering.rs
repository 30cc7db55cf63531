//! Creates initial clusters of located addresses.

#[cfg(test)]
#[path = "../../tests/unit/construction/clustering_test.rs"]
mod clustering_test;

use crate::algorithms::clustering::dbscan::create_clusters;
use crate::algorithms::clustering::kmeans::{KMeansParams, create_kmeans};
use crate::algorithms::geometry::{Coordinate, LocalProjection, Point};
use crate::models::{Address, AddressCategory, ClusteringStrategy, GroupingConfig};
use crate::utils::Float;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// Represents a located address prepared for clustering.
#[derive(Clone, Debug)]
pub struct Site<'a> {
    /// Original address.
    pub address: &'a Address,
    /// Valid address coordinate.
    pub coordinate: Coordinate,
    /// Coordinate projected to a local plane, in meters.
    pub point: Point,
    /// Structural category.
    pub category: AddressCategory,
    /// Classification key.
    pub key: String,
}

/// Creates sites from located addresses with their classification. Coordinates are projected around
/// the centroid of all given addresses.
pub fn create_sites<'a>(located: &[(&'a Address, Coordinate, (AddressCategory, String))]) -> Vec<Site<'a>> {
    let coordinates = located.iter().map(|(_, coordinate, _)| *coordinate).collect::<Vec<_>>();
    let projection = LocalProjection::from_coordinates(coordinates.as_slice());

    located
        .iter()
        .map(|(address, coordinate, (category, key))| Site {
            address: *address,
            coordinate: *coordinate,
            point: projection.project(coordinate),
            category: *category,
            key: key.clone(),
        })
        .collect()
}

/// Creates initial clusters as sorted lists of site indices. Every site is assigned to exactly one cluster.
pub fn create_initial_clusters(sites: &[Site], config: &GroupingConfig) -> Vec<Vec<usize>> {
    let size = sites.len();

    if size == 0 {
        return Vec::default();
    }

    if size < config.min_size {
        return vec![(0..size).collect()];
    }

    let k = config.target_groups.map_or_else(|| get_cluster_count(size, config.target_size), |groups| groups.clamp(1, size));

    match config.strategy {
        ClusteringStrategy::Centroid => {
            let clusters = create_centroid_clusters(sites, k, config);
            keep_streets_together(sites, clusters, config.max_size)
        }
        ClusteringStrategy::Density => {
            let clusters = create_density_clusters(sites, config);
            keep_streets_together(sites, clusters, config.max_size)
        }
        ClusteringStrategy::Sequential => create_sequential_clusters(size, k),
        ClusteringStrategy::Neighborhood => {
            let clusters = create_neighborhood_clusters(sites, config);
            keep_streets_together(sites, clusters, config.max_size)
        }
    }
}

/// Returns amount of clusters as `round(size / target_size)` clamped to at least one.
pub fn get_cluster_count(size: usize, target_size: usize) -> usize {
    ((size as Float / target_size.max(1) as Float).round() as usize).max(1)
}

/// Runs k-means over projected points of given sites.
pub(crate) fn create_centroid_clusters(sites: &[Site], k: usize, config: &GroupingConfig) -> Vec<Vec<usize>> {
    let points = sites.iter().map(|site| site.point.clone()).collect::<Vec<_>>();

    create_kmeans(
        points.as_slice(),
        &KMeansParams {
            k,
            max_iterations: config.clustering_iteration_cap,
            epsilon: config.clustering_convergence_epsilon,
        },
    )
}

fn create_density_clusters(sites: &[Site], config: &GroupingConfig) -> Vec<Vec<usize>> {
    let min_points = (config.target_size / 8).max(2);
    let radius = config.density_radius;

    let index = sites
        .iter()
        .map(|site| {
            sites
                .iter()
                .enumerate()
                .filter(|(_, other)| site.point.distance_to_point(&other.point) <= radius)
                .map(|(idx, _)| idx)
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let (clusters, noise) = create_clusters(sites.len(), min_points, |idx| index[idx].as_slice());

    // NOTE noise points become singleton clusters to be merged later
    clusters.into_iter().chain(noise.into_iter().map(|idx| vec![idx])).collect()
}

/// Groups sites by neighborhood in ascending neighborhood order. A neighborhood above target size is split
/// by k-means with `k = round(n / target_size)`.
fn create_neighborhood_clusters(sites: &[Site], config: &GroupingConfig) -> Vec<Vec<usize>> {
    let neighborhoods = sites.iter().enumerate().fold(BTreeMap::<u32, Vec<usize>>::new(), |mut acc, (site_idx, site)| {
        acc.entry(site.address.neighborhood).or_default().push(site_idx);
        acc
    });

    neighborhoods
        .into_values()
        .flat_map(|members| {
            if members.len() <= config.target_size {
                return vec![members];
            }

            let subset = members.iter().map(|&site_idx| sites[site_idx].clone()).collect::<Vec<_>>();
            let k = get_cluster_count(members.len(), config.target_size);

            create_centroid_clusters(subset.as_slice(), k, config)
                .into_iter()
                .map(|local| {
                    let mut cluster = local.into_iter().map(|local_idx| members[local_idx]).collect::<Vec<_>>();
                    cluster.sort_unstable();
                    cluster
                })
                .collect()
        })
        .collect()
}

fn create_sequential_clusters(size: usize, k: usize) -> Vec<Vec<usize>> {
    let k = k.clamp(1, size);

    (0..k).map(|idx| ((idx * size / k)..((idx + 1) * size / k)).collect()).collect()
}

/// Moves street based sites sharing a key into the cluster which holds most of them, when the street
/// fits into one group. Ties are resolved by the lowest cluster index.
fn keep_streets_together(sites: &[Site], clusters: Vec<Vec<usize>>, max_size: usize) -> Vec<Vec<usize>> {
    let cluster_count = clusters.len();
    let mut assignment = vec![0; sites.len()];
    clusters.iter().enumerate().for_each(|(cluster_idx, cluster)| {
        cluster.iter().for_each(|&site_idx| assignment[site_idx] = cluster_idx);
    });

    let streets = sites.iter().enumerate().filter(|(_, site)| site.category == AddressCategory::Street).fold(
        BTreeMap::<&str, Vec<usize>>::new(),
        |mut acc, (site_idx, site)| {
            acc.entry(site.key.as_str()).or_default().push(site_idx);
            acc
        },
    );

    streets.values().filter(|members| members.len() > 1 && members.len() <= max_size).for_each(|members| {
        let counts = members.iter().fold(FxHashMap::<usize, usize>::default(), |mut acc, &site_idx| {
            *acc.entry(assignment[site_idx]).or_insert(0) += 1;
            acc
        });

        let majority = counts
            .into_iter()
            .max_by(|(a_idx, a_count), (b_idx, b_count)| a_count.cmp(b_count).then_with(|| b_idx.cmp(a_idx)))
            .map(|(cluster_idx, _)| cluster_idx);

        if let Some(majority) = majority {
            members.iter().for_each(|&site_idx| assignment[site_idx] = majority);
        }
    });

    let mut clusters = vec![Vec::new(); cluster_count];
    assignment.into_iter().enumerate().for_each(|(site_idx, cluster_idx)| clusters[cluster_idx].push(site_idx));
    clusters.retain(|cluster| !cluster.is_empty());

    clusters
}
