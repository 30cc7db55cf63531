//! The engine module drives the grouping pipeline: classification, clustering, rebalancing and route ordering.

#[cfg(test)]
#[path = "../../tests/unit/engine/engine_test.rs"]
mod engine_test;

mod batch;
pub use self::batch::*;

use crate::algorithms::geometry::hilbert_ranks;
use crate::construction::classifier::classify_address;
use crate::construction::clustering::{Site, create_initial_clusters, create_sites};
use crate::construction::rebalance::rebalance_clusters;
use crate::models::*;
use crate::routing::{RouteMetrics, RouteOptimizer, RouteStop};
use crate::utils::Environment;
use std::sync::Arc;

/// Creates groups for addresses of one village using default configuration with given size bounds.
pub fn create_groups<'a>(
    addresses: &'a [Address],
    district: &str,
    village: &str,
    target_size: usize,
    min_size: usize,
    max_size: usize,
) -> Result<GroupingResult<'a>, GroupingError> {
    let config = GroupingConfig::default().with_sizes(target_size, min_size, max_size);

    GroupingEngine::new(config, Arc::new(Environment::new_silent()))?.create_groups(addresses, district, village)
}

/// Splits addresses of one village into balanced groups and orders each group for walking.
///
/// The engine keeps no state between runs and can be shared between threads.
#[derive(Clone, Debug)]
pub struct GroupingEngine {
    config: GroupingConfig,
    environment: Arc<Environment>,
}

impl GroupingEngine {
    /// Creates a new instance of `GroupingEngine`. Fails if configuration is invalid.
    pub fn new(config: GroupingConfig, environment: Arc<Environment>) -> Result<Self, GroupingError> {
        config.validate()?;

        Ok(Self { config, environment })
    }

    /// Returns configuration used by the engine.
    pub fn config(&self) -> &GroupingConfig {
        &self.config
    }

    /// Creates groups from addresses which are expected to belong to the given district and village.
    /// Addresses without valid coordinates are reported as unmatched. Fails only if the result
    /// violates the partition property.
    pub fn create_groups<'a>(
        &self,
        addresses: &'a [Address],
        district: &str,
        village: &str,
    ) -> Result<GroupingResult<'a>, GroupingError> {
        let config = &self.config;
        let log = |message: String| self.environment.log(format!("[{district}{village}] {message}").as_str());

        let classified = addresses.iter().map(|address| (address, classify_address(address))).collect::<Vec<_>>();
        log(format!("classified {} addresses: {}", addresses.len(), format_categories(classified.as_slice())));

        let (located, unmatched) = classified.into_iter().fold(
            (Vec::new(), Vec::new()),
            |(mut located, mut unmatched), (address, classification)| {
                match address.coordinate() {
                    Some(coordinate) => located.push((address, coordinate, classification)),
                    None => unmatched.push(address),
                }
                (located, unmatched)
            },
        );

        let sites = create_sites(located.as_slice());

        let clusters = create_initial_clusters(sites.as_slice(), config);
        log(format!("created {} initial clusters with {:?} strategy", clusters.len(), config.strategy));

        let rebalanced = rebalance_clusters(sites.as_slice(), clusters, config);
        log(format!(
            "rebalanced clusters: {} merges, {} splits, {} moved members",
            rebalanced.merge_count, rebalanced.split_count, rebalanced.move_count
        ));

        let clusters = sort_clusters(sites.as_slice(), rebalanced.clusters);
        let optimizer = RouteOptimizer::new(config.route_local_improvement_cap);

        let groups = clusters
            .iter()
            .enumerate()
            .map(|(idx, cluster)| self.create_group(&optimizer, sites.as_slice(), cluster, district, village, idx + 1))
            .collect::<Vec<_>>();

        let statistics = GroupingStatistics::new(groups.as_slice(), unmatched.len(), config)
            .with_rebalance_counts(rebalanced.merge_count, rebalanced.split_count);

        log(format!(
            "created {} groups, {} unmatched, sizes {}..{}, {} below min, {} above max",
            statistics.group_count,
            statistics.unmatched_count,
            statistics.min_group_size,
            statistics.max_group_size,
            statistics.below_min_count,
            statistics.above_max_count
        ));

        let result = GroupingResult {
            district: district.to_string(),
            village: village.to_string(),
            target_size: config.target_size,
            total_addresses: addresses.len(),
            groups,
            unmatched,
            statistics,
        };

        let partition = result.check_partition(addresses);
        debug_assert!(partition.is_ok(), "{partition:?}");

        partition.map(|_| result)
    }

    fn create_group<'a>(
        &self,
        optimizer: &RouteOptimizer,
        sites: &[Site<'a>],
        cluster: &[usize],
        district: &str,
        village: &str,
        sequence: usize,
    ) -> RouteGroup<'a> {
        let stops = cluster
            .iter()
            .map(|&idx| RouteStop { id: sites[idx].address.id, coordinate: Some(sites[idx].coordinate) })
            .collect::<Vec<_>>();

        let order = optimizer.optimize(stops.as_slice());

        let members = order
            .iter()
            .enumerate()
            .map(|(position, &stop_idx)| {
                let site = &sites[cluster[stop_idx]];
                GroupMember { address: site.address, category: site.category, visit_order: Some(position) }
            })
            .collect::<Vec<_>>();

        let coordinates = order.iter().map(|&stop_idx| sites[cluster[stop_idx]].coordinate).collect::<Vec<_>>();
        let metrics = RouteMetrics::new(coordinates.as_slice(), members.len(), &self.config);

        RouteGroup {
            id: RouteGroup::format_id(district, village, sequence),
            members,
            target_size: self.config.target_size,
            metrics,
        }
    }
}

/// Orders clusters along a space filling curve, so neighboring groups get consecutive ids.
fn sort_clusters(sites: &[Site], mut clusters: Vec<Vec<usize>>) -> Vec<Vec<usize>> {
    let points = sites.iter().map(|site| site.point.clone()).collect::<Vec<_>>();
    let ranks = hilbert_ranks(points.as_slice());

    clusters.sort_by_key(|cluster| cluster.iter().map(|&idx| ranks[idx]).min().unwrap_or(usize::MAX));

    clusters
}

fn format_categories(classified: &[(&Address, (AddressCategory, String))]) -> String {
    let count = |category: AddressCategory| classified.iter().filter(|(_, (other, _))| *other == category).count();

    format!(
        "{} street, {} area, {} neighborhood",
        count(AddressCategory::Street),
        count(AddressCategory::Area),
        count(AddressCategory::Neighborhood)
    )
}
