#[cfg(test)]
#[path = "../../tests/unit/models/result_test.rs"]
mod result_test;

use super::{Address, AddressId, GroupingConfig, GroupingError, RouteGroup};
use crate::algorithms::geometry::{BoundingBox, Coordinate, centroid};
use crate::algorithms::statistics::{get_mean, get_variance};
use crate::utils::Float;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

/// Keeps summary statistics of one grouping run, including size bound deviations which could not be resolved.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupingStatistics {
    /// Amount of groups.
    pub group_count: usize,
    /// Average group size.
    pub avg_size: Float,
    /// Population variance of group sizes.
    pub size_variance: Float,
    /// Size of the smallest group.
    pub min_group_size: usize,
    /// Size of the largest group.
    pub max_group_size: usize,
    /// Sum of absolute deviations of group sizes from the target size.
    pub total_deviation: usize,
    /// Amount of groups smaller than min size.
    pub below_min_count: usize,
    /// Amount of groups larger than max size.
    pub above_max_count: usize,
    /// True if every group size is within size bounds.
    pub within_bounds: bool,
    /// Amount of merges applied while rebalancing.
    pub merge_count: usize,
    /// Amount of splits applied while rebalancing.
    pub split_count: usize,
    /// Total estimated route distance in meters.
    pub total_distance: Float,
    /// Total estimated route time in minutes.
    pub total_time: usize,
    /// Amount of addresses excluded from grouping.
    pub unmatched_count: usize,
}

impl GroupingStatistics {
    /// Creates statistics from final groups.
    pub fn new(groups: &[RouteGroup], unmatched_count: usize, config: &GroupingConfig) -> Self {
        let sizes = groups.iter().map(|group| group.size()).collect::<Vec<_>>();
        let float_sizes = sizes.iter().map(|&size| size as Float).collect::<Vec<_>>();

        let below_min_count = sizes.iter().filter(|&&size| size < config.min_size).count();
        let above_max_count = sizes.iter().filter(|&&size| size > config.max_size).count();

        Self {
            group_count: groups.len(),
            avg_size: get_mean(float_sizes.as_slice()),
            size_variance: get_variance(float_sizes.as_slice()),
            min_group_size: sizes.iter().copied().min().unwrap_or(0),
            max_group_size: sizes.iter().copied().max().unwrap_or(0),
            total_deviation: sizes.iter().map(|&size| size.abs_diff(config.target_size)).sum(),
            below_min_count,
            above_max_count,
            within_bounds: below_min_count == 0 && above_max_count == 0,
            merge_count: 0,
            split_count: 0,
            total_distance: groups.iter().map(|group| group.metrics.total_distance).sum(),
            total_time: groups.iter().map(|group| group.metrics.estimated_time).sum(),
            unmatched_count,
        }
    }

    /// Sets amount of merges and splits applied while rebalancing.
    pub fn with_rebalance_counts(mut self, merge_count: usize, split_count: usize) -> Self {
        self.merge_count = merge_count;
        self.split_count = split_count;
        self
    }
}

/// Describes the area covered by grouped addresses.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Coverage {
    /// A bounding box of all grouped addresses.
    pub bounding_box: BoundingBox,
    /// Centroid of all grouped addresses.
    pub center: Coordinate,
}

/// An aggregated output of one grouping run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupingResult<'a> {
    /// Source district.
    pub district: String,
    /// Source village.
    pub village: String,
    /// Target size used.
    pub target_size: usize,
    /// Total amount of input addresses.
    pub total_addresses: usize,
    /// Groups ordered along a space filling curve.
    pub groups: Vec<RouteGroup<'a>>,
    /// Addresses without valid coordinates, in input order.
    pub unmatched: Vec<&'a Address>,
    /// Summary statistics.
    pub statistics: GroupingStatistics,
}

impl<'a> GroupingResult<'a> {
    /// Returns amount of grouped addresses.
    pub fn grouped_count(&self) -> usize {
        self.groups.iter().map(|group| group.size()).sum()
    }

    /// Returns bounding box and center of all grouped addresses, if any has a coordinate.
    pub fn coverage(&self) -> Option<Coverage> {
        let coordinates = self.groups.iter().flat_map(|group| group.coordinates()).collect::<Vec<_>>();

        let bounding_box = BoundingBox::from_coordinates(coordinates.iter())?;
        let center = centroid(coordinates.iter())?;

        Some(Coverage { bounding_box, center })
    }

    /// Checks the partition property: every input address is either in exactly one group or unmatched,
    /// and no identifier which is unique in the input appears in two groups.
    pub fn check_partition(&self, input: &[Address]) -> Result<(), GroupingError> {
        let total = self.grouped_count() + self.unmatched.len();
        if total != input.len() {
            return Err(GroupingError::InvariantViolation(format!(
                "expected {} addresses in result, got {total}",
                input.len()
            )));
        }

        let mut seen = FxHashSet::<*const Address>::default();
        let all_addresses = self
            .groups
            .iter()
            .flat_map(|group| group.members.iter().map(|member| member.address))
            .chain(self.unmatched.iter().copied());

        for address in all_addresses {
            if !seen.insert(std::ptr::from_ref(address)) {
                return Err(GroupingError::InvariantViolation(format!(
                    "address '{}' is assigned more than once",
                    address.id
                )));
            }
        }

        let input_ids = input.iter().fold(FxHashMap::<AddressId, usize>::default(), |mut acc, address| {
            *acc.entry(address.id).or_insert(0) += 1;
            acc
        });

        let mut id_groups = FxHashMap::<AddressId, usize>::default();
        for (group_idx, group) in self.groups.iter().enumerate() {
            for member in group.members.iter().filter(|member| input_ids.get(&member.address.id) == Some(&1)) {
                let first_idx = *id_groups.entry(member.address.id).or_insert(group_idx);

                if first_idx != group_idx {
                    return Err(GroupingError::InvariantViolation(format!(
                        "address id '{}' appears in groups '{}' and '{}'",
                        member.address.id, self.groups[first_idx].id, group.id
                    )));
                }
            }
        }

        if let Some(group) = self.groups.iter().find(|group| group.is_empty()) {
            return Err(GroupingError::InvariantViolation(format!("group '{}' is empty", group.id)));
        }

        let is_ordered = |group: &RouteGroup| {
            group.members.iter().all(|member| member.visit_order.is_none())
                || group.members.iter().enumerate().all(|(idx, member)| member.visit_order == Some(idx))
        };

        if let Some(group) = self.groups.iter().find(|group| !is_ordered(group)) {
            return Err(GroupingError::InvariantViolation(format!(
                "visit order of group '{}' is not a permutation",
                group.id
            )));
        }

        Ok(())
    }
}
