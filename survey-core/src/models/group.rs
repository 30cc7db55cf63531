#[cfg(test)]
#[path = "../../tests/unit/models/group_test.rs"]
mod group_test;

use super::{Address, AddressCategory, AddressId};
use crate::algorithms::geometry::{BoundingBox, Coordinate, centroid};
use crate::routing::RouteMetrics;
use serde::Serialize;
use std::collections::BTreeMap;

/// Represents a group member: a borrowed address with its assigned category and visiting order.
/// Address fields are flattened with the same names as in the input records.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMember<'a> {
    /// Member's address.
    #[serde(flatten)]
    pub address: &'a Address,
    /// Structural category assigned by the classifier.
    pub category: AddressCategory,
    /// Zero based visiting order index, if route ordering was performed.
    pub visit_order: Option<usize>,
}

impl<'a> GroupMember<'a> {
    /// Creates a new member without visiting order.
    pub fn new(address: &'a Address, category: AddressCategory) -> Self {
        Self { address, category, visit_order: None }
    }
}

/// Represents one finalized canvassing group.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteGroup<'a> {
    /// Group identifier formatted as `<district><village>-<NN>`.
    pub id: String,
    /// Members sorted by visiting order.
    pub members: Vec<GroupMember<'a>>,
    /// Target size used to create the group.
    pub target_size: usize,
    /// Route metrics estimated for the visiting order.
    pub metrics: RouteMetrics,
}

impl<'a> RouteGroup<'a> {
    /// Formats group identifier from district, village and one-based sequence number.
    pub fn format_id(district: &str, village: &str, sequence: usize) -> String {
        format!("{district}{village}-{sequence:02}")
    }

    /// Returns amount of members.
    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// Returns true if group has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns valid coordinates of members in visiting order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.members.iter().filter_map(|member| member.address.coordinate())
    }

    /// Returns centroid of located members.
    pub fn center(&self) -> Option<Coordinate> {
        centroid(self.coordinates().collect::<Vec<_>>().iter())
    }

    /// Returns bounding box of located members.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_coordinates(self.coordinates().collect::<Vec<_>>().iter())
    }

    /// Returns amount of members per neighborhood number.
    pub fn neighborhood_distribution(&self) -> BTreeMap<u32, usize> {
        self.members.iter().fold(BTreeMap::new(), |mut acc, member| {
            *acc.entry(member.address.neighborhood).or_insert(0) += 1;
            acc
        })
    }

    /// Returns address ids in visiting order.
    pub fn route_ids(&self) -> Vec<AddressId> {
        self.members.iter().map(|member| member.address.id).collect()
    }
}
