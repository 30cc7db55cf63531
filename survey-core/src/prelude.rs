//! This module reimports commonly used types.

pub use crate::engine::{GroupingEngine, VillageInput, create_groups, create_groups_batch};

pub use crate::models::{
    Address, AddressBuilder, AddressCategory, AddressId, ClusteringStrategy, GroupingConfig, GroupingError,
    GroupingResult, GroupingStatistics, RouteGroup,
};

pub use crate::algorithms::geometry::{Coordinate, haversine_distance};
pub use crate::routing::RouteMetrics;
pub use crate::utils::{Environment, GenericError, GenericResult, InfoLogger};
