//! The construction module contains the building blocks used to create groups: address classification,
//! initial spatial clustering and size-aware rebalancing.

pub mod classifier;
pub mod clustering;
pub mod rebalance;
