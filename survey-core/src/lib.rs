//! Survey core crate splits geo-located addresses of a village into balanced canvassing groups and
//! orders each group into a walking route.
//!
//! # Pipeline
//!
//! 1. every address is classified as street based, area based or neighborhood only;
//! 2. located addresses are clustered around deterministic seeds;
//! 3. clusters are merged and split against min/max size bounds;
//! 4. each group is ordered by a nearest neighbor heuristic improved with 2-opt.
//!
//! Addresses without valid coordinates are never dropped: they are reported as unmatched.
//!
//! # Examples
//!
//! ```
//! use survey_core::prelude::*;
//! use std::sync::Arc;
//!
//! let addresses = (0..70)
//!     .map(|idx| {
//!         AddressBuilder::default()
//!             .id(idx)
//!             .locality("North", "Riverside")
//!             .coordinate(121.5 + (idx % 10) as f64 * 0.0005, 25. + (idx / 10) as f64 * 0.0005)
//!             .build()
//!     })
//!     .collect::<Result<Vec<_>, _>>()?;
//!
//! let engine = GroupingEngine::new(GroupingConfig::default(), Arc::new(Environment::new_silent()))?;
//! let result = engine.create_groups(&addresses, "North", "Riverside")?;
//!
//! assert_eq!(result.groups.len(), 2);
//! assert_eq!(result.grouped_count(), 70);
//! # Ok::<(), GenericError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/features/mod.rs"]
pub mod features;

#[cfg(test)]
#[path = "../tests/discovery/mod.rs"]
pub mod discovery;

pub mod algorithms;
pub mod construction;
pub mod engine;
pub mod models;
pub mod prelude;
pub mod routing;
pub mod utils;
