#[cfg(test)]
#[path = "../../tests/unit/engine/batch_test.rs"]
mod batch_test;

use super::GroupingEngine;
use crate::models::{Address, GroupingConfig, GroupingError, GroupingResult};
use crate::utils::{Environment, parallel_collect};
use std::sync::Arc;

/// Addresses of one village to be grouped.
#[derive(Clone, Debug)]
pub struct VillageInput<'a> {
    /// District name.
    pub district: String,
    /// Village name.
    pub village: String,
    /// Village addresses.
    pub addresses: &'a [Address],
}

/// Runs one grouping per village in parallel. Results are returned in input order.
/// Fails if configuration is invalid or any run fails.
pub fn create_groups_batch<'a>(
    inputs: &[VillageInput<'a>],
    config: GroupingConfig,
    environment: Arc<Environment>,
) -> Result<Vec<GroupingResult<'a>>, GroupingError> {
    let engine = GroupingEngine::new(config, environment.clone())?;

    environment.log(format!("grouping {} villages", inputs.len()).as_str());

    parallel_collect(inputs, |input| engine.create_groups(input.addresses, &input.district, &input.village))
        .into_iter()
        .collect()
}
