use crate::algorithms::geometry::Coordinate;
use crate::helpers::models::*;
use crate::models::*;
use crate::utils::Float;
use proptest::prelude::*;

prop_compose! {
    /// Generates a located or an unmatched address around the base coordinate within ~2km.
    fn generate_address(id: AddressId)
    (
        x in 0_u32..2000,
        y in 0_u32..2000,
        is_unmatched in prop::bool::weighted(0.1),
        has_street in prop::bool::weighted(0.3),
        street in 0_u32..5,
        neighborhood in 1_u32..5,
    ) -> Address {
        let mut address = if is_unmatched {
            create_unmatched_address(id)
        } else {
            create_address_at(id, x as Float, y as Float)
        };

        address.neighborhood = neighborhood;

        if has_street {
            address.street = Some(format!("Street {street}"));
            address.number = Some(id.to_string());
        }

        address
    }
}

fn generate_addresses(max_size: usize) -> impl Strategy<Value = Vec<Address>> {
    (0..max_size).prop_flat_map(|size| {
        (0..size).map(|idx| generate_address(idx as AddressId + 1)).collect::<Vec<_>>()
    })
}

fn generate_coordinates(max_size: usize) -> impl Strategy<Value = Vec<Coordinate>> {
    prop::collection::vec((0_u32..500, 0_u32..500), 0..max_size).prop_map(|points| {
        points
            .into_iter()
            .enumerate()
            .filter_map(|(idx, (x, y))| create_address_at(idx as AddressId, x as Float, y as Float).coordinate())
            .collect()
    })
}
