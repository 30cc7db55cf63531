//! Assigns each address a structural category which tells how the address can be located on the ground.

#[cfg(test)]
#[path = "../../tests/unit/construction/classifier_test.rs"]
mod classifier_test;

use crate::models::{Address, AddressCategory};

/// Returns address category and a key shared by addresses located along the same street or within
/// the same area. Classification is pure, so repeated calls return the same value.
///
/// Priority order is street, area, neighborhood:
/// * a named street (or lane, alley) with a house number is street based, the key is the street name;
/// * a named area is area based, the key is the area name;
/// * anything else is neighborhood only, the key is built from the neighborhood number.
pub fn classify_address(address: &Address) -> (AddressCategory, String) {
    let thoroughfare =
        non_blank(&address.street).or_else(|| non_blank(&address.lane)).or_else(|| non_blank(&address.alley));

    if let (Some(street), Some(_)) = (thoroughfare, non_blank(&address.number)) {
        return (AddressCategory::Street, street.to_string());
    }

    if let Some(area) = non_blank(&address.area) {
        return (AddressCategory::Area, area.to_string());
    }

    (AddressCategory::Neighborhood, format!("neighborhood {}", address.neighborhood))
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|value| !value.is_empty())
}
