#[cfg(test)]
#[path = "../../tests/unit/models/address_test.rs"]
mod address_test;

use crate::algorithms::geometry::Coordinate;
use crate::utils::{Float, GenericError, GenericResult};
use serde::{Deserialize, Serialize};

/// An address identifier type.
pub type AddressId = u64;

/// Represents one physical housing unit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Address {
    /// Unique identifier.
    pub id: AddressId,
    /// Administrative district.
    pub district: String,
    /// Village within the district.
    pub village: String,
    /// Neighborhood number within the village, starts from 1.
    pub neighborhood: u32,
    /// Street name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    /// Area (locality) name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    /// Lane.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lane: Option<String>,
    /// Alley.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alley: Option<String>,
    /// House number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// Full address string.
    pub full_address: String,
    /// Longitude (WGS84), missing for unmatched addresses.
    pub lng: Option<Float>,
    /// Latitude (WGS84), missing for unmatched addresses.
    pub lat: Option<Float>,
}

impl Address {
    /// Returns coordinate if both components are present and within WGS84 ranges.
    pub fn coordinate(&self) -> Option<Coordinate> {
        match (self.lng, self.lat) {
            (Some(lng), Some(lat)) => Some(Coordinate::new(lng, lat)).filter(|coordinate| coordinate.is_valid()),
            _ => None,
        }
    }

    /// Returns true if address has a valid coordinate.
    pub fn has_valid_coordinate(&self) -> bool {
        self.coordinate().is_some()
    }
}

/// Provides a way to build an [Address] using the builder pattern.
#[derive(Debug)]
pub struct AddressBuilder(Address);

impl Default for AddressBuilder {
    fn default() -> Self {
        Self(Address {
            id: 0,
            district: String::default(),
            village: String::default(),
            neighborhood: 1,
            street: None,
            area: None,
            lane: None,
            alley: None,
            number: None,
            full_address: String::default(),
            lng: None,
            lat: None,
        })
    }
}

impl AddressBuilder {
    /// Sets address id.
    pub fn id(mut self, id: AddressId) -> Self {
        self.0.id = id;
        self
    }

    /// Sets district and village.
    pub fn locality(mut self, district: &str, village: &str) -> Self {
        self.0.district = district.to_string();
        self.0.village = village.to_string();
        self
    }

    /// Sets neighborhood number.
    pub fn neighborhood(mut self, neighborhood: u32) -> Self {
        self.0.neighborhood = neighborhood;
        self
    }

    /// Sets street name.
    pub fn street(mut self, street: &str) -> Self {
        self.0.street = Some(street.to_string());
        self
    }

    /// Sets area name.
    pub fn area(mut self, area: &str) -> Self {
        self.0.area = Some(area.to_string());
        self
    }

    /// Sets lane.
    pub fn lane(mut self, lane: &str) -> Self {
        self.0.lane = Some(lane.to_string());
        self
    }

    /// Sets alley.
    pub fn alley(mut self, alley: &str) -> Self {
        self.0.alley = Some(alley.to_string());
        self
    }

    /// Sets house number.
    pub fn number(mut self, number: &str) -> Self {
        self.0.number = Some(number.to_string());
        self
    }

    /// Sets full address string.
    pub fn full_address(mut self, full_address: &str) -> Self {
        self.0.full_address = full_address.to_string();
        self
    }

    /// Sets coordinate.
    pub fn coordinate(mut self, lng: Float, lat: Float) -> Self {
        self.0.lng = Some(lng);
        self.0.lat = Some(lat);
        self
    }

    /// Builds an [Address]. Fails if neighborhood number is zero.
    pub fn build(self) -> GenericResult<Address> {
        if self.0.neighborhood == 0 {
            return Err(GenericError::from(format!("address '{}' has neighborhood number 0", self.0.id)));
        }

        Ok(self.0)
    }
}

/// Specifies how an address can be located on the ground.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AddressCategory {
    /// Has a named street (or lane, alley) and a house number.
    Street,
    /// Has an area (locality) name but no complete street address.
    Area,
    /// Known only by its neighborhood number.
    Neighborhood,
}

impl std::fmt::Display for AddressCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AddressCategory::Street => "street",
            AddressCategory::Area => "area",
            AddressCategory::Neighborhood => "neighborhood",
        };

        write!(f, "{name}")
    }
}
