#[cfg(test)]
#[path = "../../../tests/unit/algorithms/geometry/coordinate_test.rs"]
mod coordinate_test;

use super::Point;
use crate::utils::Float;
use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters.
pub const EARTH_RADIUS: Float = 6_371_000.;

/// Approximate length of one degree of latitude in meters.
pub const METERS_PER_DEGREE: Float = 111_320.;

/// Represents a WGS84 coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Longitude in degrees.
    pub lng: Float,
    /// Latitude in degrees.
    pub lat: Float,
}

impl Coordinate {
    /// Creates a new instance of `Coordinate`.
    pub fn new(lng: Float, lat: Float) -> Self {
        Self { lng, lat }
    }

    /// Returns true if both components are finite and within WGS84 ranges.
    pub fn is_valid(&self) -> bool {
        self.lng.is_finite()
            && self.lat.is_finite()
            && (-180. ..=180.).contains(&self.lng)
            && (-90. ..=90.).contains(&self.lat)
    }
}

/// Computes great-circle distance in meters using the haversine formula.
pub fn haversine_distance(a: &Coordinate, b: &Coordinate) -> Float {
    let (lat1, lat2) = (a.lat.to_radians(), b.lat.to_radians());
    let delta_lat = lat2 - lat1;
    let delta_lng = (b.lng - a.lng).to_radians();

    let h = (delta_lat / 2.).sin().powi(2) + lat1.cos() * lat2.cos() * (delta_lng / 2.).sin().powi(2);

    2. * EARTH_RADIUS * h.sqrt().min(1.).asin()
}

/// Computes planar distance in meters, correcting longitude by the given reference latitude.
/// Accurate enough at city block scale.
pub fn planar_distance(a: &Coordinate, b: &Coordinate, reference_lat: Float) -> Float {
    let projection = LocalProjection::new(Coordinate::new(0., reference_lat));

    projection.project(a).distance_to_point(&projection.project(b))
}

/// Computes an arithmetic mean of coordinates. Returns `None` if there are no coordinates.
pub fn centroid<'a>(coordinates: impl IntoIterator<Item = &'a Coordinate>) -> Option<Coordinate> {
    let (count, lng, lat) = coordinates.into_iter().fold((0_usize, 0., 0.), |(count, lng, lat), coordinate| {
        (count + 1, lng + coordinate.lng, lat + coordinate.lat)
    });

    if count == 0 { None } else { Some(Coordinate::new(lng / count as Float, lat / count as Float)) }
}

/// Returns indices of coordinates which are within `radius` meters from the `center`.
pub fn within_radius(center: &Coordinate, coordinates: &[Coordinate], radius: Float) -> Vec<usize> {
    coordinates
        .iter()
        .enumerate()
        .filter(|(_, coordinate)| haversine_distance(center, coordinate) <= radius)
        .map(|(idx, _)| idx)
        .collect()
}

/// Computes compactness: the mean great-circle distance from the centroid, in meters.
pub fn compactness(coordinates: &[Coordinate]) -> Float {
    if coordinates.len() < 2 {
        return 0.;
    }

    let Some(center) = centroid(coordinates) else { return 0. };
    let total: Float = coordinates.iter().map(|coordinate| haversine_distance(&center, coordinate)).sum();

    total / coordinates.len() as Float
}

/// A rectangular area defined by min/max longitude and latitude.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Minimum longitude.
    pub min_lng: Float,
    /// Minimum latitude.
    pub min_lat: Float,
    /// Maximum longitude.
    pub max_lng: Float,
    /// Maximum latitude.
    pub max_lat: Float,
}

impl BoundingBox {
    /// Creates a bounding box which covers all given coordinates. Returns `None` if there are no coordinates.
    pub fn from_coordinates<'a>(coordinates: impl IntoIterator<Item = &'a Coordinate>) -> Option<Self> {
        coordinates.into_iter().fold(None, |acc: Option<BoundingBox>, c| {
            Some(match acc {
                Some(bbox) => BoundingBox {
                    min_lng: bbox.min_lng.min(c.lng),
                    min_lat: bbox.min_lat.min(c.lat),
                    max_lng: bbox.max_lng.max(c.lng),
                    max_lat: bbox.max_lat.max(c.lat),
                },
                None => BoundingBox { min_lng: c.lng, min_lat: c.lat, max_lng: c.lng, max_lat: c.lat },
            })
        })
    }

    /// Checks whether the coordinate is inside the box, borders included.
    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        (self.min_lng..=self.max_lng).contains(&coordinate.lng)
            && (self.min_lat..=self.max_lat).contains(&coordinate.lat)
    }

    /// Returns center of the box.
    pub fn center(&self) -> Coordinate {
        Coordinate::new((self.min_lng + self.max_lng) / 2., (self.min_lat + self.max_lat) / 2.)
    }
}

/// Projects WGS84 coordinates to a local plane expressed in meters around a reference coordinate.
/// Longitude is scaled by the cosine of the reference latitude to avoid distortion bias.
#[derive(Clone, Debug)]
pub struct LocalProjection {
    origin: Coordinate,
    meters_per_lng: Float,
}

impl LocalProjection {
    /// Creates a new projection around the `origin`.
    pub fn new(origin: Coordinate) -> Self {
        Self { origin, meters_per_lng: METERS_PER_DEGREE * origin.lat.to_radians().cos() }
    }

    /// Creates a projection around the centroid of the coordinates, falls back to (0, 0) origin.
    pub fn from_coordinates(coordinates: &[Coordinate]) -> Self {
        Self::new(centroid(coordinates).unwrap_or(Coordinate::new(0., 0.)))
    }

    /// Projects coordinate to the local plane.
    pub fn project(&self, coordinate: &Coordinate) -> Point {
        Point::new(
            (coordinate.lng - self.origin.lng) * self.meters_per_lng,
            (coordinate.lat - self.origin.lat) * METERS_PER_DEGREE,
        )
    }
}
