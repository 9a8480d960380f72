//! Great-circle geometry for urban-scale case pools.
//!
//! Distances are straight-line haversine estimates in meters. That is
//! accurate enough at city scale (~50 km), where candidate ranking only
//! needs an ordering that is monotonic with true distance.

use serde::{Deserialize, Serialize};

/// Mean earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A coordinate pair in degrees.
///
/// The core only ever holds valid coordinates; records without them are
/// filtered out at the collaborator boundary before a [`LatLng`] is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Haversine distance between two coordinates in meters.
pub fn haversine_m(from: LatLng, to: LatLng) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_M * c
}

/// Distance in meters from `center` to every point, in input order.
pub fn distances_from(center: LatLng, points: &[LatLng]) -> Vec<f64> {
    points
        .iter()
        .map(|point| haversine_m(center, *point))
        .collect()
}

/// Arithmetic mean of a set of coordinates.
///
/// A plain mean is a good enough centroid at city scale. Returns `None`
/// for an empty set so callers can fall back to a configured center.
pub fn center_of(points: &[LatLng]) -> Option<LatLng> {
    if points.is_empty() {
        return None;
    }

    let count = points.len() as f64;
    let lat = points.iter().map(|p| p.lat).sum::<f64>() / count;
    let lng = points.iter().map(|p| p.lng).sum::<f64>() / count;

    Some(LatLng::new(lat, lng))
}
