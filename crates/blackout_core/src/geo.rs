//! Geographic distance utilities.
//!
//! Everything in the engine that touches the map reduces to one primitive:
//! great-circle distance between two lat/lon pairs. Proximity bonuses and
//! exploration geofences both go through here.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters (IUGG value, same constant the host app uses).
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A point in signed decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        distance_meters(self.lat, self.lon, other.lat, other.lon)
    }
}

impl From<[f64; 2]> for GeoPoint {
    /// Host snapshots carry positions as `[lat, lng]` arrays.
    fn from(pair: [f64; 2]) -> Self {
        Self { lat: pair[0], lon: pair[1] }
    }
}

/// Haversine great-circle distance in meters.
///
/// Inputs are signed decimal degrees and are not range-checked; callers are
/// trusted. Non-finite input propagates as `NaN` rather than erroring, which
/// matches how the rest of the engine treats geometry: a `NaN` distance fails
/// every `<=` comparison, so proximity bonuses and geofences simply do not
/// trigger on garbage coordinates.
pub fn distance_meters(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let a = (d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}
