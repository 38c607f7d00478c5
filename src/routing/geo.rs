//! Distance and travel time
//!
//! Great-circle distance over a spherical Earth and a constant-speed travel
//! estimate. Not a traffic model.

use crate::types::Coordinate;
use crate::utils::round_to_tenth;

/// Mean Earth radius in kilometres
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Assumed average city speed
pub const AVERAGE_SPEED_KMH: f64 = 30.0;

/// Haversine distance in kilometres (unrounded)
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lng = (to.lng - from.lng).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Haversine distance rounded to one decimal, as reported to callers
pub fn distance_km(from: Coordinate, to: Coordinate) -> f64 {
    round_to_tenth(haversine_km(from, to))
}

/// Whole minutes to cover `distance_km` at the assumed speed, rounded up
pub fn travel_time_minutes(distance_km: f64) -> u32 {
    (distance_km / AVERAGE_SPEED_KMH * 60.0).ceil() as u32
}
