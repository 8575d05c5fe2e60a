use crate::consts::EARTH_RADIUS_MILES;
use fleetroute_protocol::waypoint::Waypoint;
use itertools::Itertools;
use std::f64::consts::PI;

/// Great-circle distance in miles between two lat/lng pairs (haversine).
///
/// Degrees are converted with `π/180`, not `to_radians`; stored route
/// figures depend on the exact rounding of this form.
#[inline]
pub fn haversine_miles(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1) * PI / 180.0;
    let d_lon = (lon2 - lon1) * PI / 180.0;

    let a = (d_lat / 2.0).sin() * (d_lat / 2.0).sin()
        + (lat1 * PI / 180.0).cos()
            * (lat2 * PI / 180.0).cos()
            * (d_lon / 2.0).sin()
            * (d_lon / 2.0).sin();
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}

#[inline]
pub fn distance(a: &Waypoint, b: &Waypoint) -> f64 {
    haversine_miles(a.lat, a.lng, b.lat, b.lng)
}

/// Sum of consecutive leg distances along `path`.
pub fn path_length<'a, I>(path: I) -> f64
where
    I: IntoIterator<Item = &'a Waypoint>,
{
    path.into_iter()
        .tuple_windows()
        .map(|(a, b)| distance(a, b))
        .sum()
}

/// Rounds to `places` decimal places, half away from zero.
#[inline]
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
