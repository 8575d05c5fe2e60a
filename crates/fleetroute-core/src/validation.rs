use crate::consts::{LAT_LIMIT, LNG_LIMIT, MIN_REQUEST_WAYPOINTS};
use crate::error::{RouteError, RouteResult};
use fleetroute_protocol::waypoint::Waypoint;

/// Rejects the first waypoint whose coordinates are non-finite or outside
/// `[-90, 90]` / `[-180, 180]`.
pub fn validate_waypoints(waypoints: &[Waypoint]) -> RouteResult<()> {
    for (index, wp) in waypoints.iter().enumerate() {
        if !is_valid_coordinate(wp.lat, wp.lng) {
            return Err(RouteError::CoordinateOutOfRange {
                index,
                name: wp.name.clone(),
                lat: wp.lat,
                lng: wp.lng,
            });
        }
    }
    Ok(())
}

#[inline]
pub fn is_valid_coordinate(lat: f64, lng: f64) -> bool {
    lat.is_finite()
        && lng.is_finite()
        && (-LAT_LIMIT..=LAT_LIMIT).contains(&lat)
        && (-LNG_LIMIT..=LNG_LIMIT).contains(&lng)
}

/// Boundary check used by request handlers: a route needs something to compare.
pub fn require_route_cardinality(waypoints: &[Waypoint]) -> RouteResult<()> {
    if waypoints.len() < MIN_REQUEST_WAYPOINTS {
        return Err(RouteError::InvalidCardinality {
            required: MIN_REQUEST_WAYPOINTS,
            actual: waypoints.len(),
        });
    }
    Ok(())
}
