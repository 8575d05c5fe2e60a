/// Mean Earth radius in statute miles used by every distance computation.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Score floor for a route with at least one reorderable stop.
pub const SCORE_FLOOR: f64 = 70.0;

/// Score ceiling for a route with at least one reorderable stop.
pub const SCORE_CEILING: f64 = 95.0;

/// Score reported when there is nothing to reorder (one or two stops).
pub const SCORE_TRIVIAL: f64 = 100.0;

/// Fewest waypoints a request boundary accepts.
pub const MIN_REQUEST_WAYPOINTS: usize = 2;

pub const LAT_LIMIT: f64 = 90.0;
pub const LNG_LIMIT: f64 = 180.0;
