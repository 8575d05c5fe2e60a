#![allow(dead_code)]

use fleetroute_core::waypoint::{OptimizedWaypoint, Waypoint};

pub fn wp(name: &str, lat: f64, lng: f64) -> Waypoint {
    Waypoint::new(name, lat, lng)
}

/// Four stops on a meridian submitted as A -> C -> B -> D.
pub fn crossing_route() -> Vec<Waypoint> {
    vec![
        wp("A", 40.70, -74.0),
        wp("C", 40.80, -74.0),
        wp("B", 40.75, -74.0),
        wp("D", 40.85, -74.0),
    ]
}

/// Three stops already in travel order.
pub fn collinear_route() -> Vec<Waypoint> {
    vec![
        wp("Battery Park", 40.7033, -74.0170),
        wp("Union Square", 40.7359, -73.9911),
        wp("Central Park", 40.7829, -73.9654),
    ]
}

pub fn names(path: &[OptimizedWaypoint]) -> Vec<&str> {
    path.iter().map(|w| w.name.as_str()).collect()
}

/// Sort key that treats waypoints as a multiset of (name, lat bits, lng bits).
pub fn multiset_key(w: &Waypoint) -> (String, u64, u64) {
    (w.name.clone(), w.lat.to_bits(), w.lng.to_bits())
}
