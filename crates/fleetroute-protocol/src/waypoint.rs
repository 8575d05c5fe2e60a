use serde::{Deserialize, Serialize};

/// A named stop a route must visit. Coordinates are decimal degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

impl Waypoint {
    pub fn new(name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lng,
        }
    }
}

/// A waypoint placed on an optimized path. `sequence` is 1-based.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizedWaypoint {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub sequence: u32,
}

impl OptimizedWaypoint {
    pub fn from_waypoint(wp: &Waypoint, sequence: u32) -> Self {
        Self {
            name: wp.name.clone(),
            lat: wp.lat,
            lng: wp.lng,
            sequence,
        }
    }

    pub fn to_waypoint(&self) -> Waypoint {
        Waypoint::new(self.name.clone(), self.lat, self.lng)
    }
}

/// Either a bare list of waypoints or an object wrapping one.
/// Both shapes show up in route exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WaypointDocument {
    List(Vec<Waypoint>),
    Wrapped { waypoints: Vec<Waypoint> },
}

impl WaypointDocument {
    pub fn into_waypoints(self) -> Vec<Waypoint> {
        match self {
            Self::List(w) => w,
            Self::Wrapped { waypoints } => waypoints,
        }
    }
}
