use crate::waypoint::Waypoint;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Stable identity of an ordered stop list.
///
/// Two submissions with the same names and coordinates in the same order
/// hash to the same value, which lets the store deduplicate routes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteFingerprint {
    pub hash: String,
}

#[derive(Serialize)]
struct CanonicalStop<'a> {
    name: &'a str,
    lat: u64,
    lng: u64,
}

impl RouteFingerprint {
    pub fn from_waypoints(waypoints: &[Waypoint]) -> Self {
        let mut hasher = Sha256::new();

        // Hash raw bit patterns so -0.0/0.0 and float formatting never collide.
        let canonical: Vec<CanonicalStop<'_>> = waypoints
            .iter()
            .map(|w| CanonicalStop {
                name: &w.name,
                lat: w.lat.to_bits(),
                lng: w.lng.to_bits(),
            })
            .collect();

        // Serializing plain strings and integers cannot fail.
        let json = serde_json::to_string(&canonical).unwrap_or_default();
        hasher.update(json.as_bytes());

        Self {
            hash: hex::encode(hasher.finalize()),
        }
    }

    pub fn short(&self) -> &str {
        &self.hash[..8.min(self.hash.len())]
    }
}
