pub mod config;
pub mod fingerprint;
pub mod protocol;
pub mod waypoint;
