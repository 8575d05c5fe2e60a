// Re-export types from the protocol crate so they are accessible via fleetroute_core::*
pub use fleetroute_protocol::config;
pub use fleetroute_protocol::fingerprint;
pub use fleetroute_protocol::protocol;
pub use fleetroute_protocol::waypoint;

// Internal Modules
pub mod api;
pub mod consts;
pub mod error;
pub mod geo;
pub mod loader;
pub mod optimizer;
pub mod samples;
pub mod validation;
