use crate::store::Store;
use fleetroute_core::config::FleetAssumptions;
use sqlx::{Pool, Sqlite};

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    /// Used when a request carries no assumptions of its own.
    pub assumptions: FleetAssumptions,
}

impl AppState {
    pub fn new(db: Pool<Sqlite>, assumptions: FleetAssumptions) -> Self {
        Self {
            store: Store::new(db),
            assumptions,
        }
    }
}
