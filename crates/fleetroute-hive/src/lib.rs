pub mod db;
pub mod error;
pub mod routes;
pub mod state;
pub mod store;

use crate::state::AppState;
use axum::Router;
use fleetroute_core::config::FleetAssumptions;
use fleetroute_core::error::RouteResult;
use fleetroute_core::loader::load_assumptions;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Server-wide default assumptions. A file that cannot be read or parsed is
/// an error, the same as for the CLI.
pub fn load_fleet_assumptions(path: Option<&Path>) -> RouteResult<FleetAssumptions> {
    match path {
        Some(p) => {
            info!("⚖️  Loading fleet assumptions from {:?}", p);
            load_assumptions(p)
        }
        None => Ok(FleetAssumptions::default()),
    }
}

/// Full HTTP surface with middleware applied.
pub fn app(state: Arc<AppState>) -> Router {
    routes::system_routes()
        .merge(routes::optimize_routes())
        .merge(routes::saved_routes())
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
