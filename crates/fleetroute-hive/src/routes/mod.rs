pub mod optimize;
pub mod samples;
pub mod saved;
pub mod system;

use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

pub fn system_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health))
}

pub fn optimize_routes() -> Router<Arc<AppState>> {
    Router::new().route("/optimize-route", post(optimize::optimize_route))
}

pub fn saved_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/routes", post(saved::register).get(saved::list))
        .route("/routes/samples", post(samples::generate))
        .route("/routes/{route_id}", get(saved::get_one))
}
