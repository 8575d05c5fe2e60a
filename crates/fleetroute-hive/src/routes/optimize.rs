use axum::{extract::State, Json};
use fleetroute_core::api::optimize_request;
use fleetroute_core::protocol::{OptimizationResult, OptimizeRequest};
use std::sync::Arc;

use crate::error::AppResult;
use crate::state::AppState;

/// Stateless: optimizes the submitted stops and returns the result.
pub async fn optimize_route(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<OptimizeRequest>,
) -> AppResult<Json<OptimizationResult>> {
    let result = optimize_request(&payload, &state.assumptions)?;
    Ok(Json(result))
}
