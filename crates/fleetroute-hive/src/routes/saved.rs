use axum::{
    extract::{Path, Query, State},
    Json,
};
use fleetroute_core::api::optimize_waypoints;
use fleetroute_core::fingerprint::RouteFingerprint;
use fleetroute_core::protocol::{
    RegisterRouteRequest, RegisterRouteResponse, RouteSummary, StoredRoute,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

const DEFAULT_LIST_LIMIT: i64 = 50;
const MAX_LIST_LIMIT: i64 = 500;

#[derive(Deserialize)]
pub struct ListParams {
    pub limit: Option<i64>,
}

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRouteRequest>,
) -> AppResult<Json<RegisterRouteResponse>> {
    let result = optimize_waypoints(
        &payload.waypoints,
        payload.strict,
        payload.assumptions.as_ref(),
        &state.assumptions,
    )?;

    let fingerprint = RouteFingerprint::from_waypoints(&payload.waypoints);
    let (route_id, is_new) = state
        .store
        .insert_route(&payload.name, &fingerprint, &result)
        .await?;

    if is_new {
        info!(
            "🆕 Stored route {} '{}' (score {})",
            fingerprint.short(),
            payload.name,
            result.optimization_score
        );
    }

    Ok(Json(RegisterRouteResponse {
        route_id,
        is_new,
        result,
    }))
}

pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<RouteSummary>>> {
    let limit = params
        .limit
        .unwrap_or(DEFAULT_LIST_LIMIT)
        .clamp(1, MAX_LIST_LIMIT);
    Ok(Json(state.store.list_routes(limit).await?))
}

pub async fn get_one(
    State(state): State<Arc<AppState>>,
    Path(route_id): Path<String>,
) -> AppResult<Json<StoredRoute>> {
    state
        .store
        .get_route(&route_id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound)
}
