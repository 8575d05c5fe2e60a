use axum::{extract::State, Json};
use fleetroute_core::api::run_sample_job;
use fleetroute_core::fingerprint::RouteFingerprint;
use fleetroute_core::protocol::{SampleRouteEntry, SampleRoutesRequest, SampleRoutesResponse};
use fleetroute_core::samples::{SampleRegion, SampleSpec};
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

const MAX_SAMPLE_COUNT: usize = 50;
const MAX_SAMPLE_STOPS: usize = 100;

fn build_spec(req: &SampleRoutesRequest) -> AppResult<SampleSpec> {
    let defaults = SampleSpec::default();

    let region = match &req.region {
        Some(name) => SampleRegion::from_str(name)
            .map_err(|_| AppError::Validation(format!("Unknown region '{}'", name)))?,
        None => defaults.region,
    };

    let count = req.count.unwrap_or(defaults.count);
    if count > MAX_SAMPLE_COUNT {
        return Err(AppError::Validation(format!(
            "count must be at most {}",
            MAX_SAMPLE_COUNT
        )));
    }

    let stops = req.stops.unwrap_or(defaults.stops);
    if stops > MAX_SAMPLE_STOPS {
        return Err(AppError::Validation(format!(
            "stops must be at most {}",
            MAX_SAMPLE_STOPS
        )));
    }

    Ok(SampleSpec {
        region,
        count,
        stops,
        seed: req.seed,
    })
}

/// Generates demo routes, optimizes them and stores each one.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SampleRoutesRequest>,
) -> AppResult<Json<SampleRoutesResponse>> {
    let spec = build_spec(&payload)?;
    let assumptions = state.assumptions.clone();

    // Optimization fans out over rayon; keep it off the async workers.
    let batch = tokio::task::spawn_blocking(move || run_sample_job(&spec, &assumptions))
        .await
        .map_err(|e| AppError::Any(e.into()))?;

    let batch_id = uuid::Uuid::new_v4().to_string();
    let mut routes = Vec::with_capacity(batch.len());

    for (route, result) in &batch {
        let fingerprint = RouteFingerprint::from_waypoints(&route.waypoints);
        let (route_id, _) = state
            .store
            .insert_route(&route.name, &fingerprint, result)
            .await?;

        routes.push(SampleRouteEntry {
            route_id,
            name: route.name.clone(),
            optimization_score: result.optimization_score,
        });
    }

    info!("📦 Sample batch {} stored {} routes", batch_id, routes.len());
    Ok(Json(SampleRoutesResponse { batch_id, routes }))
}
