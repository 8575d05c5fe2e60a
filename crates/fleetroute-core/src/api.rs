use crate::error::RouteResult;
use crate::optimizer::{OptimizeParams, RouteOptimizer};
use crate::samples::{generate_sample_routes, optimize_batch, SampleRoute, SampleSpec};
use crate::validation::require_route_cardinality;
use fleetroute_protocol::config::{AssumptionOverrides, FleetAssumptions};
use fleetroute_protocol::protocol::{OptimizationResult, OptimizeRequest};
use fleetroute_protocol::waypoint::Waypoint;
use tracing::info;

/// Service: optimize a stop list submitted through a request boundary.
///
/// Unlike the bare optimizer this refuses lists with fewer than two stops,
/// and honors the request's strict flag. Overridden assumption fields are
/// laid over `defaults`; the rest keep the configured values.
pub fn optimize_waypoints(
    waypoints: &[Waypoint],
    strict: bool,
    overrides: Option<&AssumptionOverrides>,
    defaults: &FleetAssumptions,
) -> RouteResult<OptimizationResult> {
    require_route_cardinality(waypoints)?;

    let params = OptimizeParams::builder()
        .assumptions(
            overrides
                .map(|o| o.apply_to(defaults))
                .unwrap_or_else(|| defaults.clone()),
        )
        .strict(strict)
        .build();

    RouteOptimizer::new(params).run(waypoints)
}

pub fn optimize_request(
    req: &OptimizeRequest,
    defaults: &FleetAssumptions,
) -> RouteResult<OptimizationResult> {
    optimize_waypoints(
        &req.waypoints,
        req.strict,
        req.assumptions.as_ref(),
        defaults,
    )
}

/// Service: the sample-route maintenance job. Generates routes for `spec`
/// and optimizes each one. Persisting them is left to the caller.
pub fn run_sample_job(
    spec: &SampleSpec,
    assumptions: &FleetAssumptions,
) -> Vec<(SampleRoute, OptimizationResult)> {
    info!(
        "Generating {} sample routes ({} stops) around {}",
        spec.count,
        spec.stops,
        spec.region.label()
    );

    let routes = generate_sample_routes(spec);
    let results = optimize_batch(&routes, assumptions);
    routes.into_iter().zip(results).collect()
}
