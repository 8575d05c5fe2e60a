use super::metrics::RouteMetrics;
use super::nearest::nearest_neighbor_order;
use crate::error::RouteResult;
use crate::geo::{distance, path_length, round_to};
use crate::validation::validate_waypoints;
use fleetroute_protocol::config::FleetAssumptions;
use fleetroute_protocol::protocol::OptimizationResult;
use fleetroute_protocol::waypoint::{OptimizedWaypoint, Waypoint};
use tracing::debug;
use typed_builder::TypedBuilder;

#[derive(TypedBuilder, Debug, Clone, Default)]
pub struct OptimizeParams {
    #[builder(default)]
    pub assumptions: FleetAssumptions,
    /// Reject out-of-range coordinates instead of passing them through.
    #[builder(default = false)]
    pub strict: bool,
}

/// Nearest-neighbor route optimizer with fixed start and end anchors.
///
/// Stateless apart from its assumptions; one instance can serve any number
/// of threads.
#[derive(Debug, Clone, Default)]
pub struct RouteOptimizer {
    params: OptimizeParams,
}

impl RouteOptimizer {
    pub fn new(params: OptimizeParams) -> Self {
        Self { params }
    }

    pub fn with_assumptions(assumptions: FleetAssumptions) -> Self {
        Self::new(OptimizeParams::builder().assumptions(assumptions).build())
    }

    /// Runs strict validation when enabled, then optimizes.
    pub fn run(&self, waypoints: &[Waypoint]) -> RouteResult<OptimizationResult> {
        if self.params.strict {
            validate_waypoints(waypoints)?;
        }
        Ok(self.optimize(waypoints))
    }

    /// Never fails: malformed coordinates flow through as numbers.
    pub fn optimize(&self, waypoints: &[Waypoint]) -> OptimizationResult {
        let assumptions = &self.params.assumptions;

        match waypoints.len() {
            0 => OptimizationResult::default(),
            1 | 2 => {
                let direct = if waypoints.len() == 2 {
                    distance(&waypoints[0], &waypoints[1])
                } else {
                    0.0
                };
                let metrics = RouteMetrics::trivial(direct, assumptions);
                build_result(waypoints.iter(), &metrics)
            }
            n => {
                let order = nearest_neighbor_order(waypoints);
                let path: Vec<&Waypoint> = order.iter().map(|&i| &waypoints[i]).collect();

                let total = path_length(path.iter().copied());
                let baseline = path_length(waypoints);
                let metrics = RouteMetrics::compute(total, baseline, assumptions);

                debug!(
                    "Optimized {} stops: {:.2} -> {:.2} mi (score {:.2})",
                    n, baseline, total, metrics.optimization_score
                );

                build_result(path.into_iter(), &metrics)
            }
        }
    }
}

fn build_result<'a, I>(path: I, m: &RouteMetrics) -> OptimizationResult
where
    I: Iterator<Item = &'a Waypoint>,
{
    let optimized_waypoints = path
        .enumerate()
        .map(|(i, wp)| OptimizedWaypoint::from_waypoint(wp, i as u32 + 1))
        .collect();

    OptimizationResult {
        optimized_waypoints,
        total_distance: round_to(m.total_distance, 2),
        estimated_duration: m.estimated_duration,
        optimization_score: round_to(m.optimization_score, 2),
        baseline_distance: round_to(m.baseline_distance, 2),
        fuel_savings: round_to(m.fuel_savings, 2),
        time_savings: m.time_savings,
        distance_saved: round_to(m.distance_saved, 2),
    }
}

/// Optimizes with the default fleet assumptions.
pub fn optimize(waypoints: &[Waypoint]) -> OptimizationResult {
    RouteOptimizer::default().optimize(waypoints)
}

pub fn optimize_with(waypoints: &[Waypoint], assumptions: &FleetAssumptions) -> OptimizationResult {
    RouteOptimizer::with_assumptions(assumptions.clone()).optimize(waypoints)
}
