use crate::optimizer::RouteOptimizer;
use fleetroute_protocol::config::FleetAssumptions;
use fleetroute_protocol::protocol::OptimizationResult;
use fleetroute_protocol::waypoint::Waypoint;
use rayon::prelude::*;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::info;

#[derive(
    Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash, clap::ValueEnum,
)]
#[strum(serialize_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum SampleRegion {
    NewYork,
    Chicago,
    LosAngeles,
    Houston,
    Seattle,
}

impl SampleRegion {
    /// Depot coordinate the sample stops are scattered around.
    pub fn center(&self) -> (f64, f64) {
        match self {
            Self::NewYork => (40.7128, -74.0060),
            Self::Chicago => (41.8781, -87.6298),
            Self::LosAngeles => (34.0522, -118.2437),
            Self::Houston => (29.7604, -95.3698),
            Self::Seattle => (47.6062, -122.3321),
        }
    }

    /// Half-width of the scatter box in degrees, roughly metro sized.
    pub fn spread(&self) -> f64 {
        match self {
            Self::LosAngeles | Self::Houston => 0.25,
            _ => 0.15,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::NewYork => "New York",
            Self::Chicago => "Chicago",
            Self::LosAngeles => "Los Angeles",
            Self::Houston => "Houston",
            Self::Seattle => "Seattle",
        }
    }

    pub fn all() -> Vec<SampleRegion> {
        Self::iter().collect()
    }
}

#[derive(Debug, Clone)]
pub struct SampleSpec {
    pub region: SampleRegion,
    pub count: usize,
    pub stops: usize,
    pub seed: Option<u64>,
}

impl Default for SampleSpec {
    fn default() -> Self {
        Self {
            region: SampleRegion::NewYork,
            count: 5,
            stops: 6,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SampleRoute {
    pub name: String,
    pub waypoints: Vec<Waypoint>,
}

/// Generates demo routes scattered around a region's center.
/// A seeded spec always yields the same routes.
pub fn generate_sample_routes(spec: &SampleSpec) -> Vec<SampleRoute> {
    let mut rng = if let Some(s) = spec.seed {
        fastrand::Rng::with_seed(s)
    } else {
        fastrand::Rng::new()
    };

    let (lat0, lng0) = spec.region.center();
    let spread = spec.region.spread();
    let label = spec.region.label();
    let stops = spec.stops.max(2);

    (1..=spec.count)
        .map(|i| {
            let waypoints = (1..=stops)
                .map(|k| {
                    let lat = lat0 + (rng.f64() * 2.0 - 1.0) * spread;
                    let lng = lng0 + (rng.f64() * 2.0 - 1.0) * spread;
                    Waypoint::new(format!("{} Stop {}", label, k), lat, lng)
                })
                .collect();

            SampleRoute {
                name: format!("{} Route {}", label, i),
                waypoints,
            }
        })
        .collect()
}

/// Optimizes every route in parallel. Output order matches input order.
pub fn optimize_batch(
    routes: &[SampleRoute],
    assumptions: &FleetAssumptions,
) -> Vec<OptimizationResult> {
    let optimizer = RouteOptimizer::with_assumptions(assumptions.clone());

    let results: Vec<OptimizationResult> = routes
        .par_iter()
        .map(|r| optimizer.optimize(&r.waypoints))
        .collect();

    info!("Optimized {} sample routes", results.len());
    results
}
