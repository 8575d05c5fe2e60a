use crate::config::AssumptionOverrides;
use crate::waypoint::{OptimizedWaypoint, Waypoint};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    pub optimized_waypoints: Vec<OptimizedWaypoint>,
    /// Miles along the optimized path
    pub total_distance: f64,
    /// Minutes at the assumed average speed
    pub estimated_duration: f64,
    pub optimization_score: f64,
    /// Miles along the stops in submitted order
    pub baseline_distance: f64,
    /// USD
    pub fuel_savings: f64,
    /// Minutes
    pub time_savings: f64,
    /// Miles. Negative when the reordering is longer than the submitted order.
    pub distance_saved: f64,
}

impl OptimizationResult {
    /// False when overflowing coordinates turned any figure into NaN or infinity.
    pub fn is_finite(&self) -> bool {
        [
            self.total_distance,
            self.estimated_duration,
            self.optimization_score,
            self.baseline_distance,
            self.fuel_savings,
            self.time_savings,
            self.distance_saved,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeRequest {
    pub waypoints: Vec<Waypoint>,
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub assumptions: Option<AssumptionOverrides>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRouteRequest {
    pub name: String,
    pub waypoints: Vec<Waypoint>,
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub assumptions: Option<AssumptionOverrides>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRouteResponse {
    pub route_id: String,
    pub is_new: bool,
    pub result: OptimizationResult,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    pub route_id: String,
    pub name: String,
    pub total_distance: f64,
    pub optimization_score: f64,
    pub created_at: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StoredRoute {
    pub route_id: String,
    pub name: String,
    pub total_distance: f64,
    pub baseline_distance: f64,
    pub estimated_duration: f64,
    pub optimization_score: f64,
    pub fuel_savings: f64,
    pub created_at: String,
    pub waypoints: Vec<OptimizedWaypoint>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct SampleRoutesRequest {
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub count: Option<usize>,
    #[serde(default)]
    pub stops: Option<usize>,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SampleRouteEntry {
    pub route_id: String,
    pub name: String,
    pub optimization_score: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SampleRoutesResponse {
    pub batch_id: String,
    pub routes: Vec<SampleRouteEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_serializes_camel_case() {
        let json = serde_json::to_value(OptimizationResult::default()).unwrap();
        assert!(json.get("optimizedWaypoints").is_some());
        assert!(json.get("totalDistance").is_some());
        assert!(json.get("estimatedDuration").is_some());
        assert!(json.get("optimizationScore").is_some());
        assert!(json.get("distanceSaved").is_some());
    }

    #[test]
    fn optimize_request_defaults() {
        let req: OptimizeRequest =
            serde_json::from_str(r#"{"waypoints":[{"name":"A","lat":1.0,"lng":2.0}]}"#).unwrap();
        assert_eq!(req.waypoints.len(), 1);
        assert!(!req.strict);
        assert!(req.assumptions.is_none());
    }

    #[test]
    fn nan_figures_are_not_finite() {
        assert!(OptimizationResult::default().is_finite());
        let broken = OptimizationResult {
            total_distance: f64::NAN,
            ..Default::default()
        };
        assert!(!broken.is_finite());
    }
}
