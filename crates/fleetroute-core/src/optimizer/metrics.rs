use crate::consts::{SCORE_CEILING, SCORE_FLOOR, SCORE_TRIVIAL};
use fleetroute_protocol::config::FleetAssumptions;

/// Unrounded figures describing an optimized path against the submitted order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RouteMetrics {
    pub total_distance: f64,
    pub baseline_distance: f64,
    pub estimated_duration: f64,
    pub baseline_duration: f64,
    pub improvement_pct: f64,
    pub optimization_score: f64,
    pub fuel_savings: f64,
    pub time_savings: f64,
    pub distance_saved: f64,
}

impl RouteMetrics {
    /// Metrics for a reorderable route (three or more stops).
    pub fn compute(total: f64, baseline: f64, assumptions: &FleetAssumptions) -> Self {
        let estimated_duration = assumptions.minutes_for(total).round();
        let baseline_duration = assumptions.minutes_for(baseline).round();
        let distance_saved = baseline - total;

        let improvement_pct = improvement_pct(baseline, total);

        Self {
            total_distance: total,
            baseline_distance: baseline,
            estimated_duration,
            baseline_duration,
            improvement_pct,
            optimization_score: optimization_score(improvement_pct),
            fuel_savings: assumptions.fuel_cost_for(distance_saved),
            time_savings: (baseline_duration - estimated_duration).max(0.0),
            distance_saved,
        }
    }

    /// Metrics for one or two stops, where no reordering is possible.
    pub fn trivial(distance: f64, assumptions: &FleetAssumptions) -> Self {
        let duration = assumptions.minutes_for(distance).round();
        Self {
            total_distance: distance,
            baseline_distance: distance,
            estimated_duration: duration,
            baseline_duration: duration,
            improvement_pct: 0.0,
            optimization_score: SCORE_TRIVIAL,
            fuel_savings: 0.0,
            time_savings: 0.0,
            distance_saved: 0.0,
        }
    }
}

/// Percent shorter than the baseline; 0 for a zero-length (or NaN) baseline.
pub fn improvement_pct(baseline: f64, total: f64) -> f64 {
    if baseline > 0.0 {
        (baseline - total) / baseline * 100.0
    } else {
        0.0
    }
}

/// Maps an improvement percentage into the reported score band.
pub fn optimization_score(improvement_pct: f64) -> f64 {
    (SCORE_FLOOR + improvement_pct).clamp(SCORE_FLOOR, SCORE_CEILING)
}
