use crate::reports;
use clap::Args;
use fleetroute_core::api::optimize_waypoints;
use fleetroute_core::config::FleetAssumptions;
use fleetroute_core::error::RouteResult;
use fleetroute_core::loader::load_waypoints;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct OptimizeArgs {
    /// Stop list as JSON (array or {"waypoints": [...]}) or CSV (name,lat,lng)
    #[arg(short, long)]
    pub input: String,

    /// Reject coordinates outside lat [-90, 90] / lng [-180, 180]
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// Print the result as JSON instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[command(flatten)]
    pub assumptions: FleetAssumptions,
}

pub fn run(args: OptimizeArgs, assumptions: &FleetAssumptions) -> RouteResult<()> {
    let waypoints = load_waypoints(&args.input)?;

    // File and flag values are already merged into `assumptions`.
    let result = optimize_waypoints(&waypoints, args.strict, None, assumptions)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    info!(
        "🚚 Optimized {} stops: {:.2} mi -> {:.2} mi",
        waypoints.len(),
        result.baseline_distance,
        result.total_distance
    );
    reports::print_route_table(&result);
    reports::print_summary(&result);
    Ok(())
}
