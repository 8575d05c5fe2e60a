use crate::reports;
use clap::Args;
use fleetroute_core::api::run_sample_job;
use fleetroute_core::config::FleetAssumptions;
use fleetroute_core::error::RouteResult;
use fleetroute_core::protocol::OptimizationResult;
use fleetroute_core::samples::{SampleRegion, SampleSpec};
use serde::Serialize;

#[derive(Args, Debug, Clone)]
pub struct SamplesArgs {
    #[arg(long, value_enum, default_value_t = SampleRegion::NewYork)]
    pub region: SampleRegion,

    #[arg(long, default_value_t = 5)]
    pub count: usize,

    /// Stops per route, depot and final stop included
    #[arg(long, default_value_t = 6)]
    pub stops: usize,

    /// Fixed seed for reproducible routes
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[command(flatten)]
    pub assumptions: FleetAssumptions,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SampleOutput<'a> {
    name: &'a str,
    result: &'a OptimizationResult,
}

pub fn run(args: SamplesArgs, assumptions: &FleetAssumptions) -> RouteResult<()> {
    let spec = SampleSpec {
        region: args.region,
        count: args.count,
        stops: args.stops,
        seed: args.seed,
    };

    let results = run_sample_job(&spec, assumptions);

    if args.json {
        let out: Vec<SampleOutput> = results
            .iter()
            .map(|(route, result)| SampleOutput {
                name: &route.name,
                result,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    reports::print_samples_table(&results);
    Ok(())
}
