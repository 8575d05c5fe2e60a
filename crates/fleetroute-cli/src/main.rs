use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use fleetroute_core::config::FleetAssumptions;
use fleetroute_core::loader::load_assumptions;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Route waypoint optimizer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with fleet assumptions (speed, mpg, fuel price)
    #[arg(global = true, long)]
    assumptions: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Reorder a stop list and report the savings
    Optimize(cmd::optimize::OptimizeArgs),
    /// Generate and optimize demo routes
    Samples(cmd::samples::SamplesArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    // Logs go to stderr so `--json` output stays machine readable.
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let (cli_assumptions, sub_matches) = match &cli.command {
        Commands::Optimize(args) => (&args.assumptions, subcommand(&matches, "optimize")),
        Commands::Samples(args) => (&args.assumptions, subcommand(&matches, "samples")),
    };

    let assumptions = resolve_assumptions(cli.assumptions.as_deref(), cli_assumptions, sub_matches);

    let outcome = match cli.command {
        Commands::Optimize(args) => cmd::optimize::run(args, &assumptions),
        Commands::Samples(args) => cmd::samples::run(args, &assumptions),
    };

    if let Err(e) = outcome {
        error!("❌ {}", e);
        process::exit(1);
    }
}

fn subcommand<'a>(matches: &'a ArgMatches, name: &str) -> Option<&'a ArgMatches> {
    matches.subcommand_matches(name)
}

/// File values form the base; flags typed on the command line win.
fn resolve_assumptions(
    path: Option<&str>,
    cli_values: &FleetAssumptions,
    sub_matches: Option<&ArgMatches>,
) -> FleetAssumptions {
    let Some(path) = path else {
        return cli_values.clone();
    };

    info!("⚖️  Loading fleet assumptions from: {}", path);
    match load_assumptions(path) {
        Ok(mut from_file) => {
            if let Some(m) = sub_matches {
                from_file.merge_from_cli(cli_values, m);
            }
            from_file
        }
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}

