use clap::Parser;
use fleetroute_hive::{app, db, load_fleet_assumptions, state::AppState};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about = "FleetRoute HTTP service", long_about = None)]
struct Args {
    #[arg(long, default_value = "sqlite://fleetroute.db")]
    db: String,

    #[arg(long, default_value_t = 3000)]
    port: u16,

    /// JSON file with default fleet assumptions
    #[arg(long)]
    assumptions: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    info!("🐝 FleetRoute Hive is initializing...");

    let assumptions = load_fleet_assumptions(args.assumptions.as_deref())?;
    let pool = db::init_db(&args.db).await?;

    let state = Arc::new(AppState::new(pool, assumptions));

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    info!("🚀 Hive listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;
    Ok(())
}
