use crate::error::{RouteError, RouteResult};
use fleetroute_protocol::config::FleetAssumptions;
use fleetroute_protocol::waypoint::{Waypoint, WaypointDocument};
use std::fs::{self, File};
use std::path::Path;
use tracing::{debug, info};

/// Loads a stop list from `.csv` (`name,lat,lng` header) or JSON
/// (a bare array or `{ "waypoints": [...] }`).
pub fn load_waypoints<P: AsRef<Path>>(path: P) -> RouteResult<Vec<Waypoint>> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    let waypoints = if is_csv {
        load_waypoints_csv(path)?
    } else {
        let content = fs::read_to_string(path)?;
        parse_waypoints_json(&content)?
    };

    info!("Loaded {} waypoints from {:?}", waypoints.len(), path);
    Ok(waypoints)
}

pub fn parse_waypoints_json(content: &str) -> RouteResult<Vec<Waypoint>> {
    let doc: WaypointDocument = serde_json::from_str(content)?;
    Ok(doc.into_waypoints())
}

fn load_waypoints_csv(path: &Path) -> RouteResult<Vec<Waypoint>> {
    let file = File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut waypoints = Vec::new();
    for (line, record) in rdr.deserialize::<Waypoint>().enumerate() {
        match record {
            Ok(wp) => waypoints.push(wp),
            Err(e) => {
                debug!("CSV row {} rejected: {}", line + 2, e);
                return Err(RouteError::Csv(e));
            }
        }
    }
    Ok(waypoints)
}

pub fn load_assumptions<P: AsRef<Path>>(path: P) -> RouteResult<FleetAssumptions> {
    FleetAssumptions::load_from_file(path).map_err(RouteError::Config)
}
