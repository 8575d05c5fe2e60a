use thiserror::Error;

#[derive(Error, Debug)]
pub enum RouteError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("At least {required} waypoints are required, got {actual}")]
    InvalidCardinality { required: usize, actual: usize },

    #[error("Waypoint #{index} '{name}' is out of range (lat {lat}, lng {lng})")]
    CoordinateOutOfRange {
        index: usize,
        name: String,
        lat: f64,
        lng: f64,
    },
}

pub type RouteResult<T> = Result<T, RouteError>;
