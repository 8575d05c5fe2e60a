pub mod metrics;
pub mod nearest;
pub mod runner;

pub use self::metrics::RouteMetrics;
pub use self::nearest::nearest_neighbor_order;
pub use self::runner::{optimize, optimize_with, OptimizeParams, RouteOptimizer};
