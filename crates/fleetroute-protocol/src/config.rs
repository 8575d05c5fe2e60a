use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Fleet-average assumptions behind the duration and fuel estimates.
/// These are planning figures, not measurements.
#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FleetAssumptions {
    /// Average road speed used for duration estimates (mph)
    #[arg(long, default_value_t = 45.0)]
    pub average_speed_mph: f64,

    /// Fleet fuel economy (miles per gallon)
    #[arg(long, default_value_t = 7.0)]
    pub avg_mpg: f64,

    /// Fuel price (USD per gallon)
    #[arg(long, default_value_t = 3.45)]
    pub cost_per_gallon: f64,
}

impl Default for FleetAssumptions {
    fn default() -> Self {
        Self {
            average_speed_mph: 45.0,
            avg_mpg: 7.0,
            cost_per_gallon: 3.45,
        }
    }
}

/// Per-request assumption fields. Anything left out falls back to the
/// caller's configured assumptions, not the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AssumptionOverrides {
    pub average_speed_mph: Option<f64>,
    pub avg_mpg: Option<f64>,
    pub cost_per_gallon: Option<f64>,
}

impl AssumptionOverrides {
    pub fn apply_to(&self, base: &FleetAssumptions) -> FleetAssumptions {
        FleetAssumptions {
            average_speed_mph: self.average_speed_mph.unwrap_or(base.average_speed_mph),
            avg_mpg: self.avg_mpg.unwrap_or(base.avg_mpg),
            cost_per_gallon: self.cost_per_gallon.unwrap_or(base.cost_per_gallon),
        }
    }
}

impl FleetAssumptions {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read assumptions file {:?}: {}", path, e))?;

        serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse assumptions JSON {:?}: {}", path, e))
    }

    /// Copies over only the values the user typed on the command line,
    /// so a loaded file is not clobbered by clap defaults.
    pub fn merge_from_cli(&mut self, cli: &FleetAssumptions, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field;
                }
            };
        }

        update_if_present!(average_speed_mph, "average_speed_mph");
        update_if_present!(avg_mpg, "avg_mpg");
        update_if_present!(cost_per_gallon, "cost_per_gallon");
    }

    /// Minutes needed to drive `miles` at the average speed.
    pub fn minutes_for(&self, miles: f64) -> f64 {
        if self.average_speed_mph > 0.0 {
            miles / self.average_speed_mph * 60.0
        } else {
            0.0
        }
    }

    /// Fuel cost of driving `miles`, in USD.
    pub fn fuel_cost_for(&self, miles: f64) -> f64 {
        if self.avg_mpg > 0.0 {
            miles / self.avg_mpg * self.cost_per_gallon
        } else {
            0.0
        }
    }
}
