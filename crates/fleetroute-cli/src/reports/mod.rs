mod tables;

pub use self::tables::{
    route as print_route_table, samples as print_samples_table, summary as print_summary,
};
