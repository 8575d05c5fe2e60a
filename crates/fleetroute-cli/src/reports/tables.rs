use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use fleetroute_core::geo::distance;
use fleetroute_core::protocol::OptimizationResult;
use fleetroute_core::samples::SampleRoute;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Stop-by-stop view of the optimized order with the leg distance into each stop.
pub fn route(result: &OptimizationResult) {
    let mut table = new_table();

    table.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Stop").add_attribute(Attribute::Bold),
        Cell::new("Lat"),
        Cell::new("Lng"),
        Cell::new("Leg (mi)").fg(Color::Cyan),
    ]);

    for i in [0, 2, 3, 4] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let mut prev = None;
    for stop in &result.optimized_waypoints {
        let here = stop.to_waypoint();
        let leg = prev
            .as_ref()
            .map(|p| format!("{:.2}", distance(p, &here)))
            .unwrap_or_else(|| "-".to_string());

        table.add_row(vec![
            Cell::new(stop.sequence),
            Cell::new(&stop.name).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.4}", stop.lat)),
            Cell::new(format!("{:.4}", stop.lng)),
            Cell::new(leg).fg(Color::Cyan),
        ]);
        prev = Some(here);
    }

    println!("{table}");
}

pub fn summary(result: &OptimizationResult) {
    let mut table = new_table();

    table.add_row(vec![
        Cell::new("Metric").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);

    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    let rows = [
        ("Total Distance (mi)", format!("{:.2}", result.total_distance)),
        ("Baseline Distance (mi)", format!("{:.2}", result.baseline_distance)),
        ("Distance Saved (mi)", format!("{:.2}", result.distance_saved)),
        ("Estimated Duration (min)", format!("{}", result.estimated_duration)),
        ("Time Savings (min)", format!("{}", result.time_savings)),
        ("Fuel Savings ($)", format!("{:.2}", result.fuel_savings)),
    ];
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }
    table.add_row(vec![
        Cell::new("Optimization Score").add_attribute(Attribute::Bold),
        Cell::new(result.optimization_score).fg(Color::Green),
    ]);

    println!("{table}");
}

pub fn samples(results: &[(SampleRoute, OptimizationResult)]) {
    let mut table = new_table();

    table.add_row(vec![
        Cell::new("Route").add_attribute(Attribute::Bold),
        Cell::new("Stops"),
        Cell::new("Baseline"),
        Cell::new("Optimized").fg(Color::Cyan),
        Cell::new("Saved"),
        Cell::new("Fuel $"),
        Cell::new("Score").fg(Color::Green),
    ]);

    for i in 1..=6 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (route, r) in results {
        table.add_row(vec![
            Cell::new(&route.name).add_attribute(Attribute::Bold),
            Cell::new(route.waypoints.len()),
            Cell::new(format!("{:.2}", r.baseline_distance)),
            Cell::new(format!("{:.2}", r.total_distance)).fg(Color::Cyan),
            Cell::new(format!("{:.2}", r.distance_saved)),
            Cell::new(format!("{:.2}", r.fuel_savings)),
            Cell::new(r.optimization_score).fg(Color::Green),
        ]);
    }

    println!("{table}");
}
