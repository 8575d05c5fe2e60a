use crate::geo::distance;
use fleetroute_protocol::waypoint::Waypoint;

/// Visiting order produced by the greedy nearest-neighbor pass, as indices
/// into `waypoints`.
///
/// The first and last stops stay where they are. Every interior stop is
/// chosen as the closest remaining one to the current position; on a tie the
/// candidate that comes first in the remaining list wins. Fewer than three
/// stops come back in submitted order.
pub fn nearest_neighbor_order(waypoints: &[Waypoint]) -> Vec<usize> {
    let n = waypoints.len();
    if n < 3 {
        return (0..n).collect();
    }

    let mut order = Vec::with_capacity(n);
    order.push(0);

    let mut remaining: Vec<usize> = (1..n - 1).collect();
    let mut current = 0;

    while !remaining.is_empty() {
        let mut best_pos = 0;
        let mut best_dist = f64::INFINITY;

        for (pos, &idx) in remaining.iter().enumerate() {
            let d = distance(&waypoints[current], &waypoints[idx]);
            // Strict comparison keeps the earliest candidate on ties.
            if d < best_dist {
                best_dist = d;
                best_pos = pos;
            }
        }

        // `remove` keeps the remaining stops in their relative order,
        // which the tie-break depends on.
        let next = remaining.remove(best_pos);
        order.push(next);
        current = next;
    }

    order.push(n - 1);
    order
}
