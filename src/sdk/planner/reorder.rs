use serde_json::Value;

use super::error::PlannerError;
use super::route::{Coord, Route};

fn malformed(msg: impl Into<String>) -> PlannerError {
    PlannerError::MalformedResponse(msg.into())
}

fn index_field(entry: &Value, key: &str) -> Result<usize, PlannerError> {
    entry
        .get(key)
        .and_then(Value::as_u64)
        .map(|v| v as usize)
        .ok_or_else(|| malformed(format!("waypoint entry has no usable \"{key}\"")))
}

/// Extracts the visiting order from an optimizer's `optimizedWaypoints`
/// payload. Each entry pairs a `providedIndex` (position in the request)
/// with an `optimizedIndex` (position in the best order). The result maps
/// optimized position to provided position, so `order[0]` names the stop
/// to visit first.
///
/// The payload must describe a full permutation of `expected` stops.
/// Anything else is a `MalformedResponse`; a bad order is never papered
/// over with the original one.
pub fn parse_waypoint_order(
    waypoints: &Value,
    expected: usize,
) -> Result<Vec<usize>, PlannerError> {
    let entries = waypoints
        .as_array()
        .ok_or_else(|| malformed("optimizedWaypoints is not an array"))?;
    if entries.len() != expected {
        return Err(malformed(format!(
            "expected {expected} optimized waypoints, got {}",
            entries.len()
        )));
    }

    let mut pairs = Vec::with_capacity(entries.len());
    for entry in entries {
        let provided = index_field(entry, "providedIndex")?;
        let optimized = index_field(entry, "optimizedIndex")?;
        pairs.push((optimized, provided));
    }
    pairs.sort_unstable();

    let mut order = Vec::with_capacity(pairs.len());
    let mut provided_seen = vec![false; expected];
    for (rank, (optimized, provided)) in pairs.into_iter().enumerate() {
        if optimized != rank {
            return Err(malformed(format!(
                "optimizedIndex values do not form a permutation (saw {optimized}, wanted {rank})"
            )));
        }
        if provided >= expected {
            return Err(malformed(format!(
                "providedIndex {provided} is out of range for {expected} stops"
            )));
        }
        if provided_seen[provided] {
            return Err(malformed(format!("providedIndex {provided} appears twice")));
        }
        provided_seen[provided] = true;
        order.push(provided);
    }
    Ok(order)
}

/// Reorders `stops` by a parsed visiting order. Generic so callers can
/// reorder whatever travels with a stop (coordinates, resolved places).
pub fn apply_waypoint_order<T: Clone>(
    stops: &[T],
    order: &[usize],
) -> Result<Vec<T>, PlannerError> {
    if order.len() != stops.len() {
        return Err(malformed(format!(
            "order covers {} stops but the route has {}",
            order.len(),
            stops.len()
        )));
    }
    order
        .iter()
        .map(|&provided| {
            stops
                .get(provided)
                .cloned()
                .ok_or_else(|| malformed(format!("providedIndex {provided} is out of range")))
        })
        .collect()
}

/// Rebuilds a route with its interior stops in the optimizer's order. The
/// start and end anchors stay where they are.
pub fn reorder_route(route: &Route, waypoints: &Value) -> Result<Route, PlannerError> {
    let stops = route.stops();
    let order = parse_waypoint_order(waypoints, stops.len())?;
    let reordered = apply_waypoint_order(stops, &order)?;
    Ok(Route::new(route.start(), &reordered, route.end()))
}
