use anyhow::{Context, Result};
use serde::Serialize;

use crate::sdk::planner::{
    apply_waypoint_order, parse_waypoint_order, Coord, LinkTemplate, Route,
};
use crate::sdk::routing::{GeoCache, Geocoder, Place, RouteOptimizer, RouteSummary};

/// One trip-planning request: what to visit, where to start and finish,
/// and how to cut the navigation links.
#[derive(Debug, Clone)]
pub struct TripRequest {
    pub stops: Vec<String>,
    pub start: Coord,
    pub end: Coord,
    pub waypoints_per_batch: usize,
    pub optimize: bool,
}

/// The planned trip: resolved stops in visiting order, the final route
/// coordinates, the navigation links covering the whole drive, and the
/// optimizer's summary when one was consulted.
#[derive(Debug, Clone, Serialize)]
pub struct TripPlan {
    pub places: Vec<Place>,
    pub route: Vec<Coord>,
    pub links: Vec<String>,
    pub summary: Option<RouteSummary>,
}

fn geocode_stops(
    queries: &[String],
    geocoder: &dyn Geocoder,
    cache: &mut GeoCache,
) -> Result<Vec<Place>> {
    let mut places = Vec::with_capacity(queries.len());
    for query in queries {
        if let Some(hit) = cache.get(query) {
            log::debug!("[CACHE HIT] \"{}\" -> \"{}\"", query, hit.label);
            places.push(hit);
            continue;
        }
        let place = geocoder
            .geocode(query)
            .with_context(|| format!("Failed to geocode \"{query}\""))?;
        log::info!("[GEOCODE] \"{}\" -> \"{}\"", query, place.label);
        cache.insert(&place);
        places.push(place);
    }
    Ok(places)
}

/// Runs one trip end to end: geocode every stop (cache first), ask the
/// optimizer for the best visiting order unless the request keeps the
/// given order or has no stops, rebuild the route between its anchors,
/// and render the batched navigation links.
///
/// Data failures and collaborator failures both abort the plan; nothing
/// is retried here.
pub fn plan_trip(
    request: &TripRequest,
    geocoder: &dyn Geocoder,
    optimizer: &dyn RouteOptimizer,
    cache: &mut GeoCache,
    template: &LinkTemplate,
) -> Result<TripPlan> {
    let mut places = geocode_stops(&request.stops, geocoder, cache)?;
    let stop_coords: Vec<Coord> = places.iter().map(|p| p.coord).collect();
    let mut route = Route::new(request.start, &stop_coords, request.end);
    let mut summary = None;

    if request.optimize && !places.is_empty() {
        let best = optimizer
            .best_order(route.coords())
            .context("Best-order request failed")?;
        let order = parse_waypoint_order(&best.waypoints, places.len())
            .context("Optimizer response did not contain a usable order")?;
        places = apply_waypoint_order(&places, &order)?;
        let reordered: Vec<Coord> = places.iter().map(|p| p.coord).collect();
        route = Route::new(request.start, &reordered, request.end);
        summary = Some(best.summary);
        log::info!(
            "Optimized visiting order for {} stops: {:.1} km, {:.2} h driving",
            places.len(),
            best.summary.distance_km,
            best.summary.duration_hours
        );
    } else if !request.optimize {
        log::info!("Keeping the stops in the order given");
    }

    let links = template
        .batch_links(route.coords(), request.waypoints_per_batch)
        .context("Failed to render navigation links")?;

    Ok(TripPlan {
        places,
        route: route.coords().to_vec(),
        links,
        summary,
    })
}
