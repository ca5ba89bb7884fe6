use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::sdk::planner::Coord;

use super::error::RoutingError;

/// A geocoded stop: the query as the user entered it plus the service's
/// resolved address label and coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub query: String,
    pub label: String,
    pub coord: Coord,
}

/// Distance and drive time for a whole multi-stop route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub distance_km: f64,
    pub duration_hours: f64,
}

/// An optimizer's answer: the route summary plus the raw waypoint-order
/// payload, handed on for order extraction.
#[derive(Debug, Clone)]
pub struct BestOrder {
    pub summary: RouteSummary,
    pub waypoints: Value,
}

pub trait Geocoder: Send + Sync {
    /// Resolves a free-form destination query to its best match.
    fn geocode(&self, query: &str) -> Result<Place, RoutingError>;
}

pub trait RouteOptimizer: Send + Sync {
    /// Asks the routing service for the best visiting order over `route`,
    /// with the first and last coordinates fixed.
    fn best_order(&self, route: &[Coord]) -> Result<BestOrder, RoutingError>;
}
