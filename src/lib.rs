pub mod sdk;

pub use sdk::config::ServiceConfig;
pub use sdk::planner::{Coord, LinkTemplate, PlannerError, Route};
pub use sdk::routing::{
    GeoCache, Geocoder, HereGeocoder, RouteOptimizer, RoutingError, TomTomOptimizer,
};
pub use sdk::trip::{plan_trip, TripPlan, TripRequest};
