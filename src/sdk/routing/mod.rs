pub mod cache;
pub mod error;
pub mod here;
pub mod service;
pub mod tomtom;

pub use cache::{CachedPlace, GeoCache};
pub use error::RoutingError;
pub use here::HereGeocoder;
pub use service::{BestOrder, Geocoder, Place, RouteOptimizer, RouteSummary};
pub use tomtom::TomTomOptimizer;
