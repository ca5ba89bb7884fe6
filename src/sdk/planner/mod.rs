pub mod batch;
pub mod error;
pub mod links;
pub mod reorder;
pub mod route;

pub use batch::split_into_batches;
pub use error::PlannerError;
pub use links::{LinkTemplate, GOOGLE_MAPS_DIR_URL};
pub use reorder::{apply_waypoint_order, parse_waypoint_order, reorder_route};
pub use route::{concat_coords, format_coord, Coord, Route};
