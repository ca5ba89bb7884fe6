pub mod config;
pub mod planner;
pub mod routing;
pub mod stops;
pub mod trip;
pub mod util;
