use std::env;

use anyhow::{Context, Result};

use crate::sdk::planner::Coord;

pub const DEFAULT_HERE_GEOCODE_URL: &str = "https://geocode.search.hereapi.com/v1/geocode";
pub const DEFAULT_TOMTOM_ROUTING_URL: &str = "https://api.tomtom.com/routing/1/calculateRoute";

/// Trip anchor when none is given: downtown Calgary.
pub const DEFAULT_ANCHOR: Coord = Coord {
    lat: 51.0480293,
    lon: -114.0640164,
};

/// Service endpoints and credentials, read once at startup. Keys are
/// passed through to the services untouched.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub here_api_key: String,
    pub tomtom_api_key: String,
    pub here_geocode_url: String,
    pub tomtom_routing_url: String,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self> {
        let here_api_key = env::var("HERE_API_KEY").context("HERE_API_KEY is not set")?;
        let tomtom_api_key = env::var("TOMTOM_API_KEY").context("TOMTOM_API_KEY is not set")?;
        let here_geocode_url =
            env::var("HERE_GEOCODE_URL").unwrap_or_else(|_| DEFAULT_HERE_GEOCODE_URL.to_string());
        let tomtom_routing_url = env::var("TOMTOM_ROUTING_URL")
            .unwrap_or_else(|_| DEFAULT_TOMTOM_ROUTING_URL.to_string());
        Ok(Self {
            here_api_key,
            tomtom_api_key,
            here_geocode_url,
            tomtom_routing_url,
        })
    }
}
