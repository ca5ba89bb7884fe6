use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;

use crate::sdk::planner::Coord;
use crate::sdk::util::rate_limit::{Limiter, Wait};

use super::error::RoutingError;
use super::service::{Geocoder, Place};

#[derive(Debug, Deserialize)]
struct GeoResponse {
    #[serde(default)]
    items: Vec<GeoItem>,
}

#[derive(Debug, Deserialize)]
struct GeoItem {
    address: GeoAddress,
    position: GeoPosition,
}

#[derive(Debug, Deserialize)]
struct GeoAddress {
    label: String,
}

#[derive(Debug, Deserialize)]
struct GeoPosition {
    lat: f64,
    lng: f64,
}

/// Picks the first match out of a HERE geocode body.
fn parse_geocode_response(query: &str, text: &str) -> Result<Place, RoutingError> {
    let resp: GeoResponse = serde_json::from_str(text)?;
    let item = resp
        .items
        .into_iter()
        .next()
        .ok_or_else(|| RoutingError::NoMatch(query.to_string()))?;
    Ok(Place {
        query: query.to_string(),
        label: item.address.label,
        coord: Coord::new(item.position.lat, item.position.lng),
    })
}

/// Blocking client for the HERE geocoding endpoint.
pub struct HereGeocoder {
    client: Client,
    api_key: String,
    base_url: String,
    limiter: Limiter,
}

impl HereGeocoder {
    pub fn new(api_key: String, base_url: String, limiter: Limiter) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(15))
                .build()
                .unwrap(),
            api_key,
            base_url,
            limiter,
        }
    }
}

impl Geocoder for HereGeocoder {
    fn geocode(&self, query: &str) -> Result<Place, RoutingError> {
        self.limiter.wait();
        log::debug!("[GEOCODE] Calling HERE for query: \"{}\"", query);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("q", query), ("apiKey", self.api_key.as_str())])
            .send()?;
        let status = response.status();
        let text = response.text()?;

        if !status.is_success() {
            log::error!(
                "[GEOCODE] Non-success status {} for \"{}\". Body: {}",
                status,
                query,
                text
            );
            return Err(RoutingError::RawApi(text));
        }

        match parse_geocode_response(query, &text) {
            Ok(place) => {
                log::debug!("[GEOCODE] \"{}\" resolved to \"{}\"", query, place.label);
                Ok(place)
            }
            Err(e) => {
                log::error!(
                    "[GEOCODE] Unusable response for \"{}\". Error: {}. Body: {}",
                    query,
                    e,
                    text
                );
                Err(e)
            }
        }
    }
}
