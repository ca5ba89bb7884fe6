use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::sdk::planner::{concat_coords, Coord};
use crate::sdk::util::rate_limit::{Limiter, Wait};

use super::error::RoutingError;
use super::service::{BestOrder, RouteOptimizer, RouteSummary};

// TomTom wraps request failures in a detailedError object
#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    code: String,
    message: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorPayload {
    #[serde(rename = "detailedError")]
    detailed_error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct RoutingResponse {
    routes: Vec<RouteEntry>,
    #[serde(rename = "optimizedWaypoints", default)]
    optimized_waypoints: Value,
}

#[derive(Debug, Deserialize)]
struct RouteEntry {
    summary: RouteEntrySummary,
}

#[derive(Debug, Deserialize)]
struct RouteEntrySummary {
    #[serde(rename = "lengthInMeters")]
    length_in_meters: f64,
    #[serde(rename = "travelTimeInSeconds")]
    travel_time_in_seconds: f64,
}

/// Pulls the summary and the waypoint-order payload out of a successful
/// calculateRoute body. A body without a route is unusable.
fn parse_routing_response(text: &str) -> Result<BestOrder, RoutingError> {
    let resp: RoutingResponse = serde_json::from_str(text)?;
    let entry = resp
        .routes
        .first()
        .ok_or_else(|| RoutingError::Generic("no route in routing response".to_string()))?;
    Ok(BestOrder {
        summary: RouteSummary {
            distance_km: entry.summary.length_in_meters / 1000.0,
            duration_hours: entry.summary.travel_time_in_seconds / 3600.0,
        },
        waypoints: resp.optimized_waypoints,
    })
}

/// Blocking client for the TomTom calculateRoute endpoint with
/// `computeBestOrder` turned on.
pub struct TomTomOptimizer {
    client: Client,
    api_key: String,
    base_url: String,
    limiter: Limiter,
}

impl TomTomOptimizer {
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

impl RouteOptimizer for TomTomOptimizer {
    fn best_order(&self, route: &[Coord]) -> Result<BestOrder, RoutingError> {
        self.limiter.wait();
        // The locations ride in the path, colon-joined; the key stays in
        // the query string.
        let locations = concat_coords(route, ':')?;
        let url = format!("{}/{}/json", self.base_url, locations);
        log::debug!(
            "[OPTIMIZER] Requesting best order for {} waypoints",
            route.len()
        );

        let response = self
            .client
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("travelMode", "car"),
                ("computeBestOrder", "true"),
                ("traffic", "true"),
                ("instructionsType", "text"),
                ("computeTravelTimeFor", "all"),
            ])
            .send()?;

        let status = response.status();
        let text = response.text()?;

        if !status.is_success() {
            // Try the structured error first
            if let Ok(payload) = serde_json::from_str::<ApiErrorPayload>(&text) {
                return Err(RoutingError::Api {
                    code: payload.detailed_error.code,
                    message: payload.detailed_error.message,
                });
            }
            log::error!(
                "[OPTIMIZER] Non-success status: {}. Unparseable body: {}",
                status,
                text
            );
            return Err(RoutingError::RawApi(text));
        }

        parse_routing_response(&text).map_err(|e| {
            log::error!(
                "[OPTIMIZER] Failed to parse routing response. URL: {}\nError: {}. Body: {}",
                url,
                e,
                text
            );
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::sdk::planner::PlannerError;
    use crate::sdk::util::rate_limit::routing_limiter;

    use super::*;

    const ROUTING_BODY: &str = r#"{
        "formatVersion": "0.0.12",
        "routes": [
            {
                "summary": {
                    "lengthInMeters": 35261,
                    "travelTimeInSeconds": 2778,
                    "trafficDelayInSeconds": 0,
                    "departureTime": "2024-06-08T14:04:11-06:00",
                    "arrivalTime": "2024-06-08T14:50:29-06:00"
                },
                "legs": [],
                "sections": []
            }
        ],
        "optimizedWaypoints": [
            { "providedIndex": 0, "optimizedIndex": 1 },
            { "providedIndex": 1, "optimizedIndex": 0 }
        ]
    }"#;

    #[test]
    fn pulls_summary_and_waypoints_from_a_routing_body() {
        let best = parse_routing_response(ROUTING_BODY).unwrap();
        assert!((best.summary.distance_km - 35.261).abs() < 1e-9);
        assert!((best.summary.duration_hours - 2778.0 / 3600.0).abs() < 1e-9);
        let entries = best.waypoints.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["providedIndex"], 0);
        assert_eq!(entries[0]["optimizedIndex"], 1);
    }

    #[test]
    fn a_body_without_routes_is_unusable() {
        let err = parse_routing_response(r#"{"routes": []}"#).unwrap_err();
        assert!(matches!(err, RoutingError::Generic(_)));
    }

    #[test]
    fn missing_waypoints_come_back_null_for_the_reorderer_to_reject() {
        let body = r#"{
            "routes": [
                { "summary": { "lengthInMeters": 100, "travelTimeInSeconds": 60 } }
            ]
        }"#;
        let best = parse_routing_response(body).unwrap();
        assert!(best.waypoints.is_null());
    }

    #[test]
    fn reads_tomtoms_structured_error_payload() {
        let body = r#"{
            "formatVersion": "0.0.12",
            "detailedError": {
                "code": "OUT_OF_REGION",
                "message": "Route start point is outside the supported area."
            }
        }"#;
        let payload: ApiErrorPayload = serde_json::from_str(body).unwrap();
        assert_eq!(payload.detailed_error.code, "OUT_OF_REGION");
    }

    #[test]
    fn a_bad_coordinate_fails_before_any_request_is_sent() {
        let optimizer = TomTomOptimizer::new(
            "key".to_string(),
            "https://api.invalid/routing/1/calculateRoute".to_string(),
            routing_limiter(),
        );
        let route = [Coord::new(1.0, 1.0), Coord::new(f64::NAN, 2.0)];
        let err = optimizer.best_order(&route).unwrap_err();
        assert!(matches!(
            err,
            RoutingError::Plan(PlannerError::InvalidCoordinate { .. })
        ));
    }
}
