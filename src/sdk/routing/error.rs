use thiserror::Error;

use crate::sdk::planner::PlannerError;

#[derive(Error, Debug)]
pub enum RoutingError {
    #[error("no geocoding match for \"{0}\"")]
    NoMatch(String),

    // The structured error the service returned
    #[error("API error (code {code}): {message}")]
    Api { code: String, message: String },

    // A fallback for error bodies that are not in the expected JSON shape
    #[error("unstructured API error: {0}")]
    RawApi(String),

    #[error("underlying request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("failed to parse JSON response: {0}")]
    Parse(#[from] serde_json::Error),

    // Building the request itself failed before anything left the process
    #[error(transparent)]
    Plan(#[from] PlannerError),

    #[error("{0}")]
    Generic(String),
}
