use thiserror::Error;

/// Failures the planning core can produce. All of them are deterministic
/// data problems; retrying the same call cannot fix them.
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("waypoints per batch must be at least 2, got {0}")]
    InvalidBatchSize(usize),

    #[error("coordinate ({lat}, {lon}) is not finite")]
    InvalidCoordinate { lat: f64, lon: f64 },

    // The optimizer's order payload did not contain a usable permutation
    #[error("malformed optimizer response: {0}")]
    MalformedResponse(String),
}
