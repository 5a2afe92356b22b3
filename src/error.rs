//! Error taxonomy for the route synthesis pipeline.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RouteError {
    #[error("at least {required} points are needed to build a route, got {actual}")]
    InsufficientPoints { required: usize, actual: usize },

    #[error("malformed compressed geometry: {0}")]
    MalformedGeometry(String),

    #[error("cannot parse route geometry: {0}")]
    Parse(String),

    #[error("no route has been returned")]
    NoRoute,

    #[error("not ready: {0}")]
    PrerequisiteNotReady(String),

    // In-band failure reported by the routing service with a 200 status.
    #[error("routing service error (code {code}): {message}")]
    Service { code: i64, message: String },

    #[error("no directions returned for route {route}")]
    MissingDirections { route: usize },

    #[error("routing request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("failed to decode routing response: {0}")]
    Json(#[from] serde_json::Error),
}

impl RouteError {
    pub(crate) fn insufficient_points(actual: usize) -> Self {
        RouteError::InsufficientPoints {
            required: 2,
            actual,
        }
    }
}
