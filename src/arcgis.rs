//! Network analyst `solve` HTTP adapter.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::{DEFAULT_SOLVE_URL, SolverOptions};
use crate::error::RouteError;
use crate::request::RouteRequestBuilder;
use crate::response::RawRouteResponse;
use crate::traits::RouteSolver;
use crate::types::Point;

#[derive(Debug, Clone)]
pub struct ArcGisConfig {
    pub url: String,
    pub timeout_secs: u64,
    pub options: SolverOptions,
}

impl Default for ArcGisConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SOLVE_URL.to_string(),
            timeout_secs: 15,
            options: SolverOptions::default(),
        }
    }
}

/// Default [`RouteSolver`]: one blocking GET per solve, no retries.
#[derive(Debug, Clone)]
pub struct ArcGisClient {
    url: String,
    requests: RouteRequestBuilder,
    client: reqwest::blocking::Client,
}

impl ArcGisClient {
    pub fn new(config: ArcGisConfig) -> Result<Self, RouteError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            url: config.url,
            requests: RouteRequestBuilder::new(config.options),
            client,
        })
    }
}

impl RouteSolver for ArcGisClient {
    fn solve(&self, points: &[Point]) -> Result<RawRouteResponse, RouteError> {
        let query = self.requests.build(points)?.query_pairs()?;
        debug!(url = %self.url, stops = points.len(), "requesting route solve");

        let body = self
            .client
            .get(&self.url)
            .query(&query)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.text())?;

        parse_solve_body(&body)
    }
}

#[derive(Debug, Deserialize)]
struct ServiceErrorPayload {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: String,
}

/// Interprets a `solve` response body.
///
/// An empty or `null` body means no route. The service reports failures
/// in-band as `{"error": {"code", "message"}}` next to a 200 status.
pub fn parse_solve_body(body: &str) -> Result<RawRouteResponse, RouteError> {
    if body.trim().is_empty() {
        return Err(RouteError::NoRoute);
    }

    let value: Value = serde_json::from_str(body)?;
    if value.is_null() {
        return Err(RouteError::NoRoute);
    }

    if let Some(error) = value.get("error") {
        let payload: ServiceErrorPayload = serde_json::from_value(error.clone())?;
        warn!(code = payload.code, message = %payload.message, "routing service returned an error");
        return Err(RouteError::Service {
            code: payload.code,
            message: payload.message,
        });
    }

    Ok(serde_json::from_value(value)?)
}
