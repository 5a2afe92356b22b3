//! Capability interfaces for the swappable collaborators of the router.
//!
//! Each trait has a default implementation in this crate; callers can
//! replace any of them on a [`Router`](crate::router::Router).

use geojson::FeatureCollection;
use serde_json::{Map, Value};

use crate::error::RouteError;
use crate::response::{DirectionStep, RawRouteResponse};
use crate::types::{LatLng, Point, Route};

/// Fetches raw routing data for an ordered list of stops.
pub trait RouteSolver {
    fn solve(&self, points: &[Point]) -> Result<RawRouteResponse, RouteError>;
}

/// Text formatting used while building routes.
pub trait RouteFormatter {
    /// Formats a length in meters. `None` uses the configured sensitivity.
    fn format_distance(&self, meters: f64, sensitivity: Option<f64>) -> String;

    fn format_time(&self, seconds: f64) -> String;

    /// Icon for a step. Unknown maneuvers yield an empty string.
    fn icon_name(&self, step: &DirectionStep, index: usize, total_steps: usize) -> String;

    /// Renders the step's own text template over its attributes, with
    /// `overrides` taking precedence.
    fn format_step(&self, step: &DirectionStep, overrides: &Map<String, Value>) -> String;

    fn template(&self, template: &str, data: &Map<String, Value>) -> String;
}

/// Turns a raw solve response into display-ready routes.
pub trait RouteBuilder {
    fn build(&self, raw: &RawRouteResponse) -> Result<Vec<Route>, RouteError>;

    fn set_formatter(&mut self, formatter: Box<dyn RouteFormatter>);
}

/// Visual output of points, paths and direction markers.
pub trait RouteDrawer {
    /// Binds the drawer to its display target. Drawers created already
    /// bound can keep the default no-op.
    fn attach(&mut self) {}

    fn add_point(&mut self, point: &Point) -> Result<(), RouteError>;

    fn add_points(&mut self, points: &[Point]) -> Result<(), RouteError> {
        for point in points {
            self.add_point(point)?;
        }
        Ok(())
    }

    fn remove_point(&mut self, point: &Point) -> Result<(), RouteError>;

    fn draw(&mut self, path: &FeatureCollection) -> Result<(), RouteError>;

    /// Removes every marker and path drawn so far.
    fn clear(&mut self);

    fn pan_to(&mut self, location: LatLng, zoom: Option<u8>) -> Result<(), RouteError>;

    fn show_direction_marker(&mut self, location: LatLng) -> Result<(), RouteError>;

    fn hide_direction_marker(&mut self) -> Result<(), RouteError>;
}
