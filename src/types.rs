//! Input waypoints and the display-ready route model.

use geojson::FeatureCollection;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A labeled waypoint supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub label: String,
    pub lat: f64,
    pub lng: f64,
}

impl Point {
    pub fn new(label: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            label: label.into(),
            lat,
            lng,
        }
    }

    /// Both coordinates are present, i.e. finite.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    pub fn location(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSummary {
    pub length: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteStop {
    pub name: String,
    pub sequence: i64,
    pub location: LatLng,
}

impl From<&RouteStop> for Point {
    fn from(stop: &RouteStop) -> Self {
        Point::new(stop.name.clone(), stop.location.lat, stop.location.lng)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteDirection {
    pub icon: String,
    pub text: String,
    pub length: String,
    pub time: String,
    /// First point of the step geometry; `None` when it decodes to nothing.
    pub location: Option<LatLng>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub name: String,
    pub summary: RouteSummary,
    pub stops: Vec<RouteStop>,
    pub directions: Vec<RouteDirection>,
    pub path: FeatureCollection,
}
