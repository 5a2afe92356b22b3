//! Lithuanian landmarks for realistic waypoints.
//!
//! Coordinates sourced from OpenStreetMap.

use route_synth::Point;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn point(&self) -> Point {
        Point::new(self.name, self.lat, self.lng)
    }
}

pub const VILNIUS_CATHEDRAL: Location = Location::new("Vilnius Cathedral", 54.6857, 25.2877);
pub const TRAKAI_CASTLE: Location = Location::new("Trakai Island Castle", 54.6525, 24.9336);
pub const KAUNAS_CASTLE: Location = Location::new("Kaunas Castle", 54.8990, 23.8852);
