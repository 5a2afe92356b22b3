//! In-memory drawing target.
//!
//! `LayerDrawer` records what a map widget would show: point markers, route
//! paths, direction markers and the current view. It stands in for a real
//! renderer and lets callers inspect the drawn state.

use geojson::FeatureCollection;
use tracing::debug;

use crate::config::{DrawerOptions, MarkerStyle};
use crate::error::RouteError;
use crate::traits::RouteDrawer;
use crate::types::{LatLng, Point};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View {
    pub center: LatLng,
    pub zoom: Option<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DirectionMarker {
    pub location: LatLng,
    pub style: MarkerStyle,
}

/// Default [`RouteDrawer`].
#[derive(Debug, Clone, Default)]
pub struct LayerDrawer {
    options: DrawerOptions,
    attached: bool,
    view: Option<View>,
    markers: Vec<Point>,
    paths: Vec<FeatureCollection>,
    direction_markers: Vec<DirectionMarker>,
}

impl LayerDrawer {
    pub fn new(options: DrawerOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn markers(&self) -> &[Point] {
        &self.markers
    }

    pub fn paths(&self) -> &[FeatureCollection] {
        &self.paths
    }

    pub fn direction_markers(&self) -> &[DirectionMarker] {
        &self.direction_markers
    }

    pub fn view(&self) -> Option<View> {
        self.view
    }

    fn ensure_attached(&self) -> Result<(), RouteError> {
        if self.attached {
            Ok(())
        } else {
            Err(RouteError::PrerequisiteNotReady(
                "no map attached to the drawer".to_string(),
            ))
        }
    }
}

impl RouteDrawer for LayerDrawer {
    /// Drawing is refused until the drawer is attached.
    fn attach(&mut self) {
        self.attached = true;
    }

    fn add_point(&mut self, point: &Point) -> Result<(), RouteError> {
        self.ensure_attached()?;
        self.markers.push(point.clone());
        self.view = Some(View {
            center: point.location(),
            zoom: Some(self.options.point_zoom),
        });
        Ok(())
    }

    fn remove_point(&mut self, point: &Point) -> Result<(), RouteError> {
        self.ensure_attached()?;
        if let Some(index) = self
            .markers
            .iter()
            .position(|marker| marker.lat == point.lat && marker.lng == point.lng)
        {
            self.markers.remove(index);
        }
        Ok(())
    }

    fn draw(&mut self, path: &FeatureCollection) -> Result<(), RouteError> {
        self.ensure_attached()?;
        self.paths.push(path.clone());
        Ok(())
    }

    fn clear(&mut self) {
        debug!(
            markers = self.markers.len(),
            paths = self.paths.len(),
            "clearing drawn layers"
        );
        self.markers.clear();
        self.paths.clear();
    }

    fn pan_to(&mut self, location: LatLng, zoom: Option<u8>) -> Result<(), RouteError> {
        self.ensure_attached()?;
        let zoom = zoom.or(self.view.and_then(|view| view.zoom));
        self.view = Some(View {
            center: location,
            zoom,
        });
        Ok(())
    }

    fn show_direction_marker(&mut self, location: LatLng) -> Result<(), RouteError> {
        self.ensure_attached()?;
        self.direction_markers.push(DirectionMarker {
            location,
            style: self.options.direction_marker_style.clone(),
        });
        Ok(())
    }

    fn hide_direction_marker(&mut self) -> Result<(), RouteError> {
        self.ensure_attached()?;
        self.direction_markers.clear();
        Ok(())
    }
}
