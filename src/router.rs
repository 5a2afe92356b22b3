//! Route orchestration: point list, solve, build, draw.

use tracing::{debug, info};

use crate::arcgis::{ArcGisClient, ArcGisConfig};
use crate::builder::NarrativeBuilder;
use crate::config::RouterConfig;
use crate::drawer::LayerDrawer;
use crate::error::RouteError;
use crate::response::RawRouteResponse;
use crate::traits::{RouteBuilder, RouteDrawer, RouteFormatter, RouteSolver};
use crate::types::{LatLng, Point, Route};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterState {
    /// No points.
    Empty,
    /// Points present but no result for the current list.
    Accumulating,
    /// A result exists and the points are unchanged since it was built.
    Built,
}

/// Owns the waypoint list and the latest routes built from it.
///
/// The router is meant for one caller at a time. `build` blocks for the
/// whole solve request and cannot be cancelled; a caller that shares a
/// router must serialize its calls itself.
pub struct Router {
    solver: Box<dyn RouteSolver>,
    builder: Box<dyn RouteBuilder>,
    drawer: Box<dyn RouteDrawer>,
    points: Vec<Point>,
    routes: Option<Vec<Route>>,
    original_route: Option<RawRouteResponse>,
    stale: bool,
}

impl Router {
    /// Creates a router with the default HTTP solver, narrative builder
    /// and in-memory drawer.
    pub fn new(config: RouterConfig) -> Result<Self, RouteError> {
        let config = config.localized();

        let solver = ArcGisClient::new(ArcGisConfig {
            url: config.url,
            timeout_secs: config.timeout_secs,
            options: config.solver,
        })?;
        let builder = NarrativeBuilder::new(config.builder, config.formatter);
        let drawer = LayerDrawer::new(config.drawer);

        Ok(Self::with_collaborators(
            Box::new(solver),
            Box::new(builder),
            Box::new(drawer),
        ))
    }

    pub fn with_collaborators(
        solver: Box<dyn RouteSolver>,
        builder: Box<dyn RouteBuilder>,
        drawer: Box<dyn RouteDrawer>,
    ) -> Self {
        Self {
            solver,
            builder,
            drawer,
            points: Vec::new(),
            routes: None,
            original_route: None,
            stale: false,
        }
    }

    pub fn attach(&mut self) -> &mut Self {
        self.drawer.attach();
        self
    }

    /// Appends a point and shows it right away. Points without finite
    /// coordinates are skipped; a point the drawer refuses is not added.
    pub fn add_point(&mut self, point: Point) -> Result<&mut Self, RouteError> {
        if !point.is_valid() {
            debug!(label = %point.label, "skipping point without coordinates");
            return Ok(self);
        }

        self.drawer.add_point(&point)?;
        self.points.push(point);
        self.stale = true;
        Ok(self)
    }

    pub fn add_points<I>(&mut self, points: I) -> Result<&mut Self, RouteError>
    where
        I: IntoIterator<Item = Point>,
    {
        for point in points {
            self.add_point(point)?;
        }
        Ok(self)
    }

    /// Replaces the point list.
    pub fn set_points<I>(&mut self, points: I) -> Result<&mut Self, RouteError>
    where
        I: IntoIterator<Item = Point>,
    {
        self.points.clear();
        self.stale = true;
        self.add_points(points)
    }

    /// Removes the first point at the same location.
    pub fn remove_point(&mut self, point: &Point) -> Result<&mut Self, RouteError> {
        let position = self
            .points
            .iter()
            .position(|p| p.lat == point.lat && p.lng == point.lng);

        if let Some(index) = position {
            self.drawer.remove_point(point)?;
            self.points.remove(index);
            self.stale = true;
        }
        Ok(self)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Routes of the last successful build, even if points changed since.
    pub fn routes(&self) -> Option<&[Route]> {
        self.routes.as_deref()
    }

    pub fn original_route(&self) -> Option<&RawRouteResponse> {
        self.original_route.as_ref()
    }

    pub fn state(&self) -> RouterState {
        if self.points.is_empty() {
            RouterState::Empty
        } else if self.routes.is_some() && !self.stale {
            RouterState::Built
        } else {
            RouterState::Accumulating
        }
    }

    /// Solves the current points and rebuilds the routes.
    ///
    /// Both the raw response and the routes are replaced on success. On
    /// failure the previous result is kept and the error is returned as is.
    pub fn build(&mut self) -> Result<&mut Self, RouteError> {
        if self.points.len() < 2 {
            return Err(RouteError::insufficient_points(self.points.len()));
        }

        let raw = self.solver.solve(&self.points)?;
        let routes = self.builder.build(&raw)?;
        info!(
            points = self.points.len(),
            routes = routes.len(),
            "route built"
        );

        self.original_route = Some(raw);
        self.routes = Some(routes);
        self.stale = false;
        Ok(self)
    }

    /// Redraws every route from scratch: stop markers, then its path.
    pub fn draw(&mut self) -> Result<&mut Self, RouteError> {
        let routes = self.routes.as_ref().ok_or_else(|| {
            RouteError::PrerequisiteNotReady("route has not been built".to_string())
        })?;

        self.drawer.clear();
        for route in routes {
            let stops: Vec<Point> = route.stops.iter().map(Point::from).collect();
            self.drawer.add_points(&stops)?;
            self.drawer.draw(&route.path)?;
        }
        debug!(routes = routes.len(), "routes drawn");
        Ok(self)
    }

    /// Drops points, results and everything drawn.
    pub fn clear(&mut self) -> &mut Self {
        self.points.clear();
        self.routes = None;
        self.original_route = None;
        self.stale = false;
        self.drawer.clear();
        self
    }

    pub fn pan_to(&mut self, location: LatLng, zoom: Option<u8>) -> Result<&mut Self, RouteError> {
        self.drawer.pan_to(location, zoom)?;
        Ok(self)
    }

    pub fn show_direction_marker(&mut self, location: LatLng) -> Result<&mut Self, RouteError> {
        self.drawer.show_direction_marker(location)?;
        Ok(self)
    }

    pub fn hide_direction_marker(&mut self) -> Result<&mut Self, RouteError> {
        self.drawer.hide_direction_marker()?;
        Ok(self)
    }

    pub fn set_solver(&mut self, solver: impl RouteSolver + 'static) -> &mut Self {
        self.solver = Box::new(solver);
        self
    }

    pub fn set_builder(&mut self, builder: impl RouteBuilder + 'static) -> &mut Self {
        self.builder = Box::new(builder);
        self
    }

    pub fn set_drawer(&mut self, drawer: impl RouteDrawer + 'static) -> &mut Self {
        self.drawer = Box::new(drawer);
        self
    }

    /// Replaces the formatter of the current builder.
    pub fn set_formatter(&mut self, formatter: impl RouteFormatter + 'static) -> &mut Self {
        self.builder.set_formatter(Box::new(formatter));
        self
    }
}
