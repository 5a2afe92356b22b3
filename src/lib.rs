//! route-synth
//!
//! Turns network analyst `solve` responses into display-ready routes:
//! named summaries, ordered direction steps with icons, and GeoJSON paths.

pub mod arcgis;
pub mod builder;
pub mod config;
pub mod drawer;
pub mod error;
pub mod features;
pub mod formatter;
pub mod polyline;
pub mod request;
pub mod response;
pub mod router;
pub mod traits;
pub mod types;

pub use error::RouteError;
pub use router::{Router, RouterState};
pub use types::{LatLng, Point, Route, RouteDirection, RouteStop, RouteSummary};
