//! Test fixtures for route-synth.
//!
//! Provides:
//! - Real Lithuanian landmarks used as waypoints
//! - A canned two-alternative `solve` response built from them

pub mod lithuania_locations;
pub mod solve_response;

pub use lithuania_locations::*;
pub use solve_response::*;
