//! Native response schema of the network analyst `solve` endpoint.
//!
//! Only the parts the route builder reads are typed. Feature attributes stay
//! as JSON maps so they can pass through to the standard feature
//! properties untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Raw `solve` response: route features, echoed stops, and one direction
/// set per route (`routes.features[i]` pairs with `directions[i]`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawRouteResponse {
    #[serde(default)]
    pub routes: Option<FeatureSet>,
    #[serde(default)]
    pub stops: Option<FeatureSet>,
    #[serde(default)]
    pub directions: Vec<DirectionSet>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureSet {
    #[serde(default)]
    pub geometry_type: Option<String>,
    #[serde(default)]
    pub features: Vec<NativeFeature>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NativeFeature {
    #[serde(default)]
    pub attributes: Map<String, Value>,
    #[serde(default)]
    pub geometry: Option<NativeGeometry>,
}

impl NativeFeature {
    pub fn str_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(Value::as_str)
    }

    pub fn number_attr(&self, key: &str) -> Option<f64> {
        self.attributes.get(key).and_then(Value::as_f64)
    }
}

/// Union of the native point, multipoint, polyline and polygon shapes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NativeGeometry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<Vec<f64>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paths: Option<Vec<Vec<Vec<f64>>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rings: Option<Vec<Vec<Vec<f64>>>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionSet {
    #[serde(default)]
    pub route_id: Option<i64>,
    #[serde(default)]
    pub route_name: Option<String>,
    #[serde(default)]
    pub summary: Option<DirectionSummary>,
    #[serde(default)]
    pub features: Vec<DirectionStep>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DirectionSummary {
    pub total_length: f64,
    pub total_time: f64,
    pub total_drive_time: f64,
}

/// One maneuver of a route narrative.
///
/// `length` is in kilometers and `time` in minutes, like the route totals.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionStep {
    #[serde(default)]
    pub attributes: Map<String, Value>,
    #[serde(default)]
    pub compressed_geometry: String,
}

impl DirectionStep {
    pub fn length(&self) -> f64 {
        self.attributes.get("length").and_then(Value::as_f64).unwrap_or(0.0)
    }

    pub fn time(&self) -> f64 {
        self.attributes.get("time").and_then(Value::as_f64).unwrap_or(0.0)
    }

    /// Narrative template, e.g. `"Turn left on {street}"`.
    pub fn text(&self) -> &str {
        self.attributes
            .get("text")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn maneuver_type(&self) -> Option<&str> {
        self.attributes.get("maneuverType").and_then(Value::as_str)
    }

    pub fn maneuver(&self) -> Option<Maneuver> {
        self.maneuver_type().and_then(Maneuver::from_code)
    }
}

/// Maneuver codes the formatter knows an icon for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Maneuver {
    Depart,
    WaypointReached,
    Roundabout,
    Stop,
    Straight,
    BearRight,
    TurnRight,
    SharpRight,
    UTurn,
    SharpLeft,
    TurnLeft,
    BearLeft,
}

impl Maneuver {
    pub fn from_code(code: &str) -> Option<Self> {
        let maneuver = match code {
            "esriDMTDepart" => Maneuver::Depart,
            "WaypointReached" | "esriDMTWaypointReached" => Maneuver::WaypointReached,
            "esriDMTRoundabout" => Maneuver::Roundabout,
            "esriDMTStop" => Maneuver::Stop,
            "esriDMTStraight" => Maneuver::Straight,
            "esriDMTBearRight" => Maneuver::BearRight,
            "esriDMTTurnRight" | "esriDMTTurnRightLeft" => Maneuver::TurnRight,
            "esriDMTSharpRight" => Maneuver::SharpRight,
            "esriDMTUTurn" => Maneuver::UTurn,
            "esriDMTSharpLeft" => Maneuver::SharpLeft,
            "esriDMTTurnLeft" | "esriDMTTurnLeftLeft" => Maneuver::TurnLeft,
            "esriDMTBearLeft" => Maneuver::BearLeft,
            _ => return None,
        };
        Some(maneuver)
    }
}
