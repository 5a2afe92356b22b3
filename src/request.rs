//! Query construction for the `solve` endpoint.

use serde::Serialize;

use crate::config::SolverOptions;
use crate::error::RouteError;
use crate::types::Point;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpatialReference {
    pub wkid: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StopGeometry {
    pub x: f64,
    pub y: f64,
    pub spatial_reference: SpatialReference,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StopAttributes {
    pub name: String,
    pub route_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopFeature {
    pub geometry: StopGeometry,
    pub attributes: StopAttributes,
}

/// The `stops` parameter: one feature per point, in visiting order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StopsPayload {
    #[serde(rename = "type")]
    pub kind: String,
    pub features: Vec<StopFeature>,
    pub do_not_locate_on_restricted_elements: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    /// Response format and option flags, in request order.
    pub options: Vec<(String, String)>,
    pub stops: StopsPayload,
}

impl RouteRequest {
    /// All query parameters, with the stops payload serialized last.
    pub fn query_pairs(&self) -> Result<Vec<(String, String)>, RouteError> {
        let mut pairs = self.options.clone();
        pairs.push(("stops".to_string(), serde_json::to_string(&self.stops)?));
        Ok(pairs)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RouteRequestBuilder {
    options: SolverOptions,
}

impl RouteRequestBuilder {
    pub fn new(options: SolverOptions) -> Self {
        Self { options }
    }

    /// Builds the request for at least two points.
    ///
    /// Every stop carries its own label and the shared route name
    /// `"{first label} - {last label}"`.
    pub fn build(&self, points: &[Point]) -> Result<RouteRequest, RouteError> {
        let (first, last) = match points {
            [first, .., last] => (first, last),
            _ => return Err(RouteError::insufficient_points(points.len())),
        };

        let route_name = format!("{} - {}", first.label, last.label);
        let spatial_reference = SpatialReference {
            wkid: self.options.out_sr,
        };

        let features = points
            .iter()
            .map(|point| StopFeature {
                geometry: StopGeometry {
                    x: point.lng,
                    y: point.lat,
                    spatial_reference,
                },
                attributes: StopAttributes {
                    name: point.label.clone(),
                    route_name: route_name.clone(),
                },
            })
            .collect();

        Ok(RouteRequest {
            options: self.option_pairs(),
            stops: StopsPayload {
                kind: "features".to_string(),
                features,
                do_not_locate_on_restricted_elements: true,
            },
        })
    }

    fn option_pairs(&self) -> Vec<(String, String)> {
        let o = &self.options;
        let mut pairs = vec![
            ("f", "json".to_string()),
            ("returnDirections", o.return_directions.to_string()),
            ("returnRoutes", o.return_routes.to_string()),
            ("returnZ", o.return_z.to_string()),
            ("returnStops", o.return_stops.to_string()),
            ("returnBarriers", o.return_barriers.to_string()),
            ("returnPolygonBarriers", o.return_polygon_barriers.to_string()),
            ("returnPolylineBarriers", o.return_polyline_barriers.to_string()),
            ("outSR", o.out_sr.to_string()),
            ("outputLines", o.output_lines.clone()),
            ("impedanceAttributeName", o.impedance_attribute_name.clone()),
            ("directionsLanguage", o.directions_language.code().to_string()),
        ];
        if let Some(travel_mode) = &o.travel_mode {
            pairs.push(("travelMode", travel_mode.clone()));
        }

        pairs
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect()
    }
}
