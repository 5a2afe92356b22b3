//! Synthesis of display-ready routes from a raw solve response.

use serde_json::{Map, Value};
use tracing::debug;

use crate::config::{BuilderOptions, FormatterOptions};
use crate::error::RouteError;
use crate::formatter::Formatter;
use crate::features::convert_feature_collection;
use crate::polyline::to_first_location;
use crate::response::{DirectionSet, FeatureSet, NativeFeature, RawRouteResponse};
use crate::traits::{RouteBuilder, RouteFormatter};
use crate::types::{LatLng, Route, RouteDirection, RouteStop, RouteSummary};

/// Route totals and step lengths come in kilometers and minutes.
const METERS_PER_KILOMETER: f64 = 1000.0;
const SECONDS_PER_MINUTE: f64 = 60.0;

/// Default [`RouteBuilder`].
pub struct NarrativeBuilder {
    options: BuilderOptions,
    formatter: Box<dyn RouteFormatter>,
}

impl Default for NarrativeBuilder {
    fn default() -> Self {
        Self::new(BuilderOptions::default(), FormatterOptions::default())
    }
}

impl NarrativeBuilder {
    pub fn new(options: BuilderOptions, formatter_options: FormatterOptions) -> Self {
        Self::with_formatter(options, Box::new(Formatter::new(formatter_options)))
    }

    pub fn with_formatter(options: BuilderOptions, formatter: Box<dyn RouteFormatter>) -> Self {
        Self { options, formatter }
    }

    /// Renders the summary template with `{name}`, `{distance}` and `{time}`.
    pub fn render_summary(&self, route: &Route) -> String {
        let mut data = Map::new();
        data.insert("name".to_string(), Value::from(route.name.as_str()));
        data.insert("distance".to_string(), Value::from(route.summary.length.as_str()));
        data.insert("time".to_string(), Value::from(route.summary.time.as_str()));
        self.formatter.template(&self.options.summary_template, &data)
    }

    fn build_route(
        &self,
        feature: &NativeFeature,
        directions: &DirectionSet,
        stops: &[RouteStop],
        routes: &FeatureSet,
    ) -> Result<Route, RouteError> {
        let meters = feature.number_attr("Total_Meters").unwrap_or(0.0) * METERS_PER_KILOMETER;
        let seconds = feature.number_attr("Total_Minutes").unwrap_or(0.0) * SECONDS_PER_MINUTE;

        Ok(Route {
            name: feature.str_attr("Name").unwrap_or_default().to_string(),
            summary: RouteSummary {
                length: self.formatter.format_distance(meters, None),
                time: self.formatter.format_time(seconds),
            },
            stops: stops.to_vec(),
            directions: self.build_directions(directions)?,
            // Every alternative is drawn from the whole routes collection.
            path: convert_feature_collection(Some(routes))?,
        })
    }

    fn build_directions(&self, directions: &DirectionSet) -> Result<Vec<RouteDirection>, RouteError> {
        let total_steps = directions.features.len();
        let no_overrides = Map::new();

        directions
            .features
            .iter()
            .enumerate()
            .map(|(index, step)| {
                Ok(RouteDirection {
                    icon: self.formatter.icon_name(step, index, total_steps),
                    text: self.formatter.format_step(step, &no_overrides),
                    length: self
                        .formatter
                        .format_distance(step.length() * METERS_PER_KILOMETER, None),
                    time: self.formatter.format_time(step.time() * SECONDS_PER_MINUTE),
                    location: to_first_location(&step.compressed_geometry)?,
                })
            })
            .collect()
    }
}

impl RouteBuilder for NarrativeBuilder {
    /// Builds one route per route feature, in response order.
    ///
    /// Stops are shared by every route. A route feature without a matching
    /// direction set fails with [`RouteError::MissingDirections`].
    fn build(&self, raw: &RawRouteResponse) -> Result<Vec<Route>, RouteError> {
        let routes = raw
            .routes
            .as_ref()
            .ok_or_else(|| RouteError::Parse("response has no routes".to_string()))?;
        let stops = build_stops(raw.stops.as_ref())?;

        let built = routes
            .features
            .iter()
            .enumerate()
            .map(|(index, feature)| {
                let directions = raw
                    .directions
                    .get(index)
                    .ok_or(RouteError::MissingDirections { route: index })?;
                self.build_route(feature, directions, &stops, routes)
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(routes = built.len(), stops = stops.len(), "built routes");
        Ok(built)
    }

    fn set_formatter(&mut self, formatter: Box<dyn RouteFormatter>) {
        self.formatter = formatter;
    }
}

fn build_stops(stops: Option<&FeatureSet>) -> Result<Vec<RouteStop>, RouteError> {
    let Some(stops) = stops else {
        return Ok(Vec::new());
    };

    let mut built = stops
        .features
        .iter()
        .map(|stop| {
            let (x, y) = stop
                .geometry
                .as_ref()
                .and_then(|g| g.x.zip(g.y))
                .ok_or_else(|| RouteError::Parse("stop without point geometry".to_string()))?;

            Ok(RouteStop {
                name: stop.str_attr("Name").unwrap_or_default().to_string(),
                sequence: stop
                    .attributes
                    .get("Sequence")
                    .and_then(Value::as_i64)
                    .unwrap_or_default(),
                location: LatLng::new(y, x),
            })
        })
        .collect::<Result<Vec<_>, RouteError>>()?;

    built.sort_by_key(|stop| stop.sequence);
    Ok(built)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn raw(value: serde_json::Value) -> RawRouteResponse {
        serde_json::from_value(value).unwrap()
    }

    fn single_route() -> serde_json::Value {
        json!({
            "routes": {
                "geometryType": "esriGeometryPolyline",
                "features": [{
                    "attributes": {"Name": "A - B", "Total_Meters": 1.5, "Total_Minutes": 1.5},
                    "geometry": {"paths": [[[25.0, 54.0], [25.1, 54.1]]]}
                }]
            },
            "stops": {
                "geometryType": "esriGeometryPoint",
                "features": [
                    {"attributes": {"Name": "B", "Sequence": 2}, "geometry": {"x": 25.1, "y": 54.1}},
                    {"attributes": {"Name": "A", "Sequence": 1}, "geometry": {"x": 25.0, "y": 54.0}}
                ]
            },
            "directions": [{
                "features": [
                    {"attributes": {"length": 0, "time": 0, "text": "Start at {name}", "maneuverType": "esriDMTDepart", "name": "A"},
                     "compressedGeometry": "+1+p+1m"},
                    {"attributes": {"length": 1.5, "time": 1.5, "text": "Finish at B", "maneuverType": "esriDMTStop"},
                     "compressedGeometry": "+1"}
                ]
            }]
        })
    }

    #[test]
    fn test_builds_summary_with_unit_scaling() {
        let routes = NarrativeBuilder::default().build(&raw(single_route())).unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].name, "A - B");
        assert_eq!(routes[0].summary.length, "1.5 km");
        assert_eq!(routes[0].summary.time, "1 min 30 s");
    }

    #[test]
    fn test_stops_are_ordered_and_swapped() {
        let routes = NarrativeBuilder::default().build(&raw(single_route())).unwrap();
        let stops = &routes[0].stops;
        assert_eq!(stops[0].name, "A");
        assert_eq!(stops[0].sequence, 1);
        assert_eq!(stops[0].location, LatLng::new(54.0, 25.0));
        assert_eq!(stops[1].name, "B");
        assert_eq!(stops[1].location, LatLng::new(54.1, 25.1));
    }

    #[test]
    fn test_directions_follow_step_order() {
        let routes = NarrativeBuilder::default().build(&raw(single_route())).unwrap();
        let directions = &routes[0].directions;
        assert_eq!(directions.len(), 2);

        assert_eq!(directions[0].icon, "depart");
        assert_eq!(directions[0].text, "Start at A");
        assert_eq!(directions[0].length, "0 m");
        assert_eq!(directions[0].time, "0 s");
        // p = 25, 1m = 54 in base 32
        assert_eq!(directions[0].location, Some(LatLng::new(54.0, 25.0)));

        assert_eq!(directions[1].icon, "arrive");
        assert_eq!(directions[1].length, "1.5 km");
        assert_eq!(directions[1].location, None);
    }

    #[test]
    fn test_missing_routes_is_a_parse_error() {
        let result = NarrativeBuilder::default().build(&RawRouteResponse::default());
        assert!(matches!(result, Err(RouteError::Parse(_))));
    }

    #[test]
    fn test_short_directions_are_reported() {
        let mut value = single_route();
        value["directions"] = json!([]);
        let result = NarrativeBuilder::default().build(&raw(value));
        assert!(matches!(result, Err(RouteError::MissingDirections { route: 0 })));
    }

    #[test]
    fn test_malformed_step_geometry_fails_the_build() {
        let mut value = single_route();
        value["directions"][0]["features"][1]["compressedGeometry"] = json!("+1+2");
        let result = NarrativeBuilder::default().build(&raw(value));
        assert!(matches!(result, Err(RouteError::MalformedGeometry(_))));
    }

    #[test]
    fn test_renders_summary_template() {
        let builder = NarrativeBuilder::default();
        let routes = builder.build(&raw(single_route())).unwrap();
        assert_eq!(
            builder.render_summary(&routes[0]),
            "<h2>A - B</h2><h3>1.5 km, 1 min 30 s</h3>"
        );
    }

    struct ShoutingFormatter;

    impl RouteFormatter for ShoutingFormatter {
        fn format_distance(&self, meters: f64, _sensitivity: Option<f64>) -> String {
            format!("{}M", meters)
        }

        fn format_time(&self, seconds: f64) -> String {
            format!("{}S", seconds)
        }

        fn icon_name(&self, _step: &crate::response::DirectionStep, index: usize, _total: usize) -> String {
            format!("ICON{}", index)
        }

        fn format_step(&self, step: &crate::response::DirectionStep, _overrides: &Map<String, Value>) -> String {
            step.text().to_uppercase()
        }

        fn template(&self, template: &str, _data: &Map<String, Value>) -> String {
            template.to_string()
        }
    }

    #[test]
    fn test_replacement_formatter_is_used() {
        let mut builder = NarrativeBuilder::default();
        builder.set_formatter(Box::new(ShoutingFormatter));
        let routes = builder.build(&raw(single_route())).unwrap();

        assert_eq!(routes[0].summary.length, "1500M");
        assert_eq!(routes[0].summary.time, "90S");
        assert_eq!(routes[0].directions[1].icon, "ICON1");
        assert_eq!(routes[0].directions[1].text, "FINISH AT B");
    }
}
