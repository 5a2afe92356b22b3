//! Conversion of native feature sets into GeoJSON feature collections.

use geojson::{Feature, FeatureCollection, Geometry, Value};

use crate::error::RouteError;
use crate::response::{FeatureSet, NativeFeature};

/// Output geometry kind selected by the native geometry type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryType {
    Point,
    MultiPoint,
    LineString,
    Polygon,
}

impl GeometryType {
    /// Maps a native geometry type code. Unknown or missing codes map to
    /// `Point`.
    pub fn from_native(code: Option<&str>) -> Self {
        match code {
            Some("esriGeometryMultipoint") | Some("esriGeometryMultiPoint") => {
                GeometryType::MultiPoint
            }
            Some("esriGeometryPolyline") => GeometryType::LineString,
            Some("esriGeometryPolygon") => GeometryType::Polygon,
            _ => GeometryType::Point,
        }
    }
}

/// Converts a native feature set, one output feature per input feature.
///
/// An absent set is a parse error; a set without features is valid and
/// yields an empty collection.
pub fn convert_feature_collection(
    native: Option<&FeatureSet>,
) -> Result<FeatureCollection, RouteError> {
    let native = native
        .ok_or_else(|| RouteError::Parse("feature collection is absent".to_string()))?;
    let geometry_type = GeometryType::from_native(native.geometry_type.as_deref());

    let features = native
        .features
        .iter()
        .map(|feature| convert_feature(feature, geometry_type))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}

fn convert_feature(
    feature: &NativeFeature,
    geometry_type: GeometryType,
) -> Result<Feature, RouteError> {
    let geometry = feature.geometry.as_ref();

    let value = match geometry_type {
        GeometryType::Polygon => geometry
            .and_then(|g| g.rings.clone())
            .map(Value::Polygon)
            .ok_or_else(|| RouteError::Parse("polygon feature without rings".to_string()))?,
        GeometryType::LineString => geometry
            .and_then(|g| g.paths.as_ref())
            .and_then(|paths| paths.first().cloned())
            .map(Value::LineString)
            .ok_or_else(|| RouteError::Parse("polyline feature without paths".to_string()))?,
        GeometryType::Point => match geometry.and_then(|g| g.x.zip(g.y)) {
            Some((x, y)) => Value::Point(vec![x, y]),
            None => return Err(RouteError::Parse("point feature without x/y".to_string())),
        },
        // Multipoint coordinates are not carried over.
        GeometryType::MultiPoint => Value::MultiPoint(Vec::new()),
    };

    Ok(Feature {
        bbox: None,
        geometry: Some(Geometry::new(value)),
        id: None,
        properties: Some(feature.attributes.clone()),
        foreign_members: None,
    })
}
