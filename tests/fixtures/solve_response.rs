//! Canned `solve` responses.

use serde_json::{Value, json};

use super::lithuania_locations::{KAUNAS_CASTLE, Location, TRAKAI_CASTLE, VILNIUS_CATHEDRAL};

pub const COEFFICIENT: i64 = 100_000;

/// Encodes `(x, y)` points as compressed geometry: the coefficient, then
/// deltas accumulated from the first point.
pub fn compress(coefficient: i64, points: &[(f64, f64)]) -> String {
    let mut out = base32(coefficient);
    let (mut prev_x, mut prev_y) = (0i64, 0i64);
    for &(x, y) in points {
        let x = (x * coefficient as f64).round() as i64;
        let y = (y * coefficient as f64).round() as i64;
        out.push_str(&base32(x - prev_x));
        out.push_str(&base32(y - prev_y));
        prev_x = x;
        prev_y = y;
    }
    out
}

fn base32(value: i64) -> String {
    let sign = if value < 0 { '-' } else { '+' };
    let mut rest = value.unsigned_abs();
    let mut digits = Vec::new();
    loop {
        digits.push(std::char::from_digit((rest % 32) as u32, 32).expect("digit below radix"));
        rest /= 32;
        if rest == 0 {
            break;
        }
    }
    digits.push(sign);
    digits.iter().rev().collect()
}

pub fn step(text: &str, maneuver: &str, length_km: f64, time_min: f64, points: &[(f64, f64)]) -> Value {
    json!({
        "attributes": {
            "length": length_km,
            "time": time_min,
            "text": text,
            "ETA": 1_700_000_000_000i64,
            "maneuverType": maneuver
        },
        "compressedGeometry": compress(COEFFICIENT, points)
    })
}

fn xy(location: &Location) -> (f64, f64) {
    (location.lng, location.lat)
}

pub fn stop(location: &Location, sequence: i64) -> Value {
    json!({
        "attributes": {
            "Name": location.name,
            "RouteName": "Vilnius Cathedral - Kaunas Castle",
            "Sequence": sequence
        },
        "geometry": {"x": location.lng, "y": location.lat}
    })
}

/// Two alternatives from Vilnius Cathedral to Kaunas Castle.
///
/// The first has three steps, the second four; both end at the castle.
pub fn two_route_response() -> Value {
    let start = xy(&VILNIUS_CATHEDRAL);
    let end = xy(&KAUNAS_CASTLE);
    let via = xy(&TRAKAI_CASTLE);

    json!({
        "routes": {
            "geometryType": "esriGeometryPolyline",
            "spatialReference": {"wkid": 4326},
            "features": [
                {
                    "attributes": {"ObjectID": 1, "Name": "Vilnius Cathedral - Kaunas Castle", "Total_Minutes": 78.3, "Total_Meters": 102.4},
                    "geometry": {"paths": [[[start.0, start.1], [25.25, 54.68], [end.0, end.1]]]}
                },
                {
                    "attributes": {"ObjectID": 2, "Name": "Vilnius Cathedral - Kaunas Castle (via Trakai)", "Total_Minutes": 85.0, "Total_Meters": 110.7},
                    "geometry": {"paths": [[[start.0, start.1], [via.0, via.1], [end.0, end.1]]]}
                }
            ]
        },
        "stops": {
            "geometryType": "esriGeometryPoint",
            "features": [stop(&VILNIUS_CATHEDRAL, 1), stop(&KAUNAS_CASTLE, 2)]
        },
        "directions": [
            {
                "routeId": 1,
                "routeName": "Vilnius Cathedral - Kaunas Castle",
                "summary": {"totalLength": 102.4, "totalTime": 78.3, "totalDriveTime": 78.3},
                "features": [
                    step("Start at Vilnius Cathedral", "esriDMTDepart", 0.0, 0.0, &[start]),
                    step("Turn left on A1", "esriDMTTurnLeft", 95.6, 70.2, &[(25.25, 54.68), end]),
                    step("Finish at Kaunas Castle", "esriDMTStop", 0.0, 0.0, &[])
                ]
            },
            {
                "routeId": 2,
                "routeName": "Vilnius Cathedral - Kaunas Castle (via Trakai)",
                "summary": {"totalLength": 110.7, "totalTime": 85.0, "totalDriveTime": 85.0},
                "features": [
                    step("Start at Vilnius Cathedral", "esriDMTDepart", 0.0, 0.0, &[start]),
                    step("Bear right toward {town}", "esriDMTBearRight", 25.3, 22.0, &[(25.25, 54.68), via]),
                    step("At the roundabout take the second exit", "esriDMTRoundabout", 85.4, 63.0, &[via, end]),
                    step("Finish at Kaunas Castle", "esriDMTStop", 0.0, 0.0, &[end])
                ]
            }
        ]
    })
}
