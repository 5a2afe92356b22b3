//! Compressed step geometry and its decoded coordinate sequence.
//!
//! The service encodes a step's shape as a run of sign-prefixed base-32
//! integers: a scale coefficient followed by alternating x/y deltas. The
//! deltas accumulate from the first point of the string, so every decoded
//! point is `(sum of x deltas so far, sum of y deltas so far) / coefficient`.

use serde::{Deserialize, Serialize};

use crate::error::RouteError;
use crate::types::LatLng;

const RADIX: u32 = 32;

/// A decoded polyline in service order: each point is `(x, y)`, i.e.
/// `(lng, lat)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

impl Polyline {
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Decodes a compressed geometry string.
    ///
    /// An empty string decodes to an empty polyline. Anything else must be
    /// a coefficient followed by complete x/y pairs; a dangling delta, a
    /// zero coefficient or a token that is not base-32 is rejected.
    pub fn decompress(compressed: &str) -> Result<Self, RouteError> {
        let compressed = compressed.trim();
        if compressed.is_empty() {
            return Ok(Self::new(Vec::new()));
        }

        let tokens = split_signed_tokens(compressed)?;
        if tokens.len() % 2 == 0 {
            return Err(RouteError::MalformedGeometry(format!(
                "expected a coefficient and complete x/y pairs, got {} tokens",
                tokens.len()
            )));
        }

        let coefficient = parse_token(tokens[0])?;
        if coefficient == 0 {
            return Err(RouteError::MalformedGeometry(
                "coefficient must not be zero".to_string(),
            ));
        }
        let coefficient = coefficient as f64;

        let mut x: i64 = 0;
        let mut y: i64 = 0;
        let mut points = Vec::with_capacity(tokens.len() / 2);

        for pair in tokens[1..].chunks_exact(2) {
            x = accumulate(x, parse_token(pair[0])?)?;
            y = accumulate(y, parse_token(pair[1])?)?;
            points.push((x as f64 / coefficient, y as f64 / coefficient));
        }

        Ok(Self::new(points))
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// First point swapped into `(lat, lng)` order.
    pub fn first_location(&self) -> Option<LatLng> {
        self.points.first().map(|&(x, y)| LatLng::new(y, x))
    }
}

pub fn decode(compressed: &str) -> Result<Polyline, RouteError> {
    Polyline::decompress(compressed)
}

/// Location of the first decoded point, or `None` if there is none.
pub fn to_first_location(compressed: &str) -> Result<Option<LatLng>, RouteError> {
    Ok(decode(compressed)?.first_location())
}

/// Splits at every `+` or `-`, keeping the sign with its token.
fn split_signed_tokens(compressed: &str) -> Result<Vec<&str>, RouteError> {
    let starts: Vec<usize> = compressed
        .char_indices()
        .filter(|&(_, c)| c == '+' || c == '-')
        .map(|(i, _)| i)
        .collect();

    if starts.first() != Some(&0) {
        return Err(RouteError::MalformedGeometry(
            "geometry must start with a sign character".to_string(),
        ));
    }

    let mut tokens = Vec::with_capacity(starts.len());
    for (n, &start) in starts.iter().enumerate() {
        let end = starts.get(n + 1).copied().unwrap_or(compressed.len());
        let token = &compressed[start..end];
        if token.len() < 2 {
            return Err(RouteError::MalformedGeometry(format!(
                "empty token at offset {}",
                start
            )));
        }
        tokens.push(token);
    }

    Ok(tokens)
}

fn parse_token(token: &str) -> Result<i64, RouteError> {
    i64::from_str_radix(token, RADIX).map_err(|err| {
        RouteError::MalformedGeometry(format!("invalid base-32 token {:?}: {}", token, err))
    })
}

fn accumulate(total: i64, delta: i64) -> Result<i64, RouteError> {
    total
        .checked_add(delta)
        .ok_or_else(|| RouteError::MalformedGeometry("coordinate overflow".to_string()))
}
