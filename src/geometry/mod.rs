//! Plane geometry shared by the Duval charts
//!
//! - `barycentric`: ternary weights to Cartesian points (Duval Triangle)
//! - `polygon`: signed area and centroid of a closed polygon (Duval Pentagon)

pub mod barycentric;
pub mod polygon;

pub use barycentric::{polygon_path, svg_path, to_cartesian, Barycentric, TriangleVertices};
pub use polygon::{polygon_centroid, signed_area, PolygonCentroid};

use serde::{Deserialize, Serialize};

/// A point in a y-up Cartesian plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at distance `radius` along `angle_deg` (counter-clockwise from +x).
    pub fn from_polar(radius: f64, angle_deg: f64) -> Self {
        let theta = angle_deg.to_radians();
        Self {
            x: radius * theta.cos(),
            y: radius * theta.sin(),
        }
    }

    /// Distance from the origin.
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Polar angle in degrees, normalized to [0, 360).
    pub fn angle_deg(&self) -> f64 {
        let deg = self.y.atan2(self.x).to_degrees();
        let wrapped = deg.rem_euclid(360.0);
        // rem_euclid can round a tiny negative angle up to exactly 360.0
        if wrapped >= 360.0 {
            0.0
        } else {
            wrapped
        }
    }
}

/// Each value as a percentage of their sum, or `None` when the sum is zero.
///
/// Values are divided by the largest magnitude first, so the sum stays finite
/// for any finite input.
pub fn percentages<const N: usize>(values: [f64; N]) -> Option<[f64; N]> {
    let largest = values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    if largest == 0.0 {
        return None;
    }
    let scaled = values.map(|v| v / largest);
    let sum: f64 = scaled.iter().sum();
    if sum == 0.0 {
        return None;
    }
    Some(scaled.map(|v| v / sum * 100.0))
}
