//! Barycentric (ternary) mapping for triangle charts
//!
//! A ternary point is three percentages (top, right, left) that conventionally
//! sum to 100. Its Cartesian position is the weighted sum of the triangle's
//! vertices: `P = a·Top + b·Right + c·Left` with weights divided by 100.

use serde::{Deserialize, Serialize};

use super::Point;

/// Cartesian corners of a ternary chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriangleVertices {
    pub top: Point,
    pub right: Point,
    pub left: Point,
}

impl TriangleVertices {
    /// Corners for a drawing canvas with a y-down origin in the top-left corner.
    pub fn for_canvas(width: f64, height: f64, padding: f64) -> Self {
        Self {
            top: Point::new(width / 2.0, padding),
            right: Point::new(width - padding, height - padding),
            left: Point::new(padding, height - padding),
        }
    }

    /// Unit equilateral triangle (side 1) in a y-up plane with the left corner at the origin.
    pub fn unit() -> Self {
        Self {
            top: Point::new(0.5, 3f64.sqrt() / 2.0),
            right: Point::new(1.0, 0.0),
            left: Point::ORIGIN,
        }
    }
}

/// Ternary weights in percent: `a` top, `b` right, `c` left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Barycentric {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Barycentric {
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    pub fn total(&self) -> f64 {
        self.a + self.b + self.c
    }
}

/// Map ternary percentages onto the triangle.
pub fn to_cartesian(p_a: f64, p_b: f64, p_c: f64, vertices: &TriangleVertices) -> Point {
    let a = p_a / 100.0;
    let b = p_b / 100.0;
    let c = p_c / 100.0;

    Point {
        x: a * vertices.top.x + b * vertices.right.x + c * vertices.left.x,
        y: a * vertices.top.y + b * vertices.right.y + c * vertices.left.y,
    }
}

/// Map an ordered list of ternary points to polygon vertices.
///
/// The polygon is closed implicitly (last vertex connects back to the first).
pub fn polygon_path(points: &[Barycentric], vertices: &TriangleVertices) -> Vec<Point> {
    points
        .iter()
        .map(|p| to_cartesian(p.a, p.b, p.c, vertices))
        .collect()
}

/// SVG path data (`M x,y L x,y ... Z`) for a closed ternary polygon.
///
/// Returns an empty string for an empty point list.
pub fn svg_path(points: &[Barycentric], vertices: &TriangleVertices) -> String {
    let coords = polygon_path(points, vertices);
    let Some((first, rest)) = coords.split_first() else {
        return String::new();
    };

    let mut d = format!("M {},{}", first.x, first.y);
    for p in rest {
        d.push_str(&format!(" L {},{}", p.x, p.y));
    }
    d.push_str(" Z");
    d
}
