//! Polygon area and centroid (shoelace formula)
//!
//! For a closed polygon with vertices `(x_i, y_i)`, indices wrapping at `n`:
//!
//! - `A  = ½ Σ (x_i·y_{i+1} − x_{i+1}·y_i)`
//! - `Cx = (1 / 6A) Σ (x_i + x_{i+1})(x_i·y_{i+1} − x_{i+1}·y_i)`
//! - `Cy = (1 / 6A) Σ (y_i + y_{i+1})(x_i·y_{i+1} − x_{i+1}·y_i)`
//!
//! `A` is positive for counter-clockwise vertex order.

use serde::{Deserialize, Serialize};

use super::Point;

/// Centroid of a polygon together with its signed area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolygonCentroid {
    pub centroid: Point,
    pub signed_area: f64,
    /// True when `|A|` fell below the epsilon and the centroid was replaced
    /// by the origin
    pub degenerate: bool,
}

/// Signed area of a closed polygon.
pub fn signed_area(vertices: &[Point]) -> f64 {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }
    let twice: f64 = (0..n)
        .map(|i| {
            let curr = vertices[i];
            let next = vertices[(i + 1) % n];
            curr.x * next.y - next.x * curr.y
        })
        .sum();
    twice * 0.5
}

/// Area-weighted centroid of a closed polygon.
///
/// When `|A| < area_epsilon` (fewer than three vertices, collinear vertices,
/// or a star with a single non-zero arm) the centroid is undefined and the
/// origin is returned with `degenerate = true`.
pub fn polygon_centroid(vertices: &[Point], area_epsilon: f64) -> PolygonCentroid {
    let n = vertices.len();
    let mut twice_area = 0.0;
    let mut cx_sum = 0.0;
    let mut cy_sum = 0.0;

    if n >= 3 {
        for i in 0..n {
            let curr = vertices[i];
            let next = vertices[(i + 1) % n];
            let cross = curr.x * next.y - next.x * curr.y;

            twice_area += cross;
            cx_sum += (curr.x + next.x) * cross;
            cy_sum += (curr.y + next.y) * cross;
        }
    }

    let area = twice_area * 0.5;
    if area.abs() < area_epsilon || !area.is_finite() {
        return PolygonCentroid {
            centroid: Point::ORIGIN,
            signed_area: area,
            degenerate: true,
        };
    }

    let scale = 1.0 / (6.0 * area);
    PolygonCentroid {
        centroid: Point::new(cx_sum * scale, cy_sum * scale),
        signed_area: area,
        degenerate: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn unit_square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ]
    }

    #[test]
    fn test_square_area_and_centroid() {
        let result = polygon_centroid(&unit_square(), EPS);
        assert!(!result.degenerate);
        assert!((result.signed_area - 1.0).abs() < 1e-12);
        assert!((result.centroid.x - 0.5).abs() < 1e-12);
        assert!((result.centroid.y - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_clockwise_order_negates_area_not_centroid() {
        let mut square = unit_square();
        square.reverse();
        let result = polygon_centroid(&square, EPS);
        assert!((result.signed_area + 1.0).abs() < 1e-12);
        assert!((result.centroid.x - 0.5).abs() < 1e-12);
        assert!((result.centroid.y - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_triangle_centroid_is_vertex_mean() {
        let tri = [Point::new(0.0, 0.0), Point::new(6.0, 0.0), Point::new(0.0, 3.0)];
        let result = polygon_centroid(&tri, EPS);
        assert!((result.signed_area - 9.0).abs() < 1e-12);
        assert!((result.centroid.x - 2.0).abs() < 1e-12);
        assert!((result.centroid.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_collinear_is_degenerate() {
        let line = [Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 2.0)];
        let result = polygon_centroid(&line, EPS);
        assert!(result.degenerate);
        assert_eq!(result.centroid, Point::ORIGIN);
        assert!(result.centroid.x.is_finite());
    }

    #[test]
    fn test_too_few_vertices() {
        assert_eq!(signed_area(&[Point::new(1.0, 1.0), Point::new(2.0, 0.0)]), 0.0);
        assert!(polygon_centroid(&[], EPS).degenerate);
    }

    #[test]
    fn test_signed_area_matches_centroid_area() {
        let square = unit_square();
        assert_eq!(signed_area(&square), polygon_centroid(&square, EPS).signed_area);
    }
}
