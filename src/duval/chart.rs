//! Duval Triangle 1 zone overlays
//!
//! Zone polygons are given in ternary percentages (CH4 top, C2H4 right,
//! C2H2 left) from the standard anchor points of the chart. They are display
//! data for renderers; classification goes through [`super::triangle_zone`].

use serde::Serialize;

use crate::geometry::{polygon_path, to_cartesian, Barycentric, Point, TriangleVertices};
use crate::types::TriangleZone;

use anchors as p;

const fn bc(a: f64, b: f64, c: f64) -> Barycentric {
    Barycentric::new(a, b, c)
}

/// Chart corners and anchor points a..o.
pub mod anchors {
    use super::{bc, Barycentric};

    pub const TOP: Barycentric = bc(100.0, 0.0, 0.0);
    pub const RIGHT: Barycentric = bc(0.0, 100.0, 0.0);
    pub const LEFT: Barycentric = bc(0.0, 0.0, 100.0);

    pub const A: Barycentric = bc(98.0, 0.0, 2.0);
    pub const B: Barycentric = bc(98.0, 2.0, 0.0);
    pub const C: Barycentric = bc(96.0, 0.0, 4.0);
    pub const D: Barycentric = bc(76.0, 20.0, 4.0);
    pub const E: Barycentric = bc(80.0, 20.0, 0.0);
    pub const F: Barycentric = bc(46.0, 50.0, 4.0);
    pub const G: Barycentric = bc(50.0, 50.0, 0.0);
    pub const H: Barycentric = bc(35.0, 50.0, 15.0);
    pub const I: Barycentric = bc(0.0, 85.0, 15.0);
    pub const J: Barycentric = bc(0.0, 71.0, 29.0);
    pub const K: Barycentric = bc(31.0, 40.0, 29.0);
    pub const L: Barycentric = bc(47.0, 40.0, 13.0);
    /// Triple point of D1, D2 and DT
    pub const M: Barycentric = bc(64.0, 23.0, 13.0);
    pub const N: Barycentric = bc(87.0, 0.0, 13.0);
    pub const O: Barycentric = bc(0.0, 23.0, 77.0);
}

/// One zone polygon of the chart.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ZoneBoundary {
    pub zone: TriangleZone,
    pub points: &'static [Barycentric],
    /// Explicit label anchor; otherwise the label goes at the vertex mean
    pub label_pos: Option<Barycentric>,
}

const BOUNDARIES: [ZoneBoundary; 7] = [
    ZoneBoundary {
        zone: TriangleZone::PD,
        points: &[p::TOP, p::B, p::A],
        label_pos: None,
    },
    ZoneBoundary {
        zone: TriangleZone::T1,
        points: &[p::B, p::E, p::D, p::C],
        label_pos: None,
    },
    ZoneBoundary {
        zone: TriangleZone::T2,
        points: &[p::E, p::G, p::F, p::D],
        label_pos: None,
    },
    ZoneBoundary {
        zone: TriangleZone::T3,
        points: &[p::G, p::RIGHT, p::I, p::H, p::F],
        label_pos: None,
    },
    ZoneBoundary {
        zone: TriangleZone::D1,
        points: &[p::N, p::M, p::O, p::LEFT],
        label_pos: None,
    },
    ZoneBoundary {
        zone: TriangleZone::D2,
        points: &[p::M, p::L, p::K, p::J, p::O],
        label_pos: Some(bc(20.0, 40.0, 40.0)),
    },
    ZoneBoundary {
        zone: TriangleZone::DT,
        points: &[p::C, p::D, p::F, p::H, p::I, p::J, p::K, p::L, p::M, p::N],
        label_pos: None,
    },
];

/// All Duval Triangle 1 zone polygons, drawing order.
pub fn triangle_zone_boundaries() -> &'static [ZoneBoundary] {
    &BOUNDARIES
}

impl ZoneBoundary {
    /// Ternary position for the zone label: the explicit anchor, or the mean
    /// of the first eight vertices at most.
    pub fn label_anchor(&self) -> Barycentric {
        if let Some(pos) = self.label_pos {
            return pos;
        }
        let sampled = &self.points[..self.points.len().min(8)];
        let n = sampled.len() as f64;
        let (a, b, c) = sampled
            .iter()
            .fold((0.0, 0.0, 0.0), |(a, b, c), pt| (a + pt.a, b + pt.b, c + pt.c));
        bc(a / n, b / n, c / n)
    }

    /// Polygon vertices on the given chart.
    pub fn outline(&self, vertices: &TriangleVertices) -> Vec<Point> {
        polygon_path(self.points, vertices)
    }

    /// Label position on the given chart.
    pub fn label_point(&self, vertices: &TriangleVertices) -> Point {
        let anchor = self.label_anchor();
        to_cartesian(anchor.a, anchor.b, anchor.c, vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duval::triangle_zone;
    use crate::geometry::signed_area;

    #[test]
    fn test_every_anchor_sums_to_100() {
        for boundary in triangle_zone_boundaries() {
            for pt in boundary.points {
                assert!((pt.total() - 100.0).abs() < 1e-9, "{:?} {pt:?}", boundary.zone);
            }
        }
    }

    #[test]
    fn test_one_polygon_per_zone() {
        let zones: Vec<_> = triangle_zone_boundaries().iter().map(|b| b.zone).collect();
        assert_eq!(zones.len(), 7);
        assert!(!zones.contains(&TriangleZone::NotApplicable));
    }

    #[test]
    fn test_zone_areas_fill_the_triangle() {
        // The a-b-c sliver next to PD belongs to no polygon on the published chart
        let v = TriangleVertices::unit();
        let total: f64 = triangle_zone_boundaries()
            .iter()
            .map(|b| signed_area(&b.outline(&v)).abs())
            .sum();
        let full = signed_area(&[v.top, v.right, v.left]).abs();
        assert!(total <= full + 1e-12, "zones {total} vs triangle {full}");
        assert!(total > 0.999 * full, "zones {total} vs triangle {full}");
    }

    #[test]
    fn test_labels_classify_into_own_zone() {
        // DT is a thin band; its vertex mean falls inside the T3 tail
        for boundary in triangle_zone_boundaries() {
            if boundary.zone != TriangleZone::DT {
                let anchor = boundary.label_anchor();
                assert_eq!(triangle_zone(anchor.a, anchor.b, anchor.c), boundary.zone);
            }
        }
    }

    #[test]
    fn test_d2_uses_explicit_label() {
        let d2 = triangle_zone_boundaries()
            .iter()
            .find(|b| b.zone == TriangleZone::D2)
            .unwrap();
        assert_eq!(d2.label_anchor(), bc(20.0, 40.0, 40.0));
    }
}
