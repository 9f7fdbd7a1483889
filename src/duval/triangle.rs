//! Duval Triangle 1 classifier
//!
//! Normalizes CH4, C2H4 and C2H2 to percentages of their sum and walks an
//! ordered decision tree. Earlier rules take precedence over later, broader
//! ones; the tree approximates the published zone polygons rather than
//! reproducing their exact boundaries.

use crate::geometry::{percentages, to_cartesian, Point, TriangleVertices};
use crate::types::{triangle_thresholds as t, GasSample, TriangleResult, TriangleZone};

/// Classify a sample on the Duval Triangle 1.
///
/// Returns zone `N/A` with all-zero percentages when CH4 + C2H4 + C2H2 is zero.
pub fn classify_triangle(sample: &GasSample) -> TriangleResult {
    let Some([p_ch4, p_c2h4, p_c2h2]) = percentages([sample.ch4, sample.c2h4, sample.c2h2])
    else {
        tracing::debug!("Duval triangle: CH4 + C2H4 + C2H2 is zero, no classification");
        return TriangleResult {
            p_a: 0.0,
            p_b: 0.0,
            p_c: 0.0,
            zone: TriangleZone::NotApplicable,
        };
    };

    let zone = triangle_zone(p_ch4, p_c2h4, p_c2h2);
    tracing::debug!(p_ch4, p_c2h4, p_c2h2, zone = %zone, "Duval triangle classified");

    TriangleResult {
        p_a: p_ch4,
        p_b: p_c2h4,
        p_c: p_c2h2,
        zone,
    }
}

/// Decision tree over normalized percentages. First matching rule wins.
pub fn triangle_zone(p_ch4: f64, p_c2h4: f64, p_c2h2: f64) -> TriangleZone {
    // 1. PD corner
    if p_ch4 >= t::PD_CH4_MIN {
        return TriangleZone::PD;
    }

    // 2. Thermal band along the CH4-C2H4 edge
    if p_c2h2 < t::THERMAL_C2H2_MAX {
        return if p_c2h4 < t::T1_C2H4_MAX {
            TriangleZone::T1
        } else if p_c2h4 < t::T2_C2H4_MAX {
            TriangleZone::T2
        } else {
            TriangleZone::T3
        };
    }

    // 3. Lower-left corner
    if p_c2h2 >= t::DISCHARGE_C2H2_MIN && p_c2h4 < t::D1_C2H4_MAX {
        return TriangleZone::D1;
    }

    // 4. Lower-right corner, split by the l-k segment
    if p_c2h4 >= t::D1_C2H4_MAX && p_c2h2 >= t::DISCHARGE_C2H2_MIN {
        if p_c2h4 >= t::LK_C2H4_MIN && p_c2h2 < t::LK_C2H2_MAX {
            return if p_c2h2 < t::T3_TAIL_C2H2_MAX {
                TriangleZone::T3
            } else {
                TriangleZone::D2
            };
        }
        return TriangleZone::D2;
    }

    // 5. T3 extension below the thermal band
    if p_c2h4 >= t::T2_C2H4_MAX && p_c2h2 < t::T3_TAIL_C2H2_MAX {
        return TriangleZone::T3;
    }

    // 6. Everything else is mixed thermal and discharge
    TriangleZone::DT
}

/// Position of a classified result on a chart, or `None` for `N/A`.
pub fn triangle_point(result: &TriangleResult, vertices: &TriangleVertices) -> Option<Point> {
    match result.zone {
        TriangleZone::NotApplicable => None,
        _ => Some(to_cartesian(result.p_a, result.p_b, result.p_c, vertices)),
    }
}
