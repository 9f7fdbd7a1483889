//! Duval Pentagon 1 engine
//!
//! The five hydrocarbon gases are normalized to percentages and laid out on
//! five axes 72° apart (H2 at 90°, then C2H6, CH4, C2H4, C2H2 counter-clockwise).
//! The fault vector is the area-weighted centroid of the resulting irregular
//! pentagon, and its zone is read from the centroid's polar angle.
//!
//! The angular sectors are an approximation of the published pentagon zones,
//! whose real boundaries are irregular polygons that do not all meet at the
//! centre. Sector limits are kept as-is until a domain expert signs off on a
//! polygon-based replacement.
//!
//! A degenerate polygon or a centroid at the origin has no meaningful angle, so
//! it is reported as `Undetermined` rather than read off the sector table at 0°.

use serde::{Deserialize, Serialize};

use crate::geometry::{percentages, polygon_centroid, Point};
use crate::types::{pentagon_thresholds as t, GasSample, PentagonResult, PentagonZone};

/// Numerical tolerances for the centroid computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PentagonParams {
    /// `|A|` below this is a degenerate polygon; the centroid becomes the origin
    pub degenerate_area_epsilon: f64,
    /// Centroids closer to the origin than this have no usable angle
    pub origin_epsilon: f64,
}

impl Default for PentagonParams {
    fn default() -> Self {
        Self {
            degenerate_area_epsilon: t::DEGENERATE_AREA_EPSILON,
            origin_epsilon: t::ORIGIN_EPSILON,
        }
    }
}

/// Gas percentages in axis order: H2, C2H6, CH4, C2H4, C2H2.
///
/// Returns `None` when all five gases are zero.
pub fn pentagon_percentages(sample: &GasSample) -> Option<[f64; 5]> {
    percentages([sample.h2, sample.c2h6, sample.ch4, sample.c2h4, sample.c2h2])
}

/// Vertices of the gas polygon: each percentage placed on its axis.
pub fn pentagon_vertices(percentages: &[f64; 5]) -> [Point; 5] {
    std::array::from_fn(|i| Point::from_polar(percentages[i], t::AXES_DEG[i]))
}

/// Locate and classify a sample on the Duval Pentagon 1 with default tolerances.
pub fn analyze_pentagon(sample: &GasSample) -> PentagonResult {
    analyze_pentagon_with(sample, &PentagonParams::default())
}

/// Locate and classify a sample on the Duval Pentagon 1.
pub fn analyze_pentagon_with(sample: &GasSample, params: &PentagonParams) -> PentagonResult {
    let Some(percentages) = pentagon_percentages(sample) else {
        tracing::debug!("Duval pentagon: all five gases are zero, no point");
        return PentagonResult {
            point: None,
            angle_deg: None,
            zone: PentagonZone::NotApplicable,
        };
    };

    let vertices = pentagon_vertices(&percentages);
    let centroid = polygon_centroid(&vertices, params.degenerate_area_epsilon);
    let point = centroid.centroid;

    if centroid.degenerate || point.norm() < params.origin_epsilon {
        tracing::debug!(
            area = centroid.signed_area,
            degenerate = centroid.degenerate,
            "Duval pentagon: centroid at origin, zone undetermined"
        );
        return PentagonResult {
            point: Some(point),
            angle_deg: None,
            zone: PentagonZone::Undetermined,
        };
    }

    let angle = point.angle_deg();
    let zone = sector_zone(angle);
    tracing::debug!(x = point.x, y = point.y, angle, zone = %zone, "Duval pentagon classified");

    PentagonResult {
        point: Some(point),
        angle_deg: Some(angle),
        zone,
    }
}

/// Zone for a polar angle in degrees. Angles outside [0, 360) are wrapped.
pub fn sector_zone(angle_deg: f64) -> PentagonZone {
    let a = angle_deg.rem_euclid(360.0);
    if !a.is_finite() {
        return PentagonZone::Undetermined;
    }

    match a {
        a if (t::PD_START_DEG..t::S_START_DEG).contains(&a) => PentagonZone::PD,
        a if (t::S_START_DEG..t::T1_START_DEG).contains(&a) => PentagonZone::S,
        a if (t::T1_START_DEG..t::T2_START_DEG).contains(&a) => PentagonZone::T1,
        a if (t::T2_START_DEG..t::T3_START_DEG).contains(&a) => PentagonZone::T2,
        a if (t::T3_START_DEG..t::D2_START_DEG).contains(&a) => PentagonZone::T3,
        a if (t::D1_START_DEG..t::PD_START_DEG).contains(&a) => PentagonZone::D1,
        // [320, 360) and [0, 10)
        _ => PentagonZone::D2,
    }
}

/// End-points of the five axes for a chart of the given radius, in axis order.
pub fn axis_vertices(radius: f64) -> [Point; 5] {
    t::AXES_DEG.map(|deg| Point::from_polar(radius, deg))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pentagon_sample(h2: f64, c2h6: f64, ch4: f64, c2h4: f64, c2h2: f64) -> GasSample {
        GasSample::new(h2, ch4, c2h6, c2h4, c2h2, 0.0, 0.0)
    }

    #[test]
    fn test_all_zero_has_no_point() {
        let result = analyze_pentagon(&GasSample::new(0.0, 0.0, 0.0, 0.0, 0.0, 400.0, 3000.0));
        assert_eq!(result.point, None);
        assert_eq!(result.zone, PentagonZone::NotApplicable);
    }

    #[test]
    fn test_equal_gases_centroid_at_origin() {
        let result = analyze_pentagon(&pentagon_sample(10.0, 10.0, 10.0, 10.0, 10.0));
        let point = result.point.unwrap();
        assert!(point.norm() < 1e-9, "centroid {point:?}");
        assert_eq!(result.zone, PentagonZone::Undetermined);
        assert_eq!(result.angle_deg, None);
    }

    #[test]
    fn test_single_gas_is_degenerate() {
        for sample in [
            pentagon_sample(100.0, 0.0, 0.0, 0.0, 0.0),
            pentagon_sample(0.0, 0.0, 0.0, 0.0, 7.0),
        ] {
            let result = analyze_pentagon(&sample);
            assert_eq!(result.point, Some(Point::ORIGIN));
            assert_eq!(result.zone, PentagonZone::Undetermined);
        }
    }

    #[test]
    fn test_percentages_in_axis_order() {
        let pct = pentagon_percentages(&pentagon_sample(50.0, 20.0, 20.0, 5.0, 5.0)).unwrap();
        for (got, want) in pct.iter().zip([50.0, 20.0, 20.0, 5.0, 5.0]) {
            assert!((got - want).abs() < 1e-12, "{pct:?}");
        }
        assert!((pct.iter().sum::<f64>() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_vertices_lie_on_axes() {
        let v = pentagon_vertices(&[50.0, 0.0, 0.0, 0.0, 0.0]);
        assert!(v[0].x.abs() < 1e-12);
        assert!((v[0].y - 50.0).abs() < 1e-12);
        assert!(v[1].norm() < 1e-12);
    }

    #[test]
    fn test_h2_dominant_points_up() {
        // H2 with small equal neighbours: centroid on the H2 axis
        let result = analyze_pentagon(&pentagon_sample(80.0, 5.0, 5.0, 5.0, 5.0));
        let angle = result.angle_deg.unwrap();
        assert!((angle - 90.0).abs() < 1e-6, "angle {angle}");
        assert_eq!(result.zone, PentagonZone::PD);
    }

    #[test]
    fn test_c2h4_dominant_is_thermal() {
        let result = analyze_pentagon(&pentagon_sample(5.0, 5.0, 5.0, 80.0, 5.0));
        let angle = result.angle_deg.unwrap();
        assert!((angle - 306.0).abs() < 1e-6, "angle {angle}");
        assert_eq!(result.zone, PentagonZone::T3);
    }

    #[test]
    fn test_sector_boundaries() {
        assert_eq!(sector_zone(0.0), PentagonZone::D2);
        assert_eq!(sector_zone(9.999), PentagonZone::D2);
        assert_eq!(sector_zone(10.0), PentagonZone::D1);
        assert_eq!(sector_zone(79.9), PentagonZone::D1);
        assert_eq!(sector_zone(80.0), PentagonZone::PD);
        assert_eq!(sector_zone(100.0), PentagonZone::S);
        assert_eq!(sector_zone(189.9), PentagonZone::S);
        assert_eq!(sector_zone(190.0), PentagonZone::T1);
        assert_eq!(sector_zone(240.0), PentagonZone::T2);
        assert_eq!(sector_zone(280.0), PentagonZone::T3);
        assert_eq!(sector_zone(320.0), PentagonZone::D2);
        assert_eq!(sector_zone(359.99), PentagonZone::D2);
        assert_eq!(sector_zone(-30.0), PentagonZone::D2);
        assert_eq!(sector_zone(f64::NAN), PentagonZone::Undetermined);
    }

    #[test]
    fn test_scaling_gases_does_not_move_centroid() {
        let a = analyze_pentagon(&pentagon_sample(36.0, 35.0, 101.0, 193.0, 0.0));
        let b = analyze_pentagon(&pentagon_sample(360.0, 350.0, 1010.0, 1930.0, 0.0));
        let (pa, pb) = (a.point.unwrap(), b.point.unwrap());
        assert!((pa.x - pb.x).abs() < 1e-9);
        assert!((pa.y - pb.y).abs() < 1e-9);
        assert_eq!(a.zone, b.zone);
    }

    #[test]
    fn test_huge_concentrations_keep_their_sector() {
        let huge = analyze_pentagon(&pentagon_sample(1e308, 1e308, 1e308, 1e308, 1e308));
        assert_eq!(huge.zone, PentagonZone::Undetermined);
        assert!(huge.point.unwrap().norm() < 1e-9);

        let small = analyze_pentagon(&pentagon_sample(5.0, 5.0, 5.0, 80.0, 5.0));
        let large = analyze_pentagon(&pentagon_sample(1e307, 1e307, 1e307, 1.6e308, 1e307));
        assert_eq!(large.zone, PentagonZone::T3);
        assert!((large.angle_deg.unwrap() - small.angle_deg.unwrap()).abs() < 1e-6);
        let pct = pentagon_percentages(&pentagon_sample(1e308, 1e308, 0.0, 0.0, 0.0)).unwrap();
        assert!((pct.iter().sum::<f64>() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_axis_vertices() {
        let v = axis_vertices(40.0);
        assert!((v[0].y - 40.0).abs() < 1e-12);
        assert!(v.iter().all(|p| (p.norm() - 40.0).abs() < 1e-9));
    }
}
