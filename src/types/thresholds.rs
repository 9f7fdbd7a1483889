//! Fixed lookup tables for the Duval and Health Index engines
//!
//! These are process-wide constants. None of them are operator-tunable; the
//! Health Index scoring is only comparable across transformers if every site
//! uses the same tables.

/// Duval Triangle 1 decision-tree boundaries (percent of CH4 + C2H4 + C2H2)
pub mod triangle_thresholds {
    /// CH4 at or above this is partial discharge
    pub const PD_CH4_MIN: f64 = 98.0;
    /// C2H2 below this puts the point in the thermal band
    pub const THERMAL_C2H2_MAX: f64 = 4.0;
    /// T1 / T2 boundary on C2H4
    pub const T1_C2H4_MAX: f64 = 20.0;
    /// T2 / T3 boundary on C2H4
    pub const T2_C2H4_MAX: f64 = 50.0;
    /// Discharge zones start at this C2H2
    pub const DISCHARGE_C2H2_MIN: f64 = 13.0;
    /// D1 / D2 boundary on C2H4
    pub const D1_C2H4_MAX: f64 = 23.0;
    /// Vertical l-k boundary on C2H4
    pub const LK_C2H4_MIN: f64 = 40.0;
    /// Upper end of the l-k segment on C2H2
    pub const LK_C2H2_MAX: f64 = 29.0;
    /// T3 tail lower boundary on C2H2
    pub const T3_TAIL_C2H2_MAX: f64 = 15.0;
}

/// Duval Pentagon 1 axes and sector boundaries (degrees, counter-clockwise from +x)
pub mod pentagon_thresholds {
    /// Axis angle for H2
    pub const H2_AXIS_DEG: f64 = 90.0;
    /// Axis angle for C2H6
    pub const C2H6_AXIS_DEG: f64 = 162.0;
    /// Axis angle for CH4
    pub const CH4_AXIS_DEG: f64 = 234.0;
    /// Axis angle for C2H4
    pub const C2H4_AXIS_DEG: f64 = 306.0;
    /// Axis angle for C2H2
    pub const C2H2_AXIS_DEG: f64 = 18.0;

    /// Axis angles in polygon vertex order: H2, C2H6, CH4, C2H4, C2H2
    pub const AXES_DEG: [f64; 5] = [
        H2_AXIS_DEG,
        C2H6_AXIS_DEG,
        CH4_AXIS_DEG,
        C2H4_AXIS_DEG,
        C2H2_AXIS_DEG,
    ];

    /// D1 sector starts here (D2 wraps through 0°)
    pub const D1_START_DEG: f64 = 10.0;
    /// PD sector start
    pub const PD_START_DEG: f64 = 80.0;
    /// S sector start
    pub const S_START_DEG: f64 = 100.0;
    /// T1 sector start
    pub const T1_START_DEG: f64 = 190.0;
    /// T2 sector start
    pub const T2_START_DEG: f64 = 240.0;
    /// T3 sector start
    pub const T3_START_DEG: f64 = 280.0;
    /// D2 sector start
    pub const D2_START_DEG: f64 = 320.0;

    /// Default |A| below which the gas polygon is treated as degenerate
    pub const DEGENERATE_AREA_EPSILON: f64 = 1e-9;
    /// Default centroid distance from the origin below which the angle is undefined
    pub const ORIGIN_EPSILON: f64 = 1e-9;
}

/// Health Index score tables, weights and sub-index boundaries
pub mod health_thresholds {
    /// Upper bounds (inclusive) of score buckets 1-5; anything above scores 6.
    pub type ScoreBuckets = [f64; 5];

    pub const H2_BUCKETS: ScoreBuckets = [100.0, 200.0, 300.0, 500.0, 700.0];
    pub const CH4_BUCKETS: ScoreBuckets = [75.0, 125.0, 200.0, 400.0, 600.0];
    pub const C2H6_BUCKETS: ScoreBuckets = [65.0, 80.0, 100.0, 120.0, 150.0];
    pub const C2H4_BUCKETS: ScoreBuckets = [50.0, 80.0, 100.0, 150.0, 200.0];
    pub const C2H2_BUCKETS: ScoreBuckets = [3.0, 7.0, 35.0, 50.0, 80.0];
    pub const CO_BUCKETS: ScoreBuckets = [350.0, 700.0, 900.0, 1100.0, 1400.0];
    pub const CO2_BUCKETS: ScoreBuckets = [2500.0, 3000.0, 4000.0, 5000.0, 7000.0];
    pub const TDCG_BUCKETS: ScoreBuckets = [690.0, 1251.0, 1785.0, 2720.0, 4360.0];

    pub const H2_WEIGHT: u32 = 3;
    pub const CH4_WEIGHT: u32 = 2;
    pub const C2H6_WEIGHT: u32 = 2;
    pub const C2H4_WEIGHT: u32 = 4;
    pub const C2H2_WEIGHT: u32 = 6;
    pub const CO_WEIGHT: u32 = 3;
    pub const CO2_WEIGHT: u32 = 2;
    pub const TDCG_WEIGHT: u32 = 3;

    /// HI_DGAF steps: (DGAF strictly below, factor). Falls through to `HI_DGAF_FLOOR`.
    pub const HI_DGAF_STEPS: [(f64, f64); 4] = [(1.2, 1.0), (1.5, 0.8), (2.0, 0.6), (2.5, 0.4)];
    pub const HI_DGAF_FLOOR: f64 = 0.2;

    /// HI_FF for fault codes outside the known set
    pub const HI_FF_UNKNOWN: f64 = 0.1;

    /// LEDTF when H2 + CH4 + CO is zero
    pub const LEDTF_NO_GAS: f64 = 0.8;
    /// LEDTF when the H2/CH4 vector magnitude is at or below `LEDTF_MAGNITUDE_MAX`
    pub const LEDTF_LOW: f64 = 0.7;
    /// LEDTF otherwise
    pub const LEDTF_HIGH: f64 = 0.25;
    pub const LEDTF_MAGNITUDE_MAX: f64 = 0.13;

    /// PIF1 high-CO branch: CO and CO2 both above these
    pub const PIF1_CO_MIN: f64 = 500.0;
    pub const PIF1_CO2_MIN: f64 = 5000.0;
    /// Inner check of the high-CO branch (always true once CO > 500)
    pub const PIF1_CO_INNER: f64 = 350.0;

    /// Sub-index composition of the final Health Index
    pub const WEIGHT_HI_DGAF: f64 = 0.5;
    pub const WEIGHT_HI_FF: f64 = 0.3;
    pub const WEIGHT_LEDTF: f64 = 0.1;
    pub const WEIGHT_PIF: f64 = 0.1;

    /// PIF composition
    pub const WEIGHT_PIF1: f64 = 0.6;
    pub const WEIGHT_PIF2: f64 = 0.4;

    // === Condition boundaries on finalHI (0-100) ===
    pub const VERY_GOOD_MIN: f64 = 85.0;
    pub const GOOD_MIN: f64 = 70.0;
    pub const NEED_CAUTION_MIN: f64 = 50.0;
    pub const POOR_MIN: f64 = 30.0;
}
