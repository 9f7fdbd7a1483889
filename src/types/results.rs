//! Diagnostic result records handed to renderers and exporters

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

// ============================================================================
// Duval Triangle 1
// ============================================================================

/// Duval Triangle 1 zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriangleZone {
    PD,
    T1,
    T2,
    T3,
    D1,
    D2,
    DT,
    /// CH4 + C2H4 + C2H2 is zero
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl TriangleZone {
    pub fn label(&self) -> &'static str {
        match self {
            Self::PD => "PD",
            Self::T1 => "T1",
            Self::T2 => "T2",
            Self::T3 => "T3",
            Self::D1 => "D1",
            Self::D2 => "D2",
            Self::DT => "DT",
            Self::NotApplicable => "N/A",
        }
    }
}

impl std::fmt::Display for TriangleZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Normalized triangle percentages and the resulting zone.
///
/// `p_a` (CH4) is the top vertex, `p_b` (C2H4) the right and `p_c` (C2H2) the
/// left. All three are zero when the zone is [`TriangleZone::NotApplicable`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriangleResult {
    #[serde(rename = "pA")]
    pub p_a: f64,
    #[serde(rename = "pB")]
    pub p_b: f64,
    #[serde(rename = "pC")]
    pub p_c: f64,
    pub zone: TriangleZone,
}

// ============================================================================
// Duval Pentagon 1
// ============================================================================

/// Duval Pentagon 1 zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PentagonZone {
    PD,
    /// Stray gassing
    S,
    T1,
    T2,
    T3,
    D1,
    D2,
    /// All five pentagon gases are zero
    #[serde(rename = "N/A")]
    NotApplicable,
    /// Centroid sits on the origin, so it has no direction
    Undetermined,
}

impl PentagonZone {
    pub fn label(&self) -> &'static str {
        match self {
            Self::PD => "PD",
            Self::S => "S",
            Self::T1 => "T1",
            Self::T2 => "T2",
            Self::T3 => "T3",
            Self::D1 => "D1",
            Self::D2 => "D2",
            Self::NotApplicable => "N/A",
            Self::Undetermined => "Undetermined",
        }
    }
}

impl std::fmt::Display for PentagonZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Unscaled fault-vector centroid and its zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PentagonResult {
    /// `None` when all five gases are zero
    pub point: Option<Point>,
    /// Polar angle of `point` in [0, 360), when defined
    pub angle_deg: Option<f64>,
    pub zone: PentagonZone,
}

// ============================================================================
// Health Index
// ============================================================================

/// Parameters scored by the Health Index tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoredParameter {
    H2,
    CH4,
    C2H6,
    C2H4,
    C2H2,
    CO,
    CO2,
    TDCG,
}

impl ScoredParameter {
    pub const ALL: [Self; 8] = [
        Self::H2,
        Self::CH4,
        Self::C2H6,
        Self::C2H4,
        Self::C2H2,
        Self::CO,
        Self::CO2,
        Self::TDCG,
    ];
}

/// One row of the DGAF scoring table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasScoreDetail {
    pub gas: ScoredParameter,
    /// Raw concentration (ppm); TDCG for the aggregate row
    pub value: f64,
    /// Risk score 1-6
    pub score: u32,
    pub weight: u32,
    /// `score * weight`
    pub weighted_score: u32,
}

/// Discrete condition label for the final Health Index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    #[serde(rename = "Very Good")]
    VeryGood,
    Good,
    #[serde(rename = "Need Caution")]
    NeedCaution,
    Poor,
    #[serde(rename = "Very Poor")]
    VeryPoor,
}

impl Condition {
    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryGood => "Very Good",
            Self::Good => "Good",
            Self::NeedCaution => "Need Caution",
            Self::Poor => "Poor",
            Self::VeryPoor => "Very Poor",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Qualitative reading of a 0-1 sub-index (HI_DGAF, HI_FF, LEDTF, PIF).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubIndexRating {
    Good,
    Fair,
    Poor,
    #[serde(rename = "Very Poor")]
    VeryPoor,
}

impl SubIndexRating {
    pub fn from_value(value: f64) -> Self {
        if value >= 0.9 {
            Self::Good
        } else if value >= 0.7 {
            Self::Fair
        } else if value >= 0.4 {
            Self::Poor
        } else {
            Self::VeryPoor
        }
    }
}

/// Complete Health Index breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthIndexResult {
    #[serde(rename = "TDCG")]
    pub tdcg: f64,
    /// CO2 / CO rounded to 2 decimals, 0 when CO is 0
    #[serde(rename = "CO2_CO_Ratio")]
    pub co2_co_ratio: f64,
    pub details: Vec<GasScoreDetail>,
    #[serde(rename = "DGAF")]
    pub dgaf: f64,
    #[serde(rename = "HI_DGAF")]
    pub hi_dgaf: f64,
    #[serde(rename = "HI_FF")]
    pub hi_ff: f64,
    /// Fault code exactly as supplied by the external classifier
    #[serde(rename = "gbdtFault")]
    pub gbdt_fault: String,
    #[serde(rename = "LEDTF")]
    pub ledtf: f64,
    #[serde(rename = "PIF1")]
    pub pif1: f64,
    #[serde(rename = "PIF2")]
    pub pif2: f64,
    #[serde(rename = "PIF")]
    pub pif: f64,
    /// Composite score 0-100, rounded to 2 decimals
    #[serde(rename = "finalHI")]
    pub final_hi: f64,
    pub condition: Condition,
}

impl HealthIndexResult {
    pub fn total_weight(&self) -> u32 {
        self.details.iter().map(|d| d.weight).sum()
    }

    pub fn total_weighted_score(&self) -> u32 {
        self.details.iter().map(|d| d.weighted_score).sum()
    }
}
