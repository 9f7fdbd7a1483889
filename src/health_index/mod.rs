//! Transformer Health Index
//!
//! Deterministic, table-driven health score for oil-filled transformers built
//! from a single DGA sample and the fault code reported by the external
//! fault classifier.
//!
//! # Scoring Algorithm
//!
//! 1. Each of H2, CH4, C2H6, C2H4, C2H2, CO, CO2 and TDCG gets a 1-6 risk score
//!    from its bucket table and a fixed weight (total weight 25).
//! 2. DGAF is the weighted mean score, rounded to 2 decimals.
//! 3. Four sub-indices in [0, 1]:
//!    - HI_DGAF (50%): step function of DGAF
//!    - HI_FF (30%): fault factor from the classifier code
//!    - LEDTF (10%): low-energy discharge / thermal factor
//!    - PIF (10%): paper insulation factor, `0.6·PIF1 + 0.4·PIF2`
//! 4. `finalHI = 100 × Σ weight·sub-index`, rounded to 2 decimals, then mapped
//!    to a condition label.

mod factors;
mod scoring;

pub use factors::{
    co2_co_ratio, condition_from_score, hi_dgaf, hi_ff, ledtf, ledtf_magnitude, pif1, pif2,
};
pub use scoring::{dgaf, score_details, score_value};

use crate::types::{health_thresholds as h, GasSample, HealthIndexResult, SubIndexRating};
use serde::{Deserialize, Serialize};

/// Round to 2 decimals, half away from zero, judged on the exact binary value.
///
/// `1.115` is stored just below the half and rounds to `1.11`, even though
/// `1.115 * 100.0` itself rounds up to `111.5`.
pub fn round2(value: f64) -> f64 {
    let magnitude = value.abs();
    let scaled = magnitude * 100.0;
    if !scaled.is_finite() || scaled >= MAX_EXACT_INTEGER {
        return value;
    }
    // Exact error of the multiplication above
    let error = magnitude.mul_add(100.0, -scaled);
    let floor = scaled.floor();
    let above_half = (scaled - floor) - 0.5;
    let units = if above_half >= -error { floor + 1.0 } else { floor };
    (units / 100.0).copysign(value)
}

/// 2^52: from here on every f64 is an integer.
const MAX_EXACT_INTEGER: f64 = 4_503_599_627_370_496.0;

/// Compute the full Health Index breakdown for a sample.
///
/// `fault_code` is passed through untouched into `gbdtFault`; codes outside
/// the eight known ones score the worst-case HI_FF.
pub fn compute_health_index(sample: &GasSample, fault_code: &str) -> HealthIndexResult {
    let tdcg = sample.tdcg();
    let ratio = co2_co_ratio(sample);

    let details = score_details(sample);
    let dgaf = dgaf(&details);
    let hi_dgaf = hi_dgaf(dgaf);
    let hi_ff = hi_ff(fault_code);

    let ledtf = round2(ledtf(sample));
    let pif1 = round2(pif1(sample));
    let pif2 = round2(pif2(sample));
    let pif = round2(pif1 * h::WEIGHT_PIF1 + pif2 * h::WEIGHT_PIF2);

    let raw = hi_dgaf * h::WEIGHT_HI_DGAF
        + hi_ff * h::WEIGHT_HI_FF
        + ledtf * h::WEIGHT_LEDTF
        + pif * h::WEIGHT_PIF;
    let final_hi = round2(raw * 100.0);
    let condition = condition_from_score(final_hi);

    tracing::debug!(
        tdcg,
        dgaf,
        hi_dgaf,
        hi_ff,
        ledtf,
        pif,
        final_hi,
        condition = %condition,
        "Health index computed"
    );

    HealthIndexResult {
        tdcg,
        co2_co_ratio: round2(ratio),
        details,
        dgaf,
        hi_dgaf,
        hi_ff,
        gbdt_fault: fault_code.to_string(),
        ledtf,
        pif1,
        pif2,
        pif,
        final_hi,
        condition,
    }
}

/// Qualitative ratings of the four sub-indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubIndexRatings {
    pub hi_dgaf: SubIndexRating,
    pub hi_ff: SubIndexRating,
    pub ledtf: SubIndexRating,
    pub pif: SubIndexRating,
}

impl SubIndexRatings {
    pub fn from_result(result: &HealthIndexResult) -> Self {
        Self {
            hi_dgaf: SubIndexRating::from_value(result.hi_dgaf),
            hi_ff: SubIndexRating::from_value(result.hi_ff),
            ledtf: SubIndexRating::from_value(result.ledtf),
            pif: SubIndexRating::from_value(result.pif),
        }
    }
}
