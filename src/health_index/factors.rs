//! Health Index sub-indices
//!
//! - HI_DGAF: step function of the DGA Factor
//! - HI_FF: fault factor from the external classifier's fault code
//! - LEDTF: low-energy discharge / thermal factor from the H2-CH4-CO vector
//! - PIF1, PIF2, PIF: paper insulation factors from CO and CO2

use crate::geometry::percentages;
use crate::types::{health_thresholds as h, Condition, FaultCode, GasSample};

/// HI_DGAF from a (rounded) DGAF.
pub fn hi_dgaf(dgaf: f64) -> f64 {
    h::HI_DGAF_STEPS
        .iter()
        .find(|(below, _)| dgaf < *below)
        .map_or(h::HI_DGAF_FLOOR, |&(_, factor)| factor)
}

/// HI_FF for a raw classifier code. Unknown codes get the worst factor.
pub fn hi_ff(fault_code: &str) -> f64 {
    match FaultCode::from_code(fault_code) {
        Some(fault) => fault.hi_ff(),
        None => {
            tracing::debug!(fault_code, "Unknown fault code, using worst-case HI_FF");
            h::HI_FF_UNKNOWN
        }
    }
}

/// Magnitude of the H2 / CH4 / CO vector used by LEDTF.
///
/// Components are H2 and CH4 as fractions of `H2 + CH4 + CO`, projected on a
/// ternary plane: `|(h + c/2, c·√3/2)|`. Returns `None` when the sum is zero.
pub fn ledtf_magnitude(sample: &GasSample) -> Option<f64> {
    let [h2, ch4, _] = percentages([sample.h2, sample.ch4, sample.co])?;
    let (h2, ch4) = (h2 / 100.0, ch4 / 100.0);

    let term1 = h2 + 0.5 * ch4;
    let term2 = (3f64.sqrt() / 2.0) * ch4;
    Some(term1.hypot(term2))
}

/// Low-energy discharge / thermal factor.
pub fn ledtf(sample: &GasSample) -> f64 {
    match ledtf_magnitude(sample) {
        None => h::LEDTF_NO_GAS,
        Some(mag) if mag <= h::LEDTF_MAGNITUDE_MAX => h::LEDTF_LOW,
        Some(_) => h::LEDTF_HIGH,
    }
}

/// CO2 / CO, or 0 when CO is 0.
pub fn co2_co_ratio(sample: &GasSample) -> f64 {
    if sample.co == 0.0 {
        0.0
    } else {
        sample.co2 / sample.co
    }
}

/// First paper insulation factor.
///
/// With both CO > 500 and CO2 > 5000 the inner `CO > 350` check always holds,
/// so that branch yields 1. It is kept as a two-way check to match the
/// published worksheet.
pub fn pif1(sample: &GasSample) -> f64 {
    let ratio = co2_co_ratio(sample);

    if sample.co > h::PIF1_CO_MIN && sample.co2 > h::PIF1_CO2_MIN {
        if sample.co > h::PIF1_CO_INNER {
            1.0
        } else {
            0.8
        }
    } else if ratio > 7.0 {
        0.6
    } else if ratio >= 5.0 {
        0.4
    } else {
        0.2
    }
}

/// Second paper insulation factor, from the CO2 / CO ratio alone.
pub fn pif2(sample: &GasSample) -> f64 {
    let ratio = co2_co_ratio(sample);

    if ratio <= 7.4 {
        0.8
    } else if ratio <= 8.0 {
        0.6
    } else if ratio <= 8.7 {
        0.4
    } else {
        0.2
    }
}

/// Condition label for a final Health Index (0-100).
///
/// Thresholds:
/// - Very Good: 85-100
/// - Good: 70-84.99
/// - Need Caution: 50-69.99
/// - Poor: 30-49.99
/// - Very Poor: below 30
pub fn condition_from_score(final_hi: f64) -> Condition {
    if final_hi >= h::VERY_GOOD_MIN {
        Condition::VeryGood
    } else if final_hi >= h::GOOD_MIN {
        Condition::Good
    } else if final_hi >= h::NEED_CAUTION_MIN {
        Condition::NeedCaution
    } else if final_hi >= h::POOR_MIN {
        Condition::Poor
    } else {
        Condition::VeryPoor
    }
}
