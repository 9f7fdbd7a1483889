//! Per-gas risk scores and the DGA Factor (DGAF)

use crate::types::{health_thresholds as h, GasSample, GasScoreDetail, ScoredParameter};

use super::round2;

impl ScoredParameter {
    /// Score bucket upper bounds for this parameter.
    pub fn buckets(&self) -> &'static h::ScoreBuckets {
        match self {
            Self::H2 => &h::H2_BUCKETS,
            Self::CH4 => &h::CH4_BUCKETS,
            Self::C2H6 => &h::C2H6_BUCKETS,
            Self::C2H4 => &h::C2H4_BUCKETS,
            Self::C2H2 => &h::C2H2_BUCKETS,
            Self::CO => &h::CO_BUCKETS,
            Self::CO2 => &h::CO2_BUCKETS,
            Self::TDCG => &h::TDCG_BUCKETS,
        }
    }

    pub fn weight(&self) -> u32 {
        match self {
            Self::H2 => h::H2_WEIGHT,
            Self::CH4 => h::CH4_WEIGHT,
            Self::C2H6 => h::C2H6_WEIGHT,
            Self::C2H4 => h::C2H4_WEIGHT,
            Self::C2H2 => h::C2H2_WEIGHT,
            Self::CO => h::CO_WEIGHT,
            Self::CO2 => h::CO2_WEIGHT,
            Self::TDCG => h::TDCG_WEIGHT,
        }
    }

    /// Concentration this parameter is scored on.
    pub fn value(&self, sample: &GasSample) -> f64 {
        match self {
            Self::H2 => sample.h2,
            Self::CH4 => sample.ch4,
            Self::C2H6 => sample.c2h6,
            Self::C2H4 => sample.c2h4,
            Self::C2H2 => sample.c2h2,
            Self::CO => sample.co,
            Self::CO2 => sample.co2,
            Self::TDCG => sample.tdcg(),
        }
    }
}

/// Risk score 1-6 for a concentration.
///
/// Bucket bounds are inclusive: a value equal to the first bound scores 1.
pub fn score_value(parameter: ScoredParameter, value: f64) -> u32 {
    parameter
        .buckets()
        .iter()
        .position(|&upper| value <= upper)
        .map_or(6, |i| i as u32 + 1)
}

/// Score rows for all eight parameters, in table order.
pub fn score_details(sample: &GasSample) -> Vec<GasScoreDetail> {
    ScoredParameter::ALL
        .iter()
        .map(|&gas| {
            let value = gas.value(sample);
            let score = score_value(gas, value);
            let weight = gas.weight();
            GasScoreDetail {
                gas,
                value,
                score,
                weight,
                weighted_score: score * weight,
            }
        })
        .collect()
}

/// Weighted mean score over the detail rows, rounded to 2 decimals.
pub fn dgaf(details: &[GasScoreDetail]) -> f64 {
    let total_weight: u32 = details.iter().map(|d| d.weight).sum();
    if total_weight == 0 {
        return 0.0;
    }
    let total_weighted: u32 = details.iter().map(|d| d.weighted_score).sum();
    round2(f64::from(total_weighted) / f64::from(total_weight))
}
