//! External fault classifier responses
//!
//! The gradient-boosted fault classifier runs as a separate HTTP service; this
//! module only interprets the JSON it returns. No network I/O happens here.
//!
//! Payload shape:
//!
//! ```json
//! { "ket_qua_loi": "T2", "do_tin_cay": "93.5%", "chi_tiet_xac_suat": [0.01, ...] }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{FaultCode, FaultSeverity};

/// Label order of the classifier's probability vector.
pub const MODEL_LABELS: [&str; 8] = ["PD", "D1", "D2", "T1", "T2", "T3", "DT", "N"];

/// Probabilities at or below this percentage are left out of the ranking.
const RANKING_MIN_PERCENT: f64 = 1.0;

#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("Malformed classifier response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Confidence as sent by the service: usually `"93.5%"`, occasionally a bare number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawConfidence {
    Number(f64),
    Text(String),
}

impl Default for RawConfidence {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl RawConfidence {
    /// Confidence in percent; anything unparsable counts as 0.
    pub fn percent(&self) -> f64 {
        let value = match self {
            Self::Number(v) => *v,
            Self::Text(s) => s.trim().trim_end_matches('%').trim().parse().unwrap_or(0.0),
        };
        if value.is_finite() {
            value
        } else {
            0.0
        }
    }
}

/// Raw response body of the classifier service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassifierResponse {
    #[serde(rename = "ket_qua_loi", default)]
    pub fault_code: String,
    #[serde(rename = "do_tin_cay", default)]
    pub confidence: RawConfidence,
    #[serde(rename = "chi_tiet_xac_suat", default)]
    pub probabilities: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    /// >= 80%
    High,
    /// 50-79.9%
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub fn from_percent(percent: f64) -> Self {
        match percent {
            p if p >= 80.0 => Self::High,
            p if p >= 50.0 => Self::Medium,
            _ => Self::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// One entry of the probability ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelProbability {
    pub label: String,
    pub percent: f64,
}

/// Interpreted classifier verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaultPrediction {
    /// Code exactly as returned; feeds `gbdtFault`
    pub raw_code: String,
    pub fault: Option<FaultCode>,
    /// Unknown codes are treated as Caution
    pub severity: FaultSeverity,
    pub confidence_percent: f64,
    pub confidence_level: ConfidenceLevel,
    /// Labels above 1%, most likely first. Empty if the vector is not 8 long.
    pub ranking: Vec<LabelProbability>,
}

/// Parse a classifier response body.
pub fn parse_response(body: &str) -> Result<ClassifierResponse, ClassifierError> {
    Ok(serde_json::from_str(body)?)
}

/// Interpret a parsed classifier response.
pub fn interpret_response(response: &ClassifierResponse) -> FaultPrediction {
    let fault = FaultCode::from_code(&response.fault_code);
    if fault.is_none() {
        tracing::warn!(code = %response.fault_code, "Classifier returned an unknown fault code");
    }

    let confidence_percent = response.confidence.percent();
    let ranking = rank_probabilities(&response.probabilities);

    tracing::debug!(
        code = %response.fault_code,
        confidence_percent,
        ranked = ranking.len(),
        "Classifier response interpreted"
    );

    FaultPrediction {
        raw_code: response.fault_code.clone(),
        fault,
        severity: fault.map_or(FaultSeverity::Caution, |f| f.severity()),
        confidence_percent,
        confidence_level: ConfidenceLevel::from_percent(confidence_percent),
        ranking,
    }
}

fn rank_probabilities(probabilities: &[f64]) -> Vec<LabelProbability> {
    if probabilities.len() != MODEL_LABELS.len() {
        if !probabilities.is_empty() {
            tracing::debug!(
                len = probabilities.len(),
                "Probability vector length mismatch, ranking skipped"
            );
        }
        return Vec::new();
    }

    let mut ranking: Vec<LabelProbability> = MODEL_LABELS
        .iter()
        .zip(probabilities)
        .map(|(label, p)| LabelProbability {
            label: (*label).to_string(),
            percent: p * 100.0,
        })
        .filter(|entry| entry.percent > RANKING_MIN_PERCENT)
        .collect();
    ranking.sort_by(|a, b| b.percent.total_cmp(&a.percent));
    ranking
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "ket_qua_loi": "T2",
        "do_tin_cay": "93.5%",
        "chi_tiet_xac_suat": [0.005, 0.01, 0.0, 0.02, 0.935, 0.025, 0.005, 0.0]
    }"#;

    #[test]
    fn test_parse_and_interpret() {
        let response = parse_response(BODY).unwrap();
        assert_eq!(response.fault_code, "T2");
        let prediction = interpret_response(&response);
        assert_eq!(prediction.fault, Some(FaultCode::ThermalMedium));
        assert_eq!(prediction.severity, FaultSeverity::Caution);
        assert!((prediction.confidence_percent - 93.5).abs() < 1e-12);
        assert_eq!(prediction.confidence_level, ConfidenceLevel::High);

        let labels: Vec<_> = prediction.ranking.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["T2", "T3", "T1"]);
        assert!((prediction.ranking[0].percent - 93.5).abs() < 1e-9);
    }

    #[test]
    fn test_exactly_one_percent_is_dropped() {
        let response = ClassifierResponse {
            fault_code: "N".into(),
            confidence: RawConfidence::Text("99%".into()),
            probabilities: vec![0.0, 0.01, 0.0, 0.0, 0.0, 0.0, 0.0, 0.99],
        };
        let prediction = interpret_response(&response);
        assert_eq!(prediction.ranking.len(), 1);
        assert_eq!(prediction.ranking[0].label, "N");
    }

    #[test]
    fn test_wrong_length_vector_gives_empty_ranking() {
        let response = ClassifierResponse {
            fault_code: "D1".into(),
            confidence: RawConfidence::Text("60%".into()),
            probabilities: vec![0.5, 0.5],
        };
        let prediction = interpret_response(&response);
        assert!(prediction.ranking.is_empty());
        assert_eq!(prediction.confidence_level, ConfidenceLevel::Medium);
    }

    #[test]
    fn test_unparsable_confidence_is_zero() {
        for raw in ["", "n/a", "%"] {
            let confidence = RawConfidence::Text(raw.into());
            assert_eq!(confidence.percent(), 0.0, "{raw:?}");
        }
        assert_eq!(RawConfidence::Text(" 42.5 % ".into()).percent(), 42.5);
        assert_eq!(RawConfidence::Number(77.0).percent(), 77.0);
    }

    #[test]
    fn test_confidence_levels() {
        assert_eq!(ConfidenceLevel::from_percent(80.0), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_percent(79.9), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_percent(50.0), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_percent(49.9), ConfidenceLevel::Low);
        assert_eq!(ConfidenceLevel::from_percent(0.0), ConfidenceLevel::Low);
    }

    #[test]
    fn test_unknown_code_is_caution() {
        let response = parse_response(r#"{"ket_qua_loi": "X9", "do_tin_cay": "10%"}"#).unwrap();
        let prediction = interpret_response(&response);
        assert_eq!(prediction.fault, None);
        assert_eq!(prediction.raw_code, "X9");
        assert_eq!(prediction.severity, FaultSeverity::Caution);
        assert!(prediction.ranking.is_empty());
    }

    #[test]
    fn test_numeric_confidence_accepted() {
        let response = parse_response(r#"{"ket_qua_loi": "PD", "do_tin_cay": 88.0}"#).unwrap();
        assert_eq!(interpret_response(&response).confidence_level, ConfidenceLevel::High);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(parse_response("{not json"), Err(ClassifierError::Json(_))));
    }
}
