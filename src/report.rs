//! Combined diagnostic report
//!
//! Runs the sample through input validation, both Duval charts and the
//! Health Index engine, and bundles everything into one serializable record.

use serde::{Deserialize, Serialize};

use crate::config::DiagnosticsConfig;
use crate::duval::{analyze_pentagon_with, classify_triangle};
use crate::health_index::{compute_health_index, SubIndexRatings};
use crate::types::{
    FaultCode, FaultSeverity, GasSample, HealthIndexResult, InputError, PentagonResult,
    TriangleResult,
};

/// Catalog entry for the fault code the Health Index was computed with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaultInfo {
    pub code: FaultCode,
    pub name: String,
    pub severity: FaultSeverity,
    pub description: String,
}

impl From<FaultCode> for FaultInfo {
    fn from(code: FaultCode) -> Self {
        Self {
            code,
            name: code.name().to_string(),
            severity: code.severity(),
            description: code.description().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticReport {
    /// Sample after the input policy was applied
    pub sample: GasSample,
    pub triangle: TriangleResult,
    pub pentagon: PentagonResult,
    pub health_index: HealthIndexResult,
    pub sub_index_ratings: SubIndexRatings,
    /// `None` when the fault code is not one of the eight known codes
    pub fault: Option<FaultInfo>,
}

/// Validate a sample and run every engine on it.
pub fn diagnose(
    sample: &GasSample,
    fault_code: &str,
    config: &DiagnosticsConfig,
) -> Result<DiagnosticReport, InputError> {
    let sample = sample.sanitize(config.input.negative_policy)?;

    let triangle = classify_triangle(&sample);
    let pentagon = analyze_pentagon_with(&sample, &config.pentagon_params());
    let health_index = compute_health_index(&sample, fault_code);
    let sub_index_ratings = SubIndexRatings::from_result(&health_index);
    let fault = FaultCode::from_code(fault_code).map(FaultInfo::from);

    tracing::info!(
        triangle = %triangle.zone,
        pentagon = %pentagon.zone,
        final_hi = health_index.final_hi,
        condition = %health_index.condition,
        "Diagnosis complete"
    );

    Ok(DiagnosticReport {
        sample,
        triangle,
        pentagon,
        health_index,
        sub_index_ratings,
        fault,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Condition, Gas, InputPolicy, PentagonZone, TriangleZone};

    #[test]
    fn test_all_zero_sample() {
        let report = diagnose(&GasSample::default(), "N", &DiagnosticsConfig::default()).unwrap();
        assert_eq!(report.triangle.zone, TriangleZone::NotApplicable);
        assert_eq!(report.pentagon.zone, PentagonZone::NotApplicable);
        assert_eq!(report.health_index.final_hi, 92.4);
        assert_eq!(report.health_index.condition, Condition::VeryGood);
        assert_eq!(report.fault.unwrap().severity, FaultSeverity::Normal);
    }

    #[test]
    fn test_negative_rejected_by_default() {
        let sample = GasSample::new(-5.0, 10.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        let err = diagnose(&sample, "N", &DiagnosticsConfig::default()).unwrap_err();
        assert_eq!(
            err,
            InputError::NegativeConcentration {
                gas: Gas::H2,
                value: -5.0
            }
        );
    }

    #[test]
    fn test_negative_clamped_when_configured() {
        let mut config = DiagnosticsConfig::default();
        config.input.negative_policy = InputPolicy::Clamp;
        let sample = GasSample::new(-5.0, 10.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        let report = diagnose(&sample, "N", &config).unwrap();
        assert_eq!(report.sample.h2, 0.0);
        // Pure CH4 lands in PD
        assert_eq!(report.triangle.zone, TriangleZone::PD);
    }

    #[test]
    fn test_unknown_fault_code_has_no_catalog_entry() {
        let report = diagnose(&GasSample::default(), "X", &DiagnosticsConfig::default()).unwrap();
        assert!(report.fault.is_none());
        assert_eq!(report.health_index.gbdt_fault, "X");
        assert_eq!(report.health_index.hi_ff, 0.1);
    }

    #[test]
    fn test_report_serializes_with_contract_names() {
        let report = diagnose(&GasSample::default(), "N", &DiagnosticsConfig::default()).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["health_index"]["finalHI"], 92.4);
        assert_eq!(json["health_index"]["condition"], "Very Good");
        assert_eq!(json["triangle"]["zone"], "N/A");
        assert_eq!(json["fault"]["code"], "N");
    }
}
