//! Fault classification codes shared by the Duval charts and the external classifier

use serde::{Deserialize, Serialize};

/// Severity attached to a fault code for display and triage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaultSeverity {
    Normal,
    Caution,
    Critical,
}

/// The eight fault codes produced by the external fault classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaultCode {
    /// No fault
    #[serde(rename = "N")]
    Normal,
    /// Partial discharge (corona)
    #[serde(rename = "PD")]
    PartialDischarge,
    /// Low energy discharge (sparking)
    #[serde(rename = "D1")]
    LowEnergyDischarge,
    /// High energy discharge (arcing)
    #[serde(rename = "D2")]
    HighEnergyDischarge,
    /// Thermal fault below 300°C
    #[serde(rename = "T1")]
    ThermalLow,
    /// Thermal fault 300-700°C
    #[serde(rename = "T2")]
    ThermalMedium,
    /// Thermal fault above 700°C
    #[serde(rename = "T3")]
    ThermalHigh,
    /// Mixed thermal and electrical fault
    #[serde(rename = "DT")]
    DischargeThermal,
}

impl FaultCode {
    pub const ALL: [Self; 8] = [
        Self::Normal,
        Self::PartialDischarge,
        Self::LowEnergyDischarge,
        Self::HighEnergyDischarge,
        Self::ThermalLow,
        Self::ThermalMedium,
        Self::ThermalHigh,
        Self::DischargeThermal,
    ];

    /// Parse an exact classifier code ("N", "PD", "T1", ...). Case-sensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.code() == code)
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Normal => "N",
            Self::PartialDischarge => "PD",
            Self::LowEnergyDischarge => "D1",
            Self::HighEnergyDischarge => "D2",
            Self::ThermalLow => "T1",
            Self::ThermalMedium => "T2",
            Self::ThermalHigh => "T3",
            Self::DischargeThermal => "DT",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::PartialDischarge => "Partial Discharge",
            Self::LowEnergyDischarge => "Low Energy Discharge",
            Self::HighEnergyDischarge => "High Energy Discharge",
            Self::ThermalLow => "Thermal Fault < 300°C",
            Self::ThermalMedium => "Thermal Fault 300-700°C",
            Self::ThermalHigh => "Thermal Fault > 700°C",
            Self::DischargeThermal => "Mix Thermal & Discharge",
        }
    }

    pub fn severity(&self) -> FaultSeverity {
        match self {
            Self::Normal => FaultSeverity::Normal,
            Self::PartialDischarge
            | Self::LowEnergyDischarge
            | Self::ThermalLow
            | Self::ThermalMedium => FaultSeverity::Caution,
            Self::HighEnergyDischarge | Self::ThermalHigh | Self::DischargeThermal => {
                FaultSeverity::Critical
            }
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Normal => "Transformer condition appears normal.",
            Self::PartialDischarge => "Low energy discharges (Corona) detected.",
            Self::LowEnergyDischarge => "Discharges of low energy (Sparking) detected.",
            Self::HighEnergyDischarge => {
                "Discharges of high energy (Arcing) detected. Immediate attention recommended."
            }
            Self::ThermalLow => "Low range thermal fault detected.",
            Self::ThermalMedium => "Medium range thermal fault detected.",
            Self::ThermalHigh => {
                "High range thermal fault detected. Risk of insulation degradation."
            }
            Self::DischargeThermal => {
                "Combined thermal and electrical fault detected. Complex failure mode."
            }
        }
    }

    /// Health Index fault factor (HI_FF) for this code.
    pub fn hi_ff(&self) -> f64 {
        match self {
            Self::Normal => 1.0,
            Self::PartialDischarge => 0.8,
            Self::ThermalLow => 0.7,
            Self::LowEnergyDischarge => 0.6,
            Self::ThermalMedium => 0.4,
            Self::ThermalHigh => 0.3,
            Self::HighEnergyDischarge => 0.2,
            Self::DischargeThermal => 0.1,
        }
    }
}

impl std::fmt::Display for FaultCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip_for_every_variant() {
        for fault in FaultCode::ALL {
            assert_eq!(FaultCode::from_code(fault.code()), Some(fault));
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(FaultCode::from_code("t1"), None);
        assert_eq!(FaultCode::from_code(" T1"), None);
        assert_eq!(FaultCode::from_code(""), None);
    }

    #[test]
    fn test_severity_mapping() {
        assert_eq!(FaultCode::Normal.severity(), FaultSeverity::Normal);
        assert_eq!(FaultCode::ThermalMedium.severity(), FaultSeverity::Caution);
        assert_eq!(FaultCode::HighEnergyDischarge.severity(), FaultSeverity::Critical);
        assert_eq!(FaultCode::DischargeThermal.severity(), FaultSeverity::Critical);
    }

    #[test]
    fn test_hi_ff_ordering() {
        // Normal is the only perfect factor, DT the worst known one
        assert_eq!(FaultCode::Normal.hi_ff(), 1.0);
        assert!(FaultCode::ALL.iter().all(|f| f.hi_ff() >= FaultCode::DischargeThermal.hi_ff()));
    }

    #[test]
    fn test_serializes_as_code() {
        let json = serde_json::to_string(&FaultCode::ThermalHigh).unwrap();
        assert_eq!(json, "\"T3\"");
    }
}
