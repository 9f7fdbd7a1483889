//! Dissolved gas sample types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One dissolved gas analysis reading from transformer oil, in ppm.
///
/// O2 and N2 are carried through for the surrounding application but are not
/// used by any of the diagnostic engines.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GasSample {
    /// Hydrogen (ppm)
    #[serde(rename = "H2", default)]
    pub h2: f64,
    /// Methane (ppm)
    #[serde(rename = "CH4", default)]
    pub ch4: f64,
    /// Ethane (ppm)
    #[serde(rename = "C2H6", default)]
    pub c2h6: f64,
    /// Ethylene (ppm)
    #[serde(rename = "C2H4", default)]
    pub c2h4: f64,
    /// Acetylene (ppm)
    #[serde(rename = "C2H2", default)]
    pub c2h2: f64,
    /// Carbon monoxide (ppm)
    #[serde(rename = "CO", default)]
    pub co: f64,
    /// Carbon dioxide (ppm)
    #[serde(rename = "CO2", default)]
    pub co2: f64,
    /// Oxygen (ppm), unused by the engines
    #[serde(rename = "O2", default)]
    pub o2: f64,
    /// Nitrogen (ppm), unused by the engines
    #[serde(rename = "N2", default)]
    pub n2: f64,
}

/// Gas channels of a [`GasSample`], in field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gas {
    H2,
    CH4,
    C2H6,
    C2H4,
    C2H2,
    CO,
    CO2,
    O2,
    N2,
}

impl Gas {
    pub const ALL: [Self; 9] = [
        Self::H2,
        Self::CH4,
        Self::C2H6,
        Self::C2H4,
        Self::C2H2,
        Self::CO,
        Self::CO2,
        Self::O2,
        Self::N2,
    ];

    /// Chemical formula as used in lab reports and JSON payloads.
    pub fn formula(&self) -> &'static str {
        match self {
            Self::H2 => "H2",
            Self::CH4 => "CH4",
            Self::C2H6 => "C2H6",
            Self::C2H4 => "C2H4",
            Self::C2H2 => "C2H2",
            Self::CO => "CO",
            Self::CO2 => "CO2",
            Self::O2 => "O2",
            Self::N2 => "N2",
        }
    }
}

impl std::fmt::Display for Gas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.formula())
    }
}

/// How out-of-range concentrations are handled before diagnosis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputPolicy {
    /// Fail with an [`InputError`] on negative or NaN values.
    #[default]
    Reject,
    /// Replace negative and NaN values with 0 ppm.
    Clamp,
}

/// Sample validation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Negative concentration for {gas}: {value} ppm")]
    NegativeConcentration { gas: Gas, value: f64 },

    #[error("Non-finite concentration for {gas}: {value}")]
    NonFiniteConcentration { gas: Gas, value: f64 },
}

impl GasSample {
    /// Build a sample from the seven diagnostic gases, with O2 and N2 at zero.
    pub fn new(h2: f64, ch4: f64, c2h6: f64, c2h4: f64, c2h2: f64, co: f64, co2: f64) -> Self {
        Self {
            h2,
            ch4,
            c2h6,
            c2h4,
            c2h2,
            co,
            co2,
            o2: 0.0,
            n2: 0.0,
        }
    }

    /// Concentration of a single channel (ppm).
    pub fn get(&self, gas: Gas) -> f64 {
        match gas {
            Gas::H2 => self.h2,
            Gas::CH4 => self.ch4,
            Gas::C2H6 => self.c2h6,
            Gas::C2H4 => self.c2h4,
            Gas::C2H2 => self.c2h2,
            Gas::CO => self.co,
            Gas::CO2 => self.co2,
            Gas::O2 => self.o2,
            Gas::N2 => self.n2,
        }
    }

    fn slot_mut(&mut self, gas: Gas) -> &mut f64 {
        match gas {
            Gas::H2 => &mut self.h2,
            Gas::CH4 => &mut self.ch4,
            Gas::C2H6 => &mut self.c2h6,
            Gas::C2H4 => &mut self.c2h4,
            Gas::C2H2 => &mut self.c2h2,
            Gas::CO => &mut self.co,
            Gas::CO2 => &mut self.co2,
            Gas::O2 => &mut self.o2,
            Gas::N2 => &mut self.n2,
        }
    }

    /// Total Dissolved Combustible Gas: H2 + CH4 + C2H6 + C2H4 + C2H2 + CO.
    pub fn tdcg(&self) -> f64 {
        self.h2 + self.ch4 + self.c2h6 + self.c2h4 + self.c2h2 + self.co
    }

    /// Check every channel against the given policy.
    ///
    /// Infinite values are rejected under both policies since they cannot be
    /// normalized to percentages.
    pub fn sanitize(&self, policy: InputPolicy) -> Result<Self, InputError> {
        let mut out = *self;
        for gas in Gas::ALL {
            let value = self.get(gas);
            if value.is_infinite() {
                return Err(InputError::NonFiniteConcentration { gas, value });
            }
            let bad = value.is_nan() || value < 0.0;
            if !bad {
                continue;
            }
            match policy {
                InputPolicy::Reject if value.is_nan() => {
                    return Err(InputError::NonFiniteConcentration { gas, value });
                }
                InputPolicy::Reject => {
                    return Err(InputError::NegativeConcentration { gas, value });
                }
                InputPolicy::Clamp => {
                    tracing::debug!(gas = %gas, value, "Clamping out-of-range concentration to 0 ppm");
                    *out.slot_mut(gas) = 0.0;
                }
            }
        }
        Ok(out)
    }
}
