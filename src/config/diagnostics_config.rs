//! Diagnostics Configuration - operator-tunable behavior as TOML values
//!
//! Only the input policy, numerical tolerances and report options live here.
//! Score tables, weights and chart geometry are fixed constants in
//! `types::thresholds` and cannot be overridden.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::duval::PentagonParams;
use crate::types::{pentagon_thresholds, InputPolicy};

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "DGA_CONFIG";

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "dga_config.toml";

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for the diagnostics engines and the CLI.
///
/// Load with `DiagnosticsConfig::load()` which searches:
/// 1. `$DGA_CONFIG` env var
/// 2. `./dga_config.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticsConfig {
    /// Handling of negative and NaN concentrations
    #[serde(default)]
    pub input: InputConfig,

    /// Pentagon centroid tolerances
    #[serde(default)]
    pub pentagon: PentagonConfig,

    /// Report output options
    #[serde(default)]
    pub report: ReportConfig,
}

impl DiagnosticsConfig {
    /// Load configuration using the standard search order:
    /// 1. `$DGA_CONFIG` environment variable
    /// 2. `./dga_config.toml` in the current working directory
    /// 3. Built-in defaults
    pub fn load() -> Self {
        // 1. Check env var
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), "Loaded diagnostics config from DGA_CONFIG");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from DGA_CONFIG, falling back");
                    }
                }
            } else {
                warn!(path = %path, "DGA_CONFIG points to non-existent file, falling back");
            }
        }

        // 2. Check ./dga_config.toml
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!("Loaded diagnostics config from ./dga_config.toml");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./dga_config.toml, using defaults");
                }
            }
        }

        // 3. Defaults
        info!("No dga_config.toml found, using built-in defaults");
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml_str(&contents).map_err(|e| match e {
            ConfigError::Parse(_, inner) => ConfigError::Parse(path.to_path_buf(), inner),
            other => other,
        })
    }

    /// Parse and validate a TOML document.
    ///
    /// Unknown keys are logged as warnings; out-of-range values are errors.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        // Two-pass: check for unknown keys first (warnings only)
        for w in super::validation::validate_unknown_keys(contents) {
            warn!("{}", w);
        }

        let config: Self = toml::from_str(contents)
            .map_err(|e| ConfigError::Parse(PathBuf::new(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the current config to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Save config to a file.
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = self.to_toml()?;
        std::fs::write(path, contents)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        info!(path = %path.display(), "Diagnostics config saved");
        Ok(())
    }

    /// Validate tolerances and report options.
    ///
    /// Rules:
    /// - Epsilons must be finite and strictly between 0 and 1
    /// - `report.default_fault_code`, when set, must not be blank
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (errors, warnings) = super::validation::validate_ranges(self);
        for w in &warnings {
            warn!("{}", w);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Pentagon tolerances in the form the engine takes them.
    pub fn pentagon_params(&self) -> PentagonParams {
        PentagonParams {
            degenerate_area_epsilon: self.pentagon.degenerate_area_epsilon,
            origin_epsilon: self.pentagon.origin_epsilon,
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, std::io::Error),
    Parse(PathBuf, toml::de::Error),
    Serialize(toml::ser::Error),
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "Config I/O error ({}): {}", path.display(), e),
            ConfigError::Parse(path, e) => {
                write!(f, "Config parse error ({}): {}", path.display(), e)
            }
            ConfigError::Serialize(e) => write!(f, "Config serialization error: {}", e),
            ConfigError::Validation(errors) => {
                writeln!(f, "Config validation failed:")?;
                for e in errors {
                    writeln!(f, "  - {}", e)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Sections
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// `reject` fails on negative / NaN gases, `clamp` zeroes them
    #[serde(default)]
    pub negative_policy: InputPolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PentagonConfig {
    /// Polygons with `|area|` below this have no centroid
    #[serde(default = "default_area_epsilon")]
    pub degenerate_area_epsilon: f64,

    /// Centroids this close to the origin are Undetermined
    #[serde(default = "default_origin_epsilon")]
    pub origin_epsilon: f64,
}

fn default_area_epsilon() -> f64 {
    pentagon_thresholds::DEGENERATE_AREA_EPSILON
}
fn default_origin_epsilon() -> f64 {
    pentagon_thresholds::ORIGIN_EPSILON
}

impl Default for PentagonConfig {
    fn default() -> Self {
        Self {
            degenerate_area_epsilon: default_area_epsilon(),
            origin_epsilon: default_origin_epsilon(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Pretty-print JSON output
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    /// Fault code used when the caller supplies none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_fault_code: Option<String>,
}

fn default_pretty() -> bool {
    true
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
            default_fault_code: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config = DiagnosticsConfig::from_toml_str("").unwrap();
        assert_eq!(config, DiagnosticsConfig::default());
        assert_eq!(config.input.negative_policy, InputPolicy::Reject);
        assert!(config.report.pretty);
        assert_eq!(config.pentagon_params(), PentagonParams::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = DiagnosticsConfig::from_toml_str(
            r#"
            [input]
            negative_policy = "clamp"

            [pentagon]
            origin_epsilon = 1e-6
            "#,
        )
        .unwrap();
        assert_eq!(config.input.negative_policy, InputPolicy::Clamp);
        assert_eq!(config.pentagon.origin_epsilon, 1e-6);
        assert_eq!(config.pentagon.degenerate_area_epsilon, 1e-9);
    }

    #[test]
    fn test_bad_policy_is_parse_error() {
        let err = DiagnosticsConfig::from_toml_str("[input]\nnegative_policy = \"ignore\"\n");
        assert!(matches!(err, Err(ConfigError::Parse(..))));
    }

    #[test]
    fn test_out_of_range_epsilon_is_validation_error() {
        let err = DiagnosticsConfig::from_toml_str("[pentagon]\norigin_epsilon = 0.0\n");
        match err {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 1);
                assert!(errors[0].contains("pentagon.origin_epsilon"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = DiagnosticsConfig::default();
        config.report.default_fault_code = Some("N".to_string());
        config.input.negative_policy = InputPolicy::Clamp;
        let text = config.to_toml().unwrap();
        assert_eq!(DiagnosticsConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_validation_display_lists_errors() {
        let err = ConfigError::Validation(vec!["a".into(), "b".into()]);
        assert_eq!(err.to_string(), "Config validation failed:\n  - a\n  - b\n");
    }
}
