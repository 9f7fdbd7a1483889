//! Config Validation Tests
//!
//! Typo detection, range validation and file loading for `DiagnosticsConfig`,
//! exercised independently from the engines.

use dga_diagnostics::config::validation::{
    known_config_keys, suggest_correction, validate_ranges, validate_unknown_keys,
};
use dga_diagnostics::config::{ConfigError, DiagnosticsConfig};
use dga_diagnostics::InputPolicy;
use std::io::Write;

// ============================================================================
// Typo Detection
// ============================================================================

#[test]
fn typo_in_pentagon_section_warns_with_suggestion() {
    let toml_str = r#"
[pentagon]
orgin_epsilon = 1e-6
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert_eq!(warnings.len(), 1, "Expected exactly 1 warning");
    assert!(warnings[0].field.contains("orgin_epsilon"));
    assert_eq!(
        warnings[0].suggestion.as_deref(),
        Some("pentagon.origin_epsilon")
    );
}

#[test]
fn misspelled_section_is_reported() {
    let warnings = validate_unknown_keys("[reprot]\npretty = false\n");
    let fields: Vec<_> = warnings.iter().map(|w| w.field.as_str()).collect();
    assert!(fields.contains(&"reprot"));
    assert!(fields.contains(&"reprot.pretty"));
    let section = warnings.iter().find(|w| w.field == "reprot").unwrap();
    assert_eq!(section.suggestion.as_deref(), Some("report"));
}

#[test]
fn every_known_key_is_accepted() {
    let known = known_config_keys();
    assert!(known.contains("input.negative_policy"));
    assert!(known.contains("report.default_fault_code"));
    let toml_str = DiagnosticsConfig::default().to_toml().unwrap();
    assert!(validate_unknown_keys(&toml_str).is_empty());
}

#[test]
fn garbage_key_has_no_suggestion() {
    assert!(suggest_correction("completely_unrelated_key_name", &known_config_keys()).is_none());
}

#[test]
fn unparsable_toml_yields_no_key_warnings() {
    assert!(validate_unknown_keys("[input\nbroken").is_empty());
}

// ============================================================================
// Range Validation
// ============================================================================

#[test]
fn negative_epsilon_is_fatal() {
    let mut config = DiagnosticsConfig::default();
    config.pentagon.degenerate_area_epsilon = -1.0;
    let (errors, _) = validate_ranges(&config);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("degenerate_area_epsilon"));
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn infinite_epsilon_is_fatal() {
    let mut config = DiagnosticsConfig::default();
    config.pentagon.origin_epsilon = f64::INFINITY;
    assert!(config.validate().is_err());
}

// ============================================================================
// File Loading
// ============================================================================

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn load_from_file_applies_sections() {
    let file = write_config(
        r#"
[input]
negative_policy = "clamp"

[report]
pretty = false
default_fault_code = "T2"
"#,
    );
    let config = DiagnosticsConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config.input.negative_policy, InputPolicy::Clamp);
    assert!(!config.report.pretty);
    assert_eq!(config.report.default_fault_code.as_deref(), Some("T2"));
    assert_eq!(config.pentagon.origin_epsilon, 1e-9);
}

#[test]
fn load_from_file_with_unknown_keys_still_loads() {
    let file = write_config("[input]\nnegative_polcy = \"clamp\"\n");
    let config = DiagnosticsConfig::load_from_file(file.path()).unwrap();
    // The typo is ignored, so the default policy stays
    assert_eq!(config.input.negative_policy, InputPolicy::Reject);
}

#[test]
fn parse_error_names_the_file() {
    let file = write_config("[pentagon]\norigin_epsilon = \"tiny\"\n");
    let err = DiagnosticsConfig::load_from_file(file.path()).unwrap_err();
    match &err {
        ConfigError::Parse(path, _) => assert_eq!(path, file.path()),
        other => panic!("expected parse error, got {other:?}"),
    }
    assert!(err.to_string().contains(&file.path().display().to_string()));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = DiagnosticsConfig::load_from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(..)));
}

#[test]
fn save_then_load_preserves_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dga_config.toml");

    let mut config = DiagnosticsConfig::default();
    config.input.negative_policy = InputPolicy::Clamp;
    config.pentagon.origin_epsilon = 1e-6;
    config.save_to_file(&path).unwrap();

    assert_eq!(DiagnosticsConfig::load_from_file(&path).unwrap(), config);
}
