//! Diagnostics Configuration Module
//!
//! Operator-tunable settings loaded from TOML: input policy for bad
//! concentrations, pentagon tolerances and report options.
//!
//! ## Loading Order
//!
//! 1. `DGA_CONFIG` environment variable (path to TOML file)
//! 2. `dga_config.toml` in the current working directory
//! 3. Built-in defaults
//!
//! ## Usage
//!
//! Engines take their parameters explicitly. The global holder exists for the
//! binary, which calls `config::init()` once at startup:
//!
//! ```ignore
//! config::init(DiagnosticsConfig::load());
//! let report = diagnose(&sample, code, config::get())?;
//! ```

mod diagnostics_config;
pub mod validation;

pub use diagnostics_config::*;

use std::sync::OnceLock;

/// Global diagnostics configuration, initialized once at startup.
static DIAGNOSTICS_CONFIG: OnceLock<DiagnosticsConfig> = OnceLock::new();

/// Initialize the global diagnostics configuration.
///
/// Later calls are ignored with a warning.
pub fn init(config: DiagnosticsConfig) {
    if DIAGNOSTICS_CONFIG.set(config).is_err() {
        tracing::warn!("config::init() called more than once, ignoring");
    }
}

/// Get a reference to the global diagnostics configuration.
///
/// Falls back to built-in defaults (and pins them) if `init()` was never called.
pub fn get() -> &'static DiagnosticsConfig {
    DIAGNOSTICS_CONFIG.get_or_init(|| {
        tracing::debug!("config::get() before config::init(), using defaults");
        DiagnosticsConfig::default()
    })
}

/// Check whether the config has been initialized.
pub fn is_initialized() -> bool {
    DIAGNOSTICS_CONFIG.get().is_some()
}
