//! dga-diag - transformer dissolved gas analysis from the command line
//!
//! Reads one DGA sample, classifies it on the Duval Triangle 1 and Pentagon 1,
//! computes the Health Index and prints the combined report as JSON on stdout.
//!
//! # Usage
//!
//! ```bash
//! # Reference sample with an explicit fault code
//! dga-diag --preset "Ex 4" --fault T3
//!
//! # Sample file plus the external classifier's response
//! dga-diag --input sample.json --classifier-response prediction.json
//!
//! # Per-gas flags (override the file / preset values)
//! dga-diag --h2 100 --ch4 40 --c2h4 20 --co 300 --co2 2500 --fault T1
//! ```
//!
//! # Environment Variables
//!
//! - `DGA_CONFIG`: Path to the TOML config (default: ./dga_config.toml)
//! - `RUST_LOG`: Logging level (default: info, written to stderr)

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

use dga_diagnostics::classifier::{interpret_response, parse_response, FaultPrediction};
use dga_diagnostics::config::{self, DiagnosticsConfig};
use dga_diagnostics::presets::{find_preset, presets};
use dga_diagnostics::{diagnose, DiagnosticReport, GasSample};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "dga-diag")]
#[command(about = "Transformer DGA diagnostics: Duval Triangle 1, Duval Pentagon 1 and Health Index")]
#[command(version)]
struct CliArgs {
    /// Sample file (.json or .toml) with gas keys H2, CH4, C2H6, C2H4, C2H2, CO, CO2, O2, N2
    #[arg(long, value_name = "FILE", conflicts_with = "preset")]
    input: Option<PathBuf>,

    /// Start from a named reference sample, e.g. "Ex 3" or "Ex 3 (D1)"
    #[arg(long, value_name = "NAME")]
    preset: Option<String>,

    #[arg(long)]
    h2: Option<f64>,
    #[arg(long)]
    ch4: Option<f64>,
    #[arg(long)]
    c2h6: Option<f64>,
    #[arg(long)]
    c2h4: Option<f64>,
    #[arg(long)]
    c2h2: Option<f64>,
    #[arg(long)]
    co: Option<f64>,
    #[arg(long)]
    co2: Option<f64>,
    #[arg(long)]
    o2: Option<f64>,
    #[arg(long)]
    n2: Option<f64>,

    /// Fault code from the external classifier (N, PD, D1, D2, T1, T2, T3, DT)
    #[arg(long, value_name = "CODE")]
    fault: Option<String>,

    /// JSON response body of the external classifier; supplies the fault code
    /// unless --fault is given
    #[arg(long, value_name = "FILE")]
    classifier_response: Option<PathBuf>,

    /// Config file (default: $DGA_CONFIG, then ./dga_config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Single-line JSON regardless of report.pretty
    #[arg(long)]
    compact: bool,

    /// List the reference presets and exit
    #[arg(long)]
    list_presets: bool,
}

/// Report plus the interpreted classifier verdict, when one was supplied.
#[derive(Serialize)]
struct Output<'a> {
    #[serde(flatten)]
    report: &'a DiagnosticReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    classifier: Option<FaultPrediction>,
}

// ============================================================================
// Input Loading
// ============================================================================

fn load_sample_file(path: &Path) -> Result<GasSample> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read sample file {}", path.display()))?;
    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    if is_toml {
        toml::from_str(&contents)
            .with_context(|| format!("Invalid TOML sample in {}", path.display()))
    } else {
        serde_json::from_str(&contents)
            .with_context(|| format!("Invalid JSON sample in {}", path.display()))
    }
}

fn build_sample(args: &CliArgs) -> Result<GasSample> {
    let mut sample = if let Some(path) = &args.input {
        load_sample_file(path)?
    } else if let Some(name) = &args.preset {
        let preset = find_preset(name)
            .with_context(|| format!("Unknown preset '{name}' (see --list-presets)"))?;
        info!(preset = preset.name, "Using reference preset");
        preset.sample
    } else {
        GasSample::default()
    };

    let overrides = [
        (&mut sample.h2, args.h2),
        (&mut sample.ch4, args.ch4),
        (&mut sample.c2h6, args.c2h6),
        (&mut sample.c2h4, args.c2h4),
        (&mut sample.c2h2, args.c2h2),
        (&mut sample.co, args.co),
        (&mut sample.co2, args.co2),
        (&mut sample.o2, args.o2),
        (&mut sample.n2, args.n2),
    ];
    for (slot, value) in overrides {
        if let Some(v) = value {
            *slot = v;
        }
    }
    Ok(sample)
}

fn load_prediction(path: &Path) -> Result<FaultPrediction> {
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read classifier response {}", path.display()))?;
    let response = parse_response(&body)
        .with_context(|| format!("Invalid classifier response in {}", path.display()))?;
    Ok(interpret_response(&response))
}

fn print_presets() {
    for preset in presets() {
        let s = &preset.sample;
        println!(
            "{:<10} H2={} CH4={} C2H6={} C2H4={} C2H2={} CO={} CO2={}",
            preset.name, s.h2, s.ch4, s.c2h6, s.c2h4, s.c2h2, s.co, s.co2
        );
    }
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() -> Result<()> {
    // Initialize logging; stdout carries the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    if args.list_presets {
        print_presets();
        return Ok(());
    }

    let diagnostics_config = match &args.config {
        Some(path) => DiagnosticsConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => DiagnosticsConfig::load(),
    };
    config::init(diagnostics_config);
    let cfg = config::get();

    let sample = build_sample(&args)?;

    let prediction = args
        .classifier_response
        .as_deref()
        .map(load_prediction)
        .transpose()?;

    let fault_code = args
        .fault
        .clone()
        .or_else(|| prediction.as_ref().map(|p| p.raw_code.clone()))
        .or_else(|| cfg.report.default_fault_code.clone())
        .context("No fault code: pass --fault, --classifier-response, or set report.default_fault_code")?;

    let report = diagnose(&sample, &fault_code, cfg).context("Invalid gas sample")?;

    let output = Output {
        report: &report,
        classifier: prediction,
    };
    let json = if cfg.report.pretty && !args.compact {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{json}");

    Ok(())
}
