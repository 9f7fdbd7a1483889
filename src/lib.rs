//! DGA Diagnostics: transformer fault classification and health scoring
//!
//! Deterministic engines for dissolved gas analysis (DGA) of transformer oil.
//!
//! ## Architecture
//!
//! - **Duval Triangle 1**: CH4 / C2H4 / C2H2 ternary chart, ordered decision tree
//! - **Duval Pentagon 1**: five-gas polygon centroid, classified by polar angle
//! - **Health Index**: weighted gas scores plus fault, discharge and paper factors
//! - **Geometry**: barycentric mapping and polygon centroids for the charts
//! - **Classifier**: interpretation of the external fault classifier's response
//!
//! Every engine is a pure function of its input; the only global state is the
//! optional config holder used by the binary.

pub mod classifier;
pub mod config;
pub mod duval;
pub mod geometry;
pub mod health_index;
pub mod presets;
pub mod report;
pub mod types;

// Re-export configuration
pub use config::{ConfigError, DiagnosticsConfig};

// Re-export commonly used types
pub use types::{
    Condition, FaultCode, FaultSeverity, Gas, GasSample, HealthIndexResult, InputError,
    InputPolicy, PentagonResult, PentagonZone, TriangleResult, TriangleZone,
};

// Re-export engines
pub use duval::{analyze_pentagon, analyze_pentagon_with, classify_triangle, PentagonParams};
pub use health_index::{compute_health_index, SubIndexRatings};
pub use report::{diagnose, DiagnosticReport};
