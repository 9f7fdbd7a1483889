//! Shared data structures for transformer DGA diagnostics
//!
//! - `GasSample`: one lab reading (input to every engine)
//! - `TriangleResult` / `PentagonResult` / `HealthIndexResult`: engine outputs
//! - `FaultCode`: codes emitted by the external fault classifier
//! - `thresholds`: fixed lookup tables

mod gas;
mod fault;
mod results;
// Public so callers can reach the grouped constants as `types::thresholds::*`
pub mod thresholds;

pub use gas::*;
pub use fault::*;
pub use results::*;
pub use thresholds::*;
