//! Duval charts for transformer fault classification
//!
//! - Triangle 1: CH4 / C2H4 / C2H2 ternary chart, ordered decision tree
//! - Pentagon 1: five-gas polygon centroid, classified by polar angle
//! - Chart overlays: zone polygons for renderers

pub mod chart;
pub mod pentagon;
pub mod triangle;

pub use chart::{triangle_zone_boundaries, ZoneBoundary};
pub use pentagon::{
    analyze_pentagon, analyze_pentagon_with, axis_vertices, pentagon_percentages,
    pentagon_vertices, sector_zone, PentagonParams,
};
pub use triangle::{classify_triangle, triangle_point, triangle_zone};
