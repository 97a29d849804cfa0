//! Cost model for the blended cost-per-search metric
//!
//! This module contains the pure computational core: the platform cost
//! records, the CPS formula, and the range sweep used for charting.

pub mod calculator;
pub mod models;
pub mod sweep;

// Re-export commonly used types
pub use calculator::compute_cps;
pub use models::{CostBreakdown, PlatformCost};
pub use sweep::{evaluate_range, SweepPoint, SweepRange};
