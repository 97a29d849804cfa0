//! Interactive dashboard module
//!
//! This module provides the terminal dashboard: an editable platform table,
//! a live cost-per-search readout, and a line chart of CPS across a range of
//! search volumes.

pub mod ui;

// Re-export commonly used types
pub use ui::DashboardApp;
