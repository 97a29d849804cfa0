//! Command implementations for the CLI
//!
//! This module contains the implementation of all CLI commands:
//! - compute: Compute the cost per search for the configured platforms
//! - sweep: Evaluate the cost per search over a range of search volumes
//! - dashboard: Display the interactive dashboard
//! - config: Configuration display and validation

pub mod compute;
pub mod config;
pub mod dashboard;
pub mod sweep;
