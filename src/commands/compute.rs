//! Compute command implementation
//!
//! Computes the blended cost per search for the configured platforms and
//! prints the platform table, the fixed/variable breakdown, and the CPS
//! readout.

use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use serde_json::json;
use std::path::Path;
use tracing::info;

use cps_calculator::config::{self, Config};
use cps_calculator::cost::{compute_cps, CostBreakdown, PlatformCost};

/// Execute the compute command
///
/// # Arguments
/// * `config_path` - Configuration file path
/// * `volume` - Optional search volume override
/// * `format` - Output format ("table" or "json")
pub fn execute(config_path: &Path, volume: Option<f64>, format: &str) -> Result<()> {
    validate_format(format)?;

    let cfg = config::load_config(config_path)?;
    let searches = volume.unwrap_or(cfg.search.volume);

    info!(
        searches,
        platforms = cfg.platforms.len(),
        "computing cost per search"
    );

    let breakdown = match compute_cps(&cfg.platforms, searches) {
        Ok(breakdown) => breakdown,
        Err(e) => {
            if format == "json" {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&json!({
                        "error": {
                            "message": e.to_string(),
                            "type": e.kind(),
                        }
                    }))?
                );
            }
            return Err(e.into());
        }
    };

    match format {
        "json" => print_json(&cfg, searches, &breakdown)?,
        _ => print_table(&cfg, searches, &breakdown),
    }

    Ok(())
}

/// Validate command arguments
fn validate_format(format: &str) -> Result<()> {
    match format {
        "table" | "json" => Ok(()),
        _ => anyhow::bail!(
            "Invalid format: '{}'. Must be one of: table, json",
            format
        ),
    }
}

/// Print the platform table, breakdown, and CPS readout
fn print_table(cfg: &Config, searches: f64, breakdown: &CostBreakdown) {
    println!("Platform Costs and API Usage:");
    println!("{}", platform_table(&cfg.platforms));
    println!();

    let total_fixed: f64 = cfg.platforms.iter().map(|p| p.fixed_cost).sum();

    println!("{}", "Cost per Search:".bold());
    println!(
        "  Fixed:    {}  ({}{:.2} amortized over {} searches)",
        cfg.display.format_amount(breakdown.fixed_cost_per_search),
        cfg.display.currency,
        total_fixed,
        searches
    );
    println!(
        "  Variable: {}",
        cfg.display.format_amount(breakdown.variable_cost_per_search)
    );
    println!(
        "  CPS:      {}",
        cfg.display.format_amount(breakdown.total).purple().bold()
    );
}

/// Build the platform table
fn platform_table(platforms: &[PlatformCost]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("PLATFORM").fg(Color::Cyan),
        Cell::new("FIXED COST").fg(Color::Cyan),
        Cell::new("COST/CALL").fg(Color::Cyan),
        Cell::new("CALLS/SEARCH").fg(Color::Cyan),
        Cell::new("VARIABLE/SEARCH").fg(Color::Cyan),
    ]);

    for platform in platforms {
        table.add_row(vec![
            Cell::new(&platform.name),
            Cell::new(format!("${:.2}", platform.fixed_cost)),
            Cell::new(format!("${:.4}", platform.cost_per_call)),
            Cell::new(format!("{}", platform.calls_per_search)),
            Cell::new(format!("${:.4}", platform.variable_cost())),
        ]);
    }

    table
}

/// Print the result as JSON
fn print_json(cfg: &Config, searches: f64, breakdown: &CostBreakdown) -> Result<()> {
    let output = json!({
        "searches": searches,
        "currency": cfg.display.currency,
        "fixed_cost_per_search": breakdown.fixed_cost_per_search,
        "variable_cost_per_search": breakdown.variable_cost_per_search,
        "cps": breakdown.total,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
