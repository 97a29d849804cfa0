//! Sweep command implementation
//!
//! Evaluates the cost per search across a range of search volumes and prints
//! the resulting series as a table, CSV, or JSON.

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use serde_json::json;
use std::path::Path;
use tracing::info;

use cps_calculator::config::{self, Config};
use cps_calculator::cost::{evaluate_range, SweepPoint};

/// Execute the sweep command
///
/// # Arguments
/// * `config_path` - Configuration file path
/// * `min`, `max`, `step` - Optional overrides for the configured range
/// * `format` - Output format ("table", "csv", or "json")
pub fn execute(
    config_path: &Path,
    min: Option<f64>,
    max: Option<f64>,
    step: Option<f64>,
    format: &str,
) -> Result<()> {
    validate_format(format)?;

    let cfg = config::load_config(config_path)?;

    let mut range = cfg.sweep.range();
    if let Some(min) = min {
        range.min = min;
    }
    if let Some(max) = max {
        range.max = max;
    }
    if let Some(step) = step {
        range.step = step;
    }

    info!(
        min = range.min,
        max = range.max,
        step = range.step,
        "evaluating cost per search over range"
    );

    let points = match evaluate_range(&cfg.platforms, &range) {
        Ok(points) => points,
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
        "csv" => print_csv(&points),
        "json" => println!("{}", serde_json::to_string_pretty(&points)?),
        _ => print_table(&cfg, &points),
    }

    Ok(())
}

/// Validate command arguments
fn validate_format(format: &str) -> Result<()> {
    match format {
        "table" | "csv" | "json" => Ok(()),
        _ => anyhow::bail!(
            "Invalid format: '{}'. Must be one of: table, csv, json",
            format
        ),
    }
}

/// Print the series as `searches,cps` lines
fn print_csv(points: &[SweepPoint]) {
    println!("searches,cps");
    for point in points {
        println!("{},{}", point.searches, point.cps);
    }
}

/// Print the series as a table with a summary line
fn print_table(cfg: &Config, points: &[SweepPoint]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("SEARCHES").fg(Color::Cyan),
        Cell::new("CPS").fg(Color::Cyan),
    ]);

    for point in points {
        table.add_row(vec![
            Cell::new(format!("{}", point.searches)),
            Cell::new(cfg.display.format_amount(point.cps)),
        ]);
    }

    println!("CPS Over a Range of Search Volumes:");
    println!("{}", table);

    if let (Some(first), Some(last)) = (points.first(), points.last()) {
        println!(
            "  {} points | CPS from {} at {} searches down to {} at {} searches",
            points.len(),
            cfg.display.format_amount(first.cps),
            first.searches,
            cfg.display.format_amount(last.cps),
            last.searches
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_format() {
        assert!(validate_format("table").is_ok());
        assert!(validate_format("csv").is_ok());
        assert!(validate_format("json").is_ok());
        assert!(validate_format("xml").is_err());
    }
}
