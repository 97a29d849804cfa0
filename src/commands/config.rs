use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use tracing::info;

use cps_calculator::config;

/// Execute the config show command
///
/// Displays the effective configuration (file, environment, and defaults
/// merged) as pretty TOML
pub fn show(config_path: &Path) -> Result<()> {
    println!("{}", "Loading configuration...".yellow());
    info!("Loading configuration for display");

    let cfg = config::load_config(config_path)?;

    println!("{}", "Current Configuration:".green().bold());
    println!();

    let toml_string = toml::to_string_pretty(&cfg)?;
    println!("{}", toml_string);

    info!("Configuration displayed successfully");
    Ok(())
}

/// Execute the config validate command
///
/// Validates the configuration file
pub fn validate(config_path: &Path) -> Result<()> {
    println!("{}", "Validating configuration...".yellow());
    info!("Validating configuration file");

    let cfg = config::load_config(config_path)?;

    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!("  Platforms:     {}", cfg.platforms.len());
    println!("  Search Volume: {}", cfg.search.volume);
    if cfg.sweep.enabled {
        println!(
            "  Sweep:         {} to {} step {}",
            cfg.sweep.min, cfg.sweep.max, cfg.sweep.step
        );
    } else {
        println!("  Sweep:         disabled");
    }

    info!("Configuration validation successful");
    Ok(())
}
