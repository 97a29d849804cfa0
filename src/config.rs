use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::cost::{PlatformCost, SweepRange};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub sweep: SweepConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default = "default_platforms")]
    pub platforms: Vec<PlatformCost>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            sweep: SweepConfig::default(),
            display: DisplayConfig::default(),
            platforms: default_platforms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Total number of searches the fixed costs are amortized over
    #[serde(default = "default_volume")]
    pub volume: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            volume: default_volume(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SweepConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_sweep_min")]
    pub min: f64,
    #[serde(default = "default_sweep_max")]
    pub max: f64,
    #[serde(default = "default_sweep_step")]
    pub step: f64,
}

impl SweepConfig {
    pub fn range(&self) -> SweepRange {
        SweepRange::new(self.min, self.max, self.step)
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min: default_sweep_min(),
            max: default_sweep_max(),
            step: default_sweep_step(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_decimals")]
    pub decimals: usize,
}

impl DisplayConfig {
    /// Format a currency amount for display, e.g. `$0.0786`
    pub fn format_amount(&self, amount: f64) -> String {
        format!("{}{:.*}", self.currency, self.decimals, amount)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            decimals: default_decimals(),
        }
    }
}

fn default_volume() -> f64 {
    5000.0
}

fn default_true() -> bool {
    true
}

fn default_sweep_min() -> f64 {
    1000.0
}

fn default_sweep_max() -> f64 {
    10000.0
}

fn default_sweep_step() -> f64 {
    500.0
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_decimals() -> usize {
    4
}

/// Preloaded platform data used when the config file defines none
fn default_platforms() -> Vec<PlatformCost> {
    vec![
        PlatformCost::new("Clarifai", 30.0, 0.0088, 2.0),
        PlatformCost::new("SerpAPI", 75.0, 0.02, 2.0),
        PlatformCost::new("Supabase", 25.0, 0.0, 0.0),
        PlatformCost::new("Expo", 100.0, 0.0, 0.0),
        PlatformCost::new("AWS", 1.0, 0.0, 0.0),
        PlatformCost::new("People Data Labs", 100.0, 0.25, 1.0),
        PlatformCost::new("Endato (Teaser)", 0.0, 0.25, 1.0),
        PlatformCost::new("Endato (Full)", 0.0, 0.25, 1.0),
        PlatformCost::new("LaunchDarkly", 12.0, 0.0, 0.0),
    ]
}

/// Load configuration from an optional TOML file layered under CPS__ env vars
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix("CPS").separator("__"))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    // At least one platform must be configured
    if cfg.platforms.is_empty() {
        anyhow::bail!("At least one platform must be configured");
    }

    for platform in &cfg.platforms {
        if platform.name.is_empty() {
            anyhow::bail!("Platform name cannot be empty");
        }

        for (field, value) in [
            ("fixed_cost", platform.fixed_cost),
            ("cost_per_call", platform.cost_per_call),
            ("calls_per_search", platform.calls_per_search),
        ] {
            if !value.is_finite() || value < 0.0 {
                anyhow::bail!(
                    "Platform '{}' has invalid {}: {}",
                    platform.name,
                    field,
                    value
                );
            }
        }
    }

    if !cfg.search.volume.is_finite() || cfg.search.volume <= 0.0 {
        anyhow::bail!(
            "Search volume must be a positive number, got {}",
            cfg.search.volume
        );
    }

    if cfg.sweep.enabled {
        cfg.sweep.range().validate()?;
    }

    Ok(())
}
