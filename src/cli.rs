use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cps", version, about = "Cost per Search calculator")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "cps.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Compute the cost per search for the configured platforms (default)
    Compute {
        /// Search volume override
        #[arg(short, long)]
        volume: Option<f64>,

        /// Output format: table, json
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Evaluate the cost per search over a range of search volumes
    Sweep {
        /// Minimum search volume
        #[arg(long)]
        min: Option<f64>,

        /// Maximum search volume
        #[arg(long)]
        max: Option<f64>,

        /// Search volume step size
        #[arg(long)]
        step: Option<f64>,

        /// Output format: table, csv, json
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Display the interactive dashboard
    Dashboard,

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display the effective configuration
    Show,

    /// Validate configuration file
    Validate,
}

impl Cli {
    /// Get the command to execute, defaulting to Compute if none provided
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Compute {
            volume: None,
            format: "table".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_compute() {
        let cli = Cli {
            config: PathBuf::from("cps.toml"),
            command: None,
        };

        match cli.get_command() {
            Commands::Compute { volume, format } => {
                assert!(volume.is_none());
                assert_eq!(format, "table");
            }
            _ => panic!("Expected Compute command"),
        }
    }

    #[test]
    fn test_cli_parsing_compute_with_volume() {
        let args = vec!["cps", "compute", "--volume", "2500"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.get_command() {
            Commands::Compute { volume, .. } => {
                assert_eq!(volume, Some(2500.0));
            }
            _ => panic!("Expected Compute command"),
        }
    }

    #[test]
    fn test_cli_parsing_sweep() {
        let args = vec!["cps", "sweep", "--min", "1000", "--max", "10000", "--step", "500"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.get_command() {
            Commands::Sweep { min, max, step, format } => {
                assert_eq!(min, Some(1000.0));
                assert_eq!(max, Some(10000.0));
                assert_eq!(step, Some(500.0));
                assert_eq!(format, "table");
            }
            _ => panic!("Expected Sweep command"),
        }
    }

    #[test]
    fn test_cli_parsing_config_show() {
        let args = vec!["cps", "config", "show"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.get_command() {
            Commands::Config { action } => {
                matches!(action, ConfigCommands::Show);
            }
            _ => panic!("Expected Config command"),
        }
    }
}
