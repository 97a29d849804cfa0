use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cps_calculator::init_tracing;

fn main() -> Result<()> {
    // Parse CLI arguments
    let args = cli::Cli::parse();

    // The dashboard draws to the alternate screen; console logging would
    // corrupt it, so tracing is only initialized for the other commands
    let is_dashboard = matches!(args.get_command(), cli::Commands::Dashboard);

    if !is_dashboard {
        init_tracing();
    }

    // Dispatch to appropriate command handler
    match args.get_command() {
        cli::Commands::Compute { volume, format } => {
            commands::compute::execute(&args.config, volume, &format)?;
        }
        cli::Commands::Sweep {
            min,
            max,
            step,
            format,
        } => {
            commands::sweep::execute(&args.config, min, max, step, &format)?;
        }
        cli::Commands::Dashboard => {
            commands::dashboard::execute(&args.config)?;
        }
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&args.config)?,
            cli::ConfigCommands::Validate => commands::config::validate(&args.config)?,
        },
        cli::Commands::Version => {
            println!("CPS Calculator v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
