//! Grade Predict - CLI Entry Point

use anyhow::{Context, Result};
use clap::Parser;

use grade_core::commands::{Cli, Commands};
use grade_core::constants::{APP_NAME, APP_VERSION};

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    log::info!("Starting {} v{}...", APP_NAME, APP_VERSION);

    let config = cli.artifact_config().context("invalid artifact configuration")?;

    match &cli.command {
        Commands::Predict(cmd) => cmd.run(&config)?,
        Commands::Layout(cmd) => cmd.run()?,
        Commands::Verify(cmd) => cmd.run(&config)?,
    }

    Ok(())
}
