//! cca - command line interface for cloud.ca

mod cli;
mod commands;
mod config;
mod output;

use anyhow::{anyhow, Result};
use clap::Parser;
use cli::{Cli, Commands};
use config::Settings;
use output::Output;
use tracing::{debug, warn};

#[tokio::main]
async fn main() {
    // CCA_* variables from .env must be visible before clap reads the environment
    let env_file = config::load_env();

    let cli = Cli::parse();
    let settings = cli.global.normalize();
    settings.log.init();
    for warning in &settings.warnings {
        warn!("{warning}");
    }

    let out = Output::new(settings.output, settings.colored);

    match env_file {
        Ok(Some(path)) => debug!(path = %path.display(), "loaded .env"),
        Ok(None) => {}
        Err(e) => out.fail(e),
    }

    let command = match cli.command {
        Some(cmd) => cmd,
        None => out.fail(anyhow!("no command provided. Use --help for usage.")),
    };

    if let Err(e) = run(command, &settings, &out).await {
        out.fail(e);
    }
}

async fn run(command: Commands, settings: &Settings, out: &Output) -> Result<()> {
    match command {
        Commands::Completion { shell } => commands::completion::run(shell),
        Commands::Version => commands::version::run(),
        Commands::Environment(cmd) => {
            commands::environment::run(cmd, &settings.client()?, out).await
        }
        Commands::Connection(cmd) => commands::connection::run(cmd, &settings.client()?, out).await,
        Commands::Instance(cmd) => commands::instance::run(cmd, &settings.client()?, out).await,
        Commands::Volume(cmd) => commands::volume::run(cmd, &settings.client()?, out).await,
        Commands::Network(cmd) => commands::network::run(cmd, &settings.client()?, out).await,
        Commands::Vpn(cmd) => commands::vpn::run(cmd, &settings.client()?, out).await,
    }
}
