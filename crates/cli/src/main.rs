// SPDX-License-Identifier: MIT
// Copyright (c) 2026 VCam Contributors

//! vcamctl - virtual camera extension lifecycle CLI

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{preflight, run, settings};

#[derive(Parser)]
#[command(
    name = "vcamctl",
    version,
    about = "Virtual camera extension lifecycle manager"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an activation flow against the simulated extension service
    Run(run::RunArgs),
    /// Check whether the app is installed in the trusted location
    Preflight(preflight::PreflightArgs),
    /// Open the system settings pane where extensions are approved
    Settings(settings::SettingsArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    setup_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => run::run(args).await,
        Commands::Preflight(args) => preflight::preflight(args),
        Commands::Settings(args) => settings::settings(args).await,
    }
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
