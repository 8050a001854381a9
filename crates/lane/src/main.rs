//! lane - Memory Lane CLI
//!
//! A birthday timeline of memories, browsed decade by decade.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod cli;
mod commands;
mod config;
mod error;
mod render;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("lane=info".parse()?))
        .init();

    let cli = Cli::parse();
    let seed = cli.seed.as_deref();

    // Load configuration
    let config = config::Config::load()?;

    // Execute command
    match cli.command {
        Commands::List { decade } => commands::timeline::list(decade.as_deref(), &config, seed),
        Commands::Decades => commands::timeline::decades(&config, seed),
        Commands::Search(args) => commands::search::execute(args, &config, seed),
        Commands::Show { id } => commands::timeline::show(&id, &config, seed),
        Commands::Stats { json } => commands::stats::execute(json, &config, seed),
        Commands::Export { out } => commands::export::execute(out.as_deref(), &config, seed),
        Commands::Browse => commands::browse::execute(&config, seed),
        Commands::Cake { blow } => commands::cake::execute(blow, &config).await,
        Commands::Version => {
            println!("lane {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
