//! Thingdash CLI entry point

use clap::Parser;
use thingdash::cli::{Cli, Commands};
use thingdash::core::error::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_env("THINGDASH_LOG"))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search(args) => thingdash::cli::search::run(args).await,
        Commands::Inspect(args) => thingdash::cli::inspect::run(args).await,
    }
}
