//! Mercado CLI - Sample database seeding and inspection tools.
//!
//! # Usage
//!
//! ```bash
//! # Reset and seed the sample e-commerce database
//! mercado seed
//!
//! # Show document counts and indexes for the seeded collections
//! mercado stats
//! ```
//!
//! # Commands
//!
//! - `seed` - Drop the five sample collections, insert the fixture data, create indexes
//! - `stats` - Print per-collection document counts and index names

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "mercado")]
#[command(version, about = "Mercado sample-data tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reset and seed the sample e-commerce database
    Seed,
    /// Show document counts and indexes for the seeded collections
    Stats,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed => commands::seed::run().await?,
        Commands::Stats => commands::stats::run().await?,
    }
    Ok(())
}
