//! registrar CLI - user registration service entry point
//!
//! Provides the `serve` subcommand, which runs migrations and starts
//! the HTTP API.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::{init_tracing, TracingConfig};

#[derive(Parser, Debug)]
#[command(
    name = "registrar",
    author,
    version,
    about = "Minimal user-registration HTTP service backed by PostgreSQL"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before clap resolves env-backed args like DATABASE_URL
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    init_tracing(&TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await,
    }
}
