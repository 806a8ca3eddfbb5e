//! HTTP server command
//!
//! Creates the connection pool, runs migrations, and serves the API.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use registrar_server::db::{create_pool, migrations};
use registrar_server::http::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:3030)
    #[arg(long, short = 'b', default_value = "127.0.0.1:3030")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (overrides config/environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let database_url = args
        .database_url
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

    tracing::info!("Starting registrar server on {}", args.bind);

    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
