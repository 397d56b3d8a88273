//! cinelog entry point: env config, tracing, then the HTTP server.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use cinelog_server::db::create_pool;
use cinelog_server::http::{run_server, ServerConfig};
use cinelog_server::AppConfig;

mod tracing_setup;

#[derive(Parser, Debug)]
#[command(name = "cinelog", version, about = "CRUD API for a favorite movie list")]
struct Cli {
    /// Port to bind the HTTP server to (overrides APP_PORT)
    #[arg(long)]
    port: Option<u16>,

    /// PostgreSQL connection string (overrides DATABASE_URL / DB_* vars)
    #[arg(long)]
    database_url: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env values never overwrite variables already set in the environment
    let dotenv_path = dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init_tracing(cli.debug)?;

    if let Some(path) = dotenv_path {
        tracing::debug!("Loaded .env from {}", path.display());
    }

    let mut config = AppConfig::from_env();
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(url) = cli.database_url {
        config.database_url = url;
    }

    let pool = create_pool(&config.database_url).context("invalid database URL")?;

    let bind_addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    run_server(pool, ServerConfig { bind_addr }).await?;

    Ok(())
}
