mod api;
mod config;
mod currencies;
mod db;
mod error;
mod listing;
mod models;
mod rates;
mod store;
mod validation;

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use api::AppState;
use rates::{FixerClient, RateProvider};

/// HTTP API for the webshop: buyers, products and price conversion.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Path to the TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override the listen port from the configuration file
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = config::load_config(&args.config)?;

    let db_url = env::var("DATABASE_URL").unwrap_or_else(|_| config.database.url.clone());
    let pool = db::create_db_pool(&db_url).await?;

    let access_key = env::var("FIXER_ACCESS_KEY").unwrap_or_default();
    if access_key.is_empty() {
        warn!("FIXER_ACCESS_KEY is not set; rate lookups will use the fallback table");
    }
    let fixer = FixerClient::new(&config.rates, access_key)?;
    let rates = RateProvider::new(Box::new(fixer), config.rates.fallback.table());

    let state = AppState {
        pool,
        rates: Arc::new(rates),
    };

    let port = args.port.unwrap_or(config.server.port);
    let addr = format!("{}:{}", config.server.host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on {addr}");

    axum::serve(listener, api::router(state)).await?;

    Ok(())
}
