//! weather8 server entry point.
//!
//! Loads configuration, builds the WeatherAPI.com client, and serves the
//! dashboard and JSON API until interrupted. Logs are JSON on stdout.

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use weather8_client::WeatherApiClient;
use weather8_core::{AppConfig, CacheStore};

mod envelope;
mod error;
mod handler;
mod routes;
#[cfg(test)]
mod test_support;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .json()
        .init();

    let config = AppConfig::load()?;
    config.require_weather_api_key()?;

    let client = WeatherApiClient::from_app_config(&config)?;
    let cache = CacheStore::new(config.cache_ttl());
    let state = handler::AppState::new(Arc::new(client), cache, config.forecast_days);

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(
        addr = %config.bind_addr,
        cache_ttl_secs = config.cache_ttl_secs,
        "Starting weather8 server"
    );

    axum::serve(listener, handler::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("weather8 server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
