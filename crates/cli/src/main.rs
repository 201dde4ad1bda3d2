//! weather8-cli entry point.
//!
//! Prints normalized weather JSON to stdout; logs go to stderr.

use anyhow::{Result, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use weather8_client::{WeatherApiClient, WeatherForecast, WeatherReport};
use weather8_core::AppConfig;

mod cli;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .json()
        .init();

    let cli = Cli::parse();
    tracing::debug!(command = ?cli.command, "running");

    let config = AppConfig::load()?;
    config.require_weather_api_key()?;
    let client = WeatherApiClient::from_app_config(&config)?;

    match cli.command {
        Command::Current { city } => {
            let report = WeatherReport::from(client.get_current_weather(&city).await?);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Forecast { city, days } => {
            let days = days.unwrap_or(config.forecast_days);
            let forecast = WeatherForecast::from(client.get_forecast(&city, days).await?);
            println!("{}", serde_json::to_string_pretty(&forecast)?);
        }
        Command::Check => {
            if !client.test_connection().await {
                bail!("weather API check failed for {}", client.base_url());
            }
            println!("ok: {}", client.base_url());
        }
    }

    Ok(())
}
