//! Argument parsing for `weather8-cli`.

use clap::{Parser, Subcommand};

/// Query WeatherAPI.com with the same configuration as the weather8 server
#[derive(Parser, Debug)]
#[command(name = "weather8-cli")]
#[command(about = "Fetch current weather and forecasts from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Current conditions for a city
    Current {
        /// City name, e.g. "Lagos" or "New York"
        city: String,
    },
    /// Multi-day forecast for a city
    Forecast {
        city: String,
        /// Number of days (1-10); defaults to the configured forecast length
        #[arg(long, short, value_parser = clap::value_parser!(u8).range(1..=10))]
        days: Option<u8>,
    },
    /// Check that the API answers with the configured key
    Check,
}
