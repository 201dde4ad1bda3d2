//! Upstream weather client for weather8.
//!
//! This crate provides the WeatherAPI.com HTTP client, its raw and
//! normalized response models, and the [`WeatherProvider`] trait the server
//! depends on.

pub mod provider;
pub mod weatherapi;

pub use provider::WeatherProvider;
pub use weatherapi::{
    CurrentApiResponse, ErrorKind, ForecastApiResponse, ForecastDay, WeatherApiClient, WeatherApiConfig,
    WeatherError, WeatherForecast, WeatherReport,
};
