//! Weather-data collaborator interface.
//!
//! Request handlers only see this trait, so tests can swap the real
//! WeatherAPI.com client for an in-memory double.

use crate::weatherapi::{CurrentApiResponse, ForecastApiResponse, WeatherError};

/// Source of raw weather data.
#[async_trait::async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Current conditions for `city`.
    async fn current_weather(&self, city: &str) -> Result<CurrentApiResponse, WeatherError>;

    /// A `days`-long forecast for `city`.
    async fn forecast(&self, city: &str, days: u8) -> Result<ForecastApiResponse, WeatherError>;
}
