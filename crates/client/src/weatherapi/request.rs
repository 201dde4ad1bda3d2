//! WeatherAPI.com request types and validation.

use serde::Serialize;

use crate::weatherapi::WeatherError;

/// Forecast length used when the caller asks for an unsupported one.
pub const DEFAULT_FORECAST_DAYS: u8 = 5;

/// Longest forecast the API serves.
pub const MAX_FORECAST_DAYS: u8 = 10;

/// Longest accepted location query.
pub const MAX_QUERY_LEN: usize = 256;

/// API endpoints used by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Current,
    Forecast,
}

impl Endpoint {
    /// Path relative to the API base URL.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Current => "current.json",
            Endpoint::Forecast => "forecast.json",
        }
    }
}

/// yes/no flags as the API spells them.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Toggle {
    Yes,
    No,
}

/// Query parameters for a WeatherAPI.com call, minus the API key.
///
/// Based on https://www.weatherapi.com/docs/
#[derive(Debug, Clone, Serialize)]
pub struct WeatherRequest {
    #[serde(skip)]
    pub endpoint: Endpoint,

    /// Location query (city name, postcode, lat/lon...).
    pub q: String,

    /// Forecast length, forecast endpoint only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<u8>,

    /// Air quality data. Always off.
    pub aqi: Toggle,

    /// Weather alerts, forecast endpoint only. Always off.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alerts: Option<Toggle>,
}

/// Clamp a forecast length to the supported range.
///
/// Values outside 1..=10 fall back to 5 rather than saturating.
pub fn clamp_days(days: u8) -> u8 {
    if (1..=MAX_FORECAST_DAYS).contains(&days) { days } else { DEFAULT_FORECAST_DAYS }
}

impl WeatherRequest {
    pub fn current(city: &str) -> Self {
        Self { endpoint: Endpoint::Current, q: city.trim().to_string(), days: None, aqi: Toggle::No, alerts: None }
    }

    pub fn forecast(city: &str, days: u8) -> Self {
        Self {
            endpoint: Endpoint::Forecast,
            q: city.trim().to_string(),
            days: Some(clamp_days(days)),
            aqi: Toggle::No,
            alerts: Some(Toggle::No),
        }
    }

    /// Validate the request parameters.
    pub fn validate(&self) -> Result<(), WeatherError> {
        if self.q.is_empty() {
            return Err(WeatherError::InvalidQuery("city cannot be empty".to_string()));
        }

        if self.q.chars().count() > MAX_QUERY_LEN {
            return Err(WeatherError::InvalidQuery(format!(
                "city too long: {} chars (max {MAX_QUERY_LEN})",
                self.q.chars().count()
            )));
        }

        Ok(())
    }
}
