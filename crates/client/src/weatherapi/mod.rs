//! WeatherAPI.com client.
//!
//! Fetches current conditions and forecasts for a city and classifies
//! failures into [`WeatherError`] variants.
//!
//! ### Upstream contract
//!
//! - **Endpoints**: `{base}/current.json`, `{base}/forecast.json`
//! - **Authentication**: `key` query parameter.
//! - **Status mapping**:
//!   - 400 means the location query matched nothing.
//!   - 401 is a bad key, 403 a disabled or exhausted key.
//!   - Any other non-200 status is an HTTP error.
//! - **Transport**: timeouts and connection failures are network errors. No retries.

pub mod error;
pub mod request;
pub mod response;

pub use error::{ErrorKind, WeatherError};
pub use request::{DEFAULT_FORECAST_DAYS, Endpoint, MAX_FORECAST_DAYS, MAX_QUERY_LEN, WeatherRequest, clamp_days};
pub use response::{
    CurrentApiResponse, CurrentConditions, ForecastApiResponse, ForecastDay, Location, WeatherForecast,
    WeatherReport,
};

use reqwest::{StatusCode, header};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::{Duration, Instant};
use url::Url;
use weather8_core::AppConfig;

use crate::provider::WeatherProvider;

/// Default base URL for WeatherAPI.com.
const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default user agent.
const DEFAULT_USER_AGENT: &str = "weather8/0.1";

/// City used by [`WeatherApiClient::test_connection`].
const PROBE_CITY: &str = "London";

/// WeatherAPI.com client configuration.
#[derive(Debug, Clone)]
pub struct WeatherApiConfig {
    /// API key from WEATHER_API_KEY.
    pub api_key: String,
    /// Base URL (default: https://api.weatherapi.com/v1).
    pub base_url: String,
    /// Request timeout (default: 10s).
    pub timeout: Duration,
    /// User-agent string (default: weather8/0.x).
    pub user_agent: String,
}

impl Default for WeatherApiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl WeatherApiConfig {
    /// Build client settings from the application config.
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            api_key: config.weather_api_key.clone().unwrap_or_default(),
            base_url: config.weather_api_base_url.clone(),
            timeout: config.timeout(),
            user_agent: config.user_agent.clone(),
        }
    }
}

/// WeatherAPI.com client.
#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: Arc<str>,
}

impl WeatherApiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: WeatherApiConfig) -> Result<Self, WeatherError> {
        if config.api_key.trim().is_empty() {
            return Err(WeatherError::MissingApiKey);
        }

        let base_url = parse_base_url(&config.base_url)?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| WeatherError::Network(Arc::new(e)))?;

        Ok(Self { http, base_url, api_key: Arc::from(config.api_key) })
    }

    /// Create a new client from the application config.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, WeatherError> {
        Self::new(WeatherApiConfig::from_app_config(config))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch current conditions for `city`.
    pub async fn get_current_weather(&self, city: &str) -> Result<CurrentApiResponse, WeatherError> {
        self.execute(WeatherRequest::current(city)).await
    }

    /// Fetch a `days`-long forecast for `city`.
    ///
    /// `days` outside 1..=10 is replaced by 5.
    pub async fn get_forecast(&self, city: &str, days: u8) -> Result<ForecastApiResponse, WeatherError> {
        self.execute(WeatherRequest::forecast(city, days)).await
    }

    /// Check that the API answers with the configured key.
    pub async fn test_connection(&self) -> bool {
        match self.get_current_weather(PROBE_CITY).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "weather API connection check failed");
                false
            }
        }
    }

    async fn execute<T: DeserializeOwned>(&self, req: WeatherRequest) -> Result<T, WeatherError> {
        req.validate()?;

        let start = Instant::now();
        let url = self
            .base_url
            .join(req.endpoint.path())
            .map_err(|e| WeatherError::InvalidBaseUrl(e.to_string()))?;

        tracing::debug!(endpoint = req.endpoint.path(), city = %req.q, "calling weather API");

        let http_response = self
            .http
            .get(url)
            .header(header::ACCEPT, "application/json")
            .query(&[("key", &*self.api_key)])
            .query(&req)
            .send()
            .await?;

        let status = http_response.status();
        tracing::debug!(%status, elapsed = ?start.elapsed(), "weather API responded");

        if let Some(err) = classify_status(status, &req.q) {
            return Err(err);
        }

        let bytes = http_response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| WeatherError::Parse(format!("invalid JSON response: {e}")))
    }
}

/// Map a non-success status to the matching error.
fn classify_status(status: StatusCode, city: &str) -> Option<WeatherError> {
    match status {
        StatusCode::OK => None,
        StatusCode::BAD_REQUEST => Some(WeatherError::CityNotFound(city.to_string())),
        StatusCode::UNAUTHORIZED => Some(WeatherError::InvalidApiKey),
        StatusCode::FORBIDDEN => Some(WeatherError::QuotaExceeded),
        other => Some(WeatherError::HttpError { status: other.as_u16() }),
    }
}

/// Parse the base URL, forcing a trailing slash so endpoint paths append
/// instead of replacing the last segment.
fn parse_base_url(raw: &str) -> Result<Url, WeatherError> {
    let mut url = Url::parse(raw.trim()).map_err(|e| WeatherError::InvalidBaseUrl(format!("{raw}: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(WeatherError::InvalidBaseUrl(format!("{raw}: unsupported scheme")));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

#[async_trait::async_trait]
impl WeatherProvider for WeatherApiClient {
    async fn current_weather(&self, city: &str) -> Result<CurrentApiResponse, WeatherError> {
        self.get_current_weather(city).await
    }

    async fn forecast(&self, city: &str, days: u8) -> Result<ForecastApiResponse, WeatherError> {
        self.get_forecast(city, days).await
    }
}
