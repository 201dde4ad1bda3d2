//! Application configuration with layered loading.
//!
//! Configuration is merged with figment from several sources:
//!
//! 1. Environment variables (WEATHER8_*)
//! 2. `WEATHER_API_KEY` / `WEATHER_API_BASE_URL`
//! 3. TOML config file (if WEATHER8_CONFIG_FILE set)
//! 4. Built-in defaults

use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::ConfigError;

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (WEATHER8_*)
/// 2. Unprefixed `WEATHER_API_KEY` and `WEATHER_API_BASE_URL`
/// 3. TOML config file (if WEATHER8_CONFIG_FILE set)
/// 4. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// WeatherAPI.com key.
    ///
    /// Set via WEATHER8_WEATHER_API_KEY or WEATHER_API_KEY.
    #[serde(default)]
    pub weather_api_key: Option<String>,

    /// Base URL of the WeatherAPI.com REST API.
    ///
    /// Set via WEATHER8_WEATHER_API_BASE_URL or WEATHER_API_BASE_URL.
    #[serde(default = "default_base_url")]
    pub weather_api_base_url: String,

    /// Address the HTTP server binds to.
    ///
    /// Set via WEATHER8_BIND_ADDR environment variable.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Cache entry time-to-live in seconds.
    ///
    /// Set via WEATHER8_CACHE_TTL_SECS environment variable.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// Upstream request timeout in milliseconds.
    ///
    /// Set via WEATHER8_TIMEOUT_MS environment variable.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// User-Agent string for upstream requests.
    ///
    /// Set via WEATHER8_USER_AGENT environment variable.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Forecast length used when a request does not ask for one.
    ///
    /// Set via WEATHER8_FORECAST_DAYS environment variable.
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,
}

fn default_base_url() -> String {
    "https://api.weatherapi.com/v1".into()
}

fn default_bind_addr() -> String {
    "127.0.0.1:5000".into()
}

fn default_cache_ttl_secs() -> u64 {
    600 // 10 minutes
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_user_agent() -> String {
    "weather8/0.1".into()
}

fn default_forecast_days() -> u8 {
    5
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            weather_api_key: None,
            weather_api_base_url: default_base_url(),
            bind_addr: default_bind_addr(),
            cache_ttl_secs: default_cache_ttl_secs(),
            timeout_ms: default_timeout_ms(),
            user_agent: default_user_agent(),
            forecast_days: default_forecast_days(),
        }
    }
}

impl AppConfig {
    /// Timeout as Duration for use with reqwest.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Cache TTL as Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment()
            .extract()
            .map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    /// The merged provider stack behind [`AppConfig::load`].
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("WEATHER8_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment
            .merge(Env::raw().only(&["weather_api_key", "weather_api_base_url"]))
            .merge(
                Env::prefixed("WEATHER8_")
                    .ignore(&["config_file"])
                    .map(|key| key.as_str().to_lowercase().into()),
            )
    }

    /// Return the API key, or an error explaining how to set it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if the key is unset or blank.
    pub fn require_weather_api_key(&self) -> Result<&str, ConfigError> {
        self.weather_api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ConfigError::Missing {
                field: "weather_api_key".into(),
                hint: "Set WEATHER_API_KEY environment variable".into(),
            })
    }
}
