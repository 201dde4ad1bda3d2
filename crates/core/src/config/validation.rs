//! Configuration validation rules.
//!
//! Checks `AppConfig` values after they have been loaded from the
//! environment, files, or defaults.

use std::net::SocketAddr;

use crate::config::AppConfig;
use thiserror::Error;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },

    #[error("missing required configuration: {field} ({hint})")]
    Missing { field: String, hint: String },
}

fn invalid(field: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid { field: field.into(), reason: reason.into() }
}

impl AppConfig {
    /// Validate configuration values after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if:
    /// - `cache_ttl_secs` is 0, exceeds one day, or is not a whole number of minutes
    /// - `timeout_ms` is less than 100ms or exceeds 5 minutes
    /// - `forecast_days` is outside 1..=10
    /// - `user_agent` is empty
    /// - `weather_api_base_url` is not an http(s) URL
    /// - `bind_addr` is not a socket address
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache_ttl_secs == 0 {
            return Err(invalid("cache_ttl_secs", "must be greater than 0"));
        }
        if self.cache_ttl_secs > 86_400 {
            return Err(invalid("cache_ttl_secs", "must not exceed one day (86400s)"));
        }
        if self.cache_ttl_secs % 60 != 0 {
            return Err(invalid("cache_ttl_secs", "must be a whole number of minutes"));
        }

        if self.timeout_ms < 100 {
            return Err(invalid("timeout_ms", "must be at least 100ms"));
        }
        if self.timeout_ms > 300_000 {
            return Err(invalid("timeout_ms", "must not exceed 5 minutes (300000ms)"));
        }

        if !(1..=10).contains(&self.forecast_days) {
            return Err(invalid("forecast_days", "must be between 1 and 10"));
        }

        if self.user_agent.is_empty() {
            return Err(invalid("user_agent", "must not be empty"));
        }

        match url::Url::parse(&self.weather_api_base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => {
                return Err(invalid("weather_api_base_url", format!("unsupported scheme '{}'", url.scheme())));
            }
            Err(e) => return Err(invalid("weather_api_base_url", e.to_string())),
        }

        if self.bind_addr.parse::<SocketAddr>().is_err() {
            return Err(invalid("bind_addr", format!("'{}' is not a socket address", self.bind_addr)));
        }

        if self.weather_api_key.is_none() {
            tracing::warn!("weather_api_key is not set; upstream requests will fail until it is configured");
        }

        Ok(())
    }
}
