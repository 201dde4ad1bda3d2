//! WeatherAPI.com client error types.

use std::sync::Arc;

/// Coarse classification of a [`WeatherError`].
///
/// Request handlers switch on this to pick a status code and message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request was rejected before it left the client.
    InvalidInput,
    CityNotFound,
    Network,
    Authentication,
    Other,
}

/// Errors from the WeatherAPI.com client.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    /// No API key configured.
    #[error("missing API key: WEATHER_API_KEY not set")]
    MissingApiKey,

    /// Base URL could not be parsed.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// Invalid city query.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// The API does not recognise the location.
    #[error("city '{0}' not found")]
    CityNotFound(String),

    /// API key rejected.
    #[error("authentication failed: invalid API key")]
    InvalidApiKey,

    /// API key disabled or over its call quota.
    #[error("authentication failed: API key limit exceeded")]
    QuotaExceeded,

    /// Unexpected HTTP status.
    #[error("HTTP error: {status}")]
    HttpError { status: u16 },

    /// Request timeout.
    #[error("request timeout")]
    Timeout,

    /// Network error.
    #[error("network error: {0}")]
    Network(Arc<reqwest::Error>),

    /// Response parse error.
    #[error("parse error: {0}")]
    Parse(String),
}

impl WeatherError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            WeatherError::InvalidQuery(_) => ErrorKind::InvalidInput,
            WeatherError::CityNotFound(_) => ErrorKind::CityNotFound,
            WeatherError::Timeout | WeatherError::Network(_) => ErrorKind::Network,
            WeatherError::MissingApiKey | WeatherError::InvalidApiKey | WeatherError::QuotaExceeded => {
                ErrorKind::Authentication
            }
            WeatherError::InvalidBaseUrl(_) | WeatherError::HttpError { .. }
            | WeatherError::Parse(_) => ErrorKind::Other,
        }
    }
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { WeatherError::Timeout } else { WeatherError::Network(Arc::new(err)) }
    }
}
