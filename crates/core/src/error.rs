//! Unified error taxonomy for weather8.
//!
//! Every failure a request can hit is folded into one of these variants
//! before it reaches the HTTP boundary, where it becomes a JSON envelope.

/// Unified error types for the weather8 service.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Bad or missing request input (e.g., blank city).
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),

    /// The upstream service does not know the requested city.
    #[error("CITY_NOT_FOUND: {0}")]
    CityNotFound(String),

    /// The upstream service could not be reached or timed out.
    #[error("SERVICE_UNAVAILABLE: {0}")]
    ServiceUnavailable(String),

    /// The upstream service rejected our credentials.
    #[error("AUTHENTICATION_ERROR: {0}")]
    Authentication(String),

    /// Anything else.
    #[error("INTERNAL_ERROR: {0}")]
    Internal(String),
}

impl Error {
    /// HTTP status code this error surfaces as.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::InvalidInput(_) => 400,
            Error::Authentication(_) => 401,
            Error::CityNotFound(_) => 404,
            Error::Internal(_) => 500,
            Error::ServiceUnavailable(_) => 503,
        }
    }

    /// Message shown to the end user, without the machine-readable prefix.
    pub fn user_message(&self) -> &str {
        match self {
            Error::InvalidInput(msg)
            | Error::CityNotFound(msg)
            | Error::ServiceUnavailable(msg)
            | Error::Authentication(msg)
            | Error::Internal(msg) => msg,
        }
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// Error for a missing or blank `city` parameter.
    pub fn missing_city() -> Self {
        Error::InvalidInput("City parameter is required".into())
    }

    pub fn city_not_found(city: &str) -> Self {
        Error::CityNotFound(format!("City '{city}' not found. Please check the spelling and try again."))
    }

    pub fn service_unavailable() -> Self {
        Error::ServiceUnavailable("Unable to connect to weather service. Please try again later.".into())
    }

    pub fn authentication() -> Self {
        Error::Authentication("Weather service authentication error. Please try again later.".into())
    }

    pub fn internal() -> Self {
        Error::Internal("An unexpected error occurred while fetching weather data.".into())
    }
}
