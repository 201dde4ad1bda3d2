//! HTTP-facing errors for the weather8 server.
//!
//! Everything a handler can fail with ends up here and is rendered as the
//! `{success: false, error}` envelope with the matching status code.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use weather8_client::{ErrorKind, WeatherError};
use weather8_core::Error;

use crate::envelope::ErrorEnvelope;

/// Structured errors for the weather8 server.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A classified service error.
    #[error(transparent)]
    Service(#[from] Error),

    /// No route matched the request path.
    #[error("ROUTE_NOT_FOUND")]
    RouteNotFound,

    /// The path exists but not for this HTTP method.
    #[error("METHOD_NOT_ALLOWED")]
    MethodNotAllowed,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Service(err) => {
                StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    fn message(&self) -> &str {
        match self {
            ApiError::Service(err) => err.user_message(),
            ApiError::RouteNotFound => "Resource not found",
            ApiError::MethodNotAllowed => "Method not allowed",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorEnvelope::new(self.message()))).into_response()
    }
}

/// Classify a collaborator failure into the service taxonomy.
pub fn classify(err: &WeatherError, city: &str) -> Error {
    let classified = match err.kind() {
        ErrorKind::InvalidInput => Error::invalid_input("Invalid city parameter"),
        ErrorKind::CityNotFound => Error::city_not_found(city),
        ErrorKind::Network => Error::service_unavailable(),
        ErrorKind::Authentication => Error::authentication(),
        ErrorKind::Other => Error::internal(),
    };

    if matches!(classified, Error::Internal(_) | Error::Authentication(_)) {
        tracing::error!(city = %city, error = %err, "weather API request failed");
    } else {
        tracing::warn!(city = %city, error = %err, "weather API request failed");
    }

    classified
}
