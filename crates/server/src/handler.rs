//! HTTP router and shared state.
//!
//! This module wires the dashboard and API routes to their handlers and
//! owns the state every handler receives.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;
use weather8_client::WeatherProvider;
use weather8_core::CacheStore;

use crate::error::ApiError;
use crate::routes::{cache, dashboard, weather};

/// State shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Cache of normalized upstream payloads.
    pub cache: Arc<CacheStore>,
    /// Source of raw weather data.
    pub provider: Arc<dyn WeatherProvider>,
    /// Forecast length used when a request does not ask for a valid one.
    pub forecast_days: u8,
}

impl AppState {
    pub fn new(provider: Arc<dyn WeatherProvider>, cache: CacheStore, forecast_days: u8) -> Self {
        Self { cache: Arc::new(cache), provider, forecast_days }
    }
}

/// Build the application router.
///
/// Routes:
/// - `GET /` dashboard page
/// - `GET /api/weather/current?city=`
/// - `GET /api/weather/forecast?city=&days=`
/// - `GET /api/cache/status`
///
/// Other paths get a JSON 404; other methods on these paths get a JSON 405.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard::index))
        .route("/api/weather/current", get(weather::current))
        .route("/api/weather/forecast", get(weather::forecast))
        .route("/api/cache/status", get(cache::status))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
