//! Current-weather and forecast endpoints.
//!
//! Both follow the same path: validate `city`, look up the normalized key,
//! and on a miss call the provider, normalize, and cache the result.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use weather8_client::weatherapi::{MAX_FORECAST_DAYS, MAX_QUERY_LEN};
use weather8_client::{WeatherForecast, WeatherReport};
use weather8_core::{
    Error,
    cache::{current_key, forecast_key},
};

use crate::envelope::DataEnvelope;
use crate::error::{ApiError, classify};
use crate::handler::AppState;

/// Query parameters for `/api/weather/current`.
#[derive(Debug, Default, Deserialize)]
pub struct CityQuery {
    pub city: Option<String>,
}

/// Query parameters for `/api/weather/forecast`.
#[derive(Debug, Default, Deserialize)]
pub struct ForecastQuery {
    pub city: Option<String>,
    /// Kept as text so a malformed value falls back instead of rejecting.
    pub days: Option<String>,
}

/// `GET /api/weather/current`
pub async fn current(
    State(state): State<AppState>, query: Result<Query<CityQuery>, QueryRejection>,
) -> Result<Json<DataEnvelope>, ApiError> {
    let query = parse_query(query)?;
    let city = require_city(query.city.as_deref())?;
    let key = current_key(city);

    if let Some(hit) = lookup(&state, &key).await {
        return Ok(Json(hit));
    }

    let raw = state
        .provider
        .current_weather(city)
        .await
        .map_err(|e| classify(&e, city))?;

    let report = WeatherReport::from(raw);
    if !report.is_complete() {
        tracing::warn!(city = %city, "current weather response is missing location or condition");
    }

    Ok(Json(store(&state, key, to_payload(&report)?).await))
}

/// `GET /api/weather/forecast`
pub async fn forecast(
    State(state): State<AppState>, query: Result<Query<ForecastQuery>, QueryRejection>,
) -> Result<Json<DataEnvelope>, ApiError> {
    let query = parse_query(query)?;
    let city = require_city(query.city.as_deref())?;
    let days = resolve_days(query.days.as_deref(), state.forecast_days);
    let key = forecast_key(city, days);

    if let Some(hit) = lookup(&state, &key).await {
        return Ok(Json(hit));
    }

    let raw = state
        .provider
        .forecast(city, days)
        .await
        .map_err(|e| classify(&e, city))?;

    let forecast = WeatherForecast::from(raw);
    if !forecast.is_complete() {
        tracing::warn!(city = %city, days = forecast.day_count(), "forecast response is incomplete");
    }

    Ok(Json(store(&state, key, to_payload(&forecast)?).await))
}

/// Unwrap the query extractor, turning a malformed query string into a 400.
fn parse_query<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, Error> {
    match query {
        Ok(Query(query)) => Ok(query),
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "rejected query string");
            Err(Error::invalid_input("Invalid query string"))
        }
    }
}

/// Trimmed city, or a validation error if missing, blank, or too long.
fn require_city(city: Option<&str>) -> Result<&str, Error> {
    match city.map(str::trim) {
        Some(city) if city.is_empty() => Err(Error::missing_city()),
        Some(city) if city.chars().count() > MAX_QUERY_LEN => Err(Error::invalid_input(format!(
            "City name must be at most {MAX_QUERY_LEN} characters"
        ))),
        Some(city) => Ok(city),
        None => Err(Error::missing_city()),
    }
}

/// Requested forecast length, or `default` if absent, malformed, or out of range.
fn resolve_days(days: Option<&str>, default: u8) -> u8 {
    days.and_then(|d| d.trim().parse::<u8>().ok())
        .filter(|d| (1..=MAX_FORECAST_DAYS).contains(d))
        .unwrap_or(default)
}

async fn lookup(state: &AppState, key: &str) -> Option<DataEnvelope> {
    let data = state.cache.get(key).await?;
    tracing::debug!(key = %key, "cache hit");
    Some(DataEnvelope::new(data, true))
}

async fn store(state: &AppState, key: String, data: Value) -> DataEnvelope {
    tracing::debug!(key = %key, "cache miss filled");
    state.cache.set(key, data.clone()).await;
    DataEnvelope::new(data, false)
}

fn to_payload<T: Serialize>(value: &T) -> Result<Value, Error> {
    serde_json::to_value(value).map_err(|e| {
        tracing::error!(error = %e, "failed to serialize weather payload");
        Error::internal()
    })
}
