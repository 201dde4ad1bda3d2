//! Cache introspection endpoint.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::handler::AppState;

/// Body of `GET /api/cache/status`.
#[derive(Debug, Serialize)]
pub struct CacheStatus {
    /// Stored entries, including expired ones not yet overwritten.
    pub cache_entries: usize,
    pub cache_duration_minutes: u64,
}

pub async fn status(State(state): State<AppState>) -> Json<CacheStatus> {
    Json(CacheStatus {
        cache_entries: state.cache.len().await,
        cache_duration_minutes: state.cache.ttl_minutes(),
    })
}
