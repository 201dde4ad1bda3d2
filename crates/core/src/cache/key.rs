//! Cache key derivation.

/// Normalize a city name for use in a cache key.
///
/// Trims surrounding whitespace and lowercases, so `"  Lagos "` and
/// `"LAGOS"` share an entry.
pub fn normalize_city(city: &str) -> String {
    city.trim().to_lowercase()
}

/// Cache key for current conditions in `city`.
pub fn current_key(city: &str) -> String {
    format!("current_{}", normalize_city(city))
}

/// Cache key for a `days`-long forecast for `city`.
pub fn forecast_key(city: &str, days: u8) -> String {
    format!("forecast_{}_{}", normalize_city(city), days)
}
