//! In-process cache for upstream weather payloads.
//!
//! Entries live only as long as the process. Each entry carries the time it
//! was stored, and reads ignore entries older than the configured TTL:
//!
//! - Keys are derived from normalized request input (see [`key`])
//! - Payloads are stored as `serde_json::Value` by default
//! - Expired entries stay in the map until overwritten or cleared

pub mod key;
pub mod store;

pub use key::{current_key, forecast_key, normalize_city};
pub use store::{CacheEntry, CacheStore, DEFAULT_TTL};
