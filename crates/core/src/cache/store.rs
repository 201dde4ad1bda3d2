//! TTL-bounded key/value store.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;

/// Default time-to-live for cache entries (10 minutes).
pub const DEFAULT_TTL: Duration = Duration::from_secs(10 * 60);

/// A stored payload and the moment it was written.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    pub value: V,
    pub stored_at: DateTime<Utc>,
}

/// Shared in-memory cache with a fixed TTL.
///
/// Reads treat entries older than the TTL as absent but leave them in place;
/// the next `set` for the key overwrites them. Writes are last-writer-wins.
#[derive(Debug)]
pub struct CacheStore<V = serde_json::Value> {
    entries: RwLock<HashMap<String, CacheEntry<V>>>,
    ttl: Duration,
}

impl<V> Default for CacheStore<V> {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl<V> CacheStore<V> {
    /// Create an empty store whose entries expire after `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self { entries: RwLock::new(HashMap::new()), ttl }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// TTL in whole minutes, as reported by the status endpoint.
    ///
    /// Rounds down; configured TTLs are validated to whole minutes.
    pub fn ttl_minutes(&self) -> u64 {
        self.ttl.as_secs() / 60
    }

    /// Whether an entry stored at `stored_at` is still fresh.
    ///
    /// Timestamps in the future count as fresh.
    pub fn is_valid(&self, stored_at: DateTime<Utc>) -> bool {
        match (Utc::now() - stored_at).to_std() {
            Ok(age) => age < self.ttl,
            Err(_) => true,
        }
    }

    /// Store `value` under `key` with the current time.
    pub async fn set(&self, key: impl Into<String>, value: V) {
        self.set_at(key, value, Utc::now()).await;
    }

    /// Store `value` under `key` with an explicit timestamp.
    pub async fn set_at(&self, key: impl Into<String>, value: V, stored_at: DateTime<Utc>) {
        let key = key.into();
        tracing::trace!(key = %key, "cache set");
        self.entries
            .write()
            .await
            .insert(key, CacheEntry { value, stored_at });
    }

    /// Drop every entry.
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    /// Number of entries held, expired ones included.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl<V: Clone> CacheStore<V> {
    /// Fetch the payload for `key` if present and within the TTL.
    pub async fn get(&self, key: &str) -> Option<V> {
        let entries = self.entries.read().await;
        let entry = entries.get(key)?;

        if self.is_valid(entry.stored_at) {
            Some(entry.value.clone())
        } else {
            tracing::trace!(key = %key, stored_at = %entry.stored_at, "cache entry expired");
            None
        }
    }
}
