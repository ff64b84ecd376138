//! Key-value store abstraction and the in-process TTL backend.

use std::fmt;
use std::time::Duration;

use moka::sync::Cache;

/// Error raised by a cache backend. Never crosses the cache-aside
/// boundary: callers of the catalog see fallback behavior, not this.
#[derive(Debug)]
pub struct CacheError(pub String);

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cache error: {}", self.0)
    }
}

impl std::error::Error for CacheError {}

/// Result alias for cache store operations
pub type CacheResult<T> = std::result::Result<T, CacheError>;

/// A key -> string store with a uniform TTL fixed at construction.
///
/// Entries are idempotent re-derivations of catalog data, so concurrent
/// writers racing on the same key are acceptable (last-write-wins).
pub trait CacheStore: Send + Sync {
    /// Returns the cached value, or `None` when absent or expired.
    fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Stores a value under the key with the store's TTL.
    fn set(&self, key: &str, value: &str) -> CacheResult<()>;
}

/// In-process TTL store backed by moka
pub struct MemoryStore {
    inner: Cache<String, String>,
}

impl MemoryStore {
    pub fn new(ttl: Duration, max_capacity: u64) -> Self {
        let inner = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(ttl)
            .build();

        Self { inner }
    }
}

impl CacheStore for MemoryStore {
    fn get(&self, key: &str) -> CacheResult<Option<String>> {
        Ok(self.inner.get(key))
    }

    fn set(&self, key: &str, value: &str) -> CacheResult<()> {
        self.inner.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_within_ttl() {
        let store = MemoryStore::new(Duration::from_secs(60), 16);

        store.set("ingredients:all", r#"[{"id":"1","name":"Moonstone"}]"#).unwrap();

        let value = store.get("ingredients:all").unwrap();
        assert_eq!(value.as_deref(), Some(r#"[{"id":"1","name":"Moonstone"}]"#));
        assert!(store.get("elixirs:all").unwrap().is_none());
    }

    #[test]
    fn memory_store_expires_after_ttl() {
        let store = MemoryStore::new(Duration::from_millis(50), 16);

        store.set("k", "v").unwrap();
        assert!(store.get("k").unwrap().is_some());

        std::thread::sleep(Duration::from_millis(150));
        assert!(store.get("k").unwrap().is_none());
    }
}
