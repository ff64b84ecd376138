//! Cache-aside read path: try the store, fall back to the source,
//! write fresh values back.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::cache::store::CacheStore;
use crate::error::Result;

/// Makes a single catalog query behave as "check cache, else source,
/// then populate cache".
///
/// The store is strictly an optimization: a missing, unreachable or
/// corrupted store only changes latency, never the result of a read.
/// Source errors, on the other hand, propagate untouched.
pub struct CacheAside {
    store: Option<Box<dyn CacheStore>>,
}

impl CacheAside {
    pub fn new(store: Box<dyn CacheStore>) -> Self {
        Self { store: Some(store) }
    }

    /// No store configured; every read goes straight to the source.
    pub fn disabled() -> Self {
        Self { store: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.store.is_some()
    }

    /// Cached read of a single catalog query.
    pub fn read<T, F>(&self, key: &str, fetch: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Result<T>,
    {
        let store = match &self.store {
            Some(store) => store.as_ref(),
            None => return fetch(),
        };

        if let Some(value) = lookup(store, key) {
            return Ok(value);
        }

        let value = fetch()?;
        write_back(store, key, &value);
        Ok(value)
    }

    /// Like `read`, but for lookups that may legitimately come back
    /// empty. Absent results are never written to the store.
    pub fn read_optional<T, F>(&self, key: &str, fetch: F) -> Result<Option<T>>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Result<Option<T>>,
    {
        let store = match &self.store {
            Some(store) => store.as_ref(),
            None => return fetch(),
        };

        if let Some(value) = lookup(store, key) {
            return Ok(Some(value));
        }

        let value = fetch()?;
        if let Some(found) = &value {
            write_back(store, key, found);
        }
        Ok(value)
    }
}

/// Store lookup that treats every failure mode as a miss: a get error
/// and an undeserializable entry both fall through to the source.
fn lookup<T: DeserializeOwned>(store: &dyn CacheStore, key: &str) -> Option<T> {
    match store.get(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => {
                log::debug!("Cache hit for key: {}", key);
                Some(value)
            }
            Err(e) => {
                log::warn!("Corrupt cache entry for key '{}', falling back to source: {}", key, e);
                None
            }
        },
        Ok(None) => {
            log::debug!("Cache miss for key: {}", key);
            None
        }
        Err(e) => {
            log::warn!("Cache get failed for key '{}', falling back to source: {}", key, e);
            None
        }
    }
}

/// Best-effort write-back. The read already succeeded with a fresh
/// value, so failures here are logged and swallowed.
fn write_back<T: Serialize>(store: &dyn CacheStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => {
            if let Err(e) = store.set(key, &raw) {
                log::warn!("Cache set failed for key '{}': {}", key, e);
            }
        }
        Err(e) => log::warn!("Failed to serialize cache entry for key '{}': {}", key, e),
    }
}
