//! In-memory TTL caching for upstream responses.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct CacheEntry<T> {
    value: T,
    expires_at: Instant,
}

#[derive(Debug)]
struct CacheInner<T> {
    map: HashMap<String, CacheEntry<T>>,
}

impl<T: Clone> CacheInner<T> {
    fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    fn get(&mut self, key: &str) -> Option<T> {
        match self.map.get(key) {
            Some(entry) if Instant::now() <= entry.expires_at => Some(entry.value.clone()),
            Some(_) => {
                self.map.remove(key);
                None
            }
            None => None,
        }
    }

    fn set(&mut self, key: String, value: T, ttl: Duration) {
        if ttl.is_zero() {
            self.map.remove(&key);
            return;
        }
        let expires_at = Instant::now() + ttl;
        self.map.insert(key, CacheEntry { value, expires_at });
    }

    fn cleanup_expired(&mut self) {
        let now = Instant::now();
        self.map.retain(|_, entry| entry.expires_at >= now);
    }

    fn clear(&mut self) {
        self.map.clear();
    }

    fn len(&self) -> usize {
        self.map.len()
    }
}

/// Thread-safe in-memory cache with per-entry TTL.
///
/// All operations serialize on one lock, held only for the map access itself.
/// An explicitly constructed instance is owned by whichever service needs it;
/// there is no process-global cache.
#[derive(Debug, Clone)]
pub struct CacheStore<T> {
    inner: Arc<tokio::sync::Mutex<CacheInner<T>>>,
}

impl<T: Clone> CacheStore<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(tokio::sync::Mutex::new(CacheInner::new())),
        }
    }

    /// Get the value for `key` if the entry has not yet expired.
    ///
    /// An entry is still live at exactly `t = ttl`. A stale entry found here is
    /// removed on the spot, so `cleanup_expired` is housekeeping rather than a
    /// correctness requirement.
    pub async fn get(&self, key: &str) -> Option<T> {
        let mut store = self.inner.lock().await;
        store.get(key)
    }

    /// Store `value` under `key` for `ttl`, overwriting any prior entry.
    ///
    /// A zero TTL stores nothing: the next `get` observes absence.
    pub async fn set(&self, key: impl Into<String>, value: T, ttl: Duration) {
        let mut store = self.inner.lock().await;
        store.set(key.into(), value, ttl);
    }

    /// Remove every entry whose TTL has elapsed.
    pub async fn cleanup_expired(&self) {
        let mut store = self.inner.lock().await;
        store.cleanup_expired();
    }

    /// Remove all entries unconditionally.
    pub async fn clear(&self) {
        let mut store = self.inner.lock().await;
        store.clear();
    }

    /// Number of entries currently held, expired or not.
    pub async fn len(&self) -> usize {
        let store = self.inner.lock().await;
        store.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl<T: Clone> Default for CacheStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
