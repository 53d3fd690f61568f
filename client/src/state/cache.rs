//! Keyed response cache for REST reads.
//!
//! DESIGN
//! ======
//! Responses are stored as `serde_json::Value` keyed by request path (plus
//! query string), so one cache serves every entity type. Entries are fresh
//! for `stale_ms`; stale entries are refetched on next read and anything
//! older than `gc_ms` is dropped on insert. Mutations invalidate by path
//! prefix so a patient update also drops every feed page that listed it.

#[cfg(test)]
#[path = "cache_test.rs"]
mod cache_test;

use std::collections::HashMap;
use std::future::Future;

use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::error::ApiError;

pub const DEFAULT_STALE_MS: f64 = 30_000.0;
pub const DEFAULT_GC_MS: f64 = 300_000.0;

#[derive(Clone, Debug)]
struct CacheEntry {
    value: serde_json::Value,
    fetched_at_ms: f64,
}

/// Shared query cache, provided as an `RwSignal<QueryCache>` context.
#[derive(Clone, Debug)]
pub struct QueryCache {
    entries: HashMap<String, CacheEntry>,
    stale_ms: f64,
    gc_ms: f64,
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(DEFAULT_STALE_MS, DEFAULT_GC_MS)
    }
}

impl QueryCache {
    #[must_use]
    pub fn new(stale_ms: f64, gc_ms: f64) -> Self {
        Self { entries: HashMap::new(), stale_ms, gc_ms: gc_ms.max(stale_ms) }
    }

    /// Return the cached value for `key` if it is still fresh at `now_ms`.
    #[must_use]
    pub fn get(&self, key: &str, now_ms: f64) -> Option<&serde_json::Value> {
        self.entries
            .get(key)
            .filter(|entry| now_ms - entry.fetched_at_ms < self.stale_ms)
            .map(|entry| &entry.value)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: serde_json::Value, now_ms: f64) {
        let gc_ms = self.gc_ms;
        self.entries.retain(|_, entry| now_ms - entry.fetched_at_ms < gc_ms);
        self.entries.insert(key.into(), CacheEntry { value, fetched_at_ms: now_ms });
    }

    pub fn invalidate(&mut self, key: &str) {
        self.entries.remove(key);
    }

    /// Drop `prefix` itself and every key nested under it (`prefix/...` or
    /// `prefix?...`). Returns how many entries were removed.
    pub fn invalidate_prefix(&mut self, prefix: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| !key_under(key, prefix));
        before - self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn key_under(key: &str, prefix: &str) -> bool {
    match key.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/') || rest.starts_with('?'),
        None => false,
    }
}

/// Serve `key` from the cache when fresh, otherwise run `fetch` and store
/// the result. Errors are never cached.
///
/// # Errors
///
/// Returns whatever `fetch` returns on a miss.
pub async fn cached<T, F, Fut>(cache: RwSignal<QueryCache>, key: String, fetch: F) -> Result<T, ApiError>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let now = crate::util::clock::now_ms();
    let hit = cache.with_untracked(|c| c.get(&key, now).cloned());
    if let Some(value) = hit {
        if let Ok(decoded) = serde_json::from_value::<T>(value) {
            return Ok(decoded);
        }
    }

    let fresh = fetch().await?;
    if let Ok(value) = serde_json::to_value(&fresh) {
        let now = crate::util::clock::now_ms();
        cache.update(|c| c.insert(key, value, now));
    }
    Ok(fresh)
}
