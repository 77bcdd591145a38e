//! Caching layer for connection store queries.
//!
//! Route searches for the same origin issue the same `connections_from`
//! query over and over (once per search, and a school comparison runs many
//! searches). Query results are cached in memory with a short TTL; the
//! cache never outlives the process.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::trace;

use crate::domain::{Connection, LineId, StationId};

use super::{ConnectionStore, StoreError};

/// Cache key: one variant per store query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum QueryKey {
    From(StationId),
    Between(StationId, StationId),
    FromExcluding(StationId, LineId),
}

/// Cached query result.
type QueryEntry = Arc<Vec<Connection>>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_capacity: 10_000,
        }
    }
}

/// Connection store with caching.
///
/// Wraps any `ConnectionStore` and caches successful query results.
/// Failed queries are not cached.
pub struct CachedConnectionStore<S> {
    inner: S,
    cache: MokaCache<QueryKey, QueryEntry>,
}

impl<S: ConnectionStore + Sync> CachedConnectionStore<S> {
    /// Create a new cached store.
    pub fn new(inner: S, config: &CacheConfig) -> Self {
        let cache = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { inner, cache }
    }

    /// Access the underlying store.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    async fn cached<F>(&self, key: QueryKey, fetch: F) -> Result<Vec<Connection>, StoreError>
    where
        F: Future<Output = Result<Vec<Connection>, StoreError>>,
    {
        if let Some(entry) = self.cache.get(&key).await {
            trace!(?key, "Cache hit");
            return Ok(entry.as_ref().clone());
        }

        let connections = fetch.await?;
        self.cache
            .insert(key, Arc::new(connections.clone()))
            .await;

        Ok(connections)
    }
}

impl<S: ConnectionStore + Send + Sync> ConnectionStore for CachedConnectionStore<S> {
    async fn connections_from(&self, station: &StationId) -> Result<Vec<Connection>, StoreError> {
        self.cached(
            QueryKey::From(station.clone()),
            self.inner.connections_from(station),
        )
        .await
    }

    async fn connections_between(
        &self,
        from: &StationId,
        to: &StationId,
    ) -> Result<Vec<Connection>, StoreError> {
        self.cached(
            QueryKey::Between(from.clone(), to.clone()),
            self.inner.connections_between(from, to),
        )
        .await
    }

    async fn connections_from_excluding(
        &self,
        station: &StationId,
        exclude_line: &LineId,
    ) -> Result<Vec<Connection>, StoreError> {
        self.cached(
            QueryKey::FromExcluding(station.clone(), exclude_line.clone()),
            self.inner.connections_from_excluding(station, exclude_line),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Store that counts queries and can be switched to failing.
    #[derive(Default)]
    struct CountingStore {
        calls: AtomicUsize,
        failing: std::sync::atomic::AtomicBool,
    }

    impl CountingStore {
        fn result(&self) -> Result<Vec<Connection>, StoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.failing.load(Ordering::SeqCst) {
                Err(StoreError::Unavailable("down".into()))
            } else {
                Ok(Vec::new())
            }
        }
    }

    impl ConnectionStore for CountingStore {
        async fn connections_from(&self, _: &StationId) -> Result<Vec<Connection>, StoreError> {
            self.result()
        }

        async fn connections_between(
            &self,
            _: &StationId,
            _: &StationId,
        ) -> Result<Vec<Connection>, StoreError> {
            self.result()
        }

        async fn connections_from_excluding(
            &self,
            _: &StationId,
            _: &LineId,
        ) -> Result<Vec<Connection>, StoreError> {
            self.result()
        }
    }

    fn id(s: &str) -> StationId {
        StationId::parse(s).unwrap()
    }

    #[test]
    fn default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(300));
        assert_eq!(config.max_capacity, 10_000);
    }

    #[tokio::test]
    async fn repeated_query_hits_cache() {
        let store = CachedConnectionStore::new(CountingStore::default(), &CacheConfig::default());

        store.connections_from(&id("a")).await.unwrap();
        store.connections_from(&id("a")).await.unwrap();

        assert_eq!(store.inner().calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn distinct_queries_are_distinct_entries() {
        let store = CachedConnectionStore::new(CountingStore::default(), &CacheConfig::default());
        let line = LineId::parse("x").unwrap();

        store.connections_from(&id("a")).await.unwrap();
        store.connections_between(&id("a"), &id("b")).await.unwrap();
        store.connections_from_excluding(&id("a"), &line).await.unwrap();
        store.connections_from_excluding(&id("a"), &line).await.unwrap();

        assert_eq!(store.inner().calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn failures_are_not_cached() {
        let store = CachedConnectionStore::new(CountingStore::default(), &CacheConfig::default());
        store.inner().failing.store(true, Ordering::SeqCst);

        assert!(store.connections_from(&id("a")).await.is_err());

        store.inner().failing.store(false, Ordering::SeqCst);
        assert!(store.connections_from(&id("a")).await.is_ok());
        assert_eq!(store.inner().calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn invalidate_forces_refetch() {
        let store = CachedConnectionStore::new(CountingStore::default(), &CacheConfig::default());

        store.connections_from(&id("a")).await.unwrap();
        store.invalidate_all();
        store.connections_from(&id("a")).await.unwrap();

        assert_eq!(store.inner().calls.load(Ordering::SeqCst), 2);
    }
}
