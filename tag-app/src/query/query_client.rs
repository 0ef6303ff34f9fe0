use crate::query::QueryKey;

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::SystemTime;

use log::debug;
use tokio::sync::RwLock;

type CachedData = Arc<dyn Any + Send + Sync>;

/// Process-wide query cache.
///
/// Created once at startup and handed to whoever needs it; clones share the
/// same entries.
#[derive(Clone, Default)]
pub struct QueryClient {
    inner: Arc<RwLock<QueryClientInner>>,
}

#[derive(Default)]
struct QueryClientInner {
    queries: HashMap<QueryKey, QueryEntry>,
    /// Invalidation calls received per key, whether or not anything was cached
    invalidations: HashMap<QueryKey, u64>,
}

struct QueryEntry {
    data: CachedData,
    stale: bool,
    updated_at: SystemTime,
}

impl QueryClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value for `key`, or run `fetcher` when the entry is
    /// missing, stale, or of another type. A failed fetch leaves the cache
    /// untouched.
    pub async fn fetch_query<T, E, F, Fut>(&self, key: &QueryKey, fetcher: F) -> Result<Arc<T>, E>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        {
            let inner = self.inner.read().await;
            if let Some(entry) = inner.queries.get(key)
                && !entry.stale
                && let Ok(data) = Arc::clone(&entry.data).downcast::<T>()
            {
                debug!("Query {key} served from cache");
                return Ok(data);
            }
        }

        debug!("Query {key} fetching");
        let data = Arc::new(fetcher().await?);
        self.store(key, Arc::clone(&data) as CachedData).await;

        Ok(data)
    }

    /// Cached value for `key`, stale or not.
    pub async fn get_query_data<T>(&self, key: &QueryKey) -> Option<Arc<T>>
    where
        T: Send + Sync + 'static,
    {
        let inner = self.inner.read().await;
        inner
            .queries
            .get(key)
            .and_then(|entry| Arc::clone(&entry.data).downcast::<T>().ok())
    }

    /// Store a fresh value for `key` without fetching.
    pub async fn set_query_data<T>(&self, key: &QueryKey, data: T)
    where
        T: Send + Sync + 'static,
    {
        self.store(key, Arc::new(data) as CachedData).await;
    }

    /// Mark every query under `key` stale so the next read refetches.
    ///
    /// Returns how many cached entries were affected. Repeating the call
    /// changes nothing beyond the invalidation counter.
    pub async fn invalidate(&self, key: &QueryKey) -> usize {
        let mut inner = self.inner.write().await;

        *inner.invalidations.entry(key.clone()).or_default() += 1;

        let mut marked = 0;
        for (_, entry) in inner
            .queries
            .iter_mut()
            .filter(|(cached, _)| cached.starts_with(key))
        {
            entry.stale = true;
            marked += 1;
        }

        debug!("Invalidated {key} ({marked} cached)");
        marked
    }

    /// True when nothing is cached for `key` or the entry was invalidated.
    pub async fn is_stale(&self, key: &QueryKey) -> bool {
        let inner = self.inner.read().await;
        inner.queries.get(key).is_none_or(|entry| entry.stale)
    }

    /// When `key` was last stored.
    pub async fn updated_at(&self, key: &QueryKey) -> Option<SystemTime> {
        let inner = self.inner.read().await;
        inner.queries.get(key).map(|entry| entry.updated_at)
    }

    /// Number of `invalidate` calls made with exactly `key`.
    pub async fn invalidation_count(&self, key: &QueryKey) -> u64 {
        let inner = self.inner.read().await;
        inner.invalidations.get(key).copied().unwrap_or(0)
    }

    async fn store(&self, key: &QueryKey, data: CachedData) {
        let mut inner = self.inner.write().await;
        inner.queries.insert(
            key.clone(),
            QueryEntry {
                data,
                stale: false,
                updated_at: SystemTime::now(),
            },
        );
    }
}
