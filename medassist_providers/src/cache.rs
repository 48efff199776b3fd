//! Time-bounded memoization of summary lookups.

use async_trait::async_trait;
use medassist_core::{SummaryConfig, SummarySource};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::debug;

/// Cache key for a query: surrounding whitespace dropped, inner runs of
/// whitespace collapsed to one space. Case is kept.
#[must_use]
pub fn cache_key(query: &str) -> String {
    query.split_whitespace().collect::<Vec<_>>().join(" ")
}

struct Entry {
    extract: String,
    stored_at: Instant,
}

/// Wraps a [`SummarySource`] and remembers successful extracts for `ttl`.
///
/// Lookups that found nothing are not remembered, so a transient failure does
/// not pin the fallback for the whole TTL.
pub struct CachedSummary<S> {
    inner: S,
    ttl: Duration,
    capacity: usize,
    entries: Mutex<HashMap<String, Entry>>,
}

impl<S> CachedSummary<S>
where
    S: SummarySource,
{
    #[must_use]
    pub fn new(inner: S, ttl: Duration, capacity: usize) -> Self {
        Self {
            inner,
            ttl,
            capacity,
            entries: Mutex::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn from_config(inner: S, config: &SummaryConfig) -> Self {
        Self::new(
            inner,
            Duration::from_secs(config.cache_ttl_secs),
            config.cache_capacity,
        )
    }

    #[must_use]
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    /// Number of entries that have not expired yet.
    pub async fn len(&self) -> usize {
        let entries = self.entries.lock().await;
        entries
            .values()
            .filter(|entry| entry.stored_at.elapsed() < self.ttl)
            .count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    async fn lookup(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().await;
        entries
            .get(key)
            .filter(|entry| entry.stored_at.elapsed() < self.ttl)
            .map(|entry| entry.extract.clone())
    }

    async fn store(&self, key: String, extract: String) {
        if self.capacity == 0 {
            return;
        }

        let mut entries = self.entries.lock().await;
        entries.retain(|_, entry| entry.stored_at.elapsed() < self.ttl);

        if entries.len() >= self.capacity && !entries.contains_key(&key) {
            let oldest = entries
                .iter()
                .min_by_key(|(_, entry)| entry.stored_at)
                .map(|(k, _)| k.clone());
            if let Some(oldest) = oldest {
                debug!("Summary cache full, evicting '{oldest}'");
                entries.remove(&oldest);
            }
        }

        entries.insert(
            key,
            Entry {
                extract,
                stored_at: Instant::now(),
            },
        );
    }
}

#[async_trait]
impl<S> SummarySource for CachedSummary<S>
where
    S: SummarySource,
{
    async fn fetch_extract(&self, query: &str) -> Option<String> {
        let key = cache_key(query);
        if key.is_empty() {
            return self.inner.fetch_extract(query).await;
        }

        if let Some(extract) = self.lookup(&key).await {
            debug!("Summary cache hit for '{key}'");
            return Some(extract);
        }

        let extract = self.inner.fetch_extract(query).await?;
        self.store(key, extract.clone()).await;
        Some(extract)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counting {
        calls: AtomicUsize,
        found: bool,
    }

    impl Counting {
        const fn new(found: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                found,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SummarySource for Counting {
        async fn fetch_extract(&self, query: &str) -> Option<String> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            self.found.then(|| format!("{query} #{n}"))
        }
    }

    const HOUR: Duration = Duration::from_secs(3600);

    #[test]
    fn test_cache_key_collapses_whitespace() {
        assert_eq!(cache_key("  sore \t throat "), "sore throat");
        assert_eq!(cache_key("Fever"), "Fever");
        assert_eq!(cache_key("   "), "");
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeat_query_served_from_cache() {
        let cache = CachedSummary::new(Counting::new(true), HOUR, 8);

        assert_eq!(cache.fetch_extract("fever").await.as_deref(), Some("fever #1"));
        assert_eq!(cache.fetch_extract(" fever ").await.as_deref(), Some("fever #1"));
        assert_eq!(cache.inner().calls(), 1);
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_expires_after_ttl() {
        let cache = CachedSummary::new(Counting::new(true), HOUR, 8);

        cache.fetch_extract("sleep").await;
        tokio::time::advance(HOUR - Duration::from_secs(1)).await;
        cache.fetch_extract("sleep").await;
        assert_eq!(cache.inner().calls(), 1);

        tokio::time::advance(Duration::from_secs(2)).await;
        assert!(cache.is_empty().await);
        assert_eq!(cache.fetch_extract("sleep").await.as_deref(), Some("sleep #2"));
        assert_eq!(cache.inner().calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_misses_are_not_cached() {
        let cache = CachedSummary::new(Counting::new(false), HOUR, 8);

        assert_eq!(cache.fetch_summary("xyzzy", "fallback").await, "fallback");
        assert_eq!(cache.fetch_summary("xyzzy", "fallback").await, "fallback");
        assert_eq!(cache.inner().calls(), 2);
        assert!(cache.is_empty().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_cache_evicts_oldest() {
        let cache = CachedSummary::new(Counting::new(true), HOUR, 2);

        cache.fetch_extract("a").await;
        tokio::time::advance(Duration::from_secs(1)).await;
        cache.fetch_extract("b").await;
        tokio::time::advance(Duration::from_secs(1)).await;
        cache.fetch_extract("c").await;
        assert_eq!(cache.len().await, 2);

        // "b" is still cached, "a" was evicted.
        cache.fetch_extract("b").await;
        assert_eq!(cache.inner().calls(), 3);
        cache.fetch_extract("a").await;
        assert_eq!(cache.inner().calls(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_capacity_disables_caching() {
        let cache = CachedSummary::new(Counting::new(true), HOUR, 0);
        cache.fetch_extract("bmi").await;
        cache.fetch_extract("bmi").await;
        assert_eq!(cache.inner().calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_query_never_reaches_inner() {
        let cache = CachedSummary::new(Counting::new(true), HOUR, 8);
        assert_eq!(cache.fetch_summary("", "fallback text").await, "fallback text");
        assert_eq!(cache.inner().calls(), 0);
    }
}
