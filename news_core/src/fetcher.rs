use chrono::Utc;

use std::sync::Arc;
use std::time::Duration;

use crate::article::Article;
use crate::cache::{CacheEntry, CacheKey, NewsCache};
use crate::error::{Error, Result};
use crate::pipeline;
use crate::source::NewsSource;

/// How long a fetched batch is served without asking the source again.
pub const DEFAULT_FRESHNESS: Duration = Duration::from_secs(5 * 60);
/// Upper bound on the articles of one query, which also bounds the cache keys.
pub const MAX_LIMIT: usize = 50;
/// Topics are coin symbols like `BTC` or `MATIC`.
pub const MAX_TOPIC_LENGTH: usize = 10;

#[derive(Debug, Clone)]
pub struct FetcherConfig {
    pub freshness: Duration,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            freshness: DEFAULT_FRESHNESS,
        }
    }
}

/// Result of one fetch attempt.
#[derive(Debug)]
pub enum FetchOutcome {
    /// Served from a fresh cache entry (`cached`) or fetched just now.
    Fresh { articles: Vec<Article>, cached: bool },
    /// The source failed and an older entry for the same query was served instead.
    Stale { articles: Vec<Article>, error: Error },
    /// The source failed and nothing was cached for the query.
    Failed(Error),
}

impl FetchOutcome {
    /// Stale data counts as success.
    pub fn into_result(self) -> Result<Vec<Article>> {
        match self {
            FetchOutcome::Fresh { articles, .. } | FetchOutcome::Stale { articles, .. } => Ok(articles),
            FetchOutcome::Failed(err) => Err(err),
        }
    }

    pub fn articles(&self) -> Option<&[Article]> {
        match self {
            FetchOutcome::Fresh { articles, .. } | FetchOutcome::Stale { articles, .. } => Some(articles.as_slice()),
            FetchOutcome::Failed(_) => None,
        }
    }

    pub fn is_stale(&self) -> bool {
        matches!(self, FetchOutcome::Stale { .. })
    }
}

/// Fetches deduplicated articles through a shared [`NewsCache`].
///
/// A query is answered from the cache while its entry is younger than the
/// freshness window. Otherwise the source is asked once; on failure the last
/// entry for the query is served regardless of age. Concurrent misses on the
/// same query each reach the source, and the last write wins.
pub struct CachedNewsFetcher<S> {
    source: S,
    cache: Arc<NewsCache>,
    config: FetcherConfig,
}

impl<S: NewsSource> CachedNewsFetcher<S> {
    pub fn new(source: S, cache: Arc<NewsCache>, config: FetcherConfig) -> Self {
        Self { source, cache, config }
    }

    pub fn cache(&self) -> &Arc<NewsCache> {
        &self.cache
    }

    pub async fn fetch_topic_news(&self, topic: &str, limit: usize) -> Result<Vec<Article>> {
        self.fetch_topic_outcome(topic, limit).await.into_result()
    }

    pub async fn fetch_general_news(&self, limit: usize) -> Result<Vec<Article>> {
        self.fetch_general_outcome(limit).await.into_result()
    }

    pub async fn fetch_topic_outcome(&self, topic: &str, limit: usize) -> FetchOutcome {
        if let Err(err) = check_topic(topic).and_then(|_| check_limit(limit)) {
            return FetchOutcome::Failed(err);
        }
        self.fetch(CacheKey::topic(topic, limit)).await
    }

    pub async fn fetch_general_outcome(&self, limit: usize) -> FetchOutcome {
        if let Err(err) = check_limit(limit) {
            return FetchOutcome::Failed(err);
        }
        self.fetch(CacheKey::general(limit)).await
    }

    pub async fn clear_cache(&self) {
        self.cache.clear().await;
        tracing::info!("Cleared news cache");
    }

    async fn fetch(&self, key: CacheKey) -> FetchOutcome {
        // 1. Serve a fresh entry without touching the source
        if let Some(entry) = self.cache.get(&key).await {
            if entry.is_fresh(self.config.freshness, Utc::now()) {
                tracing::debug!("Serving {} articles for {} from cache", entry.articles.len(), key);
                return FetchOutcome::Fresh {
                    articles: entry.articles,
                    cached: true,
                };
            }
        }

        // 2. Ask the source once, falling back to whatever is cached
        let batch = match self.source.fetch_raw(key.topic_filter()).await {
            Ok(batch) => batch,
            Err(err) => {
                // The cache may have been cleared or refreshed while the request was in flight
                return match self.cache.get(&key).await {
                    Some(entry) => {
                        tracing::warn!(
                            "Cannot refresh news for {}, serving entry from {}: {}",
                            key,
                            entry.fetched_at,
                            err
                        );
                        FetchOutcome::Stale {
                            articles: entry.articles,
                            error: err.into(),
                        }
                    }
                    None => {
                        tracing::error!("Cannot fetch news for {}: {}", key, err);
                        FetchOutcome::Failed(err.into())
                    }
                };
            }
        };

        // 3. Transform and store
        let received = batch.len();
        let articles = pipeline::transform(batch, key.limit());
        tracing::info!("Fetched {} articles for {}, kept {}", received, key, articles.len());
        self.cache.insert(CacheEntry::new(key, articles.clone())).await;

        FetchOutcome::Fresh {
            articles,
            cached: false,
        }
    }
}

fn check_topic(topic: &str) -> Result<()> {
    let topic = topic.trim();
    if topic.is_empty() {
        return Err(Error::InvalidRequest("topic must not be empty".to_string()));
    }
    if topic.len() > MAX_TOPIC_LENGTH || !topic.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(Error::InvalidRequest(format!(
            "topic must be at most {} ASCII letters or digits",
            MAX_TOPIC_LENGTH
        )));
    }
    Ok(())
}

fn check_limit(limit: usize) -> Result<()> {
    if limit == 0 || limit > MAX_LIMIT {
        return Err(Error::InvalidRequest(format!("limit must be between 1 and {}", MAX_LIMIT)));
    }
    Ok(())
}
