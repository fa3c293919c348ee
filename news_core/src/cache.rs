use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::time::Duration;

use crate::article::Article;

/// Identifies one query. The same topic requested with different limits is
/// cached under different keys.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum CacheKey {
    Topic { topic: String, limit: usize },
    General { limit: usize },
}

impl CacheKey {
    /// Topics are compared case-insensitively.
    pub fn topic(topic: &str, limit: usize) -> Self {
        CacheKey::Topic {
            topic: topic.trim().to_uppercase(),
            limit,
        }
    }

    pub fn general(limit: usize) -> Self {
        CacheKey::General { limit }
    }

    /// The filter passed to the news source, `None` for the unfiltered feed.
    pub fn topic_filter(&self) -> Option<&str> {
        match self {
            CacheKey::Topic { topic, .. } => Some(topic.as_str()),
            CacheKey::General { .. } => None,
        }
    }

    pub fn limit(&self) -> usize {
        match self {
            CacheKey::Topic { limit, .. } | CacheKey::General { limit } => *limit,
        }
    }
}

impl Display for CacheKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheKey::Topic { topic, limit } => write!(f, "{}_{}", topic, limit),
            CacheKey::General { limit } => write!(f, "general_{}", limit),
        }
    }
}

/// A batch of articles from one successful fetch.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub key: CacheKey,
    pub articles: Vec<Article>,
    pub fetched_at: DateTime<Utc>,
}

impl CacheEntry {
    pub fn new(key: CacheKey, articles: Vec<Article>) -> Self {
        Self {
            key,
            articles,
            fetched_at: Utc::now(),
        }
    }

    /// An entry stamped in the future (clock adjustment) counts as just fetched.
    pub fn is_fresh(&self, window: Duration, now: DateTime<Utc>) -> bool {
        let age = now.signed_duration_since(self.fetched_at).to_std().unwrap_or_default();
        age < window
    }
}

/// Article batches by query. Entries are only written after a successful
/// fetch and only removed by [`NewsCache::clear`].
#[derive(Debug, Default)]
pub struct NewsCache {
    entries: RwLock<HashMap<CacheKey, CacheEntry>>,
}

impl NewsCache {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub async fn get(&self, key: &CacheKey) -> Option<CacheEntry> {
        self.entries.read().await.get(key).cloned()
    }

    pub async fn insert(&self, entry: CacheEntry) {
        self.entries.write().await.insert(entry.key.clone(), entry);
    }

    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_topic_key_ignores_case() {
        assert_eq!(CacheKey::topic("btc", 5), CacheKey::topic(" BTC ", 5));
        assert_ne!(CacheKey::topic("BTC", 5), CacheKey::topic("BTC", 10));
        assert_eq!(CacheKey::topic("eth", 3).to_string(), "ETH_3");
        assert_eq!(CacheKey::general(3).to_string(), "general_3");
    }

    #[test]
    fn test_general_key_is_distinct_from_topics() {
        assert_ne!(CacheKey::general(5), CacheKey::topic("general", 5));
        assert_eq!(CacheKey::general(5).topic_filter(), None);
        assert_eq!(CacheKey::topic("sol", 5).topic_filter(), Some("SOL"));
    }

    #[test]
    fn test_entry_freshness() {
        let entry = CacheEntry::new(CacheKey::general(1), Vec::new());
        let window = Duration::from_secs(300);
        assert!(entry.is_fresh(window, entry.fetched_at + chrono::Duration::seconds(299)));
        assert!(!entry.is_fresh(window, entry.fetched_at + chrono::Duration::seconds(300)));
        assert!(entry.is_fresh(window, entry.fetched_at - chrono::Duration::seconds(10)));
        assert!(!entry.is_fresh(Duration::ZERO, entry.fetched_at));
    }

    #[tokio::test]
    async fn test_insert_and_clear() {
        let cache = NewsCache::new();
        assert!(cache.is_empty().await);

        cache.insert(CacheEntry::new(CacheKey::topic("BTC", 3), Vec::new())).await;
        cache.insert(CacheEntry::new(CacheKey::general(3), Vec::new())).await;
        assert_eq!(cache.len().await, 2);
        assert!(cache.get(&CacheKey::topic("btc", 3)).await.is_some());
        assert!(cache.get(&CacheKey::topic("btc", 4)).await.is_none());

        cache.clear().await;
        assert!(cache.is_empty().await);
    }
}
