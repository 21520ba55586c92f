//! Query result cache shared by every component of a board view.
//!
//! Entries are keyed by query kind plus entity id. Invalidation only marks an
//! entry stale; the next `fetch` for that key goes back to the server. This is
//! the only state components share.

use parking_lot::RwLock;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use taskboard_core::TaskboardResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    Card,
    CardLogs,
    CardComments,
    AvailableTags,
}

impl QueryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            QueryKind::Card => "card",
            QueryKind::CardLogs => "card-logs",
            QueryKind::CardComments => "card-comments",
            QueryKind::AvailableTags => "available-tags",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub kind: QueryKind,
    pub id: String,
}

impl QueryKey {
    pub fn new(kind: QueryKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }

    pub fn card(card_id: impl Into<String>) -> Self {
        Self::new(QueryKind::Card, card_id)
    }

    pub fn card_logs(card_id: impl Into<String>) -> Self {
        Self::new(QueryKind::CardLogs, card_id)
    }

    pub fn card_comments(card_id: impl Into<String>) -> Self {
        Self::new(QueryKind::CardComments, card_id)
    }

    pub fn available_tags(board_id: impl Into<String>) -> Self {
        Self::new(QueryKind::AvailableTags, board_id)
    }

    /// Every query that depends on a single card.
    pub fn card_queries(card_id: &str) -> [QueryKey; 3] {
        [
            Self::card(card_id),
            Self::card_logs(card_id),
            Self::card_comments(card_id),
        ]
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind.as_str(), self.id)
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    value: serde_json::Value,
    stale: bool,
}

#[derive(Debug, Default)]
pub struct QueryCache {
    entries: RwLock<HashMap<QueryKey, CacheEntry>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached value for `key`, stale or not.
    pub fn get<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        let entries = self.entries.read();
        let entry = entries.get(key)?;
        serde_json::from_value(entry.value.clone()).ok()
    }

    pub fn set<T: Serialize>(&self, key: QueryKey, value: &T) -> TaskboardResult<()> {
        let value = serde_json::to_value(value)?;
        self.entries
            .write()
            .insert(key, CacheEntry { value, stale: false });
        Ok(())
    }

    /// True when the entry is stale or missing.
    pub fn is_stale(&self, key: &QueryKey) -> bool {
        self.entries.read().get(key).map_or(true, |e| e.stale)
    }

    /// Marks `key` stale. Returns whether an entry existed.
    pub fn invalidate(&self, key: &QueryKey) -> bool {
        match self.entries.write().get_mut(key) {
            Some(entry) => {
                entry.stale = true;
                tracing::debug!("Invalidated query {}", key);
                true
            }
            None => false,
        }
    }

    pub fn invalidate_all<'a>(&self, keys: impl IntoIterator<Item = &'a QueryKey>) {
        for key in keys {
            self.invalidate(key);
        }
    }

    /// Returns the fresh cached value, or runs `loader` and caches its result.
    ///
    /// A failed load leaves any existing entry untouched.
    pub async fn fetch<T, F, Fut>(&self, key: QueryKey, loader: F) -> TaskboardResult<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = TaskboardResult<T>>,
    {
        if !self.is_stale(&key) {
            if let Some(value) = self.get(&key) {
                return Ok(value);
            }
        }

        tracing::debug!("Fetching query {}", key);
        let value = loader().await?;
        self.set(key, &value)?;
        Ok(value)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use taskboard_core::TaskboardError;

    #[test]
    fn test_key_display_uses_query_prefixes() {
        assert_eq!(QueryKey::card_comments("c1").to_string(), "card-comments:c1");
        assert_eq!(QueryKey::available_tags("b1").to_string(), "available-tags:b1");
    }

    #[test]
    fn test_missing_entry_is_stale() {
        let cache = QueryCache::new();
        assert!(cache.is_stale(&QueryKey::card("c1")));
        assert!(!cache.invalidate(&QueryKey::card("c1")));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_invalidate_marks_stale_but_keeps_value() {
        let cache = QueryCache::new();
        let key = QueryKey::card_comments("c1");
        cache.set(key.clone(), &3u32).unwrap();
        assert!(!cache.is_stale(&key));

        assert!(cache.invalidate(&key));
        assert!(cache.is_stale(&key));
        assert_eq!(cache.get::<u32>(&key), Some(3));
    }

    #[tokio::test]
    async fn test_fetch_uses_fresh_entry_and_reloads_stale() {
        let cache = QueryCache::new();
        let key = QueryKey::card_comments("c1");
        let calls = AtomicUsize::new(0);
        let calls = &calls;

        let load = move || async move {
            let n = calls.fetch_add(1, Ordering::SeqCst) as u32;
            Ok::<u32, TaskboardError>(n + 10)
        };

        assert_eq!(cache.fetch(key.clone(), load).await.unwrap(), 10);
        assert_eq!(cache.fetch(key.clone(), load).await.unwrap(), 10);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        cache.invalidate(&key);
        assert_eq!(cache.fetch(key.clone(), load).await.unwrap(), 11);
        assert!(!cache.is_stale(&key));
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_previous_entry() {
        let cache = QueryCache::new();
        let key = QueryKey::card_comments("c1");
        cache.set(key.clone(), &5u32).unwrap();
        cache.invalidate(&key);

        let result = cache
            .fetch(key.clone(), || async {
                Err::<u32, _>(TaskboardError::Transport("offline".to_string()))
            })
            .await;
        assert!(result.is_err());
        assert_eq!(cache.get::<u32>(&key), Some(5));
        assert!(cache.is_stale(&key));
    }
}
