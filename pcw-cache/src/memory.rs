//! In-memory cache for development and tests.

use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::RwLock;

use pcw_core::{AddressCache, CacheKey, Result};

/// Process-local [`AddressCache`] backed by a `HashMap`.
///
/// Same contract as the Redis adapter, no network. Used by the API tests
/// and handy for running the proxy without a cache store.
#[derive(Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, Bytes>>,
}

impl MemoryCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Removes all entries.
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

#[async_trait]
impl AddressCache for MemoryCache {
    async fn get(&self, key: &CacheKey) -> Result<Option<Bytes>> {
        Ok(self.entries.read().get(key.as_str()).cloned())
    }

    async fn put(&self, key: &CacheKey, payload: Bytes) -> Result<()> {
        self.entries
            .write()
            .insert(key.as_str().to_string(), payload);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pcw_core::Catalog;

    #[tokio::test]
    async fn test_get_put_roundtrip() {
        let cache = MemoryCache::new();
        let key = CacheKey::new(Catalog::Eircode, "D02");

        assert_eq!(cache.get(&key).await.unwrap(), None);

        cache.put(&key, Bytes::from_static(b"[]")).await.unwrap();
        assert_eq!(
            cache.get(&key).await.unwrap(),
            Some(Bytes::from_static(b"[]"))
        );
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_put_replaces() {
        let cache = MemoryCache::new();
        let key = CacheKey::new(Catalog::Premise, "SW1A");

        cache.put(&key, Bytes::from_static(b"old")).await.unwrap();
        cache.put(&key, Bytes::from_static(b"new")).await.unwrap();

        assert_eq!(
            cache.get(&key).await.unwrap(),
            Some(Bytes::from_static(b"new"))
        );
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_clear() {
        let cache = MemoryCache::new();
        cache
            .put(&CacheKey::new(Catalog::Eircode, "A"), Bytes::new())
            .await
            .unwrap();
        cache.clear();
        assert!(cache.is_empty());
    }
}
