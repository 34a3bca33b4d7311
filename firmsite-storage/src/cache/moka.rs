use async_trait::async_trait;
use firmsite_error::StorageResult;
use firmsite_models::cache::FSBaseCache;
use moka::{
    future::{Cache as MokaInner, CacheBuilder},
    Expiry,
};
use std::time::Duration;

/// The cached item with per-entry expiration metadata.
#[derive(Clone)]
pub struct CacheItem<V>
where
    V: Clone + Send + Sync + 'static,
{
    pub value: V,
    /// Entry-specific TTL overriding the cache default.
    pub ttl: Option<Duration>,
}

/// Moka-based in-memory cache implementation.
///
/// Generic over `V` which must implement `Clone` to support get/set ergonomics.
pub struct MokaCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    /// Logical cache name for debugging
    name: String,
    inner: MokaInner<String, CacheItem<V>>,
}

/// Maps item metadata to a remaining duration per entry.
struct MokaExpiry {
    ttl: Option<Duration>,
}

impl<K, V> Expiry<K, CacheItem<V>> for MokaExpiry
where
    V: Clone + Send + Sync + 'static,
{
    fn expire_after_create(
        &self,
        _key: &K,
        item: &CacheItem<V>,
        _: std::time::Instant,
    ) -> Option<Duration> {
        item.ttl.or(self.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &K,
        item: &CacheItem<V>,
        _: std::time::Instant,
        _current: Option<Duration>,
    ) -> Option<Duration> {
        item.ttl.or(self.ttl)
    }
}

impl<V> MokaCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    pub fn new(name: String, max_capacity: Option<u64>, ttl: Option<Duration>) -> Self {
        let builder =
            CacheBuilder::new(max_capacity.unwrap_or(10_000)).expire_after(MokaExpiry { ttl });
        MokaCache {
            name,
            inner: builder.build(),
        }
    }
}

#[async_trait]
impl<V> FSBaseCache for MokaCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    type Value = V;

    fn name(&self) -> &str {
        &self.name
    }

    async fn get(&self, key: String) -> StorageResult<Option<V>> {
        Ok(self.inner.get(&key).await.map(|item| item.value))
    }

    async fn set(&self, key: String, value: V) -> StorageResult<()> {
        self.inner.insert(key, CacheItem { value, ttl: None }).await;
        Ok(())
    }

    async fn set_with_ttl(&self, key: String, value: V, ttl: Duration) -> StorageResult<()> {
        self.inner
            .insert(
                key,
                CacheItem {
                    value,
                    ttl: Some(ttl),
                },
            )
            .await;
        Ok(())
    }

    async fn delete(&self, key: String) -> StorageResult<bool> {
        Ok(self.inner.remove(&key).await.is_some())
    }

    async fn delete_all(&self) -> StorageResult<u64> {
        let count = self.inner.entry_count();
        self.inner.invalidate_all();
        Ok(count)
    }

    async fn exists(&self, key: String) -> StorageResult<bool> {
        Ok(self.inner.contains_key(&key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_get_delete_roundtrip() {
        let cache: MokaCache<String> = MokaCache::new("test".into(), Some(8), None);
        cache.set("a".into(), "1".into()).await.unwrap();
        assert_eq!(cache.get("a".into()).await.unwrap(), Some("1".into()));
        assert!(cache.delete("a".into()).await.unwrap());
        assert_eq!(cache.get("a".into()).await.unwrap(), None);
        assert!(!cache.delete("a".into()).await.unwrap());
    }

    #[tokio::test]
    async fn entry_ttl_expires_the_value() {
        let cache: MokaCache<i32> = MokaCache::new("test".into(), Some(8), None);
        cache
            .set_with_ttl("k".into(), 7, Duration::from_millis(20))
            .await
            .unwrap();
        assert_eq!(cache.get("k".into()).await.unwrap(), Some(7));
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(cache.get("k".into()).await.unwrap(), None);
    }
}
