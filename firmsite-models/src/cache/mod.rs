mod admin;

use async_trait::async_trait;
use firmsite_error::StorageResult;
use std::{future::Future, sync::Arc, time::Duration};

pub use admin::AdminGateCache;

pub const ADMIN_GATE_CACHE_NAME: &str = "AdminGate";

/// Base cache trait that defines common cache operations
#[async_trait]
pub trait FSBaseCache: Send + Sync + 'static {
    /// Associated value type that can be cached
    type Value: Clone + Send + Sync + 'static;

    /// Get cache name
    fn name(&self) -> &str;

    /// Get value by key
    async fn get(&self, key: String) -> StorageResult<Option<Self::Value>>;

    /// Set value with default TTL
    async fn set(&self, key: String, value: Self::Value) -> StorageResult<()>;

    /// Set value with custom TTL
    async fn set_with_ttl(
        &self,
        key: String,
        value: Self::Value,
        ttl: Duration,
    ) -> StorageResult<()>;

    /// Delete key
    async fn delete(&self, key: String) -> StorageResult<bool>;

    /// Delete all keys
    async fn delete_all(&self) -> StorageResult<u64>;

    /// Check if key exists
    async fn exists(&self, key: String) -> StorageResult<bool>;
}

#[async_trait]
impl<T: FSBaseCache + ?Sized> FSBaseCache for Arc<T> {
    type Value = T::Value;

    fn name(&self) -> &str {
        (**self).name()
    }

    async fn get(&self, key: String) -> StorageResult<Option<Self::Value>> {
        (**self).get(key).await
    }

    async fn set(&self, key: String, value: Self::Value) -> StorageResult<()> {
        (**self).set(key, value).await
    }

    async fn set_with_ttl(
        &self,
        key: String,
        value: Self::Value,
        ttl: Duration,
    ) -> StorageResult<()> {
        (**self).set_with_ttl(key, value, ttl).await
    }

    async fn delete(&self, key: String) -> StorageResult<bool> {
        (**self).delete(key).await
    }

    async fn delete_all(&self) -> StorageResult<u64> {
        (**self).delete_all().await
    }

    async fn exists(&self, key: String) -> StorageResult<bool> {
        (**self).exists(key).await
    }
}

#[async_trait]
pub trait FSCacheExt: FSBaseCache {
    /// Read-through: return the cached value or create, store and return it.
    async fn get_or_create<F, Fut>(&self, key: String, f: F) -> StorageResult<Self::Value>
    where
        F: FnOnce(String) -> Fut + Send + Sync,
        Fut: Future<Output = StorageResult<Self::Value>> + Send;
}

#[async_trait]
impl<T: FSBaseCache> FSCacheExt for T {
    async fn get_or_create<F, Fut>(&self, key: String, f: F) -> StorageResult<T::Value>
    where
        F: FnOnce(String) -> Fut + Send + Sync,
        Fut: Future<Output = StorageResult<T::Value>> + Send,
    {
        if let Some(value) = self.get(key.clone()).await? {
            return Ok(value);
        }
        let value = f(key.clone()).await?;
        self.set(key, value.clone()).await?;
        Ok(value)
    }
}
