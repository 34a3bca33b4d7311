pub mod cache;
pub mod constants;
pub mod domain;
pub mod entities;
pub mod enums;
pub mod idens;
pub mod settings;
pub mod web;

use crate::cache::FSBaseCache;
use async_trait::async_trait;
use downcast_rs::{impl_downcast, DowncastSync};
use firmsite_error::{
    init::InitContextError,
    storage::{CacheError, StorageError},
    FSResult, ObjectStoreResult,
};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use settings::Settings;
use std::{sync::Arc, time::Duration};

// Implement downcast for core system traits
impl_downcast!(sync WebServer);
impl_downcast!(sync DbManager);
impl_downcast!(sync CacheProvider);
impl_downcast!(sync ObjectStore);

/// Database management interface for the firmsite backend.
///
/// This trait defines the core database operations including initialization,
/// connection management, and cleanup.
#[async_trait]
pub trait DbManager: DowncastSync + Send + Sync + 'static {
    /// Initializes the database manager with the provided settings.
    ///
    /// # Returns
    /// An Arc-wrapped instance of the database manager
    async fn init(settings: &Settings) -> FSResult<Arc<Self>, InitContextError>
    where
        Self: Sized;

    /// Retrieves a database connection from the connection pool.
    fn get_connection(&self) -> FSResult<DatabaseConnection, StorageError>;

    /// Gracefully closes all database connections and performs cleanup.
    async fn close(&self) -> FSResult<()>;
}

/// Cache provider interface for in-process caching.
#[async_trait]
pub trait CacheProvider: DowncastSync + Send + Sync + 'static {
    /// Initializes the cache provider with the provided configuration.
    async fn init(settings: &Settings) -> FSResult<Arc<Self>, InitContextError>
    where
        Self: Sized;

    /// Create a cache instance for a specific value type.
    fn create_cache<V>(
        &mut self,
        cache_name: &str,
        max_capacity: Option<u64>,
        ttl: Option<Duration>,
    ) -> FSResult<(), CacheError>
    where
        Self: Sized,
        V: Clone + Send + Sync + 'static;

    /// Retrieves a cache instance for a specific value type.
    fn get_cache<V>(
        &self,
        cache_name: &str,
    ) -> FSResult<Arc<dyn FSBaseCache<Value = V> + Send + Sync>, CacheError>
    where
        Self: Sized,
        V: Clone + Send + Sync + 'static;
}

/// Result of storing one object: the key it lives under and the URL the
/// public site loads it from.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredObject {
    pub key: String,
    pub public_url: String,
}

/// Media object store collaborator.
///
/// The contract is deliberately narrow (`put`, `remove`, `public_url`) so a
/// hosted bucket can replace the local implementation without touching the
/// callers. Removal is best-effort from the caller's perspective.
#[async_trait]
pub trait ObjectStore: DowncastSync + Send + Sync + 'static {
    /// Initializes the object store from settings.
    async fn init(settings: &Settings) -> FSResult<Arc<Self>, InitContextError>
    where
        Self: Sized;

    /// Store `bytes` under `key`, overwriting any previous object.
    async fn put(&self, key: &str, bytes: Vec<u8>) -> ObjectStoreResult<StoredObject>;

    /// Remove the object under `key`.
    async fn remove(&self, key: &str) -> ObjectStoreResult<()>;

    /// Public URL an object under `key` is served from.
    fn public_url(&self, key: &str) -> String;
}

/// Web server interface for the HTTP API.
#[async_trait]
pub trait WebServer: DowncastSync + Send + Sync + 'static {
    /// Initializes and starts the web server.
    async fn init(settings: &Settings) -> FSResult<Arc<Self>, InitContextError>
    where
        Self: Sized;

    /// Gracefully stops the web server.
    async fn stop(&self) -> FSResult<()>;
}
