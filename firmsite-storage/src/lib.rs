mod cache;
mod migration;
mod object_store;
mod sql;

use crate::cache::moka::MokaCache;
use async_trait::async_trait;
use firmsite_error::{
    init::InitContextError,
    storage::{CacheError, StorageError},
    FSResult,
};
use firmsite_models::{
    cache::{AdminGateCache, FSBaseCache, ADMIN_GATE_CACHE_NAME},
    settings::{CacheType, Settings},
    CacheProvider, DbManager,
};
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use sql::sqlite;
use std::{any::Any, collections::HashMap, sync::Arc, time::Duration};
use tracing::{info, instrument};

pub use object_store::FSLocalObjectStore;

/// Global database manager struct
pub struct FSDbManager {
    db_conn: Option<DatabaseConnection>,
}

#[async_trait]
impl DbManager for FSDbManager {
    #[inline]
    #[instrument(name = "init-db-manager", skip_all)]
    async fn init(settings: &Settings) -> FSResult<Arc<Self>, InitContextError> {
        let db_conn = {
            let db = sqlite::init_db(&settings.db.sqlite).await.map_err(|e| {
                InitContextError::Primitive(format!("Failed to init SQLite database: {e}"))
            })?;

            // Run database migrations
            Migrator::up(&db, None).await.map_err(|e| {
                InitContextError::Primitive(format!("Failed to migrate SQLite database: {e}"))
            })?;

            db
        };

        let db_manager = Arc::new(FSDbManager {
            db_conn: Some(db_conn),
        });

        info!("Database manager initialized successfully");
        Ok(db_manager)
    }

    #[inline]
    fn get_connection(&self) -> FSResult<DatabaseConnection, StorageError> {
        self.db_conn
            .as_ref()
            .ok_or(StorageError::StorageUnavailable)
            .cloned()
    }

    #[inline]
    #[instrument(name = "db_close", skip_all)]
    async fn close(&self) -> FSResult<()> {
        info!("🛑 Closing database connections...");
        if let Some(db) = &self.db_conn {
            db.clone().close().await?;
        }
        info!("✅ Database connections closed successfully");
        Ok(())
    }
}

pub struct FSCacheProvider {
    cache_type: CacheType,
    caches: HashMap<String, Arc<dyn Any + Send + Sync>>,
}

impl FSCacheProvider {
    pub fn new(cache_type: CacheType) -> Self {
        Self {
            cache_type,
            caches: HashMap::new(),
        }
    }

    #[inline]
    #[instrument(name = "init-caches", skip_all)]
    fn init_caches(&mut self, settings: &Settings) {
        // Positive admin-gate verdicts live at most one token lifetime.
        self.create_cache::<AdminGateCache>(
            ADMIN_GATE_CACHE_NAME,
            Some(1_000),
            Some(Duration::from_secs(settings.web.jwt.expire as u64)),
        )
        .expect("Failed to initialize admin gate cache");
    }
}

#[async_trait]
impl CacheProvider for FSCacheProvider {
    #[inline]
    #[instrument(name = "init-cache-provider", skip(settings))]
    async fn init(settings: &Settings) -> FSResult<Arc<Self>, InitContextError> {
        let mut provider = Self::new(settings.cache.r#type);
        provider.init_caches(settings);
        Ok(Arc::new(provider))
    }

    #[inline]
    #[instrument(name = "create-cache", skip(self))]
    fn create_cache<V: Clone + Send + Sync + 'static>(
        &mut self,
        cache_name: &str,
        max_capacity: Option<u64>,
        ttl: Option<Duration>,
    ) -> FSResult<(), CacheError> {
        if self.caches.contains_key(cache_name) {
            return Err(CacheError::AlreadyExists(cache_name.to_string()));
        }

        let cache = match self.cache_type {
            CacheType::Moka => MokaCache::<V>::new(cache_name.to_string(), max_capacity, ttl),
        };
        let cache: Arc<dyn FSBaseCache<Value = V> + Send + Sync> = Arc::new(cache);
        self.caches.insert(cache_name.to_string(), Arc::new(cache));
        info!("Cache created successfully: {}", cache_name);
        Ok(())
    }

    #[inline]
    fn get_cache<V>(
        &self,
        cache_name: &str,
    ) -> FSResult<Arc<dyn FSBaseCache<Value = V> + Send + Sync>, CacheError>
    where
        V: Clone + Send + Sync + 'static,
    {
        self.caches
            .get(cache_name)
            .and_then(|cache| {
                cache
                    .downcast_ref::<Arc<dyn FSBaseCache<Value = V> + Send + Sync>>()
                    .map(Arc::clone)
            })
            .ok_or(CacheError::NotFound(cache_name.to_string()))
    }
}
