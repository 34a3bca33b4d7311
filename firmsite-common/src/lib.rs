//! Firmsite shared runtime: the global application context and logging.
//!
//! The context owns every long-lived component (database manager, cache
//! provider, object store, web server), wires them together at startup in
//! dependency order and tears them down in reverse on shutdown.

mod logger;

// Re-export error types
pub use firmsite_error::{FSError, FSResult};

use firmsite_models::constants::DATA_DIR;
use firmsite_models::{settings::Settings, CacheProvider, DbManager, ObjectStore, WebServer};
use logger::Logger;
use once_cell::sync::OnceCell;
use std::{
    future::Future,
    path::Path,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};
#[cfg(windows)]
use tokio::signal::ctrl_c;
#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio_util::{sync::CancellationToken, task::TaskTracker};
use tracing::{info, instrument, span, Level};

static APP_CONTEXT: OnceCell<RwLock<FSAppContext>> = OnceCell::new();

pub struct FSAppContext {
    /// Global settings
    settings: Option<Settings>,
    /// Global logger
    logger: Logger,
    /// Database manager
    db_manager: Option<Arc<dyn DbManager>>,
    /// Cache provider
    cache_provider: Option<Arc<dyn CacheProvider>>,
    /// Media object store
    object_store: Option<Arc<dyn ObjectStore>>,
    /// Web server
    web_server: Option<Arc<dyn WebServer>>,
    /// Flag to prevent duplicate shutdowns
    shutting_down: AtomicBool,
    /// Shutdown token
    shutdown_token: CancellationToken,
}

impl FSAppContext {
    #[inline]
    pub async fn instance() -> RwLockReadGuard<'static, FSAppContext> {
        APP_CONTEXT
            .get()
            .expect("FSAppContext is not initialized")
            .read()
            .await
    }

    #[inline]
    pub async fn instance_mut() -> RwLockWriteGuard<'static, FSAppContext> {
        APP_CONTEXT
            .get()
            .expect("FSAppContext is not initialized")
            .write()
            .await
    }

    /// Initializes the global application context.
    ///
    /// Loads settings, applies the runtime directory, initializes the logger
    /// and then brings up each component in dependency order. The instance
    /// is initialized exactly once.
    pub async fn init<D, P, O, W>(config: String) -> FSResult<()>
    where
        D: DbManager + 'static,
        P: CacheProvider + 'static,
        O: ObjectStore + 'static,
        W: WebServer + 'static,
    {
        let mut logger = Logger::new(if cfg!(debug_assertions) {
            Some(Level::DEBUG)
        } else {
            Some(Level::INFO)
        });

        // Load settings first so the runtime directory applies before the
        // logger starts writing ./logs.
        let settings = Settings::new(config)?;

        apply_runtime_dir(&settings.general.runtime_dir)?;

        logger.initialize()?;

        let span = span!(Level::INFO, "init-app");
        let _guard = span.enter();

        // Required runtime directories must exist before subsystems start.
        ensure_runtime_directories()?;

        let mut ctx = FSAppContext {
            shutting_down: AtomicBool::new(false),
            shutdown_token: CancellationToken::new(),
            logger,
            settings: Some(settings),
            db_manager: None,
            cache_provider: None,
            object_store: None,
            web_server: None,
        };

        ctx.init_db_manager::<D>().await?;
        ctx.init_cache_provider::<P>().await?;
        ctx.init_object_store::<O>().await?;
        ctx.init_web_server::<W>().await?;

        APP_CONTEXT
            .set(RwLock::new(ctx))
            .map_err(|_| FSError::from("Failed to set FSAppContext"))?;
        Ok(())
    }

    async fn init_db_manager<D: DbManager + 'static>(&mut self) -> FSResult<()> {
        self.db_manager = Some(D::init(self.settings()?).await?);
        info!("Database initialized successfully.");
        Ok(())
    }

    async fn init_cache_provider<P: CacheProvider + 'static>(&mut self) -> FSResult<()> {
        self.cache_provider = Some(P::init(self.settings()?).await?);
        info!("Cache provider initialized successfully.");
        Ok(())
    }

    async fn init_object_store<O: ObjectStore + 'static>(&mut self) -> FSResult<()> {
        self.object_store = Some(O::init(self.settings()?).await?);
        info!("Object store initialized successfully.");
        Ok(())
    }

    pub async fn init_web_server<W: WebServer + 'static>(&mut self) -> FSResult<()> {
        self.web_server = Some(W::init(self.settings()?).await?);
        info!("Web server initialized successfully.");
        Ok(())
    }

    #[inline]
    /// Gets a reference to the settings
    pub fn settings(&self) -> FSResult<&Settings> {
        self.settings
            .as_ref()
            .ok_or(FSError::from("Settings not initialized"))
    }

    #[inline]
    /// Gets a reference to the database manager
    pub fn db_manager(&self) -> FSResult<Arc<dyn DbManager>> {
        self.db_manager
            .as_ref()
            .ok_or(FSError::from("Database manager not initialized"))
            .map(Arc::clone)
    }

    /// Gets a reference to the cache provider
    #[inline]
    pub fn cache_provider(&self) -> FSResult<Arc<dyn CacheProvider>> {
        self.cache_provider
            .as_ref()
            .ok_or(FSError::from("Cache provider not initialized"))
            .map(Arc::clone)
    }

    /// Gets a reference to the object store
    #[inline]
    pub fn object_store(&self) -> FSResult<Arc<dyn ObjectStore>> {
        self.object_store
            .as_ref()
            .ok_or(FSError::from("Object store not initialized"))
            .map(Arc::clone)
    }

    #[inline]
    /// Gets a reference to the web server
    pub fn web_server(&self) -> FSResult<Arc<dyn WebServer>> {
        self.web_server
            .as_ref()
            .ok_or(FSError::from("Web server not initialized"))
            .map(Arc::clone)
    }

    #[inline]
    pub fn change_log_level(&self, level: Level) {
        self.logger.set_level(level);
    }

    /// Runs until a shutdown signal arrives, then shuts down gracefully.
    pub async fn run(&self) -> FSResult<()> {
        self.listen_for_shutdown(async { self.graceful_shutdown().await })
            .await
    }

    async fn listen_for_shutdown<F>(&self, shutdown_fn: F) -> FSResult<()>
    where
        F: Future<Output = FSResult<()>>,
    {
        let shutdown_token = self.shutdown_token.clone();

        #[cfg(unix)]
        {
            let mut sigterm =
                signal(SignalKind::terminate()).expect("failed to register SIGTERM handler");
            let mut sigint =
                signal(SignalKind::interrupt()).expect("failed to register SIGINT handler");

            tokio::select! {
                _ = sigterm.recv() => {
                    info!("Received SIGTERM signal");
                }
                _ = sigint.recv() => {
                    info!("Received SIGINT signal");
                }
                _ = shutdown_token.cancelled() => {}
            }
        }

        #[cfg(windows)]
        {
            tokio::select! {
                _ = ctrl_c() => {
                    info!("Received ctrl-c signal");
                }
                _ = shutdown_token.cancelled() => {}
            }
        }

        shutdown_fn.await
    }

    #[inline]
    #[instrument(name = "graceful-shutdown", skip_all)]
    /// Initiates a graceful shutdown process
    pub async fn graceful_shutdown(&self) -> FSResult<()> {
        if self.shutting_down.swap(true, Ordering::SeqCst) {
            return Ok(());
        }

        info!("🛑 Starting graceful shutdown...");

        let tracker = TaskTracker::new();
        // Shutdown components in reverse order of initialization
        if let Some(web_server) = &self.web_server {
            let web_server = Arc::clone(web_server);
            tracker.spawn(async move {
                let _ = web_server.stop().await;
            });
        }
        if let Some(db_manager) = &self.db_manager {
            let db_manager = Arc::clone(db_manager);
            tracker.spawn(async move {
                let _ = db_manager.close().await;
            });
        }

        info!("⏳ Waiting for all components to shutdown gracefully...");
        tracker.close();
        tracker.wait().await;

        info!("✅ Graceful shutdown completed successfully");
        std::process::exit(0);
    }
}

/// Apply the configured runtime directory by switching the process working
/// directory. Relative paths (`./data`, `./logs`) then resolve under it, so
/// the whole runtime tree can be relocated without rewriting path fields.
fn apply_runtime_dir(runtime_dir: &str) -> FSResult<()> {
    let dir = runtime_dir.trim();
    if dir.is_empty() || dir == "." {
        return Ok(());
    }

    std::fs::create_dir_all(dir)
        .map_err(|e| FSError::from(format!("Failed to create runtime_dir {dir}: {e}")))?;

    std::env::set_current_dir(dir).map_err(|e| {
        FSError::from(format!("Failed to set current_dir to runtime_dir {dir}: {e}"))
    })?;

    Ok(())
}

/// Ensure required runtime directories exist.
///
/// Safe to call multiple times; existing directories are left as-is.
fn ensure_runtime_directories() -> FSResult<()> {
    let dirs = [Path::new(DATA_DIR)];

    for dir in dirs {
        std::fs::create_dir_all(dir).map_err(|e| {
            FSError::from(format!(
                "Failed to create runtime directory {}: {e}",
                dir.display()
            ))
        })?;
    }

    Ok(())
}
