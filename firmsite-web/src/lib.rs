//! Web server module for the firmsite application
mod api;
mod middleware;

use actix_web::{
    dev::{Server, ServerHandle},
    middleware::{Compress, Logger, NormalizePath},
    App, HttpServer,
};
use async_trait::async_trait;
use firmsite_error::{init::InitContextError, FSError, FSResult};
use firmsite_models::{settings::Settings, WebServer};
use middleware::cors::middleware as cors_middleware;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, instrument};

/// FSWebServer handles the web server initialization and management
#[derive(Clone)]
pub struct FSWebServer {
    /// Server handle for graceful shutdown
    server: Arc<Mutex<Option<ServerHandle>>>,
}

impl FSWebServer {
    /// Create and configure the HTTP server
    async fn create_server(settings: &Settings) -> FSResult<Server> {
        let addr = format!("{}:{}", settings.web.host, settings.web.port);
        let api_prefix = format!("{}/v1", settings.web.router_prefix);
        let worker_count = settings.web.get_worker_count();
        let cors_config = settings.web.cors.clone();

        // Stored media is served by this process whenever the public base is
        // a relative path; an absolute base means a CDN fronts the store.
        let uploads_mount = settings
            .object_store
            .public_base_url
            .starts_with('/')
            .then(|| {
                (
                    settings.object_store.public_base_url.clone(),
                    settings.object_store.root_dir.clone(),
                )
            });

        let server = HttpServer::new(move || {
            let mut app = App::new()
                .wrap(cors_middleware(&cors_config))
                .wrap(Logger::default())
                .wrap(Compress::default())
                .wrap(NormalizePath::trim())
                // Public root routes (not under the API prefix).
                .configure(api::configure_public_routes)
                // Versioned admin API under the router prefix.
                .service(actix_web::web::scope(&api_prefix).configure(api::configure_routes));

            if let Some((mount, dir)) = &uploads_mount {
                app = app.service(actix_files::Files::new(mount, dir).use_etag(true));
            }

            app
        })
        .workers(worker_count);

        let server = server
            .bind(&addr)
            .map_err(|e| FSError::from(format!("Failed to bind HTTP server to {addr}: {e}")))?;

        Ok(server.run())
    }
}

#[async_trait]
impl WebServer for FSWebServer {
    #[inline]
    #[instrument(name = "init-web-server", skip_all)]
    /// Initialize and start the web server
    async fn init(settings: &Settings) -> FSResult<Arc<Self>, InitContextError> {
        let server = Self::create_server(settings).await.map_err(|e| {
            InitContextError::Primitive(format!("Failed to create web server: {e}"))
        })?;
        let server_handle = server.handle();

        // Spawn server task
        tokio::spawn(async move {
            if let Err(e) = server.await {
                error!(error=%e, "Web server failed to start");
            }
        });

        let web_server = FSWebServer {
            server: Arc::new(Mutex::new(Some(server_handle))),
        };

        Ok(Arc::new(web_server))
    }

    #[inline]
    #[instrument(name = "web-server-stop", skip_all)]
    /// Gracefully stop the web server
    async fn stop(&self) -> FSResult<()> {
        info!("🛑 Stopping web server...");
        let mut server_guard = self.server.lock().await;
        if let Some(handle) = server_guard.take() {
            handle.stop(true).await;
        }
        info!("✅ Web server stopped successfully");

        Ok(())
    }
}
