use config::{Config, File};
use firmsite_error::FSResult;
use serde::{self, Deserialize};
use std::{ops::Deref, sync::Arc};

use crate::constants::DATA_DIR;

#[derive(Debug, Clone)]
pub struct Settings(Arc<Inner>);

impl Deref for Settings {
    type Target = Inner;
    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl Settings {
    pub fn new(config_path: String) -> FSResult<Self> {
        let builder = Config::builder()
            .add_source(File::with_name(config_path.as_str()).required(false))
            .add_source(
                config::Environment::with_prefix("FS")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("web.cors.whitelist.origins")
                    .with_list_parse_key("web.cors.whitelist.methods")
                    .with_list_parse_key("web.cors.whitelist.headers")
                    .with_list_parse_key("web.cors.whitelist.expose_headers"),
            );
        let inner: Inner = builder.build()?.try_deserialize()?;
        Ok(Self(Arc::new(inner)))
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Inner {
    #[serde(default)]
    pub general: General,
    #[serde(default)]
    pub web: Web,
    #[serde(default)]
    pub db: Db,
    #[serde(default)]
    pub cache: Cache,
    #[serde(default)]
    pub object_store: ObjectStoreConfig,
    #[serde(default)]
    pub slideshow: SlideshowConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct General {
    /// Runtime root directory for all relative paths.
    ///
    /// The backend uses relative paths by design (`./data`, `./logs`). This
    /// field defines the directory those paths resolve from by changing the
    /// process working directory at startup.
    #[serde(default = "General::runtime_dir_default")]
    pub runtime_dir: String,
}

impl Default for General {
    fn default() -> Self {
        General {
            runtime_dir: General::runtime_dir_default(),
        }
    }
}

impl General {
    fn runtime_dir_default() -> String {
        ".".into()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Web {
    #[serde(default = "Web::router_prefix_default")]
    pub router_prefix: String,
    #[serde(default = "Web::host_default")]
    pub host: String,
    #[serde(default = "Web::port_default")]
    pub port: u16,
    /// Worker count; non-positive means one worker per available core.
    #[serde(default = "Web::workers_default")]
    pub workers: i32,
    #[serde(default)]
    pub jwt: Jwt,
    #[serde(default)]
    pub cors: Cors,
}

impl Default for Web {
    fn default() -> Self {
        Web {
            router_prefix: Web::router_prefix_default(),
            host: Web::host_default(),
            port: Web::port_default(),
            workers: Web::workers_default(),
            jwt: Jwt::default(),
            cors: Cors::default(),
        }
    }
}

impl Web {
    fn router_prefix_default() -> String {
        "/api".into()
    }

    fn host_default() -> String {
        "0.0.0.0".into()
    }

    fn port_default() -> u16 {
        8090
    }

    fn workers_default() -> i32 {
        0
    }

    pub fn get_worker_count(&self) -> usize {
        if self.workers > 0 {
            self.workers as usize
        } else {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Jwt {
    #[serde(default = "Jwt::issuer_default")]
    pub issuer: String,
    #[serde(default = "Jwt::secret_default")]
    pub secret: String,
    /// Token lifetime in seconds.
    #[serde(default = "Jwt::expire_default")]
    pub expire: i64,
}

impl Default for Jwt {
    fn default() -> Self {
        Jwt {
            issuer: Jwt::issuer_default(),
            secret: Jwt::secret_default(),
            expire: Jwt::expire_default(),
        }
    }
}

impl Jwt {
    fn issuer_default() -> String {
        "firmsite".into()
    }

    fn secret_default() -> String {
        // Must be overridden in production via FS__WEB__JWT__SECRET.
        "firmsite-dev-secret".into()
    }

    fn expire_default() -> i64 {
        8 * 3600
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CorsMode {
    #[default]
    AllowAll,
    Whitelist,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Cors {
    #[serde(default)]
    pub mode: CorsMode,
    #[serde(default)]
    pub whitelist: CorsWhitelist,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct CorsWhitelist {
    #[serde(default)]
    pub origins: Vec<String>,
    #[serde(default)]
    pub methods: Vec<String>,
    #[serde(default)]
    pub headers: Vec<String>,
    #[serde(default)]
    pub expose_headers: Vec<String>,
    #[serde(default)]
    pub credentials: bool,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Db {
    #[serde(default)]
    pub sqlite: Sqlite,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Sqlite {
    #[serde(default = "Sqlite::path_default")]
    pub path: String,
    /// Create the database file when missing (SQLite `mode=rwc`).
    #[serde(default = "Sqlite::auto_create_default")]
    pub auto_create: bool,
    /// Connect timeout in milliseconds.
    #[serde(default = "Sqlite::timeout_default")]
    pub timeout: u64,
    /// Idle timeout in milliseconds.
    #[serde(default = "Sqlite::idle_timeout_default")]
    pub idle_timeout: u64,
    /// Max connection lifetime in milliseconds.
    #[serde(default = "Sqlite::max_lifetime_default")]
    pub max_lifetime: u64,
    #[serde(default = "Sqlite::max_connections_default")]
    pub max_connections: u32,
}

impl Default for Sqlite {
    fn default() -> Self {
        Sqlite {
            path: Sqlite::path_default(),
            auto_create: Sqlite::auto_create_default(),
            timeout: Sqlite::timeout_default(),
            idle_timeout: Sqlite::idle_timeout_default(),
            max_lifetime: Sqlite::max_lifetime_default(),
            max_connections: Sqlite::max_connections_default(),
        }
    }
}

impl Sqlite {
    fn path_default() -> String {
        format!("{DATA_DIR}/firmsite.db")
    }

    fn auto_create_default() -> bool {
        true
    }

    fn timeout_default() -> u64 {
        5000
    }

    fn idle_timeout_default() -> u64 {
        60_000
    }

    fn max_lifetime_default() -> u64 {
        600_000
    }

    fn max_connections_default() -> u32 {
        16
    }

    pub fn db_path(&self) -> &str {
        &self.path
    }

    pub fn to_url(&self) -> String {
        if self.auto_create {
            format!("sqlite://{}?mode=rwc", self.path)
        } else {
            format!("sqlite://{}", self.path)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CacheType {
    #[default]
    Moka,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Cache {
    #[serde(default)]
    pub r#type: CacheType,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObjectStoreConfig {
    /// Directory stored objects live under, resolved from the runtime root.
    #[serde(default = "ObjectStoreConfig::root_dir_default")]
    pub root_dir: String,
    /// Base URL under which stored objects are publicly reachable. Relative
    /// values are served by this process; absolute ones point at a CDN.
    #[serde(default = "ObjectStoreConfig::public_base_url_default")]
    pub public_base_url: String,
}

impl Default for ObjectStoreConfig {
    fn default() -> Self {
        ObjectStoreConfig {
            root_dir: ObjectStoreConfig::root_dir_default(),
            public_base_url: ObjectStoreConfig::public_base_url_default(),
        }
    }
}

impl ObjectStoreConfig {
    fn root_dir_default() -> String {
        format!("{DATA_DIR}/uploads")
    }

    fn public_base_url_default() -> String {
        crate::constants::PUBLIC_UPLOAD_PREFIX.into()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlideshowConfig {
    /// Rotation interval of the full-bleed home slideshow, milliseconds.
    #[serde(default = "SlideshowConfig::interval_ms_default")]
    pub interval_ms: u64,
    /// Rotation interval of the compact page-header variant, milliseconds.
    #[serde(default = "SlideshowConfig::compact_interval_ms_default")]
    pub compact_interval_ms: u64,
    /// Static background served when no active image exists or lookup fails.
    #[serde(default = "SlideshowConfig::fallback_image_url_default")]
    pub fallback_image_url: String,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        SlideshowConfig {
            interval_ms: SlideshowConfig::interval_ms_default(),
            compact_interval_ms: SlideshowConfig::compact_interval_ms_default(),
            fallback_image_url: SlideshowConfig::fallback_image_url_default(),
        }
    }
}

impl SlideshowConfig {
    fn interval_ms_default() -> u64 {
        10_000
    }

    fn compact_interval_ms_default() -> u64 {
        5_000
    }

    fn fallback_image_url_default() -> String {
        "/static/background-fallback.jpg".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_section() {
        let inner = Inner::default();
        assert_eq!(inner.web.port, 8090);
        assert_eq!(inner.web.router_prefix, "/api");
        assert_eq!(inner.db.sqlite.path, "./data/firmsite.db");
        assert!(inner.db.sqlite.to_url().ends_with("?mode=rwc"));
        assert_eq!(inner.slideshow.interval_ms, 10_000);
        assert_eq!(inner.slideshow.compact_interval_ms, 5_000);
        assert_eq!(inner.object_store.public_base_url, "/uploads");
    }

    #[test]
    fn worker_count_falls_back_to_parallelism() {
        let mut web = Web::default();
        web.workers = 4;
        assert_eq!(web.get_worker_count(), 4);
        web.workers = 0;
        assert!(web.get_worker_count() >= 1);
    }
}
