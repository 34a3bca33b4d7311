// Constants shared across the firmsite workspace.

/// The default configuration file name for the application.
/// This constant is used to specify the default configuration file
/// that the application will attempt to load at startup.
pub const DEFAULT_CONFIG_FILE_NAME: &str = "firmsite.toml";

pub const BEARER_TOKEN: &str = "Bearer";

/// Placeholder subject stored on allow-list rows created before the admin
/// ever signed in. Reconciled to the real identity id on first match.
pub const ADMIN_SUBJECT_PLACEHOLDER: &str = "pending";

pub const DATA_DIR: &str = "./data";

/// URL prefix under which stored media objects are served.
pub const PUBLIC_UPLOAD_PREFIX: &str = "/uploads";

/// Object key prefix for slideshow background images.
pub const BACKGROUND_KEY_PREFIX: &str = "bg";
