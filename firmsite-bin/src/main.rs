use clap::Parser;
use firmsite_common::FSAppContext;
use firmsite_error::{FSError, FSResult};
use firmsite_models::constants::DEFAULT_CONFIG_FILE_NAME;
use firmsite_storage::{FSCacheProvider, FSDbManager, FSLocalObjectStore};
use firmsite_web::FSWebServer;
use std::{env::current_dir, path::PathBuf};

/// Firmsite - content-management backend for a professional services firm
/// website: admin collection editor, media slideshow, submission exports
/// and the public content feeds, served from a single process.
#[derive(Parser)]
#[command(name = "firmsite")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Firmsite", long_about = None)]
struct Cli {
    /// Sets a custom config file with full path
    ///
    /// If not specified, the server will look for 'firmsite.toml'
    /// in the current working directory.
    #[arg(short, long, env = "FS_CONFIG")]
    config: Option<PathBuf>,
}

/// Initializes the application context, loads configuration, and runs the
/// server until a shutdown signal arrives.
#[tokio::main(flavor = "multi_thread")]
async fn main() -> FSResult<()> {
    let cli = Cli::parse();

    // Determine the configuration file path
    // If not provided via CLI or environment variable, use default path
    let config_path = match cli.config {
        Some(p) => p,
        None => {
            let dir = current_dir()
                .map_err(|e| FSError::from(format!("Failed to get current directory: {e}")))?;
            dir.join(DEFAULT_CONFIG_FILE_NAME)
        }
    };

    let config_path_str = config_path.to_string_lossy().to_string();

    // Initialize the application context with all required components
    FSAppContext::init::<FSDbManager, FSCacheProvider, FSLocalObjectStore, FSWebServer>(
        config_path_str,
    )
    .await?;

    // Run the application until shutdown signal is received
    let ctx = FSAppContext::instance().await;
    ctx.run().await
}
