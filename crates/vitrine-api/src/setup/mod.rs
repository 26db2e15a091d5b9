//! Application setup and initialization
//!
//! All initialization logic lives here instead of main.rs so the binary and
//! the integration tests build the application the same way.

pub mod database;
pub mod routes;
pub mod server;
pub mod storage;
pub mod validation;

use std::sync::Arc;

use anyhow::{Context, Result};
use vitrine_core::Config;
use vitrine_db::ItemRepository;

use crate::state::{AppState, DbState, UploadConfig};

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    validation::validate_config(&config).context("Configuration validation failed")?;

    tracing::info!("Configuration loaded and validated successfully");

    // Setup database
    let pool = database::setup_database(&config).await?;

    // Setup storage
    let storage = storage::setup_storage(&config).await?;

    let state = Arc::new(AppState {
        db: DbState {
            pool: pool.clone(),
            items: ItemRepository::new(pool),
        },
        uploads: UploadConfig {
            storage,
            public_base_url: config.public_base_url.clone(),
            max_file_size: config.max_file_size_bytes,
            max_files_per_upload: config.max_files_per_upload,
        },
        config: config.clone(),
    });

    // Setup routes
    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
