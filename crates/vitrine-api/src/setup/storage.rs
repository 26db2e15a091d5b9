//! Storage setup

use std::sync::Arc;

use anyhow::Result;
use vitrine_core::models::Category;
use vitrine_core::Config;
use vitrine_storage::{LocalStorage, Storage};

/// Create the local storage backend and pre-create every category directory.
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    let storage: Arc<dyn Storage> = Arc::new(LocalStorage::new(&config.upload_dir).await?);

    for category in Category::ALL {
        storage.ensure_category_dir(category).await?;
    }

    tracing::info!(root = %config.upload_dir, "Upload storage ready");

    Ok(storage)
}
