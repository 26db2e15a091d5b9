//! Application state and sub-state extractors.
//!
//! AppState is split into domain sub-states so handlers can extract only what
//! they need via Axum's `FromRef`. Every handle here is constructed once at
//! startup and shared across requests.

use std::sync::Arc;

use sqlx::PgPool;
use vitrine_core::Config;
use vitrine_db::ItemRepository;
use vitrine_storage::Storage;

/// Database pool and the item repository.
#[derive(Clone)]
pub struct DbState {
    pub pool: PgPool,
    pub items: ItemRepository,
}

/// Upload storage handle plus the limits applied to incoming files.
#[derive(Clone)]
pub struct UploadConfig {
    pub storage: Arc<dyn Storage>,
    pub public_base_url: String,
    pub max_file_size: usize,
    pub max_files_per_upload: usize,
}

/// Main application state: aggregates sub-states for dependency injection.
#[derive(Clone)]
pub struct AppState {
    pub db: DbState,
    pub uploads: UploadConfig,
    pub config: Config,
}

impl axum::extract::FromRef<Arc<AppState>> for DbState {
    fn from_ref(state: &Arc<AppState>) -> Self {
        state.db.clone()
    }
}

impl axum::extract::FromRef<Arc<AppState>> for UploadConfig {
    fn from_ref(state: &Arc<AppState>) -> Self {
        state.uploads.clone()
    }
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
