//! Item upload service
//!
//! Shared pipeline behind both upload handlers: validate → store → build URLs
//! → merge into document → persist. If the database insert fails after files
//! were written, the files are deleted again best-effort so failed uploads do
//! not leave orphans behind.

use std::sync::Arc;

use serde_json::{Map, Value};
use vitrine_core::models::{Category, ItemResponse};
use vitrine_core::validation::{validate_file_size, validate_image_content_type};
use vitrine_core::AppError;
use vitrine_storage::naming;

use crate::state::AppState;
use crate::utils::upload::UploadedFile;

/// Item upload service
pub struct UploadService {
    state: Arc<AppState>,
}

impl UploadService {
    pub fn new(state: &Arc<AppState>) -> Self {
        Self {
            state: state.clone(),
        }
    }

    /// Run the full upload pipeline for one request.
    ///
    /// `files` become stored files and `images` URLs (in order); `fields` are
    /// the client-supplied document fields the URLs are merged into. Returns
    /// the created item as stored.
    pub async fn upload_item(
        &self,
        category: Category,
        files: Vec<UploadedFile>,
        fields: Map<String, Value>,
    ) -> Result<ItemResponse, AppError> {
        // Validate every file before writing any of them.
        for file in &files {
            validate_image_content_type(&file.content_type)?;
            validate_file_size(file.data.len(), self.state.uploads.max_file_size)?;
        }

        let saved = self.store_files(category, files).await?;

        let urls: Vec<Value> = saved
            .iter()
            .map(|filename| {
                Value::String(naming::public_url(
                    &self.state.uploads.public_base_url,
                    category,
                    filename,
                ))
            })
            .collect();

        let mut doc = fields;
        doc.insert("images".to_string(), Value::Array(urls));

        let document = Value::Object(doc.clone());
        match self.state.db.items.insert(category, &document).await {
            Ok(id) => Ok(ItemResponse { id, doc }),
            Err(e) => {
                self.cleanup_files(category, saved);
                Err(e)
            }
        }
    }

    /// Persist each file under the category directory, stopping at the first
    /// storage failure. Files written before the failure are cleaned up.
    async fn store_files(
        &self,
        category: Category,
        files: Vec<UploadedFile>,
    ) -> Result<Vec<String>, AppError> {
        let mut saved: Vec<String> = Vec::with_capacity(files.len());

        for file in files {
            let filename = naming::generated_filename(&file.original_filename);

            if let Err(e) = self
                .state
                .uploads
                .storage
                .save(category, &filename, file.data)
                .await
            {
                self.cleanup_files(category, saved);
                return Err(AppError::Storage(e.to_string()));
            }

            saved.push(filename);
        }

        Ok(saved)
    }

    /// Best-effort removal of files written earlier in a failed request.
    fn cleanup_files(&self, category: Category, filenames: Vec<String>) {
        if filenames.is_empty() {
            return;
        }

        let storage = self.state.uploads.storage.clone();
        tokio::spawn(async move {
            for filename in filenames {
                if let Err(cleanup_err) = storage.delete(category, &filename).await {
                    tracing::warn!(
                        error = %cleanup_err,
                        category = %category,
                        filename = %filename,
                        "Failed to cleanup stored file after upload error"
                    );
                }
            }
        });
    }
}
