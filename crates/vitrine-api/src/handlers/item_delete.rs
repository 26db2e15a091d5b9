use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use vitrine_core::models::{Category, DeleteItemResponse};
use vitrine_core::{AppError, ValidationError};
use vitrine_storage::naming;

use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct DeleteItemRequest {
    pub data: DeleteItemPayload,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DeleteItemPayload {
    /// Category the item belongs to: products, articles, or qna.
    #[serde(rename = "type")]
    pub category: String,
    /// Record id of the item to delete.
    #[serde(rename = "productId")]
    pub product_id: Uuid,
    /// Stored filenames or full image URLs; URLs are reduced to their basename.
    #[serde(default)]
    pub images: Vec<String>,
}

/// Item deletion handler
///
/// Deletes the item's files first, then its database record. The file loop
/// aborts on the first failure - including a missing file - and files already
/// deleted in this request are not restored. The record is only touched after
/// every file deletion succeeded; a zero-row delete is a 404.
#[utoipa::path(
    post,
    path = "/delete-item",
    tag = "items",
    request_body = DeleteItemRequest,
    responses(
        (status = 200, description = "Item deleted", body = DeleteItemResponse),
        (status = 400, description = "Empty image list or unsupported category", body = ErrorResponse),
        (status = 404, description = "Record not found", body = ErrorResponse),
        (status = 500, description = "File or database deletion failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state, request),
    fields(operation = "delete_item")
)]
pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<DeleteItemRequest>,
) -> Result<Json<DeleteItemResponse>, HttpAppError> {
    let payload = request.data;
    let category: Category = payload.category.parse()?;

    if payload.images.is_empty() {
        return Err(ValidationError::EmptyImageList.into());
    }

    for image in &payload.images {
        let filename = naming::basename(image);

        // A missing file is a hard failure for the whole operation, not a 404:
        // the 404 status is reserved for the record lookup below.
        if let Err(e) = state.uploads.storage.delete(category, filename).await {
            return Err(HttpAppError(AppError::Storage(format!(
                "Failed to delete image '{}': {}",
                image, e
            ))));
        }
    }

    let deleted_count = state
        .db
        .items
        .delete_by_id(category, payload.product_id)
        .await?;

    if deleted_count == 0 {
        return Err(AppError::NotFound("Item not found".to_string()).into());
    }

    Ok(Json(DeleteItemResponse { deleted_count }))
}
