use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use vitrine_core::models::{Category, ItemResponse};
use vitrine_core::ValidationError;

use crate::error::{ErrorResponse, HttpAppError};
use crate::services::upload::UploadService;
use crate::state::AppState;
use crate::utils::upload::extract_upload_form;

/// Single-image upload handler
///
/// Accepts exactly one file under the multipart field `image`; all other text
/// fields become document fields. The category is fixed to `products` - this
/// endpoint has no category parameter, unlike `/upload-multiple`.
#[utoipa::path(
    post,
    path = "/upload-single",
    tag = "items",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Item created", body = ItemResponse),
        (status = 400, description = "Missing file or invalid input", body = ErrorResponse),
        (status = 500, description = "Storage or database failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state, multipart),
    fields(operation = "upload_single", category = %Category::Products)
)]
pub async fn upload_single(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<ItemResponse>, HttpAppError> {
    let (files, fields) = extract_upload_form(multipart, "image", 1).await?;

    if files.is_empty() {
        return Err(ValidationError::MissingFile("image".to_string()).into());
    }

    let service = UploadService::new(&state);
    let item = service
        .upload_item(Category::Products, files, fields)
        .await?;

    Ok(Json(item))
}
