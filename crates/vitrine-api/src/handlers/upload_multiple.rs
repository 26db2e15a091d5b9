use std::sync::Arc;

use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use vitrine_core::models::{Category, ItemResponse};
use vitrine_core::ValidationError;

use crate::error::{ErrorResponse, HttpAppError};
use crate::services::upload::UploadService;
use crate::state::AppState;
use crate::utils::upload::extract_upload_form;

#[derive(Debug, Deserialize, IntoParams)]
pub struct CategoryQuery {
    /// Target category: products, articles, or qna.
    #[serde(rename = "type")]
    pub category: String,
}

/// Multi-image upload handler
///
/// Accepts up to the configured maximum of files under the multipart field
/// `images`; the target category comes from the `type` query parameter. An
/// unrecognized category is rejected before the body is read. Image URL
/// order in the stored document matches upload order.
#[utoipa::path(
    post,
    path = "/upload-multiple",
    tag = "items",
    params(CategoryQuery),
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Item created", body = ItemResponse),
        (status = 400, description = "No files, too many files, or unsupported category", body = ErrorResponse),
        (status = 500, description = "Storage or database failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state, multipart),
    fields(operation = "upload_multiple", category = %query.category)
)]
pub async fn upload_multiple(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CategoryQuery>,
    multipart: Multipart,
) -> Result<Json<ItemResponse>, HttpAppError> {
    let category: Category = query.category.parse()?;

    let (files, fields) =
        extract_upload_form(multipart, "images", state.uploads.max_files_per_upload).await?;

    if files.is_empty() {
        return Err(ValidationError::MissingFile("images".to_string()).into());
    }

    let service = UploadService::new(&state);
    let item = service.upload_item(category, files, fields).await?;

    Ok(Json(item))
}
