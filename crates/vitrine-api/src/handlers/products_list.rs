use std::sync::Arc;

use axum::{extract::State, Json};
use vitrine_core::models::{Category, ItemResponse};

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

/// List every product document. No filter, no pagination.
#[utoipa::path(
    get,
    path = "/get-products",
    tag = "items",
    responses(
        (status = 200, description = "All products", body = [ItemResponse]),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "get_products"))]
pub async fn get_products(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ItemResponse>>, HttpAppError> {
    let records = state.db.items.find_all(Category::Products).await?;

    Ok(Json(records.into_iter().map(ItemResponse::from).collect()))
}
