//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::handlers::item_delete::{DeleteItemPayload, DeleteItemRequest};
use vitrine_core::models::{Category, DeleteItemResponse, ItemResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::upload_single::upload_single,
        handlers::upload_multiple::upload_multiple,
        handlers::item_delete::delete_item,
        handlers::products_list::get_products,
        handlers::health::health,
    ),
    components(schemas(
        Category,
        ItemResponse,
        DeleteItemResponse,
        DeleteItemRequest,
        DeleteItemPayload,
        ErrorResponse,
    )),
    tags(
        (name = "items", description = "Item upload, deletion, and listing"),
        (name = "health", description = "Service probes")
    )
)]
pub struct ApiDoc;
