//! Item documents.
//!
//! An item is a loosely-typed document: whatever fields the client supplied
//! at upload time, plus the system-added `images` URL list. Documents are
//! stored as a single JSONB column and never updated in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A stored item row: database-generated id, the document itself, and the
/// insertion timestamp used for stable listing order.
#[derive(Debug, Clone, FromRow)]
pub struct ItemRecord {
    pub id: Uuid,
    pub doc: Value,
    pub created_at: DateTime<Utc>,
}

/// API shape of an item: the document's fields flattened beside the id.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ItemResponse {
    pub id: Uuid,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub doc: serde_json::Map<String, Value>,
}

impl From<ItemRecord> for ItemResponse {
    fn from(record: ItemRecord) -> Self {
        let doc = match record.doc {
            Value::Object(map) => map,
            other => {
                let mut map = serde_json::Map::new();
                map.insert("document".to_string(), other);
                map
            }
        };
        ItemResponse { id: record.id, doc }
    }
}

/// Result of a combined file-and-record deletion.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteItemResponse {
    pub deleted_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_flattens_document_fields() {
        let record = ItemRecord {
            id: Uuid::new_v4(),
            doc: serde_json::json!({
                "name": "Walnut desk",
                "images": ["http://localhost:3000/uploads/products/1-a.png"]
            }),
            created_at: Utc::now(),
        };
        let response = ItemResponse::from(record.clone());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["id"], serde_json::json!(record.id));
        assert_eq!(json["name"], "Walnut desk");
        assert_eq!(json["images"][0], "http://localhost:3000/uploads/products/1-a.png");
    }
}
