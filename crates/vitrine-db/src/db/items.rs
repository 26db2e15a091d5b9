use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use vitrine_core::models::{Category, ItemRecord};
use vitrine_core::AppError;

/// Item repository
///
/// Document-style access to the category collections: insert a whole
/// document, delete by id, list everything. Table names come exclusively from
/// the closed `Category` enum, so interpolating them into SQL is safe.
#[derive(Clone)]
pub struct ItemRepository {
    pool: PgPool,
}

impl ItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a document into the category's collection and return the
    /// database-generated id.
    #[tracing::instrument(skip(self, doc), fields(db.table = %category.table_name(), db.operation = "insert"))]
    pub async fn insert(&self, category: Category, doc: &Value) -> Result<Uuid, AppError> {
        let query = format!(
            "INSERT INTO {} (doc) VALUES ($1) RETURNING id",
            category.table_name()
        );

        let id: Uuid = sqlx::query_scalar(&query)
            .bind(doc)
            .fetch_one(&self.pool)
            .await?;

        tracing::info!(id = %id, category = %category, "Item inserted");

        Ok(id)
    }

    /// Delete a document by id. Returns the number of deleted rows (0 or 1).
    #[tracing::instrument(skip(self), fields(db.table = %category.table_name(), db.operation = "delete"))]
    pub async fn delete_by_id(&self, category: Category, id: Uuid) -> Result<u64, AppError> {
        let query = format!("DELETE FROM {} WHERE id = $1", category.table_name());

        let result = sqlx::query(&query).bind(id).execute(&self.pool).await?;

        Ok(result.rows_affected())
    }

    /// Fetch every document in the category's collection, in insertion order.
    /// Unbounded: the listing endpoint has no pagination.
    #[tracing::instrument(skip(self), fields(db.table = %category.table_name(), db.operation = "select"))]
    pub async fn find_all(&self, category: Category) -> Result<Vec<ItemRecord>, AppError> {
        let query = format!(
            "SELECT id, doc, created_at FROM {} ORDER BY created_at",
            category.table_name()
        );

        let records = sqlx::query_as::<_, ItemRecord>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(records)
    }
}
