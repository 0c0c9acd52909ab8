use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use sqlx::{
    postgres::{PgPool, PgPoolOptions},
    types::Json,
};
use tokio::sync::OnceCell;
use tracing::info;
use uuid::Uuid;

use crate::{
    db::document_store::{Collection, Document, DocumentStore, Query},
    errors::AppError,
};

const MAX_CONNECTIONS: u32 = 20;
const ACQUIRE_TIMEOUT_SECS: u64 = 5;

/// Document store over a single JSONB table. Collections are rows tagged
/// with their name; uniqueness rules live in the migration as partial
/// unique indexes.
pub struct PgDocumentStore {
    database_url: String,
    pool: OnceCell<PgPool>,
}

impl PgDocumentStore {
    pub fn new(database_url: impl Into<String>) -> Self {
        PgDocumentStore {
            database_url: database_url.into(),
            pool: OnceCell::new(),
        }
    }

    /// The shared pool, connecting and migrating on first use. A failed
    /// attempt leaves the cell empty.
    async fn pool(&self) -> Result<&PgPool, AppError> {
        self.pool
            .get_or_try_init(|| async {
                let pool = PgPoolOptions::new()
                    .max_connections(MAX_CONNECTIONS)
                    .acquire_timeout(Duration::from_secs(ACQUIRE_TIMEOUT_SECS))
                    .connect(&self.database_url)
                    .await?;

                sqlx::migrate!("./migrations")
                    .run(&pool)
                    .await
                    .map_err(|e| AppError::InternalError(format!("Migration error: {}", e)))?;

                info!("Document store connection established.");
                Ok::<_, AppError>(pool)
            })
            .await
    }
}

fn document_id(doc: &Document) -> Uuid {
    doc.get("id")
        .and_then(Value::as_str)
        .and_then(|s| Uuid::parse_str(s).ok())
        .unwrap_or_else(Uuid::new_v4)
}

fn find_sql(query: &Query) -> String {
    let order = match query.sort {
        // sort fields are compile-time names, never user input
        Some(sort) => format!(
            "(body->>'{}')::timestamptz {}, seq",
            sort.field,
            if sort.descending { "DESC" } else { "ASC" }
        ),
        None => "seq".to_string(),
    };
    format!(
        "SELECT body FROM documents WHERE collection = $1 AND body @> $2 ORDER BY {}",
        order
    )
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn connect(&self) -> Result<(), AppError> {
        self.pool().await.map(|_| ())
    }

    async fn close(&self) {
        if let Some(pool) = self.pool.get() {
            pool.close().await;
            info!("Document store connection closed.");
        }
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool().await?).await?;
        Ok(())
    }

    async fn insert_one(&self, collection: Collection, doc: Document) -> Result<(), AppError> {
        sqlx::query("INSERT INTO documents (id, collection, body) VALUES ($1, $2, $3)")
            .bind(document_id(&doc))
            .bind(collection.name())
            .bind(Json(&doc))
            .execute(self.pool().await?)
            .await?;
        Ok(())
    }

    async fn insert_many(&self, collection: Collection, docs: Vec<Document>) -> Result<u64, AppError> {
        let mut tx = self.pool().await?.begin().await?;

        for doc in &docs {
            sqlx::query("INSERT INTO documents (id, collection, body) VALUES ($1, $2, $3)")
                .bind(document_id(doc))
                .bind(collection.name())
                .bind(Json(doc))
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(docs.len() as u64)
    }

    async fn find(&self, collection: Collection, query: &Query) -> Result<Vec<Document>, AppError> {
        let rows: Vec<Json<Value>> = sqlx::query_scalar(&find_sql(query))
            .bind(collection.name())
            .bind(Json(Value::Object(query.filter.clone())))
            .fetch_all(self.pool().await?)
            .await?;

        Ok(rows.into_iter().map(|Json(body)| body).collect())
    }

    async fn count(&self, collection: Collection) -> Result<u64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM documents WHERE collection = $1")
            .bind(collection.name())
            .fetch_one(self.pool().await?)
            .await?;

        Ok(count as u64)
    }
}
