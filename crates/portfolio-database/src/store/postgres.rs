//! PostgreSQL JSONB document store.

use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::PgPool;

use portfolio_core::error::{AppError, ErrorKind};
use portfolio_core::result::AppResult;
use portfolio_core::traits::{DocumentStore, SortBy, UpdateOutcome};

use super::filter::{apply_update, upsert_seed};

/// Stores every collection in the `documents` table, matching with `@>`.
#[derive(Debug, Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    /// Create a store over an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn db_error(message: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| AppError::with_source(ErrorKind::Database, message, e)
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn find_one(&self, collection: &str, filter: &Value) -> AppResult<Option<Value>> {
        sqlx::query_scalar::<_, Value>(
            "SELECT body FROM documents WHERE collection = $1 AND body @> $2 ORDER BY id LIMIT 1",
        )
        .bind(collection)
        .bind(filter)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to find document"))
    }

    async fn find_many(
        &self,
        collection: &str,
        filter: &Value,
        sort: Option<&SortBy>,
    ) -> AppResult<Vec<Value>> {
        let rows = match sort {
            // jsonb ordering places NULL (missing) after every value in ASC
            Some(sort) => {
                let direction = if sort.ascending { "ASC" } else { "DESC" };
                let sql = format!(
                    "SELECT body FROM documents WHERE collection = $1 AND body @> $2 \
                     ORDER BY body -> $3 {direction} NULLS LAST, id"
                );
                sqlx::query_scalar::<_, Value>(&sql)
                    .bind(collection)
                    .bind(filter)
                    .bind(&sort.field)
                    .fetch_all(&self.pool)
                    .await
            }
            None => {
                sqlx::query_scalar::<_, Value>(
                    "SELECT body FROM documents WHERE collection = $1 AND body @> $2 ORDER BY id",
                )
                .bind(collection)
                .bind(filter)
                .fetch_all(&self.pool)
                .await
            }
        };
        rows.map_err(db_error("Failed to list documents"))
    }

    async fn insert_one(&self, collection: &str, document: Value) -> AppResult<()> {
        if !document.is_object() {
            return Err(AppError::validation("Documents must be JSON objects"));
        }
        sqlx::query("INSERT INTO documents (collection, body) VALUES ($1, $2)")
            .bind(collection)
            .bind(&document)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to insert document"))?;
        Ok(())
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: &Value,
        set: Map<String, Value>,
        unset: &[String],
        upsert: bool,
    ) -> AppResult<UpdateOutcome> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to begin transaction"))?;

        let row: Option<(i64, Value)> = sqlx::query_as(
            "SELECT id, body FROM documents WHERE collection = $1 AND body @> $2 \
             ORDER BY id LIMIT 1 FOR UPDATE",
        )
        .bind(collection)
        .bind(filter)
        .fetch_optional(&mut *tx)
        .await
        .map_err(db_error("Failed to lock document"))?;

        let outcome = match row {
            Some((id, Value::Object(mut body))) => {
                let modified = apply_update(&mut body, &set, unset);
                if modified {
                    sqlx::query("UPDATE documents SET body = $1 WHERE id = $2")
                        .bind(Value::Object(body))
                        .bind(id)
                        .execute(&mut *tx)
                        .await
                        .map_err(db_error("Failed to update document"))?;
                }
                UpdateOutcome {
                    matched: 1,
                    modified: u64::from(modified),
                    upserted: false,
                }
            }
            Some(_) => {
                return Err(AppError::database(format!(
                    "Document in '{collection}' is not a JSON object"
                )));
            }
            None if upsert => {
                sqlx::query("INSERT INTO documents (collection, body) VALUES ($1, $2)")
                    .bind(collection)
                    .bind(Value::Object(upsert_seed(filter, &set)))
                    .execute(&mut *tx)
                    .await
                    .map_err(db_error("Failed to upsert document"))?;
                UpdateOutcome {
                    matched: 0,
                    modified: 0,
                    upserted: true,
                }
            }
            None => UpdateOutcome::default(),
        };

        tx.commit()
            .await
            .map_err(db_error("Failed to commit transaction"))?;
        Ok(outcome)
    }

    async fn replace_one(
        &self,
        collection: &str,
        filter: &Value,
        document: Value,
    ) -> AppResult<bool> {
        if !document.is_object() {
            return Err(AppError::validation("Documents must be JSON objects"));
        }
        let result = sqlx::query(
            "UPDATE documents SET body = $3 WHERE id = (\
                 SELECT id FROM documents WHERE collection = $1 AND body @> $2 \
                 ORDER BY id LIMIT 1 FOR UPDATE)",
        )
        .bind(collection)
        .bind(filter)
        .bind(&document)
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to replace document"))?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_one(&self, collection: &str, filter: &Value) -> AppResult<u64> {
        let result = sqlx::query(
            "DELETE FROM documents WHERE id = (\
                 SELECT id FROM documents WHERE collection = $1 AND body @> $2 \
                 ORDER BY id LIMIT 1)",
        )
        .bind(collection)
        .bind(filter)
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to delete document"))?;
        Ok(result.rows_affected())
    }

    async fn delete_many(&self, collection: &str, filter: &Value) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = $1 AND body @> $2")
            .bind(collection)
            .bind(filter)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete documents"))?;
        Ok(result.rows_affected())
    }

    async fn count(&self, collection: &str, filter: &Value) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM documents WHERE collection = $1 AND body @> $2",
        )
        .bind(collection)
        .bind(filter)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to count documents"))?;
        Ok(count.max(0) as u64)
    }

    async fn next_sequence(&self, name: &str) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "INSERT INTO counters (name, value) VALUES ($1, 1) \
             ON CONFLICT (name) DO UPDATE SET value = counters.value + 1 \
             RETURNING value",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to advance sequence"))
    }
}
