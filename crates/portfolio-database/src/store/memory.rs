//! Process-local document store.

use std::collections::HashMap;

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::{Map, Value};
use tokio::sync::RwLock;

use portfolio_core::error::AppError;
use portfolio_core::result::AppResult;
use portfolio_core::traits::{DocumentStore, SortBy, UpdateOutcome};

use super::filter::{apply_update, json_contains, sort_documents, upsert_seed};

/// Keeps collections in memory. Used for development and tests.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    /// Documents per collection, in insertion order.
    collections: RwLock<HashMap<String, Vec<Value>>>,
    /// Named sequences.
    counters: DashMap<String, i64>,
}

impl MemoryDocumentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn require_object(document: &Value) -> AppResult<()> {
    if document.is_object() {
        Ok(())
    } else {
        Err(AppError::validation("Documents must be JSON objects"))
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn find_one(&self, collection: &str, filter: &Value) -> AppResult<Option<Value>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| json_contains(d, filter)))
            .cloned())
    }

    async fn find_many(
        &self,
        collection: &str,
        filter: &Value,
        sort: Option<&SortBy>,
    ) -> AppResult<Vec<Value>> {
        let mut found: Vec<Value> = {
            let collections = self.collections.read().await;
            collections
                .get(collection)
                .map(|docs| {
                    docs.iter()
                        .filter(|d| json_contains(d, filter))
                        .cloned()
                        .collect()
                })
                .unwrap_or_default()
        };
        if let Some(sort) = sort {
            sort_documents(&mut found, sort);
        }
        Ok(found)
    }

    async fn insert_one(&self, collection: &str, document: Value) -> AppResult<()> {
        require_object(&document)?;
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(document);
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
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection.to_string()).or_default();

        if let Some(Value::Object(doc)) = docs.iter_mut().find(|d| json_contains(d, filter)) {
            let modified = apply_update(doc, &set, unset);
            return Ok(UpdateOutcome {
                matched: 1,
                modified: u64::from(modified),
                upserted: false,
            });
        }

        if upsert {
            docs.push(Value::Object(upsert_seed(filter, &set)));
            return Ok(UpdateOutcome {
                matched: 0,
                modified: 0,
                upserted: true,
            });
        }

        Ok(UpdateOutcome::default())
    }

    async fn replace_one(
        &self,
        collection: &str,
        filter: &Value,
        document: Value,
    ) -> AppResult<bool> {
        require_object(&document)?;
        let mut collections = self.collections.write().await;
        let slot = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|d| json_contains(d, filter)));
        match slot {
            Some(slot) => {
                *slot = document;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_one(&self, collection: &str, filter: &Value) -> AppResult<u64> {
        let mut collections = self.collections.write().await;
        let Some(docs) = collections.get_mut(collection) else {
            return Ok(0);
        };
        match docs.iter().position(|d| json_contains(d, filter)) {
            Some(index) => {
                docs.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_many(&self, collection: &str, filter: &Value) -> AppResult<u64> {
        let mut collections = self.collections.write().await;
        let Some(docs) = collections.get_mut(collection) else {
            return Ok(0);
        };
        let before = docs.len();
        docs.retain(|d| !json_contains(d, filter));
        Ok((before - docs.len()) as u64)
    }

    async fn count(&self, collection: &str, filter: &Value) -> AppResult<u64> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|docs| docs.iter().filter(|d| json_contains(d, filter)).count() as u64)
            .unwrap_or(0))
    }

    async fn next_sequence(&self, name: &str) -> AppResult<i64> {
        let mut entry = self.counters.entry(name.to_string()).or_insert(0);
        *entry += 1;
        Ok(*entry)
    }
}
