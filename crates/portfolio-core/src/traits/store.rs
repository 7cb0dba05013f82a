//! Document store trait for resource persistence.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::result::AppResult;

/// Ordering applied to `find_many` results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortBy {
    /// Top-level field to sort on.
    pub field: String,
    /// Ascending when `true`.
    pub ascending: bool,
}

impl SortBy {
    /// Ascending order on `field`.
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ascending: true,
        }
    }
}

/// Result of an `update_one` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateOutcome {
    /// Number of documents that matched the filter (0 or 1).
    pub matched: u64,
    /// Number of documents that were changed.
    pub modified: u64,
    /// Whether a new document was inserted.
    pub upserted: bool,
}

/// Collection-oriented JSON document storage.
///
/// Documents are JSON objects grouped into named collections. A filter is
/// itself a JSON object and matches every document that *contains* it:
/// each filter key must be present with an equal value, recursively for
/// nested objects. `{}` matches everything. Each operation is atomic on a
/// single document; there are no multi-document transactions.
#[async_trait]
pub trait DocumentStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find the first document matching `filter`.
    async fn find_one(&self, collection: &str, filter: &Value) -> AppResult<Option<Value>>;

    /// Find all documents matching `filter`, in insertion order unless sorted.
    async fn find_many(
        &self,
        collection: &str,
        filter: &Value,
        sort: Option<&SortBy>,
    ) -> AppResult<Vec<Value>>;

    /// Insert a new document.
    async fn insert_one(&self, collection: &str, document: Value) -> AppResult<()>;

    /// Set and unset top-level fields of the first matching document.
    ///
    /// With `upsert`, a missing document is created from the filter's
    /// fields merged with `set`.
    async fn update_one(
        &self,
        collection: &str,
        filter: &Value,
        set: Map<String, Value>,
        unset: &[String],
        upsert: bool,
    ) -> AppResult<UpdateOutcome>;

    /// Replace the first matching document. Returns `true` if one matched.
    async fn replace_one(&self, collection: &str, filter: &Value, document: Value)
    -> AppResult<bool>;

    /// Delete the first matching document. Returns the number deleted.
    async fn delete_one(&self, collection: &str, filter: &Value) -> AppResult<u64>;

    /// Delete every matching document. Returns the number deleted.
    async fn delete_many(&self, collection: &str, filter: &Value) -> AppResult<u64>;

    /// Count matching documents.
    async fn count(&self, collection: &str, filter: &Value) -> AppResult<u64>;

    /// Atomically increment the named counter and return the new value.
    ///
    /// The first call for a name returns `1`.
    async fn next_sequence(&self, name: &str) -> AppResult<i64>;
}
