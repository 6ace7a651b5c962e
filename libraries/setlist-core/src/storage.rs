//! Document store capability
//!
//! The catalog runs on a schemaless document store with no joins, no
//! multi-document transactions and no foreign keys. This trait is the whole
//! surface the catalog needs from it.

use crate::error::Result;
use crate::types::DocumentId;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::fmt;

/// Document collections used by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Tracks,
    Playlists,
}

impl Collection {
    /// Collection name in the store
    pub fn as_str(self) -> &'static str {
        match self {
            Collection::Tracks => "tracks",
            Collection::Playlists => "playlists",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field filter for `DocumentStore::find`
///
/// Each condition is a case-insensitive substring match against a top-level
/// string field. Conditions are ANDed; an empty filter matches every document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    conditions: Vec<(String, String)>,
}

impl Filter {
    /// Empty filter (matches everything)
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `field` to contain `needle`, ignoring case
    ///
    /// Blank needles are dropped so that unset search fields match everything.
    #[must_use]
    pub fn contains(mut self, field: impl Into<String>, needle: impl Into<String>) -> Self {
        let needle = needle.into();
        if !needle.trim().is_empty() {
            self.conditions.push((field.into(), needle));
        }
        self
    }

    /// Like `contains`, for optional search fields
    #[must_use]
    pub fn contains_opt(self, field: impl Into<String>, needle: Option<&str>) -> Self {
        match needle {
            Some(needle) => self.contains(field, needle),
            None => self,
        }
    }

    /// `(field, needle)` pairs
    pub fn conditions(&self) -> &[(String, String)] {
        &self.conditions
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Evaluate the filter against a JSON document
    ///
    /// Missing or non-string fields never match.
    pub fn matches(&self, document: &Value) -> bool {
        self.conditions.iter().all(|(field, needle)| {
            document
                .get(field)
                .and_then(Value::as_str)
                .is_some_and(|value| value.to_lowercase().contains(&needle.to_lowercase()))
        })
    }
}

/// Document store operations
///
/// Documents are JSON objects. Implementations must be safe to share across
/// concurrent requests; they serialize conflicting writes per document.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a new document under `id`
    async fn insert_one(&self, collection: Collection, id: DocumentId, document: Value)
        -> Result<()>;

    /// Fetch a document by identifier
    async fn find_by_id(&self, collection: Collection, id: DocumentId) -> Result<Option<Value>>;

    /// Fetch every document matching `filter`
    async fn find(&self, collection: Collection, filter: &Filter) -> Result<Vec<Value>>;

    /// Overwrite the given top-level fields of a document
    ///
    /// Returns `false` when no document has that identifier.
    async fn update_by_id(
        &self,
        collection: Collection,
        id: DocumentId,
        fields: Map<String, Value>,
    ) -> Result<bool>;

    /// Delete a document
    ///
    /// Returns `false` when no document has that identifier.
    async fn delete_by_id(&self, collection: Collection, id: DocumentId) -> Result<bool>;

    /// Fetch every document whose identifier is in `ids`
    ///
    /// Set semantics: duplicate identifiers yield one document, missing ones
    /// yield nothing, and result order is unspecified.
    async fn find_by_ids(&self, collection: Collection, ids: &[DocumentId]) -> Result<Vec<Value>>;
}
