//! In-memory document store
//!
//! Same contract as the `SQLite` store, held in process memory. Documents in a
//! collection are kept ordered by identifier, which makes `find` results
//! deterministic for tests.

use async_trait::async_trait;
use serde_json::{Map, Value};
use setlist_core::{
    error::{CatalogError, Result},
    storage::{Collection, DocumentStore, Filter},
    types::DocumentId,
};
use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

type Collections = HashMap<Collection, BTreeMap<DocumentId, Value>>;

/// `DocumentStore` kept in process memory
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<Collections>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents in a collection
    pub fn len(&self, collection: Collection) -> usize {
        self.read()
            .map(|c| c.get(&collection).map_or(0, BTreeMap::len))
            .unwrap_or(0)
    }

    pub fn is_empty(&self, collection: Collection) -> bool {
        self.len(collection) == 0
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Collections>> {
        self.collections
            .read()
            .map_err(|_| CatalogError::internal("memory store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Collections>> {
        self.collections
            .write()
            .map_err(|_| CatalogError::internal("memory store lock poisoned"))
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn insert_one(
        &self,
        collection: Collection,
        id: DocumentId,
        document: Value,
    ) -> Result<()> {
        if !document.is_object() {
            return Err(CatalogError::internal("documents must be JSON objects"));
        }

        let mut collections = self.write()?;
        let documents = collections.entry(collection).or_default();
        if documents.contains_key(&id) {
            return Err(CatalogError::internal(format!(
                "duplicate key {id} in {collection}"
            )));
        }
        documents.insert(id, document);
        Ok(())
    }

    async fn find_by_id(&self, collection: Collection, id: DocumentId) -> Result<Option<Value>> {
        Ok(self
            .read()?
            .get(&collection)
            .and_then(|documents| documents.get(&id))
            .cloned())
    }

    async fn find(&self, collection: Collection, filter: &Filter) -> Result<Vec<Value>> {
        Ok(self
            .read()?
            .get(&collection)
            .map(|documents| {
                documents
                    .values()
                    .filter(|doc| filter.matches(doc))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn update_by_id(
        &self,
        collection: Collection,
        id: DocumentId,
        fields: Map<String, Value>,
    ) -> Result<bool> {
        let mut collections = self.write()?;
        let Some(Value::Object(document)) = collections
            .get_mut(&collection)
            .and_then(|documents| documents.get_mut(&id))
        else {
            return Ok(false);
        };

        for (key, value) in fields {
            document.insert(key, value);
        }
        Ok(true)
    }

    async fn delete_by_id(&self, collection: Collection, id: DocumentId) -> Result<bool> {
        Ok(self
            .write()?
            .get_mut(&collection)
            .and_then(|documents| documents.remove(&id))
            .is_some())
    }

    async fn find_by_ids(&self, collection: Collection, ids: &[DocumentId]) -> Result<Vec<Value>> {
        let collections = self.read()?;
        let Some(documents) = collections.get(&collection) else {
            return Ok(Vec::new());
        };

        let mut seen = std::collections::HashSet::new();
        Ok(ids
            .iter()
            .filter(|id| seen.insert(**id))
            .filter_map(|id| documents.get(id).cloned())
            .collect())
    }
}
