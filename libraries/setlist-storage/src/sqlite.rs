//! `SQLite`-backed document store
//!
//! One table per collection. Each row keeps the canonical identifier in `id`
//! and the JSON body in `document`. Updates and bulk lookups use `SQLite`'s JSON1
//! functions; filter matching runs on decoded documents.

use async_trait::async_trait;
use serde_json::{Map, Value};
use setlist_core::{
    error::Result,
    storage::{Collection, DocumentStore, Filter},
    types::DocumentId,
};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

/// Production `DocumentStore` over a `SQLite` pool
#[derive(Debug, Clone)]
pub struct SqliteDocumentStore {
    pool: SqlitePool,
}

impl SqliteDocumentStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn decode_row(row: &SqliteRow) -> Result<Value> {
    let body: String = row.try_get("document")?;
    Ok(serde_json::from_str(&body)?)
}

#[async_trait]
impl DocumentStore for SqliteDocumentStore {
    async fn insert_one(
        &self,
        collection: Collection,
        id: DocumentId,
        document: Value,
    ) -> Result<()> {
        sqlx::query(&format!(
            "INSERT INTO {} (id, document) VALUES (?, ?)",
            collection.as_str()
        ))
        .bind(id.to_string())
        .bind(document.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, collection: Collection, id: DocumentId) -> Result<Option<Value>> {
        let row = sqlx::query(&format!(
            "SELECT document FROM {} WHERE id = ?",
            collection.as_str()
        ))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(decode_row).transpose()
    }

    async fn find(&self, collection: Collection, filter: &Filter) -> Result<Vec<Value>> {
        // SQLite's lower() folds ASCII only, so matching happens after decoding
        let rows = sqlx::query(&format!(
            "SELECT document FROM {} ORDER BY rowid",
            collection.as_str()
        ))
        .fetch_all(&self.pool)
        .await?;

        let mut documents = Vec::new();
        for row in &rows {
            let document = decode_row(row)?;
            if filter.matches(&document) {
                documents.push(document);
            }
        }
        Ok(documents)
    }

    async fn update_by_id(
        &self,
        collection: Collection,
        id: DocumentId,
        fields: Map<String, Value>,
    ) -> Result<bool> {
        // json_patch replaces arrays wholesale, which is what a field set needs
        let result = sqlx::query(&format!(
            "UPDATE {} SET document = json_patch(document, ?) WHERE id = ?",
            collection.as_str()
        ))
        .bind(Value::Object(fields).to_string())
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_id(&self, collection: Collection, id: DocumentId) -> Result<bool> {
        let result = sqlx::query(&format!("DELETE FROM {} WHERE id = ?", collection.as_str()))
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_ids(&self, collection: Collection, ids: &[DocumentId]) -> Result<Vec<Value>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        // One bound JSON array keeps large sets under the SQL variable limit
        let ids: Vec<String> = ids.iter().map(ToString::to_string).collect();
        let rows = sqlx::query(&format!(
            "SELECT document FROM {} WHERE id IN (SELECT value FROM json_each(?)) ORDER BY rowid",
            collection.as_str()
        ))
        .bind(serde_json::to_string(&ids)?)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(decode_row).collect()
    }
}
