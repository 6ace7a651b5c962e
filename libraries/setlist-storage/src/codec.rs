//! Conversions between typed records and JSON documents

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use setlist_core::error::{CatalogError, Result};

/// Serialize a record into a document body
pub(crate) fn to_document<T: Serialize>(record: &T) -> Result<Value> {
    let value = serde_json::to_value(record)?;
    if value.is_object() {
        Ok(value)
    } else {
        Err(CatalogError::internal(format!(
            "record did not serialize to an object: {value}"
        )))
    }
}

/// Serialize a record into a top-level field set for `update_by_id`
pub(crate) fn to_field_map<T: Serialize>(record: &T) -> Result<Map<String, Value>> {
    match to_document(record)? {
        Value::Object(map) => Ok(map),
        _ => Err(CatalogError::internal("record did not serialize to an object")),
    }
}

/// Decode a stored document
pub(crate) fn from_document<T: DeserializeOwned>(document: Value) -> Result<T> {
    serde_json::from_value(document).map_err(|e| {
        tracing::error!("Failed to decode document: {}", e);
        CatalogError::from(e)
    })
}

/// Log a store failure on its way up
pub(crate) fn logged(operation: &'static str) -> impl Fn(CatalogError) -> CatalogError {
    move |err| {
        tracing::error!("{} failed: {}", operation, err);
        err
    }
}
