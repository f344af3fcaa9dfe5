use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::error::StorageError;
use crate::objects;

/// Load a JSON document.
pub fn load_document<T: DeserializeOwned>(root: &Path, key: &str) -> Result<T, StorageError> {
    let body = objects::get_object(root, key)?;
    let value: T = serde_json::from_slice(&body)?;
    Ok(value)
}

/// Save a JSON document, replacing any previous version.
pub fn save_document<T: Serialize>(root: &Path, key: &str, value: &T) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    objects::put_object(root, key, &body)
}

/// Save a JSON document that must not exist yet.
pub fn create_document<T: Serialize>(
    root: &Path,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    objects::put_object_if_absent(root, key, &body)
}

/// Load every JSON document under a prefix, in key order.
pub fn list_documents<T: DeserializeOwned>(
    root: &Path,
    prefix: &str,
) -> Result<Vec<T>, StorageError> {
    let keys = objects::list_objects(root, prefix)?;

    let mut documents = Vec::with_capacity(keys.len());
    for key in &keys {
        documents.push(load_document(root, key)?);
    }
    Ok(documents)
}
