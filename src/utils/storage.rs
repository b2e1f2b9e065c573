//! localStorage helpers for the persisted session subset.
//!
//! Thin JSON (de)serialization layer over the browser key-value store.
//! Reads are forgiving: a missing key or corrupt JSON yields `None`,
//! since the persisted entries are a convenience mirror, never the
//! source of truth.

use serde::{Serialize, de::DeserializeOwned};

use super::dom;
use crate::core::StorageError;

/// Get a JSON-deserialized value from localStorage.
///
/// Returns `None` if storage is unavailable, the key doesn't exist, or
/// deserialization fails. Corrupt entries are logged and treated as
/// absent.
pub fn get_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = dom::local_storage()?;
    let json = storage.get_item(key).ok()??;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(e) => {
            dom::console_warn(&format!("discarding corrupt '{key}' entry: {e}"));
            None
        }
    }
}

/// Store a value as JSON in localStorage.
pub fn set_json<T: Serialize>(key: &str, data: &T) -> Result<(), StorageError> {
    let storage = dom::local_storage().ok_or(StorageError::StorageUnavailable)?;
    let json = serde_json::to_string(data).map_err(|_| StorageError::SerializationFailed)?;
    storage
        .set_item(key, &json)
        .map_err(|_| StorageError::WriteFailed)
}

/// Get a bare string from localStorage.
pub fn get_string(key: &str) -> Option<String> {
    let storage = dom::local_storage()?;
    storage.get_item(key).ok()?
}

/// Store a bare string in localStorage.
pub fn set_string(key: &str, value: &str) -> Result<(), StorageError> {
    let storage = dom::local_storage().ok_or(StorageError::StorageUnavailable)?;
    storage
        .set_item(key, value)
        .map_err(|_| StorageError::WriteFailed)
}

/// Remove an entry from localStorage.
pub fn remove(key: &str) -> Result<(), StorageError> {
    let storage = dom::local_storage().ok_or(StorageError::StorageUnavailable)?;
    storage
        .remove_item(key)
        .map_err(|_| StorageError::RemoveFailed)
}
