use gloo_storage::{LocalStorage, Storage};
use serde::Serialize;

use crate::error::StorageError;

pub fn save_to_storage<T: Serialize>(key: &str, value: &T) -> Result<(), StorageError> {
    LocalStorage::set(key, value)?;
    Ok(())
}

/// Raw JSON under `key`, without deserializing, so callers can decide how
/// lenient to be with old or corrupt records.
pub fn load_raw_from_storage(key: &str) -> Option<String> {
    LocalStorage::raw().get_item(key).ok().flatten()
}

pub fn remove_from_storage(key: &str) {
    LocalStorage::delete(key);
}
