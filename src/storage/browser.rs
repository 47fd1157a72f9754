use crate::error::StorageError;
use super::KeyValueStore;

/// `window.localStorage`.
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    pub fn open() -> Result<Self, StorageError> {
        let window = web_sys::window().ok_or_else(|| {
            StorageError::Unavailable("no window object".to_string())
        })?;
        // Throws when storage is blocked, returns null when it is disabled.
        let storage = window
            .local_storage()?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(|err| StorageError::read(format!("{:?}", err)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(|err| StorageError::write(format!("{:?}", err)))
    }
}
