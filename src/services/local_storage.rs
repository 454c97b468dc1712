//! `window.localStorage` Store

use felixpets_core::{KeyValueStore, PersistenceError};

/// Local storage handle; `None` when the browser denies access
pub struct BrowserStorage {
    storage: Option<web_sys::Storage>,
}

impl BrowserStorage {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("[STORAGE] localStorage unavailable, records will not be kept");
        }
        Self { storage }
    }

    fn storage(&self) -> Result<&web_sys::Storage, PersistenceError> {
        self.storage.as_ref().ok_or(PersistenceError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        self.storage()?
            .get_item(key)
            .map_err(|_| PersistenceError::Unavailable)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| PersistenceError::Write(format!("{:?}", e)))
    }
}
