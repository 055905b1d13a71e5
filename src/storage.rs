//! Browser Storage
//!
//! `localStorage` behind the draft store interface.

use question_tree::{KeyValueStore, StoreError, StoreResult};
use wasm_bindgen::JsValue;

/// Window `localStorage`, looked up on every call
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl BrowserStore {
    fn storage(&self) -> StoreResult<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(describe(&e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

impl KeyValueStore for BrowserStore {
    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        self.storage()?.get_item(key).map_err(|e| StoreError::Read {
            key: key.to_string(),
            message: describe(&e),
        })
    }

    fn save(&self, key: &str, value: &str) -> StoreResult<()> {
        self.storage()?.set_item(key, value).map_err(|e| StoreError::Write {
            key: key.to_string(),
            message: describe(&e),
        })
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.storage()?.remove_item(key).map_err(|e| StoreError::Remove {
            key: key.to_string(),
            message: describe(&e),
        })
    }
}
