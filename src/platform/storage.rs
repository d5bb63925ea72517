//! Synchronous string key-value storage
//!
//! The cart only ever needs `get` and `set` on a single key, which is the
//! subset of the Web Storage API both backends share.

use std::collections::HashMap;

use crate::error::{CartError, Result};

/// A synchronous string key-value store
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` if unset
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store used on native builds and in tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail, like a full or disabled LocalStorage
    pub fn read_only() -> Self {
        Self {
            entries: HashMap::new(),
            read_only: true,
        }
    }

    /// Seed a value directly, bypassing the read-only flag
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.read_only {
            return Err(CartError::Storage(format!("cannot write {key:?}: store is read-only")));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Browser LocalStorage (WASM only)
///
/// Storage may be missing entirely (privacy modes, sandboxed iframes). Reads
/// then behave as an empty store and writes fail.
#[cfg(target_arch = "wasm32")]
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    pub fn open() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if storage.is_none() {
            log::warn!("LocalStorage unavailable - cart will not persist");
        }
        Self { storage }
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match &self.storage {
            Some(storage) => storage.get_item(key).map_err(js_error),
            None => Ok(None),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match &self.storage {
            Some(storage) => storage.set_item(key, value).map_err(js_error),
            None => Err(CartError::Storage("LocalStorage unavailable".to_string())),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn js_error(value: wasm_bindgen::JsValue) -> CartError {
    CartError::Storage(format!("{:?}", value))
}
