//! Namespaced wrapper over browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every key the portal writes goes through [`NamespacedStore`], which
//! prefixes it with [`PREFIX`]. Logout clears exactly that prefix so unrelated
//! data sharing the same origin survives.
//!
//! ERROR HANDLING
//! ==============
//! Local storage can be disabled, full, or missing entirely (private browsing,
//! sandboxed iframes, SSR). Backends report that as [`StorageError`] instead of
//! panicking; callers such as `state::session` decide whether to ignore it.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// Prefix applied to every key written by the portal.
pub const PREFIX: &str = "app:";

/// Failure reported by a [`KeyValueStore`] backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage is reachable in this context.
    #[error("storage unavailable")]
    Unavailable,
    /// The backend rejected the operation (quota exceeded, security error).
    #[error("storage error: {0}")]
    Backend(String),
}

/// A persistent string key-value store.
pub trait KeyValueStore {
    /// Read the raw value for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Missing keys are not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store cannot be modified.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;

    /// Snapshot of every key currently in the store.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store cannot be enumerated.
    fn keys(&self) -> Result<Vec<String>, StorageError>;
}

/// `window.localStorage`, looked up on every call.
///
/// Outside a browser build every operation fails with
/// [`StorageError::Unavailable`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "csr")]
impl BrowserStore {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|e| StorageError::Backend(format!("{e:?}")))?
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(feature = "csr")]
fn js_error(err: &wasm_bindgen::JsValue) -> StorageError {
    StorageError::Backend(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl KeyValueStore for BrowserStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            Self::storage()?.get_item(key).map_err(|e| js_error(&e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            Self::storage()?.set_item(key, value).map_err(|e| js_error(&e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            Self::storage()?.remove_item(key).map_err(|e| js_error(&e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            let storage = Self::storage()?;
            let len = storage.length().map_err(|e| js_error(&e))?;
            let mut keys = Vec::with_capacity(len as usize);
            for i in 0..len {
                if let Some(key) = storage.key(i).map_err(|e| js_error(&e))? {
                    keys.push(key);
                }
            }
            Ok(keys)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(StorageError::Unavailable)
        }
    }
}

/// In-memory store. Clones share the same map, so a test can keep a handle
/// to the raw backend while a [`NamespacedStore`] owns another.
#[derive(Clone, Debug)]
pub struct MemoryStore {
    items: Option<Arc<Mutex<BTreeMap<String, String>>>>,
}

impl MemoryStore {
    /// An empty, working store.
    pub fn new() -> Self {
        Self { items: Some(Arc::default()) }
    }

    /// A store that fails every operation, like disabled browser storage.
    pub fn unavailable() -> Self {
        Self { items: None }
    }

    fn with_items<T>(&self, f: impl FnOnce(&mut BTreeMap<String, String>) -> T) -> Result<T, StorageError> {
        let items = self.items.as_ref().ok_or(StorageError::Unavailable)?;
        let mut guard = items
            .lock()
            .map_err(|_| StorageError::Backend("memory store poisoned".to_owned()))?;
        Ok(f(&mut guard))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.with_items(|items| items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.with_items(|items| {
            items.insert(key.to_owned(), value.to_owned());
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.with_items(|items| {
            items.remove(key);
        })
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        self.with_items(|items| items.keys().cloned().collect())
    }
}

/// Key-value access scoped under [`PREFIX`].
#[derive(Clone, Debug, Default)]
pub struct NamespacedStore<S> {
    inner: S,
}

impl<S: KeyValueStore> NamespacedStore<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Write `value` under `app:{key}`.
    ///
    /// # Errors
    ///
    /// Propagates the backend failure.
    pub fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.set_item(&prefixed(key), value)
    }

    /// Read `app:{key}`; `Ok(None)` when it was never written.
    ///
    /// # Errors
    ///
    /// Propagates the backend failure.
    pub fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get_item(&prefixed(key))
    }

    /// Delete `app:{key}`.
    ///
    /// # Errors
    ///
    /// Propagates the backend failure.
    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove_item(&prefixed(key))
    }

    /// Remove every key carrying the namespace prefix and nothing else.
    /// Returns how many keys were removed.
    ///
    /// Keys are collected before removal since deleting while walking
    /// `localStorage` by index shifts the remaining indices.
    ///
    /// # Errors
    ///
    /// Stops at the first backend failure.
    pub fn clear_all(&self) -> Result<usize, StorageError> {
        let owned: Vec<String> = self
            .inner
            .keys()?
            .into_iter()
            .filter(|k| k.starts_with(PREFIX))
            .collect();
        for key in &owned {
            self.inner.remove_item(key)?;
        }
        Ok(owned.len())
    }
}

fn prefixed(key: &str) -> String {
    format!("{PREFIX}{key}")
}
