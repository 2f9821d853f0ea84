//! Key-value storage capability backing transcript persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! Chat state never touches `localStorage` directly. It receives a
//! [`KeyValueStorage`] so the same logic runs against the browser store in
//! hydrate builds and an in-memory map in tests.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: quota errors, private-mode failures, and SSR
//! paths all degrade to "nothing stored" instead of surfacing errors.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Minimal string key-value store.
pub trait KeyValueStorage {
    /// Read the raw value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Overwrite the value stored under `key`.
    fn set(&self, key: &str, value: &str);
}

/// Browser `localStorage`. No-op outside hydrate builds.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            if storage.set_item(key, value).is_err() {
                log::warn!("localStorage write failed for key {key}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}

/// In-memory store for exercising persistence without a browser.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

/// Load a JSON value stored under `key`.
///
/// Returns `None` when the key is absent or the stored text does not parse.
pub fn load_json<T: DeserializeOwned>(storage: &impl KeyValueStorage, key: &str) -> Option<T> {
    let raw = storage.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("discarding unreadable {key} snapshot: {e}");
            None
        }
    }
}

/// Save `value` as JSON under `key`, replacing whatever was there.
pub fn save_json<T: Serialize>(storage: &impl KeyValueStorage, key: &str, value: &T) {
    let Ok(raw) = serde_json::to_string(value) else {
        return;
    };
    storage.set(key, &raw);
}
