use crate::util::js_message;
use leptos::logging::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
#[cfg(test)]
use std::collections::HashMap;
#[cfg(test)]
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum StorageError {
    #[error("local storage is not available")]
    Unavailable,

    #[error("failed to read `{key}`: {message}")]
    Read { key: String, message: String },

    /// Includes the browser's quota errors, which large data URIs hit quickly.
    #[error("failed to write `{key}`: {message}")]
    Write { key: String, message: String },

    #[error("failed to encode `{key}`: {message}")]
    Serialize { key: String, message: String },
}

pub(crate) type StorageResult<T> = Result<T, StorageError>;

/// String key/value persistence with localStorage semantics.
pub(crate) trait KvStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
    #[allow(dead_code)]
    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// Reads and decodes a JSON entry.
///
/// Missing entries, read failures and malformed JSON all come back as `None`;
/// the latter two are logged so a corrupt entry is visible in the console.
pub(crate) fn load_json<T: DeserializeOwned>(store: &impl KvStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!("{e}");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(v) => Some(v),
        Err(e) => {
            warn!("ignoring malformed data under `{key}`: {e}");
            None
        }
    }
}

pub(crate) fn save_json<T: Serialize + ?Sized>(
    store: &impl KvStore,
    key: &str,
    value: &T,
) -> StorageResult<()> {
    let json = serde_json::to_string(value).map_err(|e| StorageError::Serialize {
        key: key.to_string(),
        message: e.to_string(),
    })?;
    store.set(key, &json)
}

/// `window.localStorage`.
///
/// Holds no handle; the storage object is looked up on every call so the type
/// stays `Send + Sync` and can live inside signals.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> StorageResult<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl KvStore for BrowserStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read {
                key: key.to_string(),
                message: js_message(&e),
            })
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                message: js_message(&e),
            })
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                message: js_message(&e),
            })
    }
}

/// In-process store. Clones share the same map, so a clone acts as "the same
/// browser profile after a reload".
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub(crate) struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
    read_only: bool,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A view whose writes fail, to exercise quota/write error paths.
    pub fn read_only(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
            read_only: true,
        }
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }
}

#[cfg(test)]
impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let map = self.entries.lock().map_err(|e| StorageError::Read {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        if self.read_only {
            return Err(StorageError::Write {
                key: key.to_string(),
                message: "QuotaExceededError".to_string(),
            });
        }
        let mut map = self.entries.lock().map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        if self.read_only {
            return Err(StorageError::Write {
                key: key.to_string(),
                message: "read-only".to_string(),
            });
        }
        let mut map = self.entries.lock().map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        map.remove(key);
        Ok(())
    }
}


// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_browser_storage_roundtrip() {
        let s = BrowserStorage;
        s.remove("memory_album_test_key").unwrap();
        assert_eq!(s.get("memory_album_test_key").unwrap(), None);

        s.set("memory_album_test_key", "v1").unwrap();
        assert_eq!(s.get("memory_album_test_key").unwrap().as_deref(), Some("v1"));

        s.remove("memory_album_test_key").unwrap();
        assert_eq!(s.get("memory_album_test_key").unwrap(), None);
    }
}
