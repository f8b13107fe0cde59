//! Persistence Adapter
//!
//! Loads and saves JSON values in a string-keyed blob store (browser local storage).

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::dialogs::Prompt;
use crate::models::Theme;

/// Local storage key holding the theme collection
pub const KEY_THEMES: &str = "theme-system:themes";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,

    #[error("{0}")]
    Read(String),

    #[error("{0}")]
    Write(String),

    #[error("{0}")]
    Parse(#[source] serde_json::Error),

    #[error("{0}")]
    Serialize(#[source] serde_json::Error),
}

/// String key-value store
pub trait BlobStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        window
            .local_storage()
            .map_err(|e| StorageError::Read(js_message(&e)))?
            .ok_or(StorageError::Unavailable)
    }
}

impl BlobStore for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read(js_message(&e)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(js_message(&e)))
    }
}

/// Message of a thrown JS value (e.g. `QuotaExceededError`)
fn js_message(value: &JsValue) -> String {
    js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

/// Read and parse `key`; a missing entry or a stored `null` is `None`
pub fn load<T: DeserializeOwned>(store: &impl BlobStore, key: &str) -> Result<Option<T>, StorageError> {
    match store.read(key)? {
        Some(raw) => serde_json::from_str::<Option<T>>(&raw).map_err(StorageError::Parse),
        None => Ok(None),
    }
}

pub fn save<T: Serialize + ?Sized>(store: &impl BlobStore, key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(StorageError::Serialize)?;
    store.write(key, &raw)
}

/// Load the theme collection, alerting once and falling back to empty on failure
pub fn load_themes(store: &impl BlobStore, prompt: &impl Prompt, key: &str) -> Vec<Theme> {
    try_load_themes(store, prompt, key).unwrap_or_default()
}

/// Like [`load_themes`], but `None` when the stored collection could not be read
pub fn try_load_themes(store: &impl BlobStore, prompt: &impl Prompt, key: &str) -> Option<Vec<Theme>> {
    match load::<Vec<Theme>>(store, key) {
        Ok(themes) => {
            let themes = themes.unwrap_or_default();
            tracing::debug!(count = themes.len(), key, "loaded themes");
            Some(themes)
        }
        Err(error) => {
            tracing::error!(%error, key, "failed to load themes");
            prompt.alert(&format!("Failed to load themes: {}", error));
            None
        }
    }
}

/// Save the theme collection; failures are alerted, not retried
pub fn save_themes(
    store: &impl BlobStore,
    prompt: &impl Prompt,
    key: &str,
    themes: &[Theme],
) -> Result<(), StorageError> {
    save(store, key, themes).map_err(|error| {
        tracing::error!(%error, key, "failed to save themes");
        prompt.alert(&format!("Failed to save themes: {}", error));
        error
    })
}

/// Parse a JSON theme collection (bundled demo data)
pub fn parse_themes(raw: &str) -> Result<Vec<Theme>, StorageError> {
    serde_json::from_str(raw).map_err(StorageError::Parse)
}
