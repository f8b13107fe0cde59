//! User Settings
//!
//! Stored as JSON under their own local storage key. Every field has a
//! default, so any subset of keys can be given and a missing entry
//! yields `AppConfig::default()`.

use serde::{Deserialize, Serialize};

use crate::storage::{self, BlobStore};

pub const KEY_CONFIG: &str = "theme-system:config";

const MAX_DAY_COUNT: usize = 31;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Day columns given to a new theme
    pub day_count: usize,
    /// Stamp new themes with today's date
    pub date_new_themes: bool,
    /// Ask before removing a task
    pub confirm_task_removal: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            day_count: 7,
            date_new_themes: true,
            confirm_task_removal: true,
        }
    }
}

impl AppConfig {
    /// Load from the blob store; malformed settings fall back to defaults
    pub fn load(store: &impl BlobStore) -> Self {
        match storage::load::<AppConfig>(store, KEY_CONFIG) {
            Ok(config) => config.unwrap_or_default().sanitized(),
            Err(error) => {
                tracing::warn!(%error, "ignoring unreadable settings");
                Self::default()
            }
        }
    }

    fn sanitized(mut self) -> Self {
        self.day_count = self.day_count.clamp(1, MAX_DAY_COUNT);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryStore;

    #[test]
    fn test_missing_entry_uses_defaults() {
        let config = AppConfig::load(&MemoryStore::new());
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.day_count, 7);
    }

    #[test]
    fn test_partial_settings() {
        let store = MemoryStore::new();
        store.set(KEY_CONFIG, r#"{"date_new_themes": false}"#);
        let config = AppConfig::load(&store);
        assert!(!config.date_new_themes);
        assert_eq!(config.day_count, 7);
        assert!(config.confirm_task_removal);
    }

    #[test]
    fn test_day_count_is_clamped() {
        let store = MemoryStore::new();
        store.set(KEY_CONFIG, r#"{"day_count": 0}"#);
        assert_eq!(AppConfig::load(&store).day_count, 1);
        store.set(KEY_CONFIG, r#"{"day_count": 400}"#);
        assert_eq!(AppConfig::load(&store).day_count, 31);
    }

    #[test]
    fn test_malformed_settings_fall_back() {
        let store = MemoryStore::new();
        store.set(KEY_CONFIG, "{day_count");
        assert_eq!(AppConfig::load(&store), AppConfig::default());
    }
}
