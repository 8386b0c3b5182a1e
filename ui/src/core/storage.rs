//! Local persistence for user settings (currently just the chosen locale).
//!
//! Everything goes through [`KeyValueStore`]. The web build uses
//! `localStorage`, native builds a small JSON map under the platform config
//! directory, and tests use [`MemoryStore`] or a [`FileStore`] in a tempdir.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use api::Locale;
use thiserror::Error;

/// Key under which the locale code (`UZ`, `RU`, `EN`) is stored.
pub const LOCALE_STORAGE_KEY: &str = "uft-academy-language";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is unavailable: {0}")]
    Unavailable(String),
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process map; nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStore;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{KeyValueStore, StorageError};

    /// `window.localStorage`.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct BrowserStore;

    impl BrowserStore {
        fn storage(&self) -> Result<web_sys::Storage, StorageError> {
            web_sys::window()
                .ok_or_else(|| StorageError::Unavailable("no window".into()))?
                .local_storage()
                .map_err(|_| StorageError::Unavailable("localStorage access denied".into()))?
                .ok_or_else(|| StorageError::Unavailable("localStorage missing".into()))
        }
    }

    impl KeyValueStore for BrowserStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.storage()?
                .get_item(key)
                .map_err(|_| StorageError::Unavailable(format!("failed reading {key}")))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.storage()?
                .set_item(key, value)
                .map_err(|_| StorageError::Unavailable(format!("failed writing {key}")))
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use std::fs;
    use std::path::{Path, PathBuf};

    use std::collections::BTreeMap;

    use super::{KeyValueStore, StorageError};

    const SETTINGS_FILE: &str = "settings.json";

    /// A flat JSON object on disk, rewritten in full on every `set`.
    #[derive(Debug, Clone)]
    pub struct FileStore {
        path: PathBuf,
    }

    impl FileStore {
        /// `settings.json` in the platform config directory.
        pub fn in_config_dir() -> Result<Self, StorageError> {
            let dirs = directories::ProjectDirs::from("uz", "UFT Academy", "UFT Academy")
                .ok_or_else(|| {
                    StorageError::Unavailable("unable to determine config directory".into())
                })?;
            Ok(Self::at_path(dirs.config_dir().join(SETTINGS_FILE)))
        }

        pub fn at_path(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn read_map(&self) -> Result<BTreeMap<String, String>, StorageError> {
            match fs::read_to_string(&self.path) {
                Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
                Ok(raw) => Ok(serde_json::from_str(&raw)?),
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
                Err(err) => Err(err.into()),
            }
        }
    }

    impl KeyValueStore for FileStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.read_map()?.remove(key))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            // A corrupt file is replaced rather than blocking the write.
            let mut map = self.read_map().unwrap_or_default();
            map.insert(key.to_string(), value.to_string());
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&self.path, serde_json::to_string_pretty(&map)?)?;
            Ok(())
        }
    }
}

/// The persistent store for the current platform, or an in-memory one when
/// persistence is unavailable.
pub fn default_store() -> Rc<dyn KeyValueStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(BrowserStore)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        match FileStore::in_config_dir() {
            Ok(store) => {
                tracing::debug!("[storage] settings at {}", store.path().display());
                Rc::new(store)
            }
            Err(err) => {
                tracing::warn!("[storage] {err}; settings will not persist");
                Rc::new(MemoryStore::default())
            }
        }
    }
}

/// Persisted locale, or [`Locale::Uz`] when nothing valid is stored.
pub fn load_locale(store: &dyn KeyValueStore) -> Locale {
    match store.get(LOCALE_STORAGE_KEY) {
        Ok(Some(code)) => Locale::from_code(&code).unwrap_or_else(|| {
            tracing::warn!("[storage] ignoring unknown locale {code:?}");
            Locale::default()
        }),
        Ok(None) => Locale::default(),
        Err(err) => {
            tracing::warn!("[storage] failed loading locale: {err}");
            Locale::default()
        }
    }
}

pub fn save_locale(store: &dyn KeyValueStore, locale: Locale) -> Result<(), StorageError> {
    store.set(LOCALE_STORAGE_KEY, locale.code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_value_loads_default() {
        let store = MemoryStore::default();
        assert_eq!(load_locale(&store), Locale::Uz);
    }

    #[test]
    fn memory_store_round_trips_locale() {
        let store = MemoryStore::default();
        save_locale(&store, Locale::Ru).unwrap();
        assert_eq!(store.get(LOCALE_STORAGE_KEY).unwrap().as_deref(), Some("RU"));
        assert_eq!(load_locale(&store), Locale::Ru);
    }

    #[test]
    fn invalid_value_loads_default() {
        let store = MemoryStore::default();
        store.set(LOCALE_STORAGE_KEY, "DE").unwrap();
        assert_eq!(load_locale(&store), Locale::Uz);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        save_locale(&FileStore::at_path(&path), Locale::En).unwrap();
        assert_eq!(load_locale(&FileStore::at_path(&path)), Locale::En);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_store_keeps_unrelated_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::at_path(dir.path().join("settings.json"));
        store.set("theme", "dark").unwrap();
        save_locale(&store, Locale::Ru).unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn corrupt_file_is_an_error_on_read_and_default_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = FileStore::at_path(&path);
        assert!(matches!(
            store.get(LOCALE_STORAGE_KEY),
            Err(StorageError::Corrupt(_))
        ));
        assert_eq!(load_locale(&store), Locale::Uz);

        save_locale(&store, Locale::En).unwrap();
        assert_eq!(load_locale(&store), Locale::En);
    }
}
